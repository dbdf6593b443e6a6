use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Trait for the floating point types (f32, f64) the bounds are generic over
pub trait FloatingPoint: RealField + ToPrimitive + Copy {}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}

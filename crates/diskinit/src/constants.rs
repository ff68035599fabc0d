/// Pi
pub const PI: f64 = std::f64::consts::PI;

/// √(2π), the normalisation of a unit Gaussian
pub const SQRT_TWO_PI: f64 = 2.506_628_274_631_000_7;

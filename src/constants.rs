pub const DEFAULT_TIED_TOL: f64 = 1e-8;
pub const MIN_SAMPLES: usize = 2;
pub const TIE_CREDIT: f64 = 0.5;

#[cfg(test)]
pub const TEST_STRICT_TOL: f64 = 1e-12;

#[cfg(test)]
pub const TEST_STANDARD_TOL: f64 = 1e-9;

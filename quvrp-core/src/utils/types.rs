/// Alias to a scalar floating type.
///
/// NOTE: distances and penalty coefficients are kept in `f64` as switching to `f32`
/// leads to precision issues when route distances are recomputed by the checker tests.
pub type Float = f64;

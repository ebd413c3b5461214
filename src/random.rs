//! Randomized fixture generation for `NullInt8`, for ORM test-data builders.

use rand::Rng;

use crate::types::NullInt8;

impl NullInt8 {
    /// Fills `self` from `next_int`, or makes it null when `should_be_null`.
    ///
    /// `_field_type` is the column type name the fixture builder is filling;
    /// it does not affect the result.
    pub fn randomize<F>(&mut self, mut next_int: F, _field_type: &str, should_be_null: bool)
    where
        F: FnMut() -> i64,
    {
        if should_be_null {
            *self = Self::null();
        } else {
            self.set_valid((next_int() % i64::from(i8::MAX)) as i8);
        }
    }

    /// Draws a random `NullInt8` that is null with probability `null_probability`.
    pub fn random<R: Rng>(rng: &mut R, null_probability: f64) -> Self {
        let p = if null_probability.is_nan() {
            0.0
        } else {
            null_probability.clamp(0.0, 1.0)
        };
        let should_be_null = rng.random_bool(p);

        let mut n = Self::null();
        n.randomize(|| rng.random::<i64>(), "int8", should_be_null);
        n
    }
}

pub const RANDOM_VALUE_MIN: i32 = 0;
pub const RANDOM_VALUE_MAX: i32 = 100;

/// Source of the value served by `GET /random_value`.
pub trait RandomValueGenerator: Send + Sync {
    /// Uniform value in `RANDOM_VALUE_MIN..=RANDOM_VALUE_MAX`.
    fn generate(&self) -> i32;
}

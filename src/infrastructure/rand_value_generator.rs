use rand::Rng;

use crate::domain::services::random_service::{
    RANDOM_VALUE_MAX, RANDOM_VALUE_MIN, RandomValueGenerator,
};

#[derive(Clone, Default)]
pub struct ThreadRngValueGenerator;

impl ThreadRngValueGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl RandomValueGenerator for ThreadRngValueGenerator {
    fn generate(&self) -> i32 {
        rand::rng().random_range(RANDOM_VALUE_MIN..=RANDOM_VALUE_MAX)
    }
}

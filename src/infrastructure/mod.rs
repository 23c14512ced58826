pub mod account_repository;
pub mod argon2_password_hasher;
pub mod rand_value_generator;

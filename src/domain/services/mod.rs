pub mod password_service;
pub mod random_service;

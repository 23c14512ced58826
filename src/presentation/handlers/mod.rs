pub mod account_handler;
pub mod random_handler;

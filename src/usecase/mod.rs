pub mod find_account_usecase;
pub mod log_in_usecase;
pub mod sign_up_usecase;

use std::sync::Arc;

use crate::{
    domain::{
        error::DomainError,
        models::account::Account,
        repositories::account_repository::AccountRepository,
        services::password_service::PasswordHasher,
    },
    presentation::error::ApiError,
    usecase::{
        find_account_usecase::FindAccountUsecase, log_in_usecase::LogInUsecase,
        sign_up_usecase::SignUpUsecase,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

// Request

/// json for sign-up request
#[derive(Serialize, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

/// json for log-in request
#[derive(Serialize, Deserialize)]
pub struct LogInRequest {
    pub username: String,
    pub password: String,
}

// Response

/// Public view of an account, without the password hash
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i32,
    pub username: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().value(),
            username: account.username().as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<AccountResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogInResponse {
    pub message: String,
}

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/* Router Function and Handler Function */

// Account Router

/// function return Router object
/// Suppose to be merged into the main router
pub fn create_account_router<
    R: AccountRepository + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
>(
    sign_up_service: SignUpUsecase<R, P>,
    log_in_service: LogInUsecase<R, P>,
    find_account_service: FindAccountUsecase<R>,
) -> Router {
    let state = AppState {
        sign_up_service: Arc::new(sign_up_service),
        log_in_service: Arc::new(log_in_service),
        find_account_service: Arc::new(find_account_service),
    };

    Router::new()
        .route("/sign-up", post(sign_up::<R, P>))
        .route("/log-in", post(log_in::<R, P>))
        .route("/user/{username}", get(get_user::<R, P>))
        .route("/users", get(get_users::<R, P>))
        .with_state(state)
}

pub struct AppState<R: AccountRepository, P: PasswordHasher> {
    pub sign_up_service: Arc<SignUpUsecase<R, P>>,
    pub log_in_service: Arc<LogInUsecase<R, P>>,
    pub find_account_service: Arc<FindAccountUsecase<R>>,
}

// manual impl: derive would demand R: Clone
impl<R: AccountRepository, P: PasswordHasher> Clone for AppState<R, P> {
    fn clone(&self) -> Self {
        Self {
            sign_up_service: Arc::clone(&self.sign_up_service),
            log_in_service: Arc::clone(&self.log_in_service),
            find_account_service: Arc::clone(&self.find_account_service),
        }
    }
}

// handler function

/// handler function for sign-up
async fn sign_up<R: AccountRepository + Send + Sync, P: PasswordHasher + Send + Sync>(
    State(state): State<AppState<R, P>>,
    Json(payload): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = state
        .sign_up_service
        .sign_up(payload.username, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}

/// handler function for log-in
async fn log_in<R: AccountRepository + Send + Sync, P: PasswordHasher + Send + Sync>(
    State(state): State<AppState<R, P>>,
    Json(payload): Json<LogInRequest>,
) -> Result<Json<LogInResponse>, ApiError> {
    state
        .log_in_service
        .log_in(payload.username, payload.password)
        .await?;

    Ok(Json(LogInResponse {
        message: LOGIN_SUCCESS_MESSAGE.to_string(),
    }))
}

/// handler function for single account lookup
async fn get_user<R: AccountRepository + Send + Sync, P: PasswordHasher + Send + Sync>(
    State(state): State<AppState<R, P>>,
    Path(username): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state
        .find_account_service
        .get_by_username(username)
        .await?
        .ok_or(DomainError::AccountNotFound)?;

    Ok(Json(AccountResponse::from(&account)))
}

/// handler function for listing every account
async fn get_users<R: AccountRepository + Send + Sync, P: PasswordHasher + Send + Sync>(
    State(state): State<AppState<R, P>>,
) -> Result<Json<UsersResponse>, ApiError> {
    let accounts = state.find_account_service.get_all().await?;

    Ok(Json(UsersResponse {
        users: accounts.iter().map(AccountResponse::from).collect(),
    }))
}

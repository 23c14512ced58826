use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
    domain::{
        repositories::account_repository::AccountRepository,
        services::{password_service::PasswordHasher, random_service::RandomValueGenerator},
    },
    presentation::handlers::{
        account_handler::create_account_router, random_handler::create_random_router,
    },
    usecase::{
        find_account_usecase::FindAccountUsecase, log_in_usecase::LogInUsecase,
        sign_up_usecase::SignUpUsecase,
    },
};

/// Wire the use cases onto one repository handle and build the full HTTP surface.
pub fn create_router<
    R: AccountRepository + Clone + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
    G: RandomValueGenerator + 'static,
>(
    account_repository: R,
    password_hasher: P,
    random_value_generator: G,
) -> Router {
    let sign_up_service = SignUpUsecase::new(account_repository.clone(), password_hasher.clone());
    let log_in_service = LogInUsecase::new(account_repository.clone(), password_hasher);
    let find_account_service = FindAccountUsecase::new(account_repository);

    Router::new()
        .merge(create_random_router(random_value_generator))
        .merge(create_account_router(
            sign_up_service,
            log_in_service,
            find_account_service,
        ))
        .layer(TraceLayer::new_for_http())
}

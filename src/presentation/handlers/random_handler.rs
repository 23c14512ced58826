use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::domain::services::random_service::RandomValueGenerator;

#[derive(Debug, Serialize, Deserialize)]
pub struct RandomValueResponse {
    pub random_value: i32,
}

pub fn create_random_router<G: RandomValueGenerator + 'static>(generator: G) -> Router {
    Router::new()
        .route("/random_value", get(random_value::<G>))
        .with_state(Arc::new(generator))
}

async fn random_value<G: RandomValueGenerator>(
    State(generator): State<Arc<G>>,
) -> Json<RandomValueResponse> {
    Json(RandomValueResponse {
        random_value: generator.generate(),
    })
}

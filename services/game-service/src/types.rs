use serde::{Deserialize, Serialize};

pub use common::{CategoryResponse, GamePatch, GamePost, GameResponse};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

use serde::{Deserialize, Serialize};

pub mod models {
    use super::*;

    /// Authenticated caller attached to a request.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MemberPrincipal {
        pub member_id: i64,
        pub username: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GamePost {
        pub game_name: String,
        #[serde(default)]
        pub main_img_url: Option<String>,
        #[serde(default)]
        pub download_url: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub categories: Vec<String>,
    }

    /// Partial update. Absent fields keep their stored value; `categories`
    /// replaces the whole set when present.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GamePatch {
        #[serde(default)]
        pub game_name: Option<String>,
        #[serde(default)]
        pub main_img_url: Option<String>,
        #[serde(default)]
        pub download_url: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub categories: Option<Vec<String>>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CategoryResponse {
        pub category_id: i64,
        pub category_name: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GameResponse {
        pub game_id: i64,
        pub game_name: String,
        pub main_img_url: Option<String>,
        pub download_url: Option<String>,
        pub description: Option<String>,
        pub follower_count: i64,
        pub categories: Vec<CategoryResponse>,
        pub member_id: i64,
        pub username: String,
        pub created_at: String,
        pub modified_at: String,
    }
}

pub mod utils {
    use chrono::{DateTime, SecondsFormat, Utc};

    pub fn format_timestamp(at: DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Trims category names and drops empty and duplicate (case-insensitive)
    /// entries, keeping first-seen order.
    pub fn normalize_categories(names: &[String]) -> Vec<String> {
        let mut seen: Vec<String> = Vec::with_capacity(names.len());
        let mut out = Vec::with_capacity(names.len());

        for name in names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                continue;
            }
            let key = trimmed.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            out.push(trimmed.to_string());
        }

        out
    }

}

pub mod errors {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ServiceError {
        NotFound(String),
        BadRequest(String),
        Forbidden(String),
        InternalError(String),
        Unauthorized,
    }

    impl fmt::Display for ServiceError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
                ServiceError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
                ServiceError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
                ServiceError::InternalError(msg) => write!(f, "Internal error: {}", msg),
                ServiceError::Unauthorized => write!(f, "Unauthorized"),
            }
        }
    }

    impl std::error::Error for ServiceError {}
}

pub use errors::*;
pub use models::*;
pub use utils::*;

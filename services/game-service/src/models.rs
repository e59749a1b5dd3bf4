use chrono::{DateTime, Utc};
use common::MemberPrincipal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
     pub id: i64,
     pub name: String,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
     pub id: i64,
     pub owner: MemberPrincipal,
     pub game_name: String,
     pub main_img_url: Option<String>,
     pub download_url: Option<String>,
     pub description: Option<String>,
     pub follower_count: i64,
     pub categories: Vec<Category>,
     pub created_at: DateTime<Utc>,
     pub modified_at: DateTime<Utc>,
}

/// Fields of a game about to be inserted. Category names are resolved to
/// ids by the store.
#[derive(Debug, Clone)]
pub struct NewGame {
     pub game_name: String,
     pub main_img_url: Option<String>,
     pub download_url: Option<String>,
     pub description: Option<String>,
     pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GameChanges {
     pub game_name: Option<String>,
     pub main_img_url: Option<String>,
     pub download_url: Option<String>,
     pub description: Option<String>,
     pub categories: Option<Vec<String>>,
}

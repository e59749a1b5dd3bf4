use std::collections::HashMap;

use chrono::Utc;
use common::{MemberPrincipal, ServiceError};
use tokio::sync::RwLock;

use crate::models::{Category, GameChanges, GameRecord, NewGame};

#[derive(Debug, Default)]
struct StoreInner {
     next_game_id: i64,
     next_category_id: i64,
     games: HashMap<i64, GameRecord>,
     // keyed by lowercased name
     categories: HashMap<String, Category>,
}

impl StoreInner {
     fn resolve_categories(&mut self, names: &[String]) -> Vec<Category> {
          common::normalize_categories(names)
               .into_iter()
               .map(|name| {
                    let key = name.to_lowercase();
                    if let Some(existing) = self.categories.get(&key) {
                         return existing.clone();
                    }
                    self.next_category_id += 1;
                    let category = Category {
                         id: self.next_category_id,
                         name,
                    };
                    self.categories.insert(key, category.clone());
                    category
               })
               .collect()
     }
}

/// In-memory game records. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct GameStore {
     inner: RwLock<StoreInner>,
}

impl GameStore {
     pub fn new() -> Self {
          Self::default()
     }

     pub async fn insert(&self, owner: &MemberPrincipal, game: NewGame) -> GameRecord {
          let mut inner = self.inner.write().await;
          let now = Utc::now();

          inner.next_game_id += 1;
          let id = inner.next_game_id;
          let categories = inner.resolve_categories(&game.categories);

          let record = GameRecord {
               id,
               owner: owner.clone(),
               game_name: game.game_name,
               main_img_url: game.main_img_url,
               download_url: game.download_url,
               description: game.description,
               follower_count: 0,
               categories,
               created_at: now,
               modified_at: now,
          };

          inner.games.insert(id, record.clone());
          record
     }

     pub async fn get(&self, id: i64) -> Option<GameRecord> {
          self.inner.read().await.games.get(&id).cloned()
     }

     /// Applies the changes produced by `prepare` to game `id` under a single
     /// write lock, so concurrent updates of one game are serialized.
     pub async fn update<F>(&self, id: i64, prepare: F) -> Result<GameRecord, ServiceError>
     where
          F: FnOnce(&GameRecord) -> Result<GameChanges, ServiceError>,
     {
          let mut inner = self.inner.write().await;

          let current = inner
               .games
               .get(&id)
               .ok_or_else(|| ServiceError::NotFound(format!("game {}", id)))?;
          let changes = prepare(current)?;

          let categories = changes
               .categories
               .as_deref()
               .map(|names| inner.resolve_categories(names));

          let record = inner
               .games
               .get_mut(&id)
               .ok_or_else(|| ServiceError::NotFound(format!("game {}", id)))?;

          if let Some(game_name) = changes.game_name {
               record.game_name = game_name;
          }
          if let Some(main_img_url) = changes.main_img_url {
               record.main_img_url = Some(main_img_url);
          }
          if let Some(download_url) = changes.download_url {
               record.download_url = Some(download_url);
          }
          if let Some(description) = changes.description {
               record.description = Some(description);
          }
          if let Some(categories) = categories {
               record.categories = categories;
          }
          record.modified_at = Utc::now();

          Ok(record.clone())
     }

     pub async fn len(&self) -> usize {
          self.inner.read().await.games.len()
     }
}

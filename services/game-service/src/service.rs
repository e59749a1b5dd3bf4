use std::future::Future;

use common::{
    CategoryResponse, GamePatch, GamePost, GameResponse, MemberPrincipal, ServiceError,
};
use log::{info, warn};

use crate::db::GameStore;
use crate::models::{GameChanges, GameRecord, NewGame};
use crate::validation;

/// Game creation and modification, as seen by the HTTP handlers.
///
/// Authorization rules for a given game live behind this trait; handlers only
/// forward the caller's identity.
pub trait GameService: Send + Sync + 'static {
    fn create_game(
        &self,
        member: &MemberPrincipal,
        post: GamePost,
    ) -> impl Future<Output = Result<GameResponse, ServiceError>> + Send;

    fn modify_game(
        &self,
        game_id: i64,
        member: &MemberPrincipal,
        patch: GamePatch,
    ) -> impl Future<Output = Result<GameResponse, ServiceError>> + Send;

    fn get_game(
        &self,
        game_id: i64,
    ) -> impl Future<Output = Result<GameResponse, ServiceError>> + Send;
}

pub struct GameServiceImpl {
    store: GameStore,
}

impl GameServiceImpl {
    pub fn new(store: GameStore) -> Self {
        Self { store }
    }

    pub fn convert_to_response(&self, game: GameRecord) -> GameResponse {
        GameResponse {
            game_id: game.id,
            game_name: game.game_name,
            main_img_url: game.main_img_url,
            download_url: game.download_url,
            description: game.description,
            follower_count: game.follower_count,
            categories: game
                .categories
                .into_iter()
                .map(|c| CategoryResponse {
                    category_id: c.id,
                    category_name: c.name,
                })
                .collect(),
            member_id: game.owner.member_id,
            username: game.owner.username,
            created_at: common::format_timestamp(game.created_at),
            modified_at: common::format_timestamp(game.modified_at),
        }
    }
}

impl GameService for GameServiceImpl {
    async fn create_game(
        &self,
        member: &MemberPrincipal,
        post: GamePost,
    ) -> Result<GameResponse, ServiceError> {
        validation::validate_game_post(&post).map_err(ServiceError::BadRequest)?;

        let record = self
            .store
            .insert(
                member,
                NewGame {
                    game_name: post.game_name.trim().to_string(),
                    main_img_url: post.main_img_url,
                    download_url: post.download_url,
                    description: post.description,
                    categories: post.categories,
                },
            )
            .await;

        info!("member {} created game {}", member.member_id, record.id);
        Ok(self.convert_to_response(record))
    }

    async fn modify_game(
        &self,
        game_id: i64,
        member: &MemberPrincipal,
        patch: GamePatch,
    ) -> Result<GameResponse, ServiceError> {
        validation::validate_game_patch(&patch).map_err(ServiceError::BadRequest)?;

        let result = self
            .store
            .update(game_id, |current| {
                if current.owner.member_id != member.member_id {
                    return Err(ServiceError::Forbidden(format!(
                        "game {} belongs to another member",
                        game_id
                    )));
                }
                Ok(GameChanges {
                    game_name: patch.game_name.map(|name| name.trim().to_string()),
                    main_img_url: patch.main_img_url,
                    download_url: patch.download_url,
                    description: patch.description,
                    categories: patch.categories,
                })
            })
            .await;

        match result {
            Ok(record) => {
                info!("member {} modified game {}", member.member_id, game_id);
                Ok(self.convert_to_response(record))
            }
            Err(e) => {
                warn!("member {} failed to modify game {}: {}", member.member_id, game_id, e);
                Err(e)
            }
        }
    }

    async fn get_game(&self, game_id: i64) -> Result<GameResponse, ServiceError> {
        self.store
            .get(game_id)
            .await
            .map(|record| self.convert_to_response(record))
            .ok_or_else(|| ServiceError::NotFound(format!("game {}", game_id)))
    }
}

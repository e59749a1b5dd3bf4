use std::sync::LazyLock;

use common::{GamePatch, GamePost};
use regex::Regex;

const MAX_NAME_LEN: usize = 50;
const MAX_DESCRIPTION_LEN: usize = 2000;
const MAX_CATEGORIES: usize = 10;
const MAX_CATEGORY_LEN: usize = 20;

static URL_REGEX: LazyLock<Regex> =
     LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("url pattern compiles"));

pub fn validate_game_name(name: &str) -> Result<(), String> {
     let len = name.trim().chars().count();
     if len == 0 || len > MAX_NAME_LEN {
          return Err(format!("Game name must be between 1 and {} characters", MAX_NAME_LEN));
     }
     Ok(())
}

pub fn validate_url(field: &str, url: &str) -> Result<(), String> {
     if !url.is_empty() && !URL_REGEX.is_match(url) {
          return Err(format!("{} must be an http(s) URL", field));
     }
     Ok(())
}

pub fn validate_description(description: &str) -> Result<(), String> {
     if description.chars().count() > MAX_DESCRIPTION_LEN {
          return Err(format!("Description must be at most {} characters", MAX_DESCRIPTION_LEN));
     }
     Ok(())
}

/// The count limit applies to distinct names, after the same trimming and
/// case folding the store uses.
pub fn validate_categories(categories: &[String]) -> Result<(), String> {
     for category in categories {
          let len = category.trim().chars().count();
          if len == 0 || len > MAX_CATEGORY_LEN {
               return Err(format!("Category names must be between 1 and {} characters", MAX_CATEGORY_LEN));
          }
     }
     if common::normalize_categories(categories).len() > MAX_CATEGORIES {
          return Err(format!("At most {} categories are allowed", MAX_CATEGORIES));
     }
     Ok(())
}

pub fn validate_game_post(req: &GamePost) -> Result<(), String> {
     validate_game_name(&req.game_name)?;
     if let Some(url) = req.main_img_url.as_ref() {
          validate_url("mainImgUrl", url)?;
     }
     if let Some(url) = req.download_url.as_ref() {
          validate_url("downloadUrl", url)?;
     }
     if let Some(description) = req.description.as_ref() {
          validate_description(description)?;
     }
     validate_categories(&req.categories)?;
     Ok(())
}

pub fn validate_game_patch(req: &GamePatch) -> Result<(), String> {
     if req.game_name.is_none()
          && req.main_img_url.is_none()
          && req.download_url.is_none()
          && req.description.is_none()
          && req.categories.is_none()
     {
          return Err("At least one field must be provided".to_string());
     }

     if let Some(name) = req.game_name.as_ref() {
          validate_game_name(name)?;
     }
     if let Some(url) = req.main_img_url.as_ref() {
          validate_url("mainImgUrl", url)?;
     }
     if let Some(url) = req.download_url.as_ref() {
          validate_url("downloadUrl", url)?;
     }
     if let Some(description) = req.description.as_ref() {
          validate_description(description)?;
     }
     if let Some(categories) = req.categories.as_ref() {
          validate_categories(categories)?;
     }
     Ok(())
}

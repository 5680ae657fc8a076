//! Store doubles for integration tests

#![allow(dead_code)]

use async_trait::async_trait;

use gamereview_api::models::{
    Author, AuthorPatch, Game, GamePatch, NewAuthor, NewGame, NewReview, Review, ReviewPatch,
};
use gamereview_api::{ApiError, ApiResult, DataStore};

/// Detail carried by every [`FailingStore`] error; must never reach clients
pub const FAILURE_DETAIL: &str = "disk on fire";

/// A store whose every operation fails with an internal error
#[derive(Debug, Default)]
pub struct FailingStore;

fn fail<T>() -> ApiResult<T> {
    Err(ApiError::Internal(FAILURE_DETAIL.to_string()))
}

#[async_trait]
impl DataStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn connect(&self) -> ApiResult<()> {
        fail()
    }

    async fn ping(&self) -> ApiResult<()> {
        fail()
    }

    async fn add_author(&self, _author: NewAuthor) -> ApiResult<Author> {
        fail()
    }

    async fn delete_author(&self, _id: &str) -> ApiResult<String> {
        fail()
    }

    async fn fetch_author(&self, _id: &str) -> ApiResult<Author> {
        fail()
    }

    async fn fetch_authors(&self) -> ApiResult<Vec<Author>> {
        fail()
    }

    async fn update_author(&self, _id: &str, _author: AuthorPatch) -> ApiResult<Author> {
        fail()
    }

    async fn add_game(&self, _game: NewGame) -> ApiResult<Game> {
        fail()
    }

    async fn delete_game(&self, _id: &str) -> ApiResult<String> {
        fail()
    }

    async fn fetch_game(&self, _id: &str) -> ApiResult<Game> {
        fail()
    }

    async fn fetch_games(&self) -> ApiResult<Vec<Game>> {
        fail()
    }

    async fn update_game(&self, _id: &str, _game: GamePatch) -> ApiResult<Game> {
        fail()
    }

    async fn add_review(&self, _review: NewReview) -> ApiResult<Review> {
        fail()
    }

    async fn delete_review(&self, _id: &str) -> ApiResult<String> {
        fail()
    }

    async fn fetch_review(&self, _id: &str) -> ApiResult<Review> {
        fail()
    }

    async fn fetch_reviews(&self) -> ApiResult<Vec<Review>> {
        fail()
    }

    async fn fetch_reviews_by_author_id(&self, _author_id: &str) -> ApiResult<Vec<Review>> {
        fail()
    }

    async fn fetch_reviews_by_game_id(&self, _game_id: &str) -> ApiResult<Vec<Review>> {
        fail()
    }

    async fn update_review(&self, _id: &str, _review: ReviewPatch) -> ApiResult<Review> {
        fail()
    }
}

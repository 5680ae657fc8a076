//! In-memory storage adapter
//!
//! Holds the collections in process memory for the lifetime of the adapter
//! instance. Nothing is loaded on connect and nothing is written anywhere.

use async_trait::async_trait;

use super::{CollectionStore, Collections, Persistence};
use crate::error::ApiResult;

/// Persistence hook that keeps nothing beyond the process
#[derive(Debug, Default, Clone, Copy)]
pub struct Volatile;

#[async_trait]
impl Persistence for Volatile {
    const BACKEND: &'static str = "memory";
    const STAGED: bool = false;

    async fn load(&self) -> ApiResult<Option<Collections>> {
        Ok(None)
    }

    async fn save(&self, _data: &Collections) -> ApiResult<()> {
        Ok(())
    }
}

/// Storage adapter keeping everything in process memory
pub type InMemoryAdapter = CollectionStore<Volatile>;

impl InMemoryAdapter {
    /// Create an empty adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter pre-populated with the given data
    pub fn with_data(data: Collections) -> Self {
        Self::with_persistence(Volatile, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::DataStore;
    use crate::models::{Author, AuthorPatch, GamePatch, NewAuthor, NewGame, NewReview, ReviewPatch};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn jane() -> NewAuthor {
        NewAuthor {
            name: "Jane".to_string(),
            verified: true,
        }
    }

    fn chess() -> NewGame {
        NewGame {
            title: "Chess".to_string(),
            platform: vec!["PC".to_string()],
        }
    }

    fn review_of(author_id: &str, game_id: &str) -> NewReview {
        NewReview {
            rating: 5,
            content: "Great".to_string(),
            author_id: author_id.to_string(),
            game_id: game_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_unique_across_kinds() {
        let store = InMemoryAdapter::new();
        store.connect().await.unwrap();

        let mut ids = HashSet::new();
        for _ in 0..20 {
            let author = store.add_author(jane()).await.unwrap();
            let game = store.add_game(chess()).await.unwrap();
            let review = store
                .add_review(review_of(&author.id, &game.id))
                .await
                .unwrap();
            assert!(ids.insert(author.id));
            assert!(ids.insert(game.id));
            assert!(ids.insert(review.id));
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_added_entity() {
        let store = InMemoryAdapter::new();

        let author = store.add_author(jane()).await.unwrap();
        let game = store.add_game(chess()).await.unwrap();
        let review = store
            .add_review(review_of(&author.id, &game.id))
            .await
            .unwrap();

        assert_eq!(store.fetch_author(&author.id).await.unwrap(), author);
        assert_eq!(store.fetch_game(&game.id).await.unwrap(), game);
        assert_eq!(store.fetch_review(&review.id).await.unwrap(), review);
    }

    #[tokio::test]
    async fn test_empty_update_changes_nothing() {
        let store = InMemoryAdapter::new();
        let game = store.add_game(chess()).await.unwrap();

        let updated = store
            .update_game(&game.id, GamePatch::default())
            .await
            .unwrap();

        assert_eq!(updated, game);
        assert_eq!(store.fetch_game(&game.id).await.unwrap(), game);
    }

    #[tokio::test]
    async fn test_update_merges_provided_fields() {
        let store = InMemoryAdapter::new();
        let author = store
            .add_author(NewAuthor {
                name: "A".to_string(),
                verified: false,
            })
            .await
            .unwrap();

        let updated = store
            .update_author(
                &author.id,
                AuthorPatch {
                    verified: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(
            updated,
            Author {
                id: author.id.clone(),
                name: "A".to_string(),
                verified: true,
            }
        );
        assert_eq!(store.fetch_author(&author.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let store = InMemoryAdapter::new();

        assert!(store.fetch_author("x").await.unwrap_err().is_not_found());
        assert!(store.fetch_game("x").await.unwrap_err().is_not_found());
        assert!(store.fetch_review("x").await.unwrap_err().is_not_found());
        assert!(store
            .update_review("x", ReviewPatch::default())
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store.delete_game("x").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let store = InMemoryAdapter::new();
        let author = store.add_author(jane()).await.unwrap();

        assert_eq!(store.delete_author(&author.id).await.unwrap(), author.id);
        assert!(store
            .delete_author(&author.id)
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store.fetch_authors().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_creation_order() {
        let store = InMemoryAdapter::new();
        let mut expected = Vec::new();
        for title in ["one", "two", "three", "four"] {
            let game = store
                .add_game(NewGame {
                    title: title.to_string(),
                    platform: vec![],
                })
                .await
                .unwrap();
            expected.push(game.id);
        }

        store
            .update_game(
                &expected[2],
                GamePatch {
                    title: Some("THREE".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let removed = expected.remove(1);
        store.delete_game(&removed).await.unwrap();

        let ids: Vec<_> = store
            .fetch_games()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_reviews_filtered_by_foreign_key() {
        let store = InMemoryAdapter::new();
        let r1 = store.add_review(review_of("a1", "g1")).await.unwrap();
        let r2 = store.add_review(review_of("a2", "g1")).await.unwrap();

        assert_eq!(
            store.fetch_reviews_by_author_id("a1").await.unwrap(),
            vec![r1.clone()]
        );
        assert_eq!(
            store.fetch_reviews_by_game_id("g1").await.unwrap(),
            vec![r1, r2]
        );
        assert!(store
            .fetch_reviews_by_author_id("a3")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_deleting_author_keeps_reviews() {
        let store = InMemoryAdapter::new();
        let author = store.add_author(jane()).await.unwrap();
        let review = store.add_review(review_of(&author.id, "g1")).await.unwrap();

        store.delete_author(&author.id).await.unwrap();

        assert_eq!(
            store.fetch_reviews_by_author_id(&author.id).await.unwrap(),
            vec![review]
        );
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_all_kept() {
        let store = Arc::new(InMemoryAdapter::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .add_author(NewAuthor {
                            name: format!("author-{}", i),
                            verified: i % 2 == 0,
                        })
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.fetch_authors().await.unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_with_data_and_snapshot() {
        let mut data = Collections::default();
        let author = data.authors.add(jane());
        let store = InMemoryAdapter::with_data(data.clone());

        assert_eq!(store.fetch_author(&author.id).await.unwrap(), author);
        assert_eq!(store.snapshot().await, data);
    }

    #[tokio::test]
    async fn test_ping_and_backend() {
        let store = InMemoryAdapter::new();
        assert!(store.ping().await.is_ok());
        assert_eq!(store.backend(), "memory");
    }
}

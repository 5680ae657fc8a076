//! Test fixtures for API integration tests
//!
//! Provides reusable inputs and GraphQL documents.

#![allow(dead_code)]

use gamereview_api::models::{NewAuthor, NewGame, NewReview};

/// Author "Jane", verified
pub fn jane() -> NewAuthor {
    NewAuthor {
        name: "Jane".to_string(),
        verified: true,
    }
}

/// Game "Chess" on PC
pub fn chess() -> NewGame {
    NewGame {
        title: "Chess".to_string(),
        platform: vec!["PC".to_string()],
    }
}

/// Five-star review linking the given author and game
pub fn great_review(author_id: &str, game_id: &str) -> NewReview {
    NewReview {
        rating: 5,
        content: "Great".to_string(),
        author_id: author_id.to_string(),
        game_id: game_id.to_string(),
    }
}

pub const ADD_AUTHOR: &str = r#"
    mutation AddAuthor($author: AddAuthorInput!) {
        addAuthor(author: $author) { id name verified }
    }
"#;

pub const ADD_GAME: &str = r#"
    mutation AddGame($game: AddGameInput!) {
        addGame(game: $game) { id title platform }
    }
"#;

pub const ADD_REVIEW: &str = r#"
    mutation AddReview($review: AddReviewInput!) {
        addReview(review: $review) { id rating content }
    }
"#;

pub const REVIEW_WITH_RELATIONS: &str = r#"
    query Review($id: ID!) {
        review(id: $id) {
            id
            rating
            author { id name verified }
            game { id title }
        }
    }
"#;

pub const AUTHOR_WITH_REVIEWS: &str = r#"
    query Author($id: ID!) {
        author(id: $id) {
            id
            name
            reviews { id content }
        }
    }
"#;

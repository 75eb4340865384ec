//! The post record.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::json;

/// A piece of content attributed to an author.
///
/// `published` defaults to `false` when the key is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier.
    pub id: i64,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Identifier of the authoring account.
    pub author_id: i64,
    /// Whether the post is visible to readers.
    #[serde(default)]
    pub published: bool,
}

impl Post {
    /// Parses a post from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ParseError`] if the JSON is malformed or a
    /// required key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use profile_models::Post;
    ///
    /// let post = Post::from_json(
    ///     r#"{"id": 1, "title": "Hello", "content": "First post", "author_id": 7}"#,
    /// )
    /// .expect("valid post");
    /// assert!(!post.published);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        json::from_json(json)
    }
}

//! The author record, composed from a [`User`].

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::json;
use crate::user::User;

/// A [`User`] who also writes.
///
/// The user's attributes are held by value and flattened on serialisation,
/// so an author is one JSON object with every [`User::KEYS`] entry plus
/// `biography` and `publisher`.
///
/// # Example
///
/// ```
/// use profile_models::Author;
///
/// let json = r#"{
///     "email": "mary@example.com",
///     "name": "Mary",
///     "gender": 0,
///     "age": 20,
///     "birthday": "1797-08-30",
///     "country": "United Kingdom",
///     "province": "England",
///     "city": "London",
///     "detail_address": "Somers Town",
///     "biography": "Novelist",
///     "publisher": "Lackington"
/// }"#;
///
/// let author = Author::from_json(json).expect("valid author");
/// assert_eq!(author.user().name, "Mary");
/// assert_eq!(author.publisher, "Lackington");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// The underlying user attributes.
    #[serde(flatten)]
    pub user: User,
    /// Short biography.
    pub biography: String,
    /// Publisher name.
    pub publisher: String,
}

impl Author {
    /// Keys the author adds on top of [`User::KEYS`].
    pub const OWN_KEYS: [&'static str; 2] = ["biography", "publisher"];

    /// Builds an author from a user and the author-specific fields.
    #[must_use]
    pub fn new(user: User, biography: impl Into<String>, publisher: impl Into<String>) -> Self {
        Self {
            user,
            biography: biography.into(),
            publisher: publisher.into(),
        }
    }

    /// Access the user attributes.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Drops the author-specific fields and returns the user.
    #[must_use]
    pub fn into_user(self) -> User {
        self.user
    }

    /// Parses an author from a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ParseError`] if the JSON is malformed or any
    /// user or author key is missing.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        json::from_json(json)
    }
}

impl AsRef<User> for Author {
    fn as_ref(&self) -> &User {
        &self.user
    }
}

impl From<Author> for User {
    fn from(value: Author) -> Self {
        value.into_user()
    }
}

//! Profile records with a fixed JSON key mapping.
//!
//! The crate defines three plain records:
//!
//! - [`User`]: descriptive attributes of a person
//! - [`Author`]: a [`User`] plus a biography and publisher, composed by
//!   inclusion and serialised as one flat object
//! - [`Post`]: a piece of content attributed to an author
//!
//! It also renders TypeScript interface declarations for the records so
//! front-end code can share the same shapes (see [`typescript`] and the
//! `model-typegen` binary).
//!
//! # Example
//!
//! ```
//! use profile_models::{Author, GenderCode, User};
//!
//! let user = User {
//!     email: "ada@example.com".to_owned(),
//!     name: "Ada".to_owned(),
//!     gender: GenderCode::new(1).expect("valid gender code"),
//!     age: 36,
//!     birthday: "1815-12-10".to_owned(),
//!     country: "United Kingdom".to_owned(),
//!     province: "England".to_owned(),
//!     city: "London".to_owned(),
//!     detail_address: "12 St James's Square".to_owned(),
//! };
//! let author = Author::new(user, "Mathematician", "Taylor's Scientific Memoirs");
//!
//! let json = serde_json::to_value(&author).expect("serialise author");
//! assert_eq!(json["city"], "London");
//! assert_eq!(json["publisher"], "Taylor's Scientific Memoirs");
//! ```

mod atomic_io;
mod author;
mod error;
mod json;
mod post;
pub mod typegen_cli;
pub mod typescript;
mod user;

pub use author::Author;
pub use error::ModelError;
pub use post::Post;
pub use user::{GenderCode, User};

//! The user record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::json;

/// Gender code restricted to `0` or `1`.
///
/// Serialised as a bare integer. Out-of-range codes are rejected both by
/// [`GenderCode::new`] and when deserialising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GenderCode(u8);

impl GenderCode {
    /// Codes accepted by [`GenderCode::new`].
    pub const ALLOWED: [u8; 2] = [0, 1];

    /// Validate and construct a [`GenderCode`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidGenderCode`] for any code other than `0`
    /// or `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use profile_models::{GenderCode, ModelError};
    ///
    /// assert_eq!(GenderCode::new(0).map(GenderCode::code), Ok(0));
    /// assert_eq!(GenderCode::new(2), Err(ModelError::InvalidGenderCode { value: 2 }));
    /// ```
    pub const fn new(code: u8) -> Result<Self, ModelError> {
        match code {
            0 | 1 => Ok(Self(code)),
            value => Err(ModelError::InvalidGenderCode { value }),
        }
    }

    /// Access the raw code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }
}

impl fmt::Display for GenderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<GenderCode> for u8 {
    fn from(value: GenderCode) -> Self {
        value.0
    }
}

impl TryFrom<u8> for GenderCode {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Descriptive attributes of a person.
///
/// Every field serialises under its own name, which is already the external
/// `snake_case` key (see [`User::KEYS`]); there are no cross-field invariants
/// and no identity field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Contact email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Gender code, `0` or `1`.
    pub gender: GenderCode,
    /// Age in years.
    pub age: u32,
    /// Birthday as free-form text, typically `YYYY-MM-DD`.
    pub birthday: String,
    /// Country of residence.
    pub country: String,
    /// Province or state.
    pub province: String,
    /// City.
    pub city: String,
    /// Street-level address.
    pub detail_address: String,
}

impl User {
    /// External keys in declaration order.
    pub const KEYS: [&'static str; 9] = [
        "email",
        "name",
        "gender",
        "age",
        "birthday",
        "country",
        "province",
        "city",
        "detail_address",
    ];

    /// Parses a user from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ParseError`] if the JSON is malformed, a key is
    /// missing, or the gender code is out of range.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        json::from_json(json)
    }
}

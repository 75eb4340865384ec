//! TypeScript interface declarations for the records.
//!
//! Each record describes its own shape through [`TypeScriptInterface`];
//! [`render_module`] stitches the declarations into one generated module.
//! [`Author`] declares only its own fields and extends `User`, mirroring the
//! flattened JSON layout.

use std::fmt;

use crate::author::Author;
use crate::post::Post;
use crate::user::{GenderCode, User};

/// First line of every generated module.
pub const GENERATED_HEADER: &str = "// Code generated by model-typegen. DO NOT EDIT.";

/// A TypeScript type used by a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsType {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// A union of numeric literals, e.g. `0 | 1`.
    NumberLiterals(&'static [u8]),
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Boolean => f.write_str("boolean"),
            Self::NumberLiterals(values) => {
                let mut first = true;
                for value in *values {
                    if !first {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{value}")?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

/// One property of a TypeScript interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TsField {
    name: &'static str,
    ty: TsType,
    optional: bool,
}

impl TsField {
    /// A property that must be present.
    #[must_use]
    pub const fn required(name: &'static str, ty: TsType) -> Self {
        Self {
            name,
            ty,
            optional: false,
        }
    }

    /// A property that may be omitted (`name?: type`).
    #[must_use]
    pub const fn optional(name: &'static str, ty: TsType) -> Self {
        Self {
            name,
            ty,
            optional: true,
        }
    }

    /// The property key, identical to the JSON key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The property type.
    #[must_use]
    pub const fn ty(&self) -> TsType {
        self.ty
    }

    /// Whether the property may be omitted.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}

impl fmt::Display for TsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.optional { "?" } else { "" };
        write!(f, "{}{marker}: {};", self.name, self.ty)
    }
}

/// An `export interface` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsInterface {
    name: &'static str,
    extends: Option<&'static str>,
    fields: Vec<TsField>,
}

impl TsInterface {
    /// Builds a declaration; `extends` names the parent interface, if any.
    #[must_use]
    pub const fn new(
        name: &'static str,
        extends: Option<&'static str>,
        fields: Vec<TsField>,
    ) -> Self {
        Self {
            name,
            extends,
            fields,
        }
    }

    /// The interface name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The parent interface, if any.
    #[must_use]
    pub const fn extends(&self) -> Option<&'static str> {
        self.extends
    }

    /// Fields declared directly on this interface.
    #[must_use]
    pub fn fields(&self) -> &[TsField] {
        &self.fields
    }
}

impl fmt::Display for TsInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "export interface {}", self.name)?;
        if let Some(parent) = self.extends {
            write!(f, " extends {parent}")?;
        }
        writeln!(f, " {{")?;
        for field in &self.fields {
            writeln!(f, "  {field}")?;
        }
        writeln!(f, "}}")
    }
}

/// Types that can describe themselves as a TypeScript interface.
pub trait TypeScriptInterface {
    /// Returns the interface declaration for the type.
    fn ts_interface() -> TsInterface;
}

impl TypeScriptInterface for User {
    fn ts_interface() -> TsInterface {
        TsInterface::new(
            "User",
            None,
            vec![
                TsField::required("email", TsType::String),
                TsField::required("name", TsType::String),
                TsField::required("gender", TsType::NumberLiterals(&GenderCode::ALLOWED)),
                TsField::required("age", TsType::Number),
                TsField::required("birthday", TsType::String),
                TsField::required("country", TsType::String),
                TsField::required("province", TsType::String),
                TsField::required("city", TsType::String),
                TsField::required("detail_address", TsType::String),
            ],
        )
    }
}

impl TypeScriptInterface for Author {
    fn ts_interface() -> TsInterface {
        TsInterface::new(
            "Author",
            Some("User"),
            vec![
                TsField::required("biography", TsType::String),
                TsField::required("publisher", TsType::String),
            ],
        )
    }
}

impl TypeScriptInterface for Post {
    fn ts_interface() -> TsInterface {
        TsInterface::new(
            "Post",
            None,
            vec![
                TsField::required("id", TsType::Number),
                TsField::required("title", TsType::String),
                TsField::required("content", TsType::String),
                TsField::required("author_id", TsType::Number),
                TsField::optional("published", TsType::Boolean),
            ],
        )
    }
}

/// Renders the generated TypeScript module for every record.
///
/// Parents are declared before the interfaces that extend them.
///
/// # Examples
///
/// ```
/// use profile_models::typescript::{GENERATED_HEADER, render_module};
///
/// let module = render_module();
/// assert!(module.starts_with(GENERATED_HEADER));
/// assert!(module.contains("export interface Author extends User {"));
/// ```
#[must_use]
pub fn render_module() -> String {
    let interfaces = [
        User::ts_interface(),
        Author::ts_interface(),
        Post::ts_interface(),
    ];
    let mut module = String::from(GENERATED_HEADER);
    module.push('\n');
    for interface in &interfaces {
        module.push('\n');
        module.push_str(&interface.to_string());
    }
    module
}

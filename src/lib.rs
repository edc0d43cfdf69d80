#![deny(missing_docs)]

//! # docschema
//!
//! Reads the annotations embedded in a field's documentation comment
//! (`+required`, ``Defaults to `…` ``, ``Schema type is `…` ``,
//! ``For example: `…` ``, enum value lists) and records them on the field's
//! schema `Definition`, together with a plain-text and an HTML description.
//!
//! ```rust
//! use docschema::{CommentConfig, CommentHandler, Definition};
//!
//! let mut def = Definition::typed("string");
//! let meta = CommentHandler::new(CommentConfig::default())
//!     .handle_comment("Mode", "Mode is the run mode. Defaults to `\"fast\"`.\n+required", &mut def)
//!     .unwrap();
//!
//! assert!(meta.required);
//! assert_eq!(def.description, "run mode.");
//! assert_eq!(def.default, Some(serde_json::json!("fast")));
//! ```

/// Shared error types.
pub mod error;

/// Comment handling options.
pub mod config;

/// Schema definition record.
pub mod schema;

/// Declaration name resolution.
pub mod reference;

/// Literal value parsing.
pub mod literal;

/// Type expression parsing.
pub mod type_expr;

/// Type expression -> definition mapping.
pub mod builder;

/// Enum value blocks.
pub mod enums;

/// Individual annotation clause passes.
pub mod annotations;

/// Strict mode documentation rules.
pub mod strict;

/// Markdown rendering.
pub mod markdown;

/// Comment handling entry point.
pub mod comment;

pub use builder::{RustSchemaBuilder, SchemaBuilder};
pub use comment::{AnnotationMeta, CommentHandler};
pub use config::CommentConfig;
pub use enums::{extract_enum, EnumInformation};
pub use error::{AppError, AppResult};
pub use literal::parse_literal;
pub use markdown::render_html;
pub use reference::interpret_reference;
pub use schema::Definition;
pub use type_expr::{parse_type_expr, TypeExpr, TypePath};

#![deny(missing_docs)]

//! # Comment Handling
//!
//! Interprets the documentation comment of a single field and stores what it
//! finds on the field's `Definition`.
//!
//! The passes run in a fixed order over one shrinking description: enum
//! block, requiredness, marker stripping, default, type override or `oneOf`,
//! example, and finally the leading field name paraphrase. Each pass only
//! sees what the previous ones left behind.

use crate::annotations::{
    extract_default, extract_example, extract_one_of, extract_type_override, is_required,
    join_non_empty, remove_name_prefix, strip_markers,
};
use crate::builder::{RustSchemaBuilder, SchemaBuilder};
use crate::config::CommentConfig;
use crate::enums::extract_enum;
use crate::error::{AppError, AppResult};
use crate::literal::parse_literal;
use crate::markdown::render_description;
use crate::reference::interpret_reference;
use crate::schema::Definition;
use crate::strict::{check_description, check_name_prefix};
use crate::type_expr::{parse_type_expr, TypeExpr};

/// What the comment says about the field beyond its schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationMeta {
    /// The comment carries a `+required` or `Required` marker.
    pub required: bool,
    /// The comment overrides the schema type; the declared type must not be
    /// used to derive the field's schema.
    pub no_derive: bool,
}

/// Applies field comments to schema definitions.
#[derive(Debug, Clone)]
pub struct CommentHandler<B = RustSchemaBuilder> {
    config: CommentConfig,
    builder: B,
}

impl CommentHandler<RustSchemaBuilder> {
    /// Creates a handler using the Rust type builder.
    pub fn new(config: CommentConfig) -> Self {
        let builder = RustSchemaBuilder::new(config.definitions_prefix.clone());
        Self { config, builder }
    }
}

impl Default for CommentHandler<RustSchemaBuilder> {
    fn default() -> Self {
        Self::new(CommentConfig::default())
    }
}

impl<B: SchemaBuilder> CommentHandler<B> {
    /// Creates a handler with a custom schema builder.
    pub fn with_builder(config: CommentConfig, builder: B) -> Self {
        Self { config, builder }
    }

    /// The active configuration.
    pub fn config(&self) -> &CommentConfig {
        &self.config
    }

    /// Interprets `comment` and saves the result in `def`.
    ///
    /// `raw_name` may be a path or reference; only its last segment is used
    /// as the field name. On error `def` may be partially updated and should
    /// be discarded.
    pub fn handle_comment(
        &self,
        raw_name: &str,
        comment: &str,
        def: &mut Definition,
    ) -> AppResult<AnnotationMeta> {
        let (_, name) = interpret_reference(raw_name);
        let strict = self.config.strict && !name.is_empty();
        if strict {
            check_name_prefix(&name, comment)?;
        }

        let mut comment = comment.to_string();
        let mut synthesized = String::new();
        if let Some(info) = extract_enum(&name, def, &comment)? {
            tracing::debug!(field = %name, "enum block found");
            comment = info.remaining_comment;
            synthesized = info.synthesized_comment;
        }

        let required = is_required(&comment);
        let mut no_derive = false;
        let mut description = strip_markers(&comment);

        if let Some(clause) = extract_default(&description) {
            let value = parse_literal(clause.value).map_err(|e| AppError::LiteralParse {
                field: name.clone(),
                literal: clause.value.to_string(),
                reason: e.into_reason(),
            })?;
            tracing::debug!(field = %name, default = clause.value, "default value found");
            def.default = Some(value);
            description = clause.prefix.to_string();
        }

        if let Some(clause) = extract_type_override(&description) {
            let expr = self.parse_type(&name, clause.value)?;
            tracing::debug!(field = %name, ty = %expr, "schema type overridden");
            no_derive = true;
            let replacement = self.builder.build(&expr, false);
            *def = replacement;
            description = clause.prefix.to_string();
        } else if let Some(clause) = extract_one_of(&description)? {
            let mut alternatives = Vec::with_capacity(clause.entries.len());
            for entry in &clause.entries {
                let expr = self.parse_type(&name, entry)?;
                alternatives.push(self.builder.build(&expr, false));
            }
            tracing::debug!(field = %name, count = alternatives.len(), "oneOf alternatives found");
            def.one_of = alternatives;
            description = clause.prefix.to_string();
        }

        if let Some(clause) = extract_example(&description) {
            tracing::trace!(field = %name, example = clause.value, "example found");
            def.examples = vec![clause.value.to_string()];
            description = clause.prefix.to_string();
        }

        let description = remove_name_prefix(&name, &description);

        if strict {
            check_description(&name, &description)?;
        }

        def.description = join_non_empty(" ", &[description.as_str(), synthesized.as_str()]);
        def.html_description = render_description(&def.description);

        Ok(AnnotationMeta {
            required,
            no_derive,
        })
    }

    fn parse_type(&self, field: &str, text: &str) -> AppResult<TypeExpr> {
        parse_type_expr(text).map_err(|e| AppError::TypeExpression {
            field: field.to_string(),
            text: text.to_string(),
            reason: e.into_reason(),
        })
    }
}

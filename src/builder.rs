#![deny(missing_docs)]

//! # Schema Builder
//!
//! Converts parsed type expressions into `Definition` stubs.
//! Handles primitives, collections, maps, nullability (`Option`) and falls
//! back to `$ref`s for user defined types.

use crate::config::DEFAULT_DEFINITIONS_PREFIX;
use crate::schema::Definition;
use crate::type_expr::{TypeExpr, TypePath};

/// Trait for materializing a type expression into a schema definition.
pub trait SchemaBuilder {
    /// Builds a fresh definition for `expr`. `nullable` marks the result as
    /// accepting `null` regardless of the expression.
    fn build(&self, expr: &TypeExpr, nullable: bool) -> Definition;
}

/// A standard implementation of `SchemaBuilder` for Rust types.
#[derive(Debug, Clone)]
pub struct RustSchemaBuilder {
    definitions_prefix: String,
}

impl Default for RustSchemaBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_DEFINITIONS_PREFIX)
    }
}

impl RustSchemaBuilder {
    /// Creates a builder emitting `$ref`s below `definitions_prefix`.
    pub fn new(definitions_prefix: impl Into<String>) -> Self {
        Self {
            definitions_prefix: definitions_prefix.into(),
        }
    }

    fn map_expr(&self, expr: &TypeExpr) -> Definition {
        match expr {
            TypeExpr::Reference(inner) => self.map_expr(inner),
            TypeExpr::Sequence(inner) => self.sequence(inner),
            TypeExpr::Path(path) => self.map_path(path),
        }
    }

    fn map_path(&self, path: &TypePath) -> Definition {
        let first_arg = path.args.first();
        match (path.name.as_str(), first_arg) {
            // Containers
            ("Option", Some(inner)) => self.map_expr(inner).nullable(),
            ("Box" | "Rc" | "Arc" | "Cow", Some(inner)) => self.map_expr(inner),
            ("Vec" | "VecDeque" | "HashSet" | "BTreeSet" | "IndexSet", Some(inner)) => {
                self.sequence(inner)
            }
            ("HashMap" | "BTreeMap" | "IndexMap", Some(_)) => {
                let values = path
                    .args
                    .get(1)
                    .map(|value| self.map_expr(value))
                    .unwrap_or_default();
                Definition::map_of(values)
            }
            (name, _) => map_named_type(name).unwrap_or_else(|| self.reference(path)),
        }
    }

    fn sequence(&self, inner: &TypeExpr) -> Definition {
        if *inner == TypeExpr::named("u8") {
            return Definition::typed("string").with_format("byte");
        }
        Definition::array_of(self.map_expr(inner))
    }

    fn reference(&self, path: &TypePath) -> Definition {
        let mut segments: Vec<&str> = path
            .qualifier
            .iter()
            .map(String::as_str)
            .filter(|segment| !matches!(*segment, "crate" | "self" | "super"))
            .collect();
        segments.push(path.name.as_str());
        Definition::reference_to(format!("{}{}", self.definitions_prefix, segments.join(".")))
    }
}

impl SchemaBuilder for RustSchemaBuilder {
    fn build(&self, expr: &TypeExpr, nullable: bool) -> Definition {
        let def = self.map_expr(expr);
        if nullable {
            def.nullable()
        } else {
            def
        }
    }
}

/// Maps a "clean" Rust type name to a base definition.
fn map_named_type(name: &str) -> Option<Definition> {
    let def = match name {
        "i8" | "i16" | "i32" | "u8" | "u16" | "u32" | "isize" | "usize" => {
            Definition::typed("integer").with_format("int32")
        }
        "i64" | "u64" | "i128" | "u128" => Definition::typed("integer").with_format("int64"),

        "f32" => Definition::typed("number").with_format("float"),
        "f64" => Definition::typed("number").with_format("double"),

        "bool" => Definition::typed("boolean"),

        "String" | "str" | "char" => Definition::typed("string"),
        "Uuid" => Definition::typed("string").with_format("uuid"),
        "NaiveDate" => Definition::typed("string").with_format("date"),
        "NaiveDateTime" | "DateTime" => Definition::typed("string").with_format("date-time"),
        "Decimal" => Definition::typed("string").with_format("decimal"),

        // Free-form JSON
        "Value" => Definition::default(),

        _ => return None,
    };
    Some(def)
}

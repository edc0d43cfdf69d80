#![deny(missing_docs)]

//! # Type Expressions
//!
//! Parses the type written in a `Schema type is` clause into a small
//! expression tree. Handles paths with generic arguments, references and
//! slices/arrays.

use crate::error::{AppError, AppResult};
// Import HasGenericArgs to access .generic_arg_list() on PathSegments
use ra_ap_edition::Edition;
use ra_ap_syntax::ast::{self, HasGenericArgs};
use ra_ap_syntax::{AstNode, SourceFile};
use std::fmt::Display;

/// A parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A named type, optionally qualified and generic (e.g. `std::vec::Vec<T>`).
    Path(TypePath),
    /// A reference (`&T` or `&mut T`).
    Reference(Box<TypeExpr>),
    /// A slice or fixed size array (`[T]`, `[T; N]`).
    Sequence(Box<TypeExpr>),
}

/// A named type with its module qualifier and type arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePath {
    /// Leading path segments (`["std", "vec"]` for `std::vec::Vec`).
    pub qualifier: Vec<String>,
    /// The type name itself.
    pub name: String,
    /// Type arguments. Lifetimes are not kept.
    pub args: Vec<TypeExpr>,
}

impl TypeExpr {
    /// Convenience constructor for an unqualified, non-generic type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Path(TypePath {
            qualifier: Vec::new(),
            name: name.into(),
            args: Vec::new(),
        })
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExpr::Path(path) => {
                for segment in &path.qualifier {
                    write!(f, "{}::", segment)?;
                }
                write!(f, "{}", path.name)?;
                if !path.args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in path.args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeExpr::Reference(inner) => write!(f, "&{}", inner),
            TypeExpr::Sequence(inner) => write!(f, "[{}]", inner),
        }
    }
}

/// Parses a Rust type expression such as `Option<Vec<models::User>>`.
pub fn parse_type_expr(text: &str) -> AppResult<TypeExpr> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::General("Empty type expression".into()));
    }

    // Wrap implementation to parse valid Rust syntax using a type alias
    let code = format!("type _Wrapper = {};", trimmed);
    let parse = SourceFile::parse(&code, Edition::Edition2021);
    let errors = parse.errors();
    if let Some(err) = errors.first() {
        return Err(AppError::General(format!(
            "Invalid type syntax `{}`: {}",
            trimmed, err
        )));
    }
    let file = parse.tree();

    let type_alias = file
        .syntax()
        .descendants()
        .find_map(ast::TypeAlias::cast)
        .ok_or_else(|| AppError::General(format!("Failed to parse type string: {}", trimmed)))?;

    let root_type = type_alias
        .ty()
        .ok_or_else(|| AppError::General(format!("Invalid type syntax: {}", trimmed)))?;

    if root_type.syntax().text().to_string() != trimmed {
        return Err(AppError::General(format!(
            "Unexpected input after type: {}",
            trimmed
        )));
    }

    convert_ast_type(&root_type)
}

/// Recursively converts an AST Type node.
fn convert_ast_type(ty: &ast::Type) -> AppResult<TypeExpr> {
    match ty {
        ast::Type::PathType(path_type) => {
            let path = path_type
                .path()
                .ok_or_else(|| AppError::General("Empty path".into()))?;
            convert_path(&path).map(TypeExpr::Path)
        }
        ast::Type::RefType(ref_type) => {
            let inner = ref_type
                .ty()
                .ok_or_else(|| AppError::General("Invalid reference".into()))?;
            Ok(TypeExpr::Reference(Box::new(convert_ast_type(&inner)?)))
        }
        ast::Type::SliceType(slice_type) => {
            let inner = slice_type
                .ty()
                .ok_or_else(|| AppError::General("Invalid slice".into()))?;
            Ok(TypeExpr::Sequence(Box::new(convert_ast_type(&inner)?)))
        }
        ast::Type::ArrayType(array_type) => {
            let inner = array_type
                .ty()
                .ok_or_else(|| AppError::General("Invalid array".into()))?;
            Ok(TypeExpr::Sequence(Box::new(convert_ast_type(&inner)?)))
        }
        other => Err(AppError::General(format!(
            "Unsupported type structure: {}",
            other.syntax().text()
        ))),
    }
}

fn convert_path(path: &ast::Path) -> AppResult<TypePath> {
    let mut segments = Vec::new();
    collect_segments(path, &mut segments);

    let last = segments
        .pop()
        .ok_or_else(|| AppError::General("Empty segment".into()))?;

    let mut qualifier = Vec::new();
    for segment in &segments {
        qualifier.push(segment_name(segment)?);
    }

    let mut args = Vec::new();
    if let Some(list) = last.generic_arg_list() {
        for arg in list.generic_args() {
            match arg {
                ast::GenericArg::TypeArg(type_arg) => {
                    let inner = type_arg
                        .ty()
                        .ok_or_else(|| AppError::General("Invalid generic type".into()))?;
                    args.push(convert_ast_type(&inner)?);
                }
                ast::GenericArg::LifetimeArg(_) => {}
                other => {
                    return Err(AppError::General(format!(
                        "Unsupported generic argument: {}",
                        other.syntax().text()
                    )))
                }
            }
        }
    }

    Ok(TypePath {
        qualifier,
        name: segment_name(&last)?,
        args,
    })
}

fn collect_segments(path: &ast::Path, out: &mut Vec<ast::PathSegment>) {
    if let Some(qualifier) = path.qualifier() {
        collect_segments(&qualifier, out);
    }
    if let Some(segment) = path.segment() {
        out.push(segment);
    }
}

fn segment_name(segment: &ast::PathSegment) -> AppResult<String> {
    segment
        .name_ref()
        .map(|name_ref| name_ref.text().to_string())
        .ok_or_else(|| {
            AppError::General(format!("Unsupported path segment: {}", segment.syntax().text()))
        })
}

use docschema::{
    AnnotationMeta, AppError, CommentConfig, CommentHandler, Definition, SchemaBuilder, TypeExpr,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn handle(name: &str, comment: &str, def: &mut Definition) -> AnnotationMeta {
    CommentHandler::new(CommentConfig::default())
        .handle_comment(name, comment, def)
        .expect("comment should be accepted")
}

#[test]
fn test_comment_without_annotations() {
    let pre = Definition {
        default: Some(json!(3)),
        one_of: vec![Definition::typed("integer")],
        examples: vec!["3".into()],
        ..Definition::typed("integer")
    };
    let mut def = pre.clone();

    let meta = handle("", "  Number of\nretries before\ngiving up.  ", &mut def);

    assert_eq!(meta, AnnotationMeta::default());
    assert_eq!(def.description, "Number of retries before giving up.");
    assert_eq!(def.default, pre.default);
    assert_eq!(def.one_of, pre.one_of);
    assert_eq!(def.examples, pre.examples);
}

#[test]
fn test_required_markers() {
    for comment in ["Foo is the bar.\n+required", "Foo is the bar.\n+required\n"] {
        let mut def = Definition::default();
        let meta = handle("Foo", comment, &mut def);
        assert!(meta.required, "{:?}", comment);
        assert!(!def.description.contains("+required"));
        assert_eq!(def.description, "bar.");
    }

    for comment in [
        "Required\nFoo is the bar.",
        "Foo is the bar.\nRequired",
        "Foo is the bar.\r\nRequired\r\n",
    ] {
        let mut def = Definition::default();
        let meta = handle("Foo", comment, &mut def);
        assert!(meta.required, "{:?}", comment);
        assert_eq!(def.description, "bar.");
    }

    let mut def = Definition::default();
    let meta = handle("Foo", "Foo is Required here.", &mut def);
    assert!(!meta.required);
    assert_eq!(def.description, "Required here.");
}

#[test]
fn test_optional_marker_is_dropped() {
    let mut def = Definition::default();
    let meta = handle("Foo", "Foo is the bar.\n+optional", &mut def);
    assert!(!meta.required);
    assert_eq!(def.description, "bar.");
}

#[test]
fn test_default_clause() {
    let mut def = Definition::typed("string");
    handle("Foo", "Foo is the bar. Defaults to `\"baz\"`.", &mut def);

    assert_eq!(def.description, "bar.");
    assert_eq!(def.default, Some(json!("baz")));
    assert_eq!(def.html_description, "bar.");
}

#[test]
fn test_override_is_exactly_the_stub() {
    let mut def = Definition {
        nullable: true,
        enum_values: vec![json!("a")],
        ..Definition::typed("string")
    };
    let meta = handle("Foo", "Foo is the bar. Schema type is `SomeType`.", &mut def);

    assert!(meta.no_derive);
    let expected = Definition {
        description: "bar.".into(),
        html_description: "bar.".into(),
        ..Definition::reference_to("#/definitions/SomeType")
    };
    assert_eq!(def, expected);
}

#[test]
fn test_override_beats_one_of() {
    let mut def = Definition {
        one_of: vec![Definition::typed("boolean")],
        ..Definition::default()
    };
    let meta = handle(
        "Foo",
        "Foo is the bar. Schema type is one of `A`, `B`. Schema type is `Vec<u32>`.",
        &mut def,
    );

    assert!(meta.no_derive);
    assert!(def.one_of.is_empty());
    assert_eq!(def.type_.as_deref(), Some("array"));
    assert_eq!(
        def.description,
        "bar. Schema type is one of `A`, `B`."
    );
}

#[test]
fn test_one_of_clause_keeps_order() {
    let mut def = Definition::default();
    let meta = handle("Foo", "Foo is one of. Schema type is one of `A`, `B`.", &mut def);

    assert!(!meta.no_derive);
    let refs: Vec<_> = def
        .one_of
        .iter()
        .map(|d| d.reference.clone().unwrap_or_default())
        .collect();
    assert_eq!(refs, vec!["#/definitions/A", "#/definitions/B"]);
}

#[test]
fn test_one_of_entry_error_names_entry() {
    let mut def = Definition::default();
    let err = CommentHandler::new(CommentConfig::default())
        .handle_comment("Foo", "Foo is a value. Schema type is one of `A`, `B C`.", &mut def)
        .unwrap_err();

    match err {
        AppError::TypeExpression { field, text, .. } => {
            assert_eq!(field, "Foo");
            assert_eq!(text, "B C");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_example_clause_is_not_parsed() {
    let mut def = Definition::default();
    handle("Foo", "Foo is the bar. For example: `bar-example`.", &mut def);
    assert_eq!(def.examples, vec!["bar-example".to_string()]);
    assert_eq!(def.description, "bar.");
}

#[test]
fn test_all_clauses_together() {
    let comment = "Foo is the timeout *(seconds)* used by\nthe client. \
                   For example: `45`. Defaults to `30`.\n+required";
    let mut def = Definition::typed("integer");
    let meta = handle("Foo", comment, &mut def);

    assert!(meta.required);
    assert_eq!(def.default, Some(json!(30)));
    assert_eq!(def.examples, vec!["45".to_string()]);
    assert_eq!(
        def.description,
        "timeout *(seconds)* used by the client."
    );
    assert_eq!(
        def.html_description,
        "timeout <em>(seconds)</em> used by the client."
    );
}

#[test]
fn test_idempotent_on_description() {
    let mut first = Definition::default();
    handle("Foo", "Foo is the bar of\nthe baz. Defaults to `1`.", &mut first);

    let mut second = Definition::default();
    handle("Foo", &first.description, &mut second);

    assert_eq!(second.description, first.description);
    assert_eq!(second.html_description, first.html_description);
}

#[test]
fn test_strict_mode() {
    let handler = CommentHandler::new(CommentConfig::default().with_strict(true));

    let mut def = Definition::default();
    let err = handler
        .handle_comment("Foo", "Bar is the foo.", &mut def)
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedComment { ref field, .. } if field == "Foo"));

    let mut def = Definition::default();
    let err = handler
        .handle_comment("Foo", "Foo is the bar", &mut def)
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedComment { .. }));
    assert!(!err.is_internal());

    let mut def = Definition::default();
    handler
        .handle_comment("", "Bar is the foo", &mut def)
        .expect("strict rules need a field name");
}

#[test]
fn test_enum_block_then_clauses() {
    let comment = "Foo is the level.\n\
                   Possible values are:\n\
                   - `\"low\"`: Quiet.\n\
                   - `\"high\"`\n\
                   Defaults to `\"low\"`.";
    let mut def = Definition::typed("string");
    handle("Foo", comment, &mut def);

    assert_eq!(def.enum_values, vec![json!("low"), json!("high")]);
    assert_eq!(def.default, Some(json!("low")));
    assert_eq!(
        def.description,
        "level. Possible values: `\"low\"` (Quiet), `\"high\"`."
    );
}

#[test]
fn test_configured_prefix() {
    let handler = CommentHandler::new(
        CommentConfig::default().with_definitions_prefix("#/components/schemas/"),
    );
    let mut def = Definition::default();
    handler
        .handle_comment("Pet", "Pet is a pet. Schema type is `Option<models::Cat>`.", &mut def)
        .unwrap();

    assert_eq!(
        def.to_value().unwrap(),
        json!({
            "$ref": "#/components/schemas/models.Cat",
            "nullable": true,
            "description": "a pet.",
            "htmlDescription": "a pet."
        })
    );
}

struct NamingBuilder;

impl SchemaBuilder for NamingBuilder {
    fn build(&self, expr: &TypeExpr, nullable: bool) -> Definition {
        Definition {
            nullable,
            ..Definition::reference_to(format!("custom:{}", expr))
        }
    }
}

#[test]
fn test_custom_builder() {
    let handler = CommentHandler::with_builder(CommentConfig::default(), NamingBuilder);
    let mut def = Definition::default();
    handler
        .handle_comment("Foo", "Foo is x. Schema type is one of `Vec<A>`, `&B`.", &mut def)
        .unwrap();

    let refs: Vec<_> = def
        .one_of
        .iter()
        .map(|d| d.reference.clone().unwrap_or_default())
        .collect();
    assert_eq!(refs, vec!["custom:Vec<A>", "custom:&B"]);
}

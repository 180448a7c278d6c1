use super::{CompiledRoute, Segment};

#[test]
fn test_literal_pattern() {
    let route = CompiledRoute::compile("/items/all");
    assert_eq!(
        route.segments,
        vec![
            Segment::Literal("items".to_string()),
            Segment::Literal("all".to_string())
        ]
    );
    assert!(route.param_names.is_empty());
}

#[test]
fn test_wildcard_pattern() {
    let route = CompiledRoute::compile("/items/:id");
    assert_eq!(
        route.segments,
        vec![Segment::Literal("items".to_string()), Segment::Wildcard]
    );
    assert_eq!(route.param_names.len(), 1);
    assert_eq!(route.param_names[0].as_ref(), "id");
}

#[test]
fn test_empty_pattern_is_root() {
    let route = CompiledRoute::compile("");
    assert!(route.segments.is_empty());
    assert_eq!(route.pattern(), "/");

    let slashes = CompiledRoute::compile("///");
    assert!(slashes.segments.is_empty());
}

#[test]
fn test_lone_colon_is_literal() {
    let route = CompiledRoute::compile("/a/:/b");
    assert_eq!(
        route.segments,
        vec![
            Segment::Literal("a".to_string()),
            Segment::Literal(":".to_string()),
            Segment::Literal("b".to_string())
        ]
    );
    assert!(route.param_names.is_empty());
}

#[test]
fn test_fragments_are_trimmed() {
    let route = CompiledRoute::compile("  /users/ :id /");
    assert_eq!(
        route.segments,
        vec![Segment::Literal("users".to_string()), Segment::Wildcard]
    );
    assert_eq!(route.param_names[0].as_ref(), "id");
}

#[test]
fn test_pattern_rendering_is_normalized() {
    let route = CompiledRoute::compile("//users//:id/");
    assert_eq!(route.pattern(), "/users/:id");
}

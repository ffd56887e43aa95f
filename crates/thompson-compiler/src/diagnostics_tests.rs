use crate::compile::compile;

#[test]
fn plain_without_source() {
    let err = compile("").unwrap_err();

    assert_eq!(
        err.printer().render(),
        "error: invalid expression: expression is empty\n"
    );
}

#[test]
fn plain_with_path() {
    let err = compile("").unwrap_err();

    let out = err.printer().source("").path("empty.re").render();

    assert_eq!(
        out,
        "error: empty.re: invalid expression: expression is empty\n"
    );
}

#[test]
fn annotated_star() {
    let source = "*a";
    let err = compile(source).unwrap_err();

    let out = err.printer().source(source).render();

    assert!(out.contains("invalid expression"), "{out}");
    assert!(out.contains("`*` has nothing to repeat"), "{out}");
    assert!(out.contains("*a"), "{out}");
    assert!(out.contains('^'), "{out}");
}

#[test]
fn annotated_with_path() {
    let source = "(ab";
    let err = compile(source).unwrap_err();

    let out = err.printer().source(source).path("query.re").render();

    assert!(out.contains("query.re"), "{out}");
    assert!(out.contains("unclosed `(`"), "{out}");
}

#[test]
fn plain_rendering_has_no_escape_codes() {
    let source = "a)";
    let err = compile(source).unwrap_err();

    let out = err.printer().source(source).colored(false).render();

    assert!(!out.contains('\x1b'), "{out}");
    assert!(out.contains("unmatched `)`"), "{out}");
}

//! Tests for fragment combinators and postfix assembly.

use rowan::TextRange;
use thompson_core::Symbol;

use crate::build::{BuildCtx, BuildEvent, Fragment};
use crate::dump::NfaPrinter;
use crate::error::InvalidReason;
use crate::lexer::{TokenKind, lex};
use crate::postfix::to_postfix;
use crate::preprocess::add_explicit_concat;

fn finish_dump(ctx: BuildCtx, fragment: Fragment) -> String {
    let (nfa, _) = ctx.finish(fragment);
    NfaPrinter::new(&nfa).dump()
}

fn accepting_count(ctx: &BuildCtx) -> usize {
    (0..ctx.len() as u32)
        .filter(|&id| ctx.state(id).is_accepting())
        .count()
}

#[test]
fn char_fragment() {
    let mut ctx = BuildCtx::new();

    let frag = ctx.char_fragment('a');

    assert_eq!(frag, Fragment::new(0, 1));
    assert_eq!(ctx.state(0).targets(Symbol::Char('a')), &[1]);
    insta::assert_snapshot!(finish_dump(ctx, frag), @r"
    S0 (start): a → S1
    S1 (accept): ∅
    ");
}

#[test]
fn concat_links_left_end_to_right_start() {
    let mut ctx = BuildCtx::new();
    let a = ctx.char_fragment('a');
    let b = ctx.char_fragment('b');

    let frag = ctx.concat(a, b);

    assert_eq!(frag, Fragment::new(a.start, b.end));
    assert!(!ctx.state(a.end).is_accepting());
    assert_eq!(accepting_count(&ctx), 1);
    insta::assert_snapshot!(finish_dump(ctx, frag), @r"
    S0 (start): a → S1
    S1: ε → S2
    S2: b → S3
    S3 (accept): ∅
    ");
}

#[test]
fn union_adds_branch_and_join() {
    let mut ctx = BuildCtx::new();
    let a = ctx.char_fragment('a');
    let b = ctx.char_fragment('b');

    let frag = ctx.union(a, b);

    assert_eq!(frag, Fragment::new(4, 5));
    assert_eq!(accepting_count(&ctx), 1);
    insta::assert_snapshot!(finish_dump(ctx, frag), @r"
    S0: a → S1
    S1: ε → S5
    S2: b → S3
    S3: ε → S5
    S4 (start): ε → S0, S2
    S5 (accept): ∅
    ");
}

#[test]
fn star_loops_back_and_skips() {
    let mut ctx = BuildCtx::new();
    let a = ctx.char_fragment('a');

    let frag = ctx.star(a);

    assert_eq!(frag, Fragment::new(2, 3));
    assert_eq!(ctx.state(frag.start).targets(Symbol::Epsilon), &[a.start, frag.end]);
    assert_eq!(ctx.state(a.end).targets(Symbol::Epsilon), &[a.start, frag.end]);
    assert_eq!(accepting_count(&ctx), 1);
    insta::assert_snapshot!(finish_dump(ctx, frag), @r"
    S0: a → S1
    S1: ε → S0, S3
    S2 (start): ε → S0, S3
    S3 (accept): ∅
    ");
}

#[test]
fn nested_star() {
    let mut ctx = BuildCtx::new();
    let a = ctx.char_fragment('a');
    let inner = ctx.star(a);

    let frag = ctx.star(inner);

    assert_eq!(frag, Fragment::new(4, 5));
    assert_eq!(accepting_count(&ctx), 1);
    insta::assert_snapshot!(finish_dump(ctx, frag), @r"
    S0: a → S1
    S1: ε → S0, S3
    S2: ε → S0, S3
    S3: ε → S2, S5
    S4 (start): ε → S2, S5
    S5 (accept): ∅
    ");
}

#[test]
fn events_recorded_in_order() {
    let mut ctx = BuildCtx::with_events();
    let postfix = to_postfix(&add_explicit_concat("a*b"));

    let frag = ctx.assemble(&postfix).unwrap();

    assert_eq!(frag, Fragment::new(2, 5));
    assert_eq!(
        ctx.events(),
        &[
            BuildEvent::Char {
                symbol: 'a',
                start: 0,
                end: 1
            },
            BuildEvent::Star { start: 2, end: 3 },
            BuildEvent::Char {
                symbol: 'b',
                start: 4,
                end: 5
            },
            BuildEvent::Concat { from: 3, to: 4 },
        ]
    );
}

#[test]
fn events_off_by_default() {
    let mut ctx = BuildCtx::new();
    let postfix = to_postfix(&add_explicit_concat("ab"));

    ctx.assemble(&postfix).unwrap();

    assert!(ctx.events().is_empty());
}

#[test]
fn event_display() {
    let rendered: Vec<String> = [
        BuildEvent::Char {
            symbol: 'a',
            start: 0,
            end: 1,
        },
        BuildEvent::Concat { from: 1, to: 2 },
        BuildEvent::Union { start: 4, end: 5 },
        BuildEvent::Star { start: 2, end: 3 },
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(
        rendered,
        vec![
            "char 'a': S0 → S1",
            "concat: S1 → S2",
            "union: S4 (start), S5 (accept)",
            "star: S2 (start), S3 (accept)",
        ]
    );
}

#[test]
fn assemble_keeps_single_accepting_state() {
    for source in ["a", "ab", "a|b", "a*", "(a|b)*c", "((ab)*|c)*d"] {
        let mut ctx = BuildCtx::new();
        let postfix = to_postfix(&add_explicit_concat(source));

        let frag = ctx.assemble(&postfix).unwrap();

        assert_eq!(accepting_count(&ctx), 1, "{source}");
        assert!(ctx.state(frag.end).is_accepting(), "{source}");
    }
}

#[test]
fn assemble_multibyte_and_control_literals() {
    let mut ctx = BuildCtx::new();
    let postfix = to_postfix(&add_explicit_concat("é\n😀"));

    let frag = ctx.assemble(&postfix).unwrap();
    let (nfa, _) = ctx.finish(frag);

    let alphabet: Vec<char> = nfa.alphabet().into_iter().collect();
    assert_eq!(alphabet, vec!['\n', 'é', '😀']);
}

fn assemble_err(source: &str) -> (InvalidReason, TextRange) {
    let mut ctx = BuildCtx::new();
    let postfix = to_postfix(&add_explicit_concat(source));
    let err = ctx.assemble(&postfix).unwrap_err();
    (err.reason(), err.span())
}

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn empty_expression() {
    assert_eq!(assemble_err(""), (InvalidReason::Empty, range(0, 0)));
    assert_eq!(assemble_err("()"), (InvalidReason::Empty, range(0, 2)));
}

#[test]
fn star_without_operand() {
    assert_eq!(
        assemble_err("*a"),
        (InvalidReason::MissingOperand(TokenKind::Star), range(0, 1))
    );
}

#[test]
fn union_without_operand() {
    assert_eq!(
        assemble_err("a|"),
        (InvalidReason::MissingOperand(TokenKind::Union), range(1, 2))
    );
    assert_eq!(
        assemble_err("|"),
        (InvalidReason::MissingOperand(TokenKind::Union), range(0, 1))
    );
    assert_eq!(
        assemble_err("a||b"),
        (InvalidReason::MissingOperand(TokenKind::Union), range(1, 2))
    );
}

#[test]
fn unclosed_paren() {
    assert_eq!(assemble_err("(a"), (InvalidReason::UnclosedParen, range(0, 1)));
}

#[test]
fn unmatched_paren() {
    assert_eq!(assemble_err("a)"), (InvalidReason::UnmatchedParen, range(1, 2)));
}

#[test]
fn leftover_fragments() {
    let mut ctx = BuildCtx::new();
    let tokens = lex("ab");

    let err = ctx.assemble(&tokens).unwrap_err();

    assert_eq!(err.reason(), InvalidReason::Unconnected(2));
    assert_eq!(err.span(), range(0, 2));
}

//! End-to-end behavior tests over the public `execute` API.
//!
//! Programs run whole; the joined output text and the absence of a boundary
//! error are the observable contract.

use bhasha_lang::execute;

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn out(src: &str) -> String {
    let result = execute(src);
    assert!(result.error.is_none(), "unexpected error: {:?}", result.error);
    result.output
}

// ─── Printing ────────────────────────────────────────────────────────────────

#[test]
fn print_number() {
    assert_eq!(out("print(5)"), "5");
}

#[test]
fn print_string_literal() {
    assert_eq!(out("print('hello')"), "hello");
    assert_eq!(out("print(\"hello\")"), "hello");
}

#[test]
fn print_empty_argument_prints_empty_line() {
    assert_eq!(out("print('a')\nprint()\nprint('b')"), "a\n\nb");
}

#[test]
fn print_without_close_paren_is_noop() {
    assert_eq!(out("print('lost"), "");
}

#[test]
fn print_takes_last_close_paren() {
    assert_eq!(out("print('a) b')"), "a) b");
}

#[test]
fn unmatched_expression_prints_itself() {
    assert_eq!(out("print(hello world)"), "hello world");
}

#[test]
fn no_print_statements_no_output() {
    assert_eq!(out("a = 5\nb = a"), "");
}

// ─── Assignment ──────────────────────────────────────────────────────────────

#[test]
fn assignment_binds_and_overwrites() {
    assert_eq!(out("x = 1\nx = 2\nprint(x)"), "2");
}

#[test]
fn swap_via_multi_target_assignment() {
    let src = "a = 5\nb = 10\na, b = b, a\nprint(a)\nprint(b)";
    assert_eq!(out(src), "10\n5");
}

#[test]
fn multi_target_binds_positionally() {
    assert_eq!(out("a, b, c = 1, 2, 3\nprint(b)"), "2");
}

#[test]
fn multi_target_missing_sources_default_to_zero() {
    assert_eq!(out("a, b = 1\nprint(b)"), "0");
}

#[test]
fn assignment_right_side_is_an_expression() {
    assert_eq!(out("x = 2 + 3\nprint(x)"), "5");
}

// ─── Expressions ─────────────────────────────────────────────────────────────

#[test]
fn unbound_variable_reads_zero() {
    assert_eq!(out("print(undefined_var)"), "0");
}

#[test]
fn division_by_zero_yields_zero() {
    assert_eq!(out("x = 5 / 0\nprint(x)"), "0");
}

#[test]
fn division_produces_fractions() {
    assert_eq!(out("print(5 / 2)"), "2.5");
}

#[test]
fn chained_subtraction_groups_right() {
    assert_eq!(out("print(10 - 3 - 2)"), "9");
}

#[test]
fn chained_division_groups_right() {
    assert_eq!(out("print(100 / 10 / 2)"), "20");
}

#[test]
fn mixed_operator_classes_compute_conventionally() {
    assert_eq!(out("print(2 * 3 + 4)"), "10");
    assert_eq!(out("print(2 + 3 * 4)"), "14");
}

#[test]
fn negative_literals() {
    assert_eq!(out("x = -5\nprint(x + 2)"), "-3");
}

#[test]
fn strings_coerce_to_zero_in_arithmetic() {
    assert_eq!(out("print('a' + 'b')"), "0");
}

// ─── Conditionals ────────────────────────────────────────────────────────────

#[test]
fn if_true_runs_block() {
    let src = "x = 12\nif x > 10:\n    print('bada hai')";
    assert_eq!(out(src), "bada hai");
}

#[test]
fn if_false_skips_block() {
    let src = "x = 5\nif x > 10:\n    print('bada hai')\nprint('done')";
    assert_eq!(out(src), "done");
}

#[test]
fn equality_condition_is_loose() {
    assert_eq!(out("x = '5'\nif x == 5:\n    print('loose')"), "loose");
}

#[test]
fn inequality_condition() {
    assert_eq!(out("if 1 != 2:\n    print('differ')"), "differ");
}

#[test]
fn bare_condition_uses_truthiness() {
    assert_eq!(out("x = 3\nif x:\n    print('yes')"), "yes");
    assert_eq!(out("x = 0\nif x:\n    print('yes')"), "");
    assert_eq!(out("x = ''\nif x:\n    print('yes')"), "");
}

#[test]
fn nested_if_blocks() {
    let src = "x = 5\nif x > 1:\n    if x > 2:\n        print('deep')";
    assert_eq!(out(src), "deep");
}

#[test]
fn tab_indented_block() {
    assert_eq!(out("x = 1\nif x:\n\tprint('tab')"), "tab");
}

#[test]
fn gte_header_classifies_as_assignment() {
    // fixed-order classification: the `=` inside `>=` makes the line an
    // assignment, so no block opens and its body is skipped as over-indented
    let src = "x = 5\nif x >= 1:\n    print('never')";
    assert_eq!(out(src), "");
}

// ─── While loops ─────────────────────────────────────────────────────────────

#[test]
fn while_counts_up() {
    let src = "ganana = 0\nwhile ganana < 3:\n    print(ganana)\n    ganana = ganana + 1";
    assert_eq!(out(src), "0\n1\n2");
}

#[test]
fn while_false_from_start_runs_nothing() {
    assert_eq!(out("while 0:\n    print('never')"), "");
}

#[test]
fn while_with_nested_if() {
    let src = "n = 0\nwhile n < 5:\n    if n == 3:\n        print(n)\n    n = n + 1";
    assert_eq!(out(src), "3");
}

#[test]
fn runaway_loop_stops_at_cap_without_error() {
    let src = "ganana = 0\nwhile 1:\n    ganana = ganana + 1\nprint(ganana)";
    assert_eq!(out(src), "1000");
}

#[test]
fn runaway_loop_body_runs_exactly_cap_times() {
    let result = execute("x = 1\nwhile x > 0:\n    print('tick')");
    assert!(result.error.is_none());
    assert_eq!(result.output.lines().count(), 1000);
}

// ─── Line handling ───────────────────────────────────────────────────────────

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_eq!(out("# setup\n\na = 1\nprint(a)"), "1");
}

#[test]
fn comment_inside_block_does_not_end_it() {
    let src = "x = 1\nif x:\n    print('a')\n# note\n    print('b')";
    assert_eq!(out(src), "a\nb");
}

#[test]
fn over_indented_line_is_dropped() {
    let src = "a = 1\n    b = 2\nprint(b)";
    assert_eq!(out(src), "0");
}

#[test]
fn unrecognized_statement_is_a_noop() {
    assert_eq!(out("launch the rocket\nprint('ok')"), "ok");
}

#[test]
fn empty_program() {
    assert_eq!(out(""), "");
}

// ─── Run boundary ────────────────────────────────────────────────────────────

#[test]
fn identical_inputs_identical_results() {
    let src = "ganana = 0\nwhile ganana < 3:\n    print(ganana)\n    ganana = ganana + 1";
    assert_eq!(execute(src), execute(src));
}

#[test]
fn runs_do_not_share_state() {
    assert_eq!(out("x = 99"), "");
    // a later run sees a fresh environment, not the previous binding
    assert_eq!(out("print(x)"), "0");
}

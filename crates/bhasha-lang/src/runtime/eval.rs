//! Expression and condition evaluation over raw statement text.
//!
//! There is no token stream: each expression is classified by shape in a
//! fixed priority order, and binary operators split the text at their first
//! occurrence. Which check runs first is part of the language contract.
//! Chained same-class operators group to the right (`10 - 3 - 2` is 9, not
//! 5); that grouping must not be "corrected" to left associativity.

use crate::runtime::env::Env;
use crate::runtime::value::Value;

// ─── Expressions ─────────────────────────────────────────────────────────────

enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Evaluate one expression to a value. Never fails: unbound names read as 0
/// and text that matches no shape evaluates to itself.
pub fn eval_expr(env: &Env, expr: &str) -> Value {
    let expr = expr.trim();

    if let Some(inner) = string_literal(expr) {
        return Value::Str(inner.to_string());
    }
    if is_numeric_literal(expr) {
        return parse_number(expr);
    }
    if is_identifier(expr) {
        return env.get(expr).unwrap_or(Value::Int(0));
    }
    if let Some((op, at)) = split_binary(expr) {
        let lhs = eval_expr(env, &expr[..at]);
        let rhs = eval_expr(env, &expr[at + 1..]);
        return apply_binop(op, lhs, rhs);
    }

    Value::Str(expr.to_string())
}

/// Inner text of a `'...'` or `"..."` literal. No escape processing.
fn string_literal(expr: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if expr.len() >= 2 && expr.starts_with(quote) && expr.ends_with(quote) {
            return Some(&expr[1..expr.len() - 1]);
        }
    }
    None
}

/// Optional leading `-`, digits, optional `.` with at least one digit after.
fn is_numeric_literal(expr: &str) -> bool {
    let digits = expr.strip_prefix('-').unwrap_or(expr).as_bytes();
    let (int_part, frac_part) = match digits.iter().position(|&b| b == b'.') {
        Some(i) => (&digits[..i], Some(&digits[i + 1..])),
        None => (digits, None),
    };
    if int_part.is_empty() || !int_part.iter().all(u8::is_ascii_digit) {
        return false;
    }
    match frac_part {
        Some(frac) => !frac.is_empty() && frac.iter().all(u8::is_ascii_digit),
        None => true,
    }
}

fn parse_number(expr: &str) -> Value {
    if expr.contains('.') {
        Value::Float(expr.parse().unwrap_or(0.0))
    } else {
        match expr.parse::<i64>() {
            Ok(n) => Value::Int(n),
            // magnitude beyond i64 widens instead of failing
            Err(_) => Value::Float(expr.parse().unwrap_or(0.0)),
        }
    }
}

fn is_identifier(expr: &str) -> bool {
    let bytes = expr.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return false,
    }
    bytes[1..].iter().all(|b| b.is_ascii_alphanumeric() || *b == b'_')
}

/// First-match, first-occurrence operator detection. `+` wins over `-`, both
/// win over `*` and `/`; a leading `-` is a sign, not a split point.
fn split_binary(expr: &str) -> Option<(BinOp, usize)> {
    if let Some(i) = expr.find('+') {
        return Some((BinOp::Add, i));
    }
    if !expr.starts_with('-') {
        if let Some(i) = expr.find('-') {
            return Some((BinOp::Sub, i));
        }
    }
    if let Some(i) = expr.find('*') {
        return Some((BinOp::Mul, i));
    }
    expr.find('/').map(|i| (BinOp::Div, i))
}

/// Integer pairs stay integral for `+ - *` (widening to float on overflow);
/// division always produces a float, and a zero divisor yields 0 instead of
/// an error.
fn apply_binop(op: BinOp, lhs: Value, rhs: Value) -> Value {
    use Value::{Float, Int};

    let (l, r) = (lhs.as_number(), rhs.as_number());
    match op {
        BinOp::Add => match (&lhs, &rhs) {
            (Int(a), Int(b)) => a.checked_add(*b).map(Int).unwrap_or(Float(l + r)),
            _ => Float(l + r),
        },
        BinOp::Sub => match (&lhs, &rhs) {
            (Int(a), Int(b)) => a.checked_sub(*b).map(Int).unwrap_or(Float(l - r)),
            _ => Float(l - r),
        },
        BinOp::Mul => match (&lhs, &rhs) {
            (Int(a), Int(b)) => a.checked_mul(*b).map(Int).unwrap_or(Float(l * r)),
            _ => Float(l * r),
        },
        BinOp::Div => {
            if r == 0.0 { Float(0.0) } else { Float(l / r) }
        }
    }
}

// ─── Conditions ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum CmpOp {
    Ge,
    Le,
    Gt,
    Lt,
    Eq,
    Ne,
}

/// Comparators in match priority order. Two-character operators come before
/// their single-character prefixes so `a <= b` never splits on `<`.
const COMPARATORS: [(&str, CmpOp); 6] = [
    (">=", CmpOp::Ge),
    ("<=", CmpOp::Le),
    (">", CmpOp::Gt),
    ("<", CmpOp::Lt),
    ("==", CmpOp::Eq),
    ("!=", CmpOp::Ne),
];

/// Evaluate a condition to a boolean. With no comparator present the whole
/// text is evaluated as an expression and read by truthiness.
pub fn eval_cond(env: &Env, cond: &str) -> bool {
    let cond = cond.trim();
    for (symbol, op) in COMPARATORS {
        if let Some(i) = cond.find(symbol) {
            let lhs = eval_expr(env, &cond[..i]);
            let rhs = eval_expr(env, &cond[i + symbol.len()..]);
            return compare(op, &lhs, &rhs);
        }
    }
    eval_expr(env, cond).truthy()
}

fn compare(op: CmpOp, lhs: &Value, rhs: &Value) -> bool {
    match op {
        CmpOp::Ge => lhs.loose_number() >= rhs.loose_number(),
        CmpOp::Le => lhs.loose_number() <= rhs.loose_number(),
        CmpOp::Gt => lhs.loose_number() > rhs.loose_number(),
        CmpOp::Lt => lhs.loose_number() < rhs.loose_number(),
        CmpOp::Eq => lhs.loose_eq(rhs),
        CmpOp::Ne => !lhs.loose_eq(rhs),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

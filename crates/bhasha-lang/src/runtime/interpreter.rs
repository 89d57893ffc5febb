//! Statement dispatch. Walks cursor ranges over the shared line array,
//! classifying each line by shape in a fixed priority order and recursing
//! into indented blocks. Unrecognized and over-indented lines are dropped
//! silently; the leniency is contractual and must not be tightened.

use tracing::debug;

use crate::runtime::env::Env;
use crate::runtime::eval::{eval_cond, eval_expr};
use crate::runtime::value::Value;
use crate::scan::{block_end, indent_of, is_insignificant};

/// Upper bound on while-loop body executions. A loop that reaches the cap
/// stops silently; runaway conditions must not hang a run.
const MAX_LOOP_ITERATIONS: usize = 1000;

pub struct Interpreter<'a> {
    lines: Vec<&'a str>,
    env: Env,
}

impl<'a> Interpreter<'a> {
    pub fn new(source: &'a str, env: Env) -> Self {
        Self { lines: source.split('\n').collect(), env }
    }

    /// Dispatch the whole program at top level.
    pub fn run(&mut self) {
        self.exec_range(0, self.lines.len(), 0);
    }

    /// Execute the lines in `[start, end)` sitting at exactly `required`
    /// indent. Stops early on the first dedented significant line.
    fn exec_range(&mut self, start: usize, end: usize, required: usize) {
        let mut i = start;
        while i < end {
            let line = self.lines[i];
            if is_insignificant(line) {
                i += 1;
                continue;
            }

            let indent = indent_of(line);
            if indent < required {
                break; // dedent: the enclosing block is done
            }
            if indent > required {
                i += 1; // stray over-indented line: dropped, not an error
                continue;
            }

            let stmt = line.trim();
            if is_assignment(stmt) {
                self.exec_assignment(stmt);
            } else if stmt.starts_with("print(") {
                self.exec_print(stmt);
            } else if let Some(header) = stmt.strip_prefix("if ") {
                i = self.exec_if(header, i, indent);
                continue;
            } else if let Some(header) = stmt.strip_prefix("while ") {
                i = self.exec_while(header, i, indent);
                continue;
            }
            // anything else: deliberate no-op passthrough

            i += 1;
        }
    }

    /// Returns the cursor position past the block, taken or not.
    fn exec_if(&mut self, header: &str, at: usize, indent: usize) -> usize {
        let block = block_end(&self.lines, at, indent);
        if eval_cond(&self.env, condition_text(header)) {
            self.exec_block(at + 1, block);
        }
        block
    }

    fn exec_while(&mut self, header: &str, at: usize, indent: usize) -> usize {
        let block = block_end(&self.lines, at, indent);
        let cond = condition_text(header);

        let mut iterations = 0;
        while iterations < MAX_LOOP_ITERATIONS && eval_cond(&self.env, cond) {
            self.exec_block(at + 1, block);
            iterations += 1;
        }
        if iterations == MAX_LOOP_ITERATIONS {
            debug!(line = at + 1, cap = MAX_LOOP_ITERATIONS, "while loop stopped at iteration cap");
        }
        block
    }

    /// A block body runs at the indent of its first significant line, one
    /// nesting level deeper than its header, whatever the indent width.
    /// A block with no significant lines executes nothing.
    fn exec_block(&mut self, start: usize, end: usize) {
        let base = self.lines[start..end]
            .iter()
            .copied()
            .find(|line| !is_insignificant(line))
            .map(indent_of);
        if let Some(required) = base {
            self.exec_range(start, end, required);
        }
    }

    fn exec_assignment(&mut self, stmt: &str) {
        let Some((left, right)) = stmt.split_once('=') else { return };
        if left.contains(',') {
            // multi-target: evaluate every source before binding anything,
            // so `a, b = b, a` exchanges cleanly
            let values: Vec<Value> =
                right.split(',').map(|src| eval_expr(&self.env, src)).collect();
            for (i, target) in left.split(',').enumerate() {
                let val = values.get(i).cloned().unwrap_or(Value::Int(0));
                self.env.set(target.trim(), val);
            }
        } else {
            let val = eval_expr(&self.env, right);
            self.env.set(left.trim(), val);
        }
    }

    /// Argument text runs from `print(` to the last `)` on the line; with no
    /// closing paren the statement is a no-op. An empty argument prints an
    /// empty line.
    fn exec_print(&mut self, stmt: &str) {
        let rest = &stmt["print(".len()..];
        let Some(close) = rest.rfind(')') else { return };
        let content = rest[..close].trim();
        if content.is_empty() {
            self.env.print_line(String::new());
        } else {
            let val = eval_expr(&self.env, content);
            self.env.print_line(val.to_string());
        }
    }
}

/// Assignment wins classification for any line with an `=` and no `==`/`!=`
/// anywhere; comparison-bearing lines are never assignments.
fn is_assignment(stmt: &str) -> bool {
    stmt.contains('=') && !stmt.contains("==") && !stmt.contains("!=")
}

/// Condition text of an `if`/`while` header: everything up to the trailing
/// colon. The colon itself is optional.
fn condition_text(header: &str) -> &str {
    let header = header.trim();
    header.strip_suffix(':').unwrap_or(header).trim()
}

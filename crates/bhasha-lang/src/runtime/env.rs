//! Per-run interpreter state: variable bindings and the captured output.
//! Built fresh for every run and dropped with it; nothing persists.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runtime::value::Value;

/// Shared handle to the output buffer. The run boundary keeps a clone so
/// lines printed before an aborted run survive the unwind.
pub type OutputBuffer = Rc<RefCell<Vec<String>>>;

pub struct Env {
    vars: HashMap<String, Value>,
    output: OutputBuffer,
}

impl Env {
    pub fn new(output: OutputBuffer) -> Self {
        Self { vars: HashMap::new(), output }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.vars.get(name).cloned()
    }

    /// Create-or-overwrite; assignment is the only mutation path.
    pub fn set(&mut self, name: &str, val: Value) {
        self.vars.insert(name.to_string(), val);
    }

    pub fn print_line(&self, line: String) {
        self.output.borrow_mut().push(line);
    }
}

//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use rpal_ir::StringInterner;

use super::Interpreter;
use crate::print_handler::{silent_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Without a print handler the interpreter discards printed text; the
/// evaluation result still carries it.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
    max_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            print_handler: None,
            max_depth: None,
        }
    }

    /// Set the sink every `Print` is forwarded to.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit the number of live activations. Tail calls do not count
    /// against the limit.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            print_handler: self.print_handler.unwrap_or_else(silent_handler),
            max_depth: self.max_depth,
        }
    }
}

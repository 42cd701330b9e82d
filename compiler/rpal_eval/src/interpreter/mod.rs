//! Machine driver: checks a program is ready and runs it.

mod builder;

pub use builder::InterpreterBuilder;

use rpal_ir::{Program, StringInterner};
use rpal_values::{malformed_program, precheck_error, EvalError, Value};

use crate::machine::Machine;
use crate::print_handler::SharedPrintHandler;

/// Result of a completed evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Text recorded by the most recent `Print`; `None` if nothing printed.
    pub output: Option<String>,
    /// Value left on top of the stack when the root activation finished.
    pub value: Option<Value>,
}

/// Evaluates lowered RPAL programs.
///
/// An interpreter holds only configuration, so one instance can evaluate
/// any number of programs. Each evaluation starts from a fresh root
/// environment and an empty value stack.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) max_depth: Option<usize>,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with the default configuration: silent print handler
    /// and no depth limit.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Run `program` to completion.
    ///
    /// Fails with a precheck error if the program was not standardized, and
    /// with a malformed-program error if it was lowered with a different
    /// interner than this interpreter holds. Nothing runs in either case.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&self, program: &Program) -> Result<Evaluation, EvalError> {
        if !program.is_standardized() {
            return Err(precheck_error());
        }
        if program.interner_id() != self.interner.id() {
            return Err(malformed_program(
                "program was lowered with a different interner",
            ));
        }
        let outcome =
            Machine::new(self.interner, &self.print_handler, self.max_depth).run(program.root())?;
        Ok(Evaluation {
            output: outcome.output,
            value: outcome.value,
        })
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

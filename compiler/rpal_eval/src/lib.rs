//! RPAL Eval - CSE machine evaluator for standardized RPAL programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Interpreter`: checks the program and drives the machine
//! - `Machine`: the control / stack / environment loop, one frame per activation
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `builtins`: the built-in function library, applied by the machine
//! - `PrintHandlerImpl`: where `Print` output goes
//!
//! Values, environments and errors come from `rpal_values` and are
//! re-exported here.

mod builtins;
pub mod interpreter;
mod machine;
mod operators;
mod print_handler;
mod unary_operators;

use std::sync::Once;

pub use interpreter::{Evaluation, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use unary_operators::evaluate_unary;

pub use rpal_values::{EvalError, EvalErrorKind, EvalResult, Value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing if `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// Example: `RUST_LOG=rpal_eval=trace` logs every dispatched token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

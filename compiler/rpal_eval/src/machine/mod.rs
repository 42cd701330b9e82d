//! The CSE machine: control, stack, environment.
//!
//! Each activation owns a control stack seeded with a copy of its unit's
//! body; tokens are popped from the end. One value stack is shared by all
//! activations.
//!
//! Applications do not recurse on the host stack. Applying a closure pushes
//! a [`Frame`]; a frame is dropped once its control empties and the caller
//! resumes. A frame whose control is already empty when it applies a
//! closure is dropped before the callee is pushed, so tail calls run in
//! constant frame depth.

use rpal_ir::{render_tokens, Builtin, Line, Name, SharedUnit, StringInterner, Token, TokenKind};
use rpal_values::{
    malformed_program, missing_operand, stack_overflow, type_error, undeclared_identifier,
    unknown_operator, Closure, Environment, EvalError, Value,
};

use crate::builtins::{evaluate_builtin, print_text};
use crate::operators::evaluate_binary;
use crate::print_handler::PrintHandlerImpl;
use crate::unary_operators::evaluate_unary;

/// One activation: the environment it runs under and its pending tokens.
struct Frame {
    env: Environment,
    control: Vec<Token>,
}

/// What a finished run leaves behind.
pub(crate) struct Outcome {
    /// Text of the most recent `Print`.
    pub output: Option<String>,
    /// Top of the value stack after the root activation.
    pub value: Option<Value>,
}

pub(crate) struct Machine<'a> {
    interner: &'a StringInterner,
    print_handler: &'a PrintHandlerImpl,
    max_depth: Option<usize>,
    frames: Vec<Frame>,
    stack: Vec<Value>,
    output: Option<String>,
}

impl<'a> Machine<'a> {
    pub(crate) fn new(
        interner: &'a StringInterner,
        print_handler: &'a PrintHandlerImpl,
        max_depth: Option<usize>,
    ) -> Self {
        Machine {
            interner,
            print_handler,
            max_depth,
            frames: Vec::new(),
            stack: Vec::new(),
            output: None,
        }
    }

    /// Activate `root` under a fresh root environment and run to completion.
    pub(crate) fn run(mut self, root: &SharedUnit) -> Result<Outcome, EvalError> {
        self.push_frame(Environment::root(), root)?;

        loop {
            let Some(frame) = self.frames.last_mut() else {
                break;
            };
            let Some(token) = frame.control.pop() else {
                self.frames.pop();
                tracing::debug!(depth = self.frames.len(), "activation finished");
                continue;
            };
            tracing::trace!(
                line = token.line,
                token = %render_tokens(std::slice::from_ref(&token), self.interner),
                stack = self.stack.len(),
                "dispatch"
            );
            let line = token.line;
            self.step(token).map_err(|err| err.with_line(line))?;
        }

        Ok(Outcome {
            output: self.output,
            value: self.stack.pop(),
        })
    }

    fn step(&mut self, token: Token) -> Result<(), EvalError> {
        match token.kind {
            TokenKind::Identifier(name) => {
                let value = self.lookup(name)?;
                self.stack.push(value);
            }
            TokenKind::Literal(literal) => self.stack.push(Value::from(&literal)),
            TokenKind::Lambda(unit) => {
                let env = self.current_frame()?.env.clone();
                self.stack.push(Value::closure(unit, env));
            }
            TokenKind::Binary(op) => {
                let left = self.pop()?;
                let right = self.pop()?;
                self.stack.push(evaluate_binary(left, right, op)?);
            }
            TokenKind::Unary(op) => {
                let operand = self.pop()?;
                self.stack.push(evaluate_unary(&operand, op)?);
            }
            TokenKind::Tuple(arity) => {
                let at = self.stack.len().checked_sub(arity).ok_or_else(|| {
                    malformed_program("not enough values to form a tuple")
                })?;
                // The first value popped becomes element 1.
                let mut items = self.stack.split_off(at);
                items.reverse();
                self.stack.push(Value::tuple(items));
            }
            TokenKind::Conditional(branches) => {
                let arm = match self.pop()? {
                    Value::Bool(true) => &branches.then,
                    Value::Bool(false) => &branches.otherwise,
                    other => return Err(type_error("a truthvalue", &other.describe())),
                };
                self.current_frame()?.control.extend(arm.iter().cloned());
            }
            TokenKind::Apply => self.apply(token.line)?,
            TokenKind::FixedPoint => self.stack.push(Value::FixedPoint),
        }
        Ok(())
    }

    /// Bound value, else the built-in of that name.
    fn lookup(&mut self, name: Name) -> Result<Value, EvalError> {
        if let Some(value) = self.current_frame()?.env.lookup(name) {
            return Ok(value);
        }
        let text = self.interner.lookup(name);
        Builtin::from_name(text)
            .map(Value::Builtin)
            .ok_or_else(|| undeclared_identifier(text))
    }

    fn apply(&mut self, line: Line) -> Result<(), EvalError> {
        let rator = self.pop()?;
        let rand = self.pop()?;
        match rator {
            Value::Closure(closure) => self.call(&closure, rand),
            Value::FixedPoint => match rand {
                Value::Closure(closure) => {
                    self.stack.push(Value::RecursiveClosure(closure));
                    Ok(())
                }
                other => Err(type_error("a lambda closure", &other.describe())),
            },
            Value::RecursiveClosure(closure) => {
                // Unroll one step: apply the inner closure to the eta closure,
                // then apply the result to the operand.
                self.stack.push(rand);
                self.stack.push(Value::RecursiveClosure(closure.clone()));
                self.stack.push(Value::Closure(closure));
                let control = &mut self.current_frame()?.control;
                control.push(Token::new(TokenKind::Apply, line));
                control.push(Token::new(TokenKind::Apply, line));
                Ok(())
            }
            Value::Tuple(tuple) => match rand {
                Value::Int(index) => {
                    self.stack.push(tuple.select(index)?);
                    Ok(())
                }
                other => Err(type_error("an integer tuple index", &other.describe())),
            },
            Value::Builtin(builtin) => self.apply_builtin(builtin, rand),
            other => Err(unknown_operator(&other.describe())
                .with_note(format!("{} values cannot be applied", other.type_name()))),
        }
    }

    fn apply_builtin(&mut self, builtin: Builtin, rand: Value) -> Result<(), EvalError> {
        if builtin == Builtin::Print {
            let text = print_text(&rand);
            tracing::debug!(text = %text, "print");
            self.print_handler.print(&text);
            self.output = Some(text);
        }
        let second = if builtin.arity() == 2 {
            Some(self.take_second_operand(builtin)?)
        } else {
            None
        };
        let result = evaluate_builtin(builtin, &rand, second.as_ref())?;
        self.stack.push(result);
        Ok(())
    }

    /// A curried two-operand built-in such as `Conc a b` arrives as two
    /// applications: consume the second one and pop its operand now.
    fn take_second_operand(&mut self, builtin: Builtin) -> Result<Value, EvalError> {
        let control = &mut self.current_frame()?.control;
        if !matches!(control.last(), Some(token) if matches!(token.kind, TokenKind::Apply)) {
            return Err(missing_operand(builtin.name()));
        }
        control.pop();
        self.pop()
    }

    /// Activate `closure` on `rand`.
    fn call(&mut self, closure: &Closure, rand: Value) -> Result<(), EvalError> {
        let mut scope = closure.env.extend();
        match closure.unit.params() {
            [name] => scope.bind(*name, rand),
            names => match &rand {
                Value::Tuple(tuple) => scope.bind_positional(names, tuple)?,
                other => {
                    return Err(type_error(
                        &format!("a tuple of {} elements", names.len()),
                        &other.describe(),
                    ))
                }
            },
        }

        // Tail position: nothing left for the caller to do.
        if self
            .frames
            .last()
            .is_some_and(|frame| frame.control.is_empty())
        {
            self.frames.pop();
        }
        self.push_frame(scope.seal(), &closure.unit)
    }

    fn push_frame(&mut self, env: Environment, unit: &SharedUnit) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(stack_overflow(max));
            }
        }
        self.frames.push(Frame {
            env,
            control: unit.body().to_vec(),
        });
        tracing::debug!(
            unit = unit.index(),
            depth = self.frames.len(),
            "activation"
        );
        Ok(())
    }

    fn current_frame(&mut self) -> Result<&mut Frame, EvalError> {
        self.frames
            .last_mut()
            .ok_or_else(|| malformed_program("no active control structure"))
    }

    fn pop(&mut self) -> Result<Value, EvalError> {
        self.stack
            .pop()
            .ok_or_else(|| malformed_program("value stack underflow"))
    }
}

#[cfg(test)]
mod tests;

//! Runtime values for the CSE machine.
//!
//! Scalars are immutable. A [`Tuple`] is the one mutable value: `aug`
//! appends to it in place, and every alias observes the append.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rpal_ir::{Builtin, Literal, SharedUnit};
use rpal_stack::ensure_sufficient_stack;

use crate::{index_out_of_bounds, Environment, EvalError};

/// A value on the machine's value stack.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    Dummy,
    /// Ordered, 1-indexed, growable. The empty tuple is `nil`.
    Tuple(Tuple),
    /// A lambda paired with the environment it was evaluated in.
    Closure(Closure),
    /// One step of fixed-point unrolling (the eta closure).
    RecursiveClosure(Closure),
    /// A recognized built-in name that is not shadowed by a binding.
    Builtin(Builtin),
    /// The `Y*` operator.
    FixedPoint,
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a tuple value owning `items`.
    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Tuple::new(items))
    }

    /// A fresh empty tuple.
    #[inline]
    pub fn nil() -> Self {
        Value::Tuple(Tuple::empty())
    }

    #[inline]
    pub fn closure(unit: SharedUnit, env: Environment) -> Self {
        Value::Closure(Closure::new(unit, env))
    }

    /// Human-readable kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::Bool(_) => "truthvalue",
            Value::Dummy => "dummy",
            Value::Tuple(_) => "tuple",
            Value::Closure(_) => "function",
            Value::RecursiveClosure(_) => "recursive function",
            Value::Builtin(_) => "built-in function",
            Value::FixedPoint => "fixed-point operator",
        }
    }

    /// Text form quoted the way error messages cite operands: strings in
    /// single quotes, everything else as displayed.
    pub fn describe(&self) -> String {
        match self {
            Value::Str(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Int(n) => Value::Int(*n),
            Literal::Str(s) => Value::Str(Rc::clone(s)),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Dummy => Value::Dummy,
        }
    }
}

/// A shared, growable tuple.
///
/// Cloning shares the storage; [`Tuple::augment`] is visible through every
/// clone.
#[derive(Clone, Default)]
pub struct Tuple(Rc<RefCell<Vec<Value>>>);

impl Tuple {
    pub fn new(items: Vec<Value>) -> Self {
        Tuple(Rc::new(RefCell::new(items)))
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of elements.
    #[inline]
    pub fn order(&self) -> usize {
        self.0.borrow().len()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// 1-based element selection.
    pub fn select(&self, index: i64) -> Result<Value, EvalError> {
        let items = self.0.borrow();
        usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| items.get(i))
            .cloned()
            .ok_or_else(|| index_out_of_bounds(index, items.len()))
    }

    /// Append `value` as the new last element, in place. A tuple operand is
    /// appended as one element, never flattened.
    pub fn augment(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Snapshot of the elements in order.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Whether both handles share the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Tuple) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn id(&self) -> *const RefCell<Vec<Value>> {
        Rc::as_ptr(&self.0)
    }
}

// Release nested tuples iteratively so dropping a deep list (`(1, (2, ...))`)
// does not recurse once per level.
impl Drop for Tuple {
    fn drop(&mut self) {
        let Some(cell) = Rc::get_mut(&mut self.0) else {
            return;
        };
        let mut pending = std::mem::take(cell.get_mut());
        while let Some(value) = pending.pop() {
            if let Value::Tuple(mut inner) = value {
                if let Some(cell) = Rc::get_mut(&mut inner.0) {
                    pending.append(cell.get_mut());
                }
            }
        }
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || ensure_sufficient_stack(|| *self.0.borrow() == *other.0.borrow())
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuple")?;
        write_tuple(f, self, &mut Vec::new())
    }
}

/// A control unit closed over the environment of its evaluation.
#[derive(Clone)]
pub struct Closure {
    pub unit: SharedUnit,
    pub env: Environment,
}

impl Closure {
    pub fn new(unit: SharedUnit, env: Environment) -> Self {
        Closure { unit, env }
    }

    /// Same unit captured in the same environment.
    pub fn ptr_eq(&self, other: &Closure) -> bool {
        Rc::ptr_eq(&self.unit, &other.unit) && self.env.ptr_eq(&other.env)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("unit", &self.unit.index())
            .field("env_depth", &self.env.depth())
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut Vec::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Dummy => write!(f, "Dummy"),
            Value::Tuple(t) => write!(f, "{t:?}"),
            Value::Closure(c) => write!(f, "{c:?}"),
            Value::RecursiveClosure(c) => write!(f, "Recursive{c:?}"),
            Value::Builtin(b) => write!(f, "Builtin({b})"),
            Value::FixedPoint => write!(f, "FixedPoint"),
        }
    }
}

/// `open` holds the tuples currently being written, so a tuple reached
/// through itself prints as `(...)`.
fn write_value(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    open: &mut Vec<*const RefCell<Vec<Value>>>,
) -> fmt::Result {
    match value {
        Value::Int(n) => write!(f, "{n}"),
        Value::Str(s) => write!(f, "{s}"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Dummy => write!(f, "dummy"),
        Value::Tuple(t) => write_tuple(f, t, open),
        Value::Closure(c) => write!(f, "[lambda closure: {}]", c.unit.index()),
        Value::RecursiveClosure(c) => write!(f, "[eta closure: {}]", c.unit.index()),
        Value::Builtin(b) => write!(f, "{b}"),
        Value::FixedPoint => write!(f, "Y*"),
    }
}

fn write_tuple(
    f: &mut fmt::Formatter<'_>,
    tuple: &Tuple,
    open: &mut Vec<*const RefCell<Vec<Value>>>,
) -> fmt::Result {
    if open.contains(&tuple.id()) {
        return write!(f, "(...)");
    }
    let items = tuple.0.borrow();
    if items.is_empty() {
        return write!(f, "nil");
    }
    open.push(tuple.id());
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        ensure_sufficient_stack(|| write_value(f, item, open))?;
    }
    open.pop();
    write!(f, ")")
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Dummy, Value::Dummy) | (Value::FixedPoint, Value::FixedPoint) => true,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            // Closures are equal by identity
            (Value::Closure(a), Value::Closure(b))
            | (Value::RecursiveClosure(a), Value::RecursiveClosure(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

//! Environments for lexical scoping in the machine.
//!
//! An [`Environment`] is an immutable, reference-counted scope with an
//! optional parent. Every activation gets a fresh child of its closure's
//! captured environment; closures created during the activation share it.
//!
//! Bindings go into a [`Scope`] first, which is sealed into an
//! `Environment` once the activation's parameters are installed. After
//! sealing nothing is ever rebound.

use std::fmt;
use std::rc::Rc;

use rpal_ir::Name;
use rustc_hash::FxHashMap;

use crate::{arity_mismatch, EvalError, Tuple, Value};

struct Frame {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Environment>,
}

// Unlink the parent chain iteratively so dropping a long chain of
// uniquely-owned scopes does not recurse.
impl Drop for Frame {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(Environment(rc)) = parent {
            match Rc::try_unwrap(rc) {
                Ok(mut frame) => parent = frame.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// A sealed scope and, through its parent, the whole chain to the root.
#[derive(Clone)]
pub struct Environment(Rc<Frame>);

impl Environment {
    /// The primitive scope: no bindings, no parent.
    pub fn root() -> Self {
        Environment(Rc::new(Frame {
            bindings: FxHashMap::default(),
            parent: None,
        }))
    }

    /// Open an unsealed child scope.
    pub fn extend(&self) -> Scope {
        Scope {
            bindings: FxHashMap::default(),
            parent: self.clone(),
        }
    }

    /// Look a name up, nearest binding first.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut frame = &self.0;
        loop {
            if let Some(value) = frame.bindings.get(&name) {
                return Some(value.clone());
            }
            frame = &frame.parent.as_ref()?.0;
        }
    }

    /// Number of scopes between this one and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = &self.0;
        while let Some(parent) = &frame.parent {
            depth += 1;
            frame = &parent.0;
        }
        depth
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.parent.is_none()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.0.bindings.len())
            .field("depth", &self.depth())
            .finish()
    }
}

/// A child scope still accepting bindings.
#[must_use = "a scope does nothing until it is sealed"]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Environment,
}

impl Scope {
    /// Bind one name.
    #[inline]
    pub fn bind(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Bind `names` to the elements of `tuple`, first name to element 1.
    ///
    /// The tuple's order must equal the number of names.
    pub fn bind_positional(&mut self, names: &[Name], tuple: &Tuple) -> Result<(), EvalError> {
        let items = tuple.to_vec();
        if items.len() != names.len() {
            return Err(arity_mismatch(names.len(), items.len()));
        }
        self.bindings.reserve(names.len());
        for (name, value) in names.iter().zip(items) {
            self.bindings.insert(*name, value);
        }
        Ok(())
    }

    /// Freeze the bindings into a shareable environment.
    pub fn seal(self) -> Environment {
        Environment(Rc::new(Frame {
            bindings: self.bindings,
            parent: Some(self.parent),
        }))
    }
}

#[cfg(test)]
mod tests;

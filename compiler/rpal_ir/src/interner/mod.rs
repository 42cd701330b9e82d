//! String interner for identifiers.
//!
//! Identifiers are interned once, during lowering, and compared by [`Name`]
//! afterwards. Interned strings are leaked so lookups can hand out `'static`
//! references.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{Builtin, Name};

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

static NEXT_INTERNER_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of one [`StringInterner`]. A [`Name`] is only meaningful to the
/// interner that produced it; programs record the id so a mismatch can be
/// caught before running.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InternerId(u32);

/// String interner with O(1) interning and lookup.
///
/// Uses a single `RwLock`: identifiers are interned while lowering a
/// program and only read afterwards.
pub struct StringInterner {
    id: InternerId,
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the empty string and all built-in
    /// function names pre-interned.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        let interner = StringInterner {
            id: InternerId(NEXT_INTERNER_ID.fetch_add(1, Ordering::Relaxed)),
            table: RwLock::new(InternTable {
                map,
                strings: vec![empty],
            }),
        };
        for builtin in Builtin::ALL {
            for alias in builtin.names() {
                interner.intern(alias);
            }
        }
        interner
    }

    #[inline]
    pub fn id(&self) -> InternerId {
        self.id
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        if let Some(&index) = self.table.read().map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` strings.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings (including the empty string).
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("id", &self.id)
            .field("len", &self.len())
            .finish()
    }
}

/// Interner shared between a lowering pass and the machine that runs its
/// output.
pub type SharedInterner = Arc<StringInterner>;

//! Liveness flag tying async continuations to the page that spawned them.

use std::{cell::Cell, rc::Rc};

/// Shared flag flipped to dead when the owning page unmounts.
///
/// Clones share one flag. Every continuation checks [`Liveness::is_alive`]
/// before touching page state.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    /// A live flag.
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Whether the owner is still mounted.
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Mark the owner as torn down. Idempotent.
    pub fn shutdown(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Liveness {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

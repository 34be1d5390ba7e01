//! Environments: symbol-to-value frames with parent chaining.
//!
//! A frame maps names to values and optionally links to a parent frame.
//! Lookup walks the chain outward and returns a *clone* of the binding,
//! never a live alias. `put` writes only into the local frame; `def`
//! walks to the root frame so definitions become globally visible.
//!
//! Frames are shared through `EnvRef`, a single-threaded reference-counted
//! handle: a lambda's call frame links to its caller's frame without
//! taking ownership of it. Evaluation is single-threaded throughout, so
//! `Rc<RefCell<..>>` is deliberate (not `Arc`).

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Shared handle to an environment frame.
///
/// `#[repr(transparent)]` keeps this the same layout as `Rc<RefCell<Env>>`;
/// the wrapper exists so frame allocation goes through one factory method.
#[repr(transparent)]
pub struct EnvRef(Rc<RefCell<Env>>);

impl EnvRef {
    /// Create a new shared handle owning the given frame.
    #[inline]
    pub fn new(env: Env) -> Self {
        EnvRef(Rc::new(RefCell::new(env)))
    }

    /// Borrow the frame immutably.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, Env> {
        self.0.borrow()
    }

    /// Borrow the frame mutably.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Env> {
        self.0.borrow_mut()
    }
}

impl Clone for EnvRef {
    #[inline]
    fn clone(&self) -> Self {
        EnvRef(Rc::clone(&self.0))
    }
}

impl fmt::Debug for EnvRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnvRef").field(&self.0).finish()
    }
}

impl PartialEq for EnvRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || *self.0.borrow() == *other.0.borrow()
    }
}

/// One environment frame.
///
/// `Clone` deep-copies the local bindings (values own their children) but
/// shares the parent link, matching the non-owning parent reference of
/// the scoping model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Env {
    /// Local bindings (`FxHashMap` for faster hashing with string keys).
    bindings: FxHashMap<String, Value>,
    /// Parent frame, if any.
    parent: Option<EnvRef>,
}

impl Env {
    /// Create an empty root frame.
    pub fn new() -> Self {
        Env {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create an empty frame chained to a parent.
    pub fn with_parent(parent: EnvRef) -> Self {
        Env {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Link this frame to a parent, replacing any previous link.
    #[inline]
    pub fn set_parent(&mut self, parent: EnvRef) {
        self.parent = Some(parent);
    }

    /// Look up a name, walking parent frames; returns a clone of the
    /// bound value.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Bind a name in this frame, replacing any existing local binding.
    /// Never touches parent frames.
    #[inline]
    pub fn put(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Bind a name in the root frame, walking the parent chain from here.
    pub fn def(&mut self, name: String, value: Value) {
        match &self.parent {
            Some(parent) => parent.borrow_mut().def(name, value),
            None => self.put(name, value),
        }
    }
}

use std::{cell::RefCell, fmt, rc::Rc};

use rustc_hash::FxHashMap;

use crate::interpreter::value::core::Value;

/// A shared handle to an [`Environment`].
///
/// Function values and call frames hold these handles; a scope lives as long
/// as any of them does.
pub type Env = Rc<RefCell<Environment>>;

/// One lexical scope: its own bindings plus an optional enclosing scope.
///
/// Lookups walk outward through the enclosing chain; writes always go to the
/// scope they are made on, so a binding in an inner scope shadows an outer one
/// without changing it.
///
/// # Example
/// ```
/// use simian::interpreter::{environment::Environment, value::core::Value};
///
/// let outer = Environment::new();
/// outer.borrow_mut().set("x", Value::Integer(1));
///
/// let inner = Environment::new_enclosed(&outer);
/// inner.borrow_mut().set("x", Value::Integer(2));
///
/// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
/// assert_eq!(outer.borrow().get("x"), Some(Value::Integer(1)));
/// ```
#[derive(Default)]
pub struct Environment {
    store: FxHashMap<String, Value>,
    outer: Option<Env>,
}

#[allow(clippy::new_ret_no_self)]
impl Environment {
    /// Creates an outermost scope with no bindings.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty scope enclosed by `outer`.
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: FxHashMap::default(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks `name` up in this scope, then in each enclosing scope in turn.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this scope, replacing any existing binding here.
    /// Enclosing scopes are never touched.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Whether `name` is bound directly in this scope.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }
}

// Closures can make the scope chain cyclic, so only binding names are shown.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.store.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("bindings", &names)
         .field("enclosed", &self.outer.is_some())
         .finish()
    }
}

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared, mutable handle to an [`Environment`].
///
/// Environments are shared rather than owned: a closure and the scope that
/// created it both keep a handle to the same frame, and call frames point
/// at the frame of their definition site. Handles may form cycles (a
/// closure stored in a binding of its own capture); such frames are simply
/// never reclaimed, which is tolerated.
pub type Env = Rc<RefCell<Environment>>;

/// A single lexical scope frame.
///
/// Holds the bindings made in this scope plus an optional handle to the
/// enclosing scope. Lookup walks outward through the chain; writes always
/// land in the innermost frame.
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates the outermost environment, with no enclosing scope.
    ///
    /// # Example
    /// ```
    /// use monna::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let global = Environment::global();
    /// global.borrow_mut().set("x".to_string(), Value::Integer(5));
    ///
    /// assert_eq!(global.borrow().get("x"), Some(Value::Integer(5)));
    /// assert_eq!(global.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn global() -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: None, }))
    }

    /// Creates a fresh environment enclosed by `outer`.
    ///
    /// Names not bound in the new frame resolve through `outer`; new
    /// bindings shadow outer ones without touching them.
    ///
    /// # Example
    /// ```
    /// use monna::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let global = Environment::global();
    /// global.borrow_mut().set("x".to_string(), Value::Integer(1));
    ///
    /// let inner = Environment::enclosed(&global);
    /// inner.borrow_mut().set("x".to_string(), Value::Integer(2));
    ///
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
    /// assert_eq!(global.borrow().get("x"), Some(Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up a name, searching this frame first and then the enclosing
    /// chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer
                        .as_ref()
                        .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this frame, shadowing any outer binding.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}

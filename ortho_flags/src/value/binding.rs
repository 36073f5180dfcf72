//! Shared handles to the variables that flags write into.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Shared, single-threaded handle to a variable bound to one or more flags.
///
/// The caller keeps one clone and reads it after parsing, while the flag
/// values keep the others. Cloning a [`Binding`] never copies the variable.
///
/// # Examples
///
/// ```
/// use ortho_flags::Binding;
///
/// let output = Binding::new(String::from("-"));
/// let alias = output.clone();
/// alias.replace(String::from("index.html"));
/// assert_eq!(output.get(), "index.html");
/// ```
pub struct Binding<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Binding<T> {
    /// Creates a binding holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(initial)),
        }
    }

    /// Borrows the current value.
    ///
    /// # Panics
    ///
    /// Panics if the value is being mutated, which cannot happen outside a
    /// call to [`Binding::replace`] or [`Binding::update`].
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.cell.borrow()
    }

    /// Stores `value`, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        self.cell.replace(value)
    }

    /// Mutates the value in place.
    pub fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut T),
    {
        mutate(&mut self.cell.borrow_mut());
    }

    /// Returns `true` when both handles point at the same variable.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: Clone> Binding<T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&*self.cell.borrow()).finish()
    }
}

impl<T> From<T> for Binding<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

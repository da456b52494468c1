//! Storage seam between controllers and the state they mutate.
//!
//! DESIGN
//! ======
//! Components hold state in `RwSignal`s provided via context; controller
//! tests hold it in a `RefCell`. Controllers are generic over `StateStore`
//! so the same async flow drives both, with every mutation confined to a
//! synchronous closure that never spans an `.await`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update, With};

pub trait StateStore<T> {
    /// Mutate the stored value, returning the closure's result, or `None` if
    /// the store has been disposed (the owning component unmounted).
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the stored value, or `None` if the store has been disposed.
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T> StateStore<T> for RwSignal<T>
where
    T: Send + Sync + 'static,
{
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with(f)
    }
}

impl<T> StateStore<T> for RefCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

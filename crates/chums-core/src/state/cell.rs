//! Owner of a piece of view state.
//!
//! The async flows in this module tree run across awaits, so they never hold
//! the state themselves. They reach it through a `StateCell`, which may refuse
//! once its owner is gone (an unmounted component).

use std::cell::RefCell;

pub trait StateCell<T> {
    /// Run `f` on the state; `None` when the owner no longer exists
    fn try_update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn try_update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

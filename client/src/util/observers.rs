//! Observer list used by stores to announce state changes.
//!
//! The Leptos layer subscribes once per store and mirrors each snapshot into
//! a signal; stores stay plain Rust and testable without a reactive runtime.

use std::cell::RefCell;
use std::rc::Rc;

type Observer<T> = Rc<dyn Fn(&T)>;

pub struct Observers<T: ?Sized> {
    list: RefCell<Vec<Observer<T>>>,
}

impl<T: ?Sized> Default for Observers<T> {
    fn default() -> Self {
        Self { list: RefCell::new(Vec::new()) }
    }
}

impl<T: ?Sized> Observers<T> {
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) {
        self.list.borrow_mut().push(Rc::new(observer));
    }

    /// Call every observer with `value`. Observers may subscribe further
    /// observers; those only see later notifications.
    pub fn notify(&self, value: &T) {
        let observers: Vec<Observer<T>> = self.list.borrow().clone();
        for observer in observers {
            observer(value);
        }
    }
}

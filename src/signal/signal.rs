use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::runtime::{ReactiveRuntime, RuntimeInner};

struct SignalInner<T> {
    value: RwLock<T>,
    id: usize,
    runtime: Arc<ReactiveRuntime>,
}

impl<T> Drop for SignalInner<T> {
    fn drop(&mut self) {
        self.runtime.inner().forget(self.id);
    }
}

/// A reactive cell that notifies its observers when written.
///
/// Clones share the same value.
pub struct Signal<T> {
    inner: Arc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    /// Create a new signal with the given initial value.
    pub fn new(initial: T) -> Self {
        let runtime = ReactiveRuntime::current();
        let id = runtime.next_id();

        Self {
            inner: Arc::new(SignalInner {
                value: RwLock::new(initial),
                id,
                runtime,
            }),
        }
    }

    /// Get a clone of the current value, tracking the read.
    pub fn get(&self) -> T {
        self.inner.runtime.track_read(self.inner.id);
        self.inner.value.read().clone()
    }

    /// Read the value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.runtime.track_read(self.inner.id);
        let value = self.inner.value.read();
        f(&*value)
    }

    /// Read the value without registering a dependency.
    pub fn with_untracked<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.inner.value.read();
        f(&*value)
    }

    /// Replace the value and notify observers.
    pub fn set(&self, new_value: T) {
        *self.inner.value.write() = new_value;
        self.inner.runtime.notify_observers(self.inner.id);
    }

    /// Mutate the value in place and notify observers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut *self.inner.value.write());
        self.inner.runtime.notify_observers(self.inner.id);
    }

    /// Mutate the value in place; observers are notified only if `f`
    /// returns `true`. Returns what `f` returned.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = f(&mut *self.inner.value.write());
        if changed {
            self.inner.runtime.notify_observers(self.inner.id);
        }
        changed
    }

    /// Get the signal's unique id.
    pub fn id(&self) -> usize {
        self.inner.id
    }

    /// Call `callback` now and after every write, until the guard drops.
    pub fn watch<F>(&self, callback: F) -> WatchGuard
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let runtime = &self.inner.runtime;
        let observer_id = runtime.next_id();
        let source = Arc::downgrade(&self.inner);
        let callback = Arc::new(callback);
        let callback_clone = Arc::clone(&callback);

        runtime.create_observer(observer_id, move || {
            if let Some(source) = source.upgrade() {
                source.runtime.track_read(source.id);
                let value = source.value.read().clone();
                callback_clone(value);
            }
        });

        runtime.with_observer(observer_id, || runtime.track_read(self.inner.id));

        let value = self.inner.value.read().clone();
        callback(value);

        WatchGuard {
            observer_id,
            runtime: Arc::downgrade(runtime.inner()),
        }
    }
}

/// RAII guard for signal watchers.
pub struct WatchGuard {
    observer_id: usize,
    runtime: Weak<RuntimeInner>,
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.upgrade() {
            runtime.forget(self.observer_id);
        }
    }
}

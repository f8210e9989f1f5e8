use std::sync::Arc;

use parking_lot::RwLock;

use crate::runtime::ReactiveRuntime;

struct MemoInner<T> {
    compute: Box<dyn Fn() -> T + Send + Sync>,
    cached: RwLock<Option<T>>,
    id: usize,
    runtime: Arc<ReactiveRuntime>,
}

impl<T> Drop for MemoInner<T> {
    fn drop(&mut self) {
        self.runtime.inner().forget(self.id);
    }
}

/// A memoized computed value that automatically tracks dependencies.
///
/// Memos only recompute when read after one of their dependencies changed.
pub struct Memo<T> {
    inner: Arc<MemoInner<T>>,
}

impl<T> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Memo<T> {
    /// Create a new memo with the given computation function.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let runtime = ReactiveRuntime::current();
        let id = runtime.next_id();
        runtime.register_memo(id);

        Self {
            inner: Arc::new(MemoInner {
                compute: Box::new(compute),
                cached: RwLock::new(None),
                id,
                runtime,
            }),
        }
    }

    /// Get the current value, recomputing if necessary.
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    /// Read the value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let inner = &self.inner;
        inner.runtime.track_read(inner.id);

        if !inner.runtime.is_memo_dirty(inner.id) {
            if let Some(value) = inner.cached.read().as_ref() {
                return f(value);
            }
        }

        // Clean before computing: a write racing the computation marks the
        // memo dirty again instead of being lost.
        inner.runtime.mark_memo_clean(inner.id);
        let value = inner.runtime.run_tracked(inner.id, || (inner.compute)());
        *inner.cached.write() = Some(value.clone());
        f(&value)
    }

    /// Get the memo's unique id.
    pub fn id(&self) -> usize {
        self.inner.id
    }
}

/// Create a new memoized computation.
///
/// ```
/// use bulk_select::{create_memo, Signal};
///
/// let count = Signal::new(5);
/// let doubled = create_memo({
///     let count = count.clone();
///     move || count.get() * 2
/// });
/// assert_eq!(doubled.get(), 10);
/// ```
pub fn create_memo<T, F>(compute: F) -> Memo<T>
where
    T: Clone + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    Memo::new(compute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn memo_recomputes_only_after_change() {
        ReactiveRuntime::scope(|| {
            let count = Signal::new(5);
            let runs = Arc::new(AtomicUsize::new(0));
            let doubled = create_memo({
                let count = count.clone();
                let runs = Arc::clone(&runs);
                move || {
                    runs.fetch_add(1, Ordering::SeqCst);
                    count.get() * 2
                }
            });

            assert_eq!(doubled.get(), 10);
            assert_eq!(doubled.get(), 10);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            count.set(10);
            assert_eq!(doubled.get(), 20);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }
}

use std::sync::{Arc, Weak};

use crate::runtime::{ReactiveRuntime, RuntimeInner};

/// A side effect that re-runs after any signal or memo it read changes.
///
/// The effect runs once on creation to establish its dependencies, and
/// stops when dropped.
///
/// ```
/// use bulk_select::{Effect, Signal};
/// use std::sync::{Arc, atomic::{AtomicI32, Ordering}};
///
/// let signal = Signal::new(5);
/// let last = Arc::new(AtomicI32::new(0));
///
/// let _effect = Effect::new({
///     let signal = signal.clone();
///     let last = last.clone();
///     move || last.store(signal.get(), Ordering::SeqCst)
/// });
/// assert_eq!(last.load(Ordering::SeqCst), 5);
///
/// signal.set(10);
/// assert_eq!(last.load(Ordering::SeqCst), 10);
/// ```
#[must_use = "an effect stops running when dropped"]
pub struct Effect {
    id: usize,
    run: Arc<dyn Fn() + Send + Sync>,
    runtime: Weak<RuntimeInner>,
}

impl Effect {
    /// Create an effect and run it immediately.
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let runtime = ReactiveRuntime::current();
        let id = runtime.next_id();
        let effect: Arc<dyn Fn() + Send + Sync> = Arc::new(effect);
        let effect_clone = Arc::clone(&effect);

        runtime.create_observer(id, move || effect_clone());
        runtime.run_tracked(id, || effect());

        Self {
            id,
            run: effect,
            runtime: Arc::downgrade(runtime.inner()),
        }
    }

    /// Manually run the effect body without re-tracking.
    pub fn run(&self) {
        (self.run)();
    }
}

impl Drop for Effect {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.upgrade() {
            runtime.forget(self.id);
        }
    }
}

/// Create a new effect that runs when dependencies change.
pub fn create_effect<F>(effect: F) -> Effect
where
    F: Fn() + Send + Sync + 'static,
{
    Effect::new(effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{create_memo, Signal};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn effect_runs_immediately() {
        ReactiveRuntime::scope(|| {
            let counter = Arc::new(AtomicUsize::new(0));
            let counter_clone = Arc::clone(&counter);

            let _effect = create_effect(move || {
                counter_clone.fetch_add(1, Ordering::SeqCst);
            });

            assert_eq!(counter.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn effect_over_diamond_runs_once_per_write() {
        ReactiveRuntime::scope(|| {
            let source = Signal::new(1);
            let left = create_memo({
                let source = source.clone();
                move || source.get() + 1
            });
            let right = create_memo({
                let source = source.clone();
                move || source.get() * 10
            });
            let runs = Arc::new(AtomicUsize::new(0));
            let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));

            let _effect = create_effect({
                let runs = Arc::clone(&runs);
                let seen = Arc::clone(&seen);
                move || {
                    runs.fetch_add(1, Ordering::SeqCst);
                    seen.lock().push((left.get(), right.get()));
                }
            });

            source.set(2);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
            assert_eq!(*seen.lock(), vec![(2, 10), (3, 20)]);
        });
    }
}

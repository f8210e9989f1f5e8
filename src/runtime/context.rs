use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::logging::targets;

type EffectFn = Arc<dyn Fn() + Send + Sync>;

/// Dependency graph for one runtime.
struct ReactiveContext {
    // source id -> observers that read it
    dependencies: HashMap<usize, HashSet<usize>>,
    // observer id -> sources it read
    observer_deps: HashMap<usize, HashSet<usize>>,
    effects: HashMap<usize, EffectFn>,
    memo_dirty: HashMap<usize, bool>,
}

impl ReactiveContext {
    fn new() -> Self {
        Self {
            dependencies: HashMap::new(),
            observer_deps: HashMap::new(),
            effects: HashMap::new(),
            memo_dirty: HashMap::new(),
        }
    }

    fn clear(&mut self) {
        self.dependencies.clear();
        self.observer_deps.clear();
        self.effects.clear();
        self.memo_dirty.clear();
    }

    /// Drop every edge from `observer_id` to the sources it read.
    fn untrack(&mut self, observer_id: usize) {
        if let Some(old_deps) = self.observer_deps.remove(&observer_id) {
            for source_id in old_deps {
                if let Some(observers) = self.dependencies.get_mut(&source_id) {
                    observers.remove(&observer_id);
                }
            }
        }
    }

    /// Mark everything downstream of `source_id` dirty and collect the
    /// effects that must re-run, each once, in discovery order.
    fn invalidate(&mut self, source_id: usize) -> Vec<usize> {
        let mut pending = Vec::new();
        let mut seen = HashSet::new();
        let mut stack: Vec<usize> = self
            .dependencies
            .get(&source_id)
            .map(|obs| obs.iter().copied().collect())
            .unwrap_or_default();

        while let Some(observer_id) = stack.pop() {
            if let Some(dirty) = self.memo_dirty.get_mut(&observer_id) {
                // An already dirty memo has had its dependents invalidated.
                if !*dirty {
                    *dirty = true;
                    if let Some(dependents) = self.dependencies.get(&observer_id) {
                        stack.extend(dependents.iter().copied());
                    }
                }
            } else if self.effects.contains_key(&observer_id) && seen.insert(observer_id) {
                pending.push(observer_id);
            }
        }

        pending
    }
}

/// Graph state shared between a runtime and the guards of its primitives.
pub struct RuntimeInner {
    context: Mutex<ReactiveContext>,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            context: Mutex::new(ReactiveContext::new()),
        }
    }

    /// Remove a primitive from the graph, both as observer and as source.
    pub(crate) fn forget(&self, id: usize) {
        let mut ctx = self.context.lock();
        ctx.untrack(id);
        ctx.dependencies.remove(&id);
        ctx.effects.remove(&id);
        ctx.memo_dirty.remove(&id);
    }
}

/// Reactive runtime owning the dependency graph of its primitives.
///
/// There is one global runtime used by default, and any number of scoped
/// runtimes that can be pushed for isolation. Every signal, memo and
/// effect captures the runtime that was current when it was created and
/// reports to it for its whole life.
///
/// # Examples
///
/// ```
/// use bulk_select::runtime::ReactiveRuntime;
/// use bulk_select::Signal;
///
/// ReactiveRuntime::scope(|| {
///     let signal = Signal::new(0);
///     assert_eq!(signal.get(), 0);
/// });
/// ```
pub struct ReactiveRuntime {
    next_id: AtomicUsize,
    inner: Arc<RuntimeInner>,
}

thread_local! {
    static RUNTIME_STACK: RefCell<Vec<Arc<ReactiveRuntime>>> = const { RefCell::new(Vec::new()) };
    // (runtime key, observer id) for every observer running on this thread
    static OBSERVER_STACK: RefCell<Vec<(usize, usize)>> = const { RefCell::new(Vec::new()) };
}

/// Pops the observer pushed by `with_observer`, also on unwind.
struct ObserverFrame;

impl Drop for ObserverFrame {
    fn drop(&mut self) {
        OBSERVER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

impl ReactiveRuntime {
    /// Create a new isolated runtime.
    pub fn new() -> Arc<Self> {
        Arc::new(ReactiveRuntime {
            next_id: AtomicUsize::new(0),
            inner: Arc::new(RuntimeInner::new()),
        })
    }

    /// Run a function with a fresh isolated runtime.
    ///
    /// Primitives created inside keep the runtime alive for as long as
    /// they exist.
    pub fn scope<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        Self::with_runtime(Self::new(), f)
    }

    /// The process-wide fallback runtime.
    pub fn global() -> Arc<Self> {
        use std::sync::OnceLock;
        static RUNTIME: OnceLock<Arc<ReactiveRuntime>> = OnceLock::new();
        Arc::clone(RUNTIME.get_or_init(Self::new))
    }

    /// The innermost scoped runtime on this thread, or the global one.
    pub fn current() -> Arc<Self> {
        RUNTIME_STACK.with(|stack| stack.borrow().last().cloned().unwrap_or_else(Self::global))
    }

    /// Run a function with `runtime` as the current runtime.
    ///
    /// ```
    /// use bulk_select::runtime::ReactiveRuntime;
    /// use bulk_select::Signal;
    ///
    /// let runtime = ReactiveRuntime::new();
    /// ReactiveRuntime::with_runtime(runtime, || {
    ///     let signal = Signal::new(42);
    ///     assert_eq!(signal.get(), 42);
    /// });
    /// ```
    pub fn with_runtime<F, R>(runtime: Arc<Self>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        RUNTIME_STACK.with(|stack| stack.borrow_mut().push(runtime));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

        RUNTIME_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });

        match result {
            Ok(r) => r,
            Err(e) => std::panic::resume_unwind(e),
        }
    }

    /// Drop every tracked dependency, effect and memo flag.
    ///
    /// Live primitives keep working but lose their subscriptions until
    /// they are read again. Ids are not reused.
    pub fn clear(&self) {
        self.inner.context.lock().clear();
    }

    pub(crate) fn inner(&self) -> &Arc<RuntimeInner> {
        &self.inner
    }

    fn key(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }

    /// The innermost observer of this runtime running on this thread.
    fn current_observer(&self) -> Option<usize> {
        let key = self.key();
        OBSERVER_STACK.with(|stack| {
            stack
                .borrow()
                .iter()
                .rev()
                .find(|(runtime, _)| *runtime == key)
                .map(|(_, observer)| *observer)
        })
    }

    /// Allocate an id for a new primitive.
    pub fn next_id(&self) -> usize {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Record that the current observer, if any, read `source_id`.
    pub fn track_read(&self, source_id: usize) {
        if let Some(observer) = self.current_observer() {
            if observer == source_id {
                return;
            }
            let mut ctx = self.inner.context.lock();
            ctx.dependencies.entry(source_id).or_default().insert(observer);
            ctx.observer_deps.entry(observer).or_default().insert(source_id);
        }
    }

    /// Propagate a change of `source_id`.
    ///
    /// All dependent memos are marked dirty before any effect runs, so
    /// effects only ever observe fully applied writes.
    pub fn notify_observers(&self, source_id: usize) {
        let pending = self.inner.context.lock().invalidate(source_id);
        trace!(target: targets::RUNTIME, source = source_id, effects = pending.len(), "notify");

        for effect_id in pending {
            // The effect may have been dropped by an earlier one.
            let effect = self.inner.context.lock().effects.get(&effect_id).cloned();
            if let Some(effect) = effect {
                self.run_tracked(effect_id, || effect());
            }
        }
    }

    /// Register `f` as the body of effect `observer_id`.
    pub(crate) fn create_observer<F>(&self, observer_id: usize, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut ctx = self.inner.context.lock();
        ctx.untrack(observer_id);
        ctx.effects.insert(observer_id, Arc::new(f));
    }

    /// Run `f` as `observer_id`, replacing its previous dependencies with
    /// whatever `f` reads.
    pub(crate) fn run_tracked<F, R>(&self, observer_id: usize, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.inner.context.lock().untrack(observer_id);
        self.with_observer(observer_id, f)
    }

    /// Run `f` with `observer_id` as the current observer on this thread.
    pub(crate) fn with_observer<F, R>(&self, observer_id: usize, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let key = self.key();
        OBSERVER_STACK.with(|stack| stack.borrow_mut().push((key, observer_id)));
        let _frame = ObserverFrame;
        f()
    }

    /// Register a memo; it starts dirty.
    pub(crate) fn register_memo(&self, memo_id: usize) {
        self.inner.context.lock().memo_dirty.insert(memo_id, true);
    }

    pub(crate) fn is_memo_dirty(&self, memo_id: usize) -> bool {
        self.inner
            .context
            .lock()
            .memo_dirty
            .get(&memo_id)
            .copied()
            .unwrap_or(true)
    }

    pub(crate) fn mark_memo_clean(&self, memo_id: usize) {
        self.inner.context.lock().memo_dirty.insert(memo_id, false);
    }
}

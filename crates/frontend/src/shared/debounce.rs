//! Debounced dispatch of a deferred operation
//!
//! A [`Debouncer`] runs the last scheduled operation once its delay has
//! elapsed without another call. Scheduling cancels whatever was pending,
//! so a burst of keystrokes issues a single query.
//!
//! Timers and task spawning come from a [`TimerRuntime`], the browser one in
//! the app and a paused tokio clock in tests.

use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use futures::FutureExt;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Timer and task primitives of the host event loop
pub trait TimerRuntime {
    /// Future that completes after `delay_ms`; the clock starts when it is created
    fn sleep(&self, delay_ms: u32) -> LocalBoxFuture<'static, ()>;

    /// Run a task on the current thread
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// `setTimeout` + the wasm-bindgen microtask executor
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

impl TimerRuntime for BrowserRuntime {
    fn sleep(&self, delay_ms: u32) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::TimeoutFuture::new(delay_ms).boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

#[derive(Default)]
struct Pending {
    /// Bumped on every cancel; a task only runs if it still holds the current value
    generation: Cell<u64>,
    handle: RefCell<Option<AbortHandle>>,
}

/// At most one pending operation at a time
pub struct Debouncer<R: TimerRuntime = BrowserRuntime> {
    runtime: R,
    pending: Rc<Pending>,
}

impl<R: TimerRuntime> Debouncer<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            pending: Rc::new(Pending::default()),
        }
    }

    /// Replace any pending operation with `operation`, due after `delay_ms`
    ///
    /// A delay of 0 runs the operation on the next tick of the event loop,
    /// never synchronously inside this call.
    pub fn schedule<F>(&self, delay_ms: u32, operation: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();

        let generation = self.pending.generation.get();
        let pending = Rc::clone(&self.pending);
        let sleep = self.runtime.sleep(delay_ms);
        let (handle, registration) = AbortHandle::new_pair();

        let task = Abortable::new(
            async move {
                sleep.await;
                if pending.generation.get() != generation {
                    return;
                }
                pending.handle.borrow_mut().take();
                operation();
            },
            registration,
        );

        *self.pending.handle.borrow_mut() = Some(handle);
        self.runtime.spawn(
            async move {
                let _ = task.await;
            }
            .boxed_local(),
        );
    }

    /// Drop the pending operation, if any. Takes effect immediately.
    pub fn cancel(&self) {
        let next = self.pending.generation.get().wrapping_add(1);
        self.pending.generation.set(next);
        if let Some(handle) = self.pending.handle.borrow_mut().take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.handle.borrow().is_some()
    }
}

impl Default for Debouncer<BrowserRuntime> {
    fn default() -> Self {
        Self::new(BrowserRuntime)
    }
}

impl<R: TimerRuntime> Drop for Debouncer<R> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<R: TimerRuntime> fmt::Debug for Debouncer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("pending", &self.is_pending())
            .finish()
    }
}

use core::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};

/// Hook invoked synchronously once per cell expansion, typically to redraw the grid.
///
/// Returning [ControlFlow::Break] stops the search with
/// [SearchError::Interrupted](crate::SearchError::Interrupted). The sink must not touch the
/// grid being searched; the search holds the only mutable borrow.
pub trait ProgressSink {
    fn progress(&mut self) -> ControlFlow<()>;
}

/// Plain redraw closures never stop the search.
impl<F: FnMut()> ProgressSink for F {
    fn progress(&mut self) -> ControlFlow<()> {
        self();
        ControlFlow::Continue(())
    }
}

/// Wraps a sink and polls a shared flag after each of its calls.
pub struct Cancellable<'a, P> {
    inner: P,
    cancel: &'a AtomicBool,
}

impl<'a, P: ProgressSink> Cancellable<'a, P> {
    pub fn new(inner: P, cancel: &'a AtomicBool) -> Self {
        Cancellable { inner, cancel }
    }
}

impl<P: ProgressSink> ProgressSink for Cancellable<'_, P> {
    fn progress(&mut self) -> ControlFlow<()> {
        if self.inner.progress().is_break() || self.cancel.load(Ordering::Relaxed) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Counts calls, handy for checking the expansion budget.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counter(pub usize);

impl ProgressSink for Counter {
    fn progress(&mut self) -> ControlFlow<()> {
        self.0 += 1;
        ControlFlow::Continue(())
    }
}

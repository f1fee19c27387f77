//! # Debounced input
//!
//! Each change restarts one timer; the value is committed only once the timer
//! runs out without another change.
//!
//! [`Debouncer`] is the timer bookkeeping. Every [`Debouncer::settle`] call
//! supersedes the previous one, so of a burst of changes only the last
//! settles. [`use_debounced`] wires it to a signal: it keeps a single
//! in-flight task, cancelling the previous one on each change and the last
//! one when the component is dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::platform::sleep;

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait out `delay`. Returns `true` if no newer call arrived meanwhile.
    pub async fn settle(&self, delay: Duration) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        sleep(delay).await;
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Invalidate any pending `settle`.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Follow `source`, committing its value after `delay` of quiet.
///
/// The returned signal starts at the source's current value.
pub fn use_debounced(source: Signal<String>, delay: Duration) -> Signal<String> {
    let mut settled = use_signal(|| source.peek().clone());
    let mut pending = use_signal(|| Option::<Task>::None);
    let debouncer = use_hook(Debouncer::new);

    {
        let debouncer = debouncer.clone();
        use_effect(move || {
            let value = source();
            if let Some(task) = *pending.peek() {
                task.cancel();
            }
            if value == *settled.peek() {
                debouncer.cancel();
                pending.set(None);
                return;
            }
            let debouncer = debouncer.clone();
            let task = spawn(async move {
                if debouncer.settle(delay).await {
                    settled.set(value);
                }
            });
            pending.set(Some(task));
        });
    }

    use_drop(move || {
        debouncer.cancel();
        if let Some(task) = *pending.peek() {
            task.cancel();
        }
    });

    settled
}

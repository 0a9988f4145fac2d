// SPDX-License-Identifier: MPL-2.0
//! One-shot delayed tasks on the UI loop.
//!
//! The manager never blocks: auto-close is handed to a [`Scheduler`] that runs
//! the task later on the same thread. Two implementations are provided:
//!
//! - [`LocalScheduler`] spawns onto the current `tokio::task::LocalSet`.
//! - [`TickScheduler`] keeps a virtual clock advanced by the host, e.g. from a
//!   periodic tick subscription.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Work deferred to the UI loop.
pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay, on the caller's thread.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Schedules tasks with `tokio::task::spawn_local`.
///
/// Must be used from within a `LocalSet`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalScheduler;

impl Scheduler for LocalScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

struct Pending {
    deadline: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct TickState {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl TickState {
    /// Removes the earliest due task, by deadline then submission order.
    fn take_due(&mut self) -> Option<Task> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= self.now)
            .min_by_key(|(_, p)| (p.deadline, p.seq))
            .map(|(index, _)| index)?;
        Some(self.pending.remove(index).task)
    }
}

/// Virtual-clock scheduler driven by the host loop.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct TickScheduler {
    state: Rc<RefCell<TickState>>,
}

impl TickScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Returns the number of tasks not yet run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Moves the clock forward and runs every task that became due.
    ///
    /// Tasks scheduled by a running task with a zero delay also run before
    /// this returns. Returns the number of tasks run.
    pub fn advance(&self, elapsed: Duration) -> usize {
        {
            let mut state = self.state.borrow_mut();
            state.now = state.now.saturating_add(elapsed);
        }

        let mut ran = 0;
        loop {
            let task = self.state.borrow_mut().take_due();
            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }
}

impl Scheduler for TickScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.state.borrow_mut();
        let deadline = state.now.saturating_add(delay);
        let seq = state.next_seq;
        state.next_seq += 1;
        state.pending.push(Pending {
            deadline,
            seq,
            task,
        });
    }
}

impl fmt::Debug for TickScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("TickScheduler")
            .field("now", &state.now)
            .field("pending", &state.pending.len())
            .finish()
    }
}

//! Post-layout message queue.
//!
//! Some widget work has to wait until the host has finished its current
//! layout/render pass, e.g. scrolling a list to an item that has only just
//! been laid out. Widgets post a message describing that work to a
//! [`DeferredQueue`] and the host drains the queue once the pass completes.
//!
//! Messages are delivered in posting order. A posted message can be cancelled
//! by its [`TaskId`] until it is drained.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::logging::targets;

/// A unique identifier for a deferred message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

#[derive(Debug)]
struct Entry<M> {
    id: TaskId,
    message: M,
}

/// An ordered queue of messages waiting for the end of a layout pass.
#[derive(Debug)]
pub struct DeferredQueue<M> {
    entries: VecDeque<Entry<M>>,
}

impl<M> DeferredQueue<M> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Post a message to be handled after the current layout pass.
    ///
    /// Returns the task ID that can be used to cancel the message.
    pub fn post(&mut self, message: M) -> TaskId {
        let id = next_task_id();
        tracing::trace!(target: targets::DEFERRED, task = id.as_u64(), "posted deferred message");
        self.entries.push_back(Entry { id, message });
        id
    }

    /// Cancel a pending message.
    ///
    /// Returns `true` if the message was found and removed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            tracing::trace!(target: targets::DEFERRED, task = id.as_u64(), "cancelled deferred message");
            true
        } else {
            false
        }
    }

    /// Drop every pending message.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            tracing::trace!(
                target: targets::DEFERRED,
                dropped = self.entries.len(),
                "cleared deferred queue"
            );
        }
        self.entries.clear();
    }

    /// Check if there are any pending messages.
    pub fn has_pending(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterate pending messages in posting order without removing them.
    pub fn pending(&self) -> impl Iterator<Item = &M> {
        self.entries.iter().map(|e| &e.message)
    }

    /// Hand every pending message to `handler` in posting order.
    ///
    /// Returns the number of messages processed.
    pub fn process_all<F>(&mut self, mut handler: F) -> usize
    where
        F: FnMut(M),
    {
        let batch: Vec<Entry<M>> = self.entries.drain(..).collect();
        let count = batch.len();
        for entry in batch {
            handler(entry.message);
        }
        count
    }
}

impl<M> Default for DeferredQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}

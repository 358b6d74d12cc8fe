use crate::foundation::core::WidgetId;

/// Token for one requested frame callback. Cancelling invalidates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(u64);

/// Single-threaded frame request queue with `requestAnimationFrame` semantics: callbacks
/// requested during a frame run on the next one, never the current one.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next: u64,
    pending: Vec<(FrameHandle, WidgetId)>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, owner: WidgetId) -> FrameHandle {
        self.next += 1;
        let h = FrameHandle(self.next);
        self.pending.push((h, owner));
        h
    }

    /// Returns `false` if the handle already fired or was cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(h, _)| *h != handle);
        before != self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.iter().any(|(h, _)| *h == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain every callback due this frame, in request order.
    pub fn take_due(&mut self) -> Vec<(FrameHandle, WidgetId)> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/queue.rs"]
mod tests;

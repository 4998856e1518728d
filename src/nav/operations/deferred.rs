// One-shot focus task that runs after the next render pass

/// Handle returned by [`DeferredFocus::schedule`], used to cancel that task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelHandle(u64);

/// A single pending focus assignment.
///
/// Scheduling replaces any earlier task. The task is handed out at most once.
#[derive(Debug, Default)]
pub struct DeferredFocus {
    pending: Option<(u64, String)>,
    generation: u64,
}

impl DeferredFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, item_id: impl Into<String>) -> CancelHandle {
        self.generation += 1;
        self.pending = Some((self.generation, item_id.into()));
        CancelHandle(self.generation)
    }

    /// Cancel the task `handle` refers to. Returns false if it already ran or was replaced.
    pub fn cancel(&mut self, handle: CancelHandle) -> bool {
        match &self.pending {
            Some((generation, _)) if *generation == handle.0 => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending task, if any, so it can run
    pub fn take(&mut self) -> Option<String> {
        self.pending.take().map(|(_, id)| id)
    }
}

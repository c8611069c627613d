use tokio::sync::broadcast;

/// What changed in the store. Independent surfaces (dashboard, journal,
/// tool-completion flow) subscribe and re-read whatever they project from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    EntriesChanged,
    ExercisesChanged,
    ProfileChanged,
}

/// In-process publish/subscribe channel for store mutations.
#[derive(Clone)]
pub struct ChangeBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl ChangeBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(32);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// An event with no subscribers is dropped.
    pub fn publish(&self, event: StoreEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

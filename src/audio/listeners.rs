//! Listener registry shared between a media element and its audio thread.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use super::types::{ListenerId, MediaEvent, MediaEventKind};

struct Entry {
    id: ListenerId,
    kind: MediaEventKind,
    tx: Sender<MediaEvent>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Subscriptions keyed by event kind. Cloning shares the registry.
#[derive(Clone, Default)]
pub struct Listeners {
    inner: Arc<Mutex<Registry>>,
}

impl Listeners {
    pub fn add(&self, kind: MediaEventKind, tx: Sender<MediaEvent>) -> ListenerId {
        let Ok(mut reg) = self.inner.lock() else {
            return ListenerId(u64::MAX);
        };
        let id = ListenerId(reg.next_id);
        reg.next_id += 1;
        reg.entries.push(Entry { id, kind, tx });
        id
    }

    pub fn remove(&self, id: ListenerId) -> bool {
        let Ok(mut reg) = self.inner.lock() else {
            return false;
        };
        let before = reg.entries.len();
        reg.entries.retain(|e| e.id != id);
        reg.entries.len() != before
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.lock().map(|reg| reg.entries.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` to every listener of its kind. Listeners whose
    /// receiver is gone are dropped.
    pub fn emit(&self, event: MediaEvent) {
        let kind = event.kind();
        if let Ok(mut reg) = self.inner.lock() {
            reg.entries
                .retain(|e| e.kind != kind || e.tx.send(event).is_ok());
        }
    }
}

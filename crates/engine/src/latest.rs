//! Single-slot channel where a new value replaces an unread one.
//!
//! The producer never waits. When it sends into a full slot the previous
//! value is dropped, [`SendOutcome::Overwrote`] is returned and the shared
//! overwrite counter goes up by one.

use {
    std::sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    tokio::sync::Notify,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The slot was empty.
    Delivered,
    /// An unread value was replaced.
    Overwrote,
}

#[derive(Debug)]
struct Shared<T> {
    slot: Mutex<Option<T>>,
    notify: Notify,
    overwrites: AtomicU64,
    closed: AtomicBool,
}

impl<T> Shared<T> {
    fn slot(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Debug)]
pub struct LatestSender<T> {
    shared: Arc<Shared<T>>,
}

#[derive(Debug)]
pub struct LatestReceiver<T> {
    shared: Arc<Shared<T>>,
}

/// Create a connected sender/receiver pair.
pub fn latest<T>() -> (LatestSender<T>, LatestReceiver<T>) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(None),
        notify: Notify::new(),
        overwrites: AtomicU64::new(0),
        closed: AtomicBool::new(false),
    });
    (
        LatestSender {
            shared: shared.clone(),
        },
        LatestReceiver { shared },
    )
}

impl<T> LatestSender<T> {
    pub fn send(&self, value: T) -> SendOutcome {
        let replaced = self.shared.slot().replace(value).is_some();
        self.shared.notify.notify_one();
        if replaced {
            let total = self.shared.overwrites.fetch_add(1, Ordering::Relaxed) + 1;
            log::trace!("latest: overwrote unread value ({} total)", total);
            SendOutcome::Overwrote
        } else {
            SendOutcome::Delivered
        }
    }

    pub fn overwrites(&self) -> u64 {
        self.shared.overwrites.load(Ordering::Relaxed)
    }
}

impl<T> Drop for LatestSender<T> {
    fn drop(&mut self) {
        self.shared.closed.store(true, Ordering::Release);
        self.shared.notify.notify_one();
    }
}

impl<T> LatestReceiver<T> {
    /// Wait for the next value. `None` once the sender is gone and the slot
    /// has been drained.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            if let Some(value) = self.try_recv() {
                return Some(value);
            }
            if self.shared.closed.load(Ordering::Acquire) {
                // a last value may have landed between the two checks
                return self.try_recv();
            }
            self.shared.notify.notified().await;
        }
    }

    pub fn try_recv(&mut self) -> Option<T> {
        self.shared.slot().take()
    }

    /// Values dropped unread so far.
    pub fn overwrites(&self) -> u64 {
        self.shared.overwrites.load(Ordering::Relaxed)
    }

    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }
}

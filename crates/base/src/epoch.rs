use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// A shared generation counter.
///
/// Work that started in one generation is stale once the counter has been
/// advanced. The acquisition loop advances it on every pause and terminate,
/// so a tick that was in flight at that moment can tell its result must be
/// thrown away.
#[derive(Clone, Debug)]
pub struct Epoch {
    value: Arc<AtomicU64>,
}

impl Default for Epoch {
    fn default() -> Self {
        Self::new()
    }
}

impl Epoch {
    pub fn new() -> Self {
        Self {
            value: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }

    /// Move to the next generation, returning it.
    pub fn advance(&self) -> u64 {
        self.value.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.current()
    }

    /// Stamp `inner` with the current generation.
    pub fn stamp<T>(&self, inner: T) -> Stamped<T> {
        Stamped {
            epoch: self.current(),
            inner,
        }
    }
}

/// A value tagged with the generation it was produced in.
#[derive(Clone, Debug)]
pub struct Stamped<T> {
    pub epoch: u64,
    pub inner: T,
}

impl<T> Stamped<T> {
    /// Unwrap the value if its generation is still current.
    pub fn into_current(self, epoch: &Epoch) -> Option<T> {
        if epoch.is_current(self.epoch) {
            Some(self.inner)
        } else {
            None
        }
    }
}

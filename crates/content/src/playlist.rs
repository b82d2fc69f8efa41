use {
    crate::PlaylistError,
    rand::{SeedableRng, rngs::StdRng, seq::SliceRandom},
};

/// A playable item: an opaque content id and the rank the provider gave it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistEntry {
    pub id: String,
    pub rank: usize,
}

impl PlaylistEntry {
    pub fn new(id: impl Into<String>, rank: usize) -> Self {
        Self { id: id.into(), rank }
    }
}

/// How `load` orders the entries it keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Uniform random permutation from OS entropy.
    Shuffled,
    /// Uniform random permutation from a fixed seed.
    Seeded(u64),
    /// Keep provider order.
    Preserve,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistConfig {
    capacity: usize,
    order: Order,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            order: Order::Shuffled,
        }
    }
}

impl PlaylistConfig {
    /// Maximum number of entries kept by `load`. Extra entries are dropped
    /// from the end, before shuffling.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn order(&self) -> Order {
        self.order
    }
}

/// Bounded playlist with a wrap-around cursor.
///
/// Not synchronised: a single thread is expected to issue every
/// `load`/`next`/`previous` call. Wrap it in a lock if that ever changes.
#[derive(Debug)]
pub struct PlaylistNavigator {
    config: PlaylistConfig,
    items: Vec<PlaylistEntry>,
    cursor: usize,
    rng: Option<StdRng>,
}

impl Default for PlaylistNavigator {
    fn default() -> Self {
        Self::new(PlaylistConfig::default())
    }
}

impl PlaylistNavigator {
    pub fn new(config: PlaylistConfig) -> Self {
        let rng = match config.order() {
            Order::Shuffled => Some(StdRng::from_entropy()),
            Order::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
            Order::Preserve => None,
        };
        Self {
            config,
            items: Vec::new(),
            cursor: 0,
            rng,
        }
    }

    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    /// Replace the list, reorder it and put the cursor on the first entry.
    ///
    /// An empty list still replaces the old one, so every later
    /// navigation call reports [`PlaylistError::Empty`].
    pub fn load(&mut self, mut items: Vec<PlaylistEntry>) -> Result<usize, PlaylistError> {
        if items.len() > self.config.capacity() {
            log::debug!(
                "playlist: keeping {} of {} entries",
                self.config.capacity(),
                items.len()
            );
            items.truncate(self.config.capacity());
        }
        if let Some(rng) = self.rng.as_mut() {
            items.shuffle(rng);
        }

        self.items = items;
        self.cursor = 0;

        if self.items.is_empty() {
            log::warn!("playlist: loaded an empty list");
            return Err(PlaylistError::Empty);
        }
        log::info!("playlist: loaded {} entries", self.items.len());
        Ok(self.items.len())
    }

    pub fn current(&self) -> Result<&PlaylistEntry, PlaylistError> {
        self.items.get(self.cursor).ok_or(PlaylistError::Empty)
    }

    /// Step forward, wrapping from the last entry to the first.
    pub fn next(&mut self) -> Result<&PlaylistEntry, PlaylistError> {
        let len = self.non_empty_len()?;
        self.cursor = (self.cursor + 1) % len;
        self.current()
    }

    /// Step back, wrapping from the first entry to the last.
    pub fn previous(&mut self) -> Result<&PlaylistEntry, PlaylistError> {
        let len = self.non_empty_len()?;
        self.cursor = (self.cursor + len - 1) % len;
        self.current()
    }

    /// Cursor position, `None` when empty.
    pub fn cursor(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.cursor)
    }

    pub fn items(&self) -> &[PlaylistEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn non_empty_len(&self) -> Result<usize, PlaylistError> {
        match self.items.len() {
            0 => Err(PlaylistError::Empty),
            len => Ok(len),
        }
    }
}

use crate::{EmotionLabel, is_distressed};

/// Latest label and the distress category derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmotionState {
    pub current_label: Option<EmotionLabel>,
    pub is_distressed: bool,
}

impl EmotionState {
    pub fn from_label(label: Option<EmotionLabel>) -> Self {
        Self {
            current_label: label,
            is_distressed: is_distressed(label),
        }
    }
}

/// Emitted when `is_distressed` flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistressChange {
    pub distressed: bool,
    /// Label that caused the flip.
    pub label: Option<EmotionLabel>,
}

/// Next state for `label`, plus a change notice when the category flipped.
///
/// A label change inside the same category (angry to sad) yields no notice.
pub fn transition(
    state: EmotionState,
    label: Option<EmotionLabel>,
) -> (EmotionState, Option<DistressChange>) {
    let next = EmotionState::from_label(label);
    let change = (next.is_distressed != state.is_distressed).then_some(DistressChange {
        distressed: next.is_distressed,
        label,
    });
    (next, change)
}

/// Owns the current [`EmotionState`] and hands out copies of it.
#[derive(Debug, Default)]
pub struct EmotionStateMachine {
    state: EmotionState,
    changes: u64,
}

impl EmotionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EmotionState {
        self.state
    }

    pub fn is_distressed(&self) -> bool {
        self.state.is_distressed
    }

    /// Number of distress flips so far.
    pub fn changes(&self) -> u64 {
        self.changes
    }

    pub fn apply(&mut self, label: Option<EmotionLabel>) -> Option<DistressChange> {
        let (next, change) = transition(self.state, label);
        self.state = next;
        if let Some(change) = change {
            self.changes += 1;
            match change.label {
                Some(label) => log::info!("distressed = {} ({})", change.distressed, label),
                None => log::info!("distressed = {} (no face)", change.distressed),
            }
        }
        change
    }
}

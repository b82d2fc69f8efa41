use emotion::{
    DistressChange,
    EmotionLabel::{self, *},
    EmotionState, EmotionStateMachine, transition,
};

fn notifications(labels: &[Option<EmotionLabel>]) -> Vec<DistressChange> {
    let mut machine = EmotionStateMachine::new();
    labels.iter().filter_map(|&label| machine.apply(label)).collect()
}

#[test]
fn test_notifications_only_on_boundary_crossings() {
    let changes = notifications(&[
        Some(Neutral),
        Some(Sad),
        Some(Angry),
        Some(Happy),
        Some(Fear),
    ]);
    assert_eq!(
        changes,
        vec![
            DistressChange {
                distressed: true,
                label: Some(Sad),
            },
            DistressChange {
                distressed: false,
                label: Some(Happy),
            },
            DistressChange {
                distressed: true,
                label: Some(Fear),
            },
        ]
    );
}

#[test]
fn test_label_change_within_category_is_silent() {
    let mut machine = EmotionStateMachine::new();
    assert!(machine.apply(Some(Angry)).is_some());
    assert!(machine.apply(Some(Sad)).is_none());
    assert!(machine.apply(Some(Disgust)).is_none());
    assert_eq!(machine.state().current_label, Some(Disgust));
    assert_eq!(machine.changes(), 1);
}

#[test]
fn test_losing_the_face_clears_distress() {
    let changes = notifications(&[Some(Fear), None, None]);
    assert_eq!(
        changes,
        vec![
            DistressChange {
                distressed: true,
                label: Some(Fear),
            },
            DistressChange {
                distressed: false,
                label: None,
            },
        ]
    );
}

#[test]
fn test_initial_state() {
    let machine = EmotionStateMachine::new();
    assert_eq!(machine.state(), EmotionState::default());
    assert!(!machine.is_distressed());
    assert_eq!(machine.state().current_label, None);
}

#[test]
fn test_transition_is_pure() {
    let start = EmotionState::from_label(Some(Happy));
    let (next, change) = transition(start, Some(Angry));
    assert_eq!(start, EmotionState::from_label(Some(Happy)));
    assert!(next.is_distressed);
    assert_eq!(change.map(|c| c.distressed), Some(true));

    let (same, none) = transition(next, Some(Angry));
    assert_eq!(same, next);
    assert!(none.is_none());
}

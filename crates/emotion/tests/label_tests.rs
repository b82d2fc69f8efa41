use emotion::{EmotionLabel, UnknownLabel, is_distressed};

#[test]
fn test_distressed_category() {
    let distressed: Vec<_> = EmotionLabel::ALL
        .into_iter()
        .filter(|label| label.is_distressed())
        .collect();
    assert_eq!(
        distressed,
        vec![
            EmotionLabel::Sad,
            EmotionLabel::Angry,
            EmotionLabel::Disgust,
            EmotionLabel::Fear
        ]
    );
    assert!(!is_distressed(None));
    assert!(is_distressed(Some(EmotionLabel::Fear)));
    assert!(!is_distressed(Some(EmotionLabel::Surprise)));
}

#[test]
fn test_parse_and_display() {
    assert_eq!("sad".parse::<EmotionLabel>().unwrap(), EmotionLabel::Sad);
    assert_eq!(" Disgust ".parse::<EmotionLabel>().unwrap(), EmotionLabel::Disgust);
    assert!("contempt".parse::<EmotionLabel>().is_err());
    for label in EmotionLabel::ALL {
        assert_eq!(label.to_string().parse::<EmotionLabel>().unwrap(), label);
    }
}

#[test]
fn test_fer_index() {
    assert_eq!(EmotionLabel::from_fer_index(0), Some(EmotionLabel::Angry));
    assert_eq!(EmotionLabel::from_fer_index(3), Some(EmotionLabel::Happy));
    assert_eq!(EmotionLabel::from_fer_index(6), Some(EmotionLabel::Neutral));
    assert_eq!(EmotionLabel::from_fer_index(7), None);
}

#[test]
fn test_unknown_label_error() {
    let err = "contempt".parse::<EmotionLabel>().unwrap_err();
    assert_eq!(err, UnknownLabel("contempt".to_string()));
    assert_eq!(err.to_string(), "unknown emotion label: \"contempt\"");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}

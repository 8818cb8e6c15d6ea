use moodtunes::mapping::*;

#[test]
fn test_normalize_mood_aliases() {
    assert_eq!(normalize_mood("happy"), CoreMood::Happy);
    assert_eq!(normalize_mood("surprised"), CoreMood::Happy);
    assert_eq!(normalize_mood("sad"), CoreMood::Sad);
    assert_eq!(normalize_mood("neutral"), CoreMood::Chill);
    assert_eq!(normalize_mood("fearful"), CoreMood::Chill);
    assert_eq!(normalize_mood("angry"), CoreMood::Focus);
    assert_eq!(normalize_mood("disgusted"), CoreMood::Focus);

    // Unknown labels and noisy input fall back to chill
    assert_eq!(normalize_mood("confused"), CoreMood::Chill);
    assert_eq!(normalize_mood(""), CoreMood::Chill);
    assert_eq!(normalize_mood("  HAPPY  "), CoreMood::Happy);
}

#[test]
fn test_normalize_intent_aliases() {
    assert_eq!(normalize_intent("turn-it-up"), CoreIntent::TurnItUp);
    assert_eq!(normalize_intent("take-it-easy"), CoreIntent::TakeItEasy);
    assert_eq!(normalize_intent("stay-focused"), CoreIntent::StayFocused);
    assert_eq!(normalize_intent("go-with-flow"), CoreIntent::GoWithFlow);

    // change-the-mood rides on go-with-flow targets
    assert_eq!(normalize_intent("change-the-mood"), CoreIntent::GoWithFlow);
    assert_eq!(normalize_intent("whatever"), CoreIntent::GoWithFlow);
}

#[test]
fn test_targets_resolution() {
    let resolved = targets("happy", "turn-it-up");
    assert_eq!(resolved.core_mood, CoreMood::Happy);
    assert_eq!(resolved.core_intent, CoreIntent::TurnItUp);
    assert!(!resolved.is_change_mood);
    assert_eq!(resolved.targets.target_energy, Some(0.9));
    assert_eq!(resolved.targets.min_energy, Some(0.7));
    assert_eq!(resolved.targets.max_acousticness, Some(0.4));

    let focused = targets("angry", "stay-focused");
    assert_eq!(focused.core_mood, CoreMood::Focus);
    assert_eq!(focused.targets.min_instrumentalness, Some(0.5));
    assert_eq!(focused.targets.max_speechiness, Some(0.2));
}

#[test]
fn test_targets_never_fails() {
    // Any label pair resolves to some target set
    let resolved = targets("???", "???");
    assert_eq!(resolved.core_mood, CoreMood::Chill);
    assert_eq!(resolved.core_intent, CoreIntent::GoWithFlow);
    assert!(resolved.targets.target_energy.is_some());
}

#[test]
fn test_change_the_mood_flag() {
    let resolved = targets("sad", "change-the-mood");
    assert!(resolved.is_change_mood);
    assert_eq!(resolved.core_intent, CoreIntent::GoWithFlow);
    // Same targets as the plain go-with-flow entry
    let flow = targets("sad", "go-with-flow");
    assert_eq!(resolved.targets, flow.targets);
}

#[test]
fn test_query_pairs_forwards_set_fields_verbatim() {
    let resolved = targets("happy", "turn-it-up");
    let pairs = resolved.targets.query_pairs();

    assert!(pairs.contains(&("target_energy", "0.9".to_string())));
    assert!(pairs.contains(&("target_tempo", "128".to_string())));
    assert!(pairs.contains(&("min_danceability", "0.6".to_string())));

    // Unset fields do not appear
    assert!(pairs.iter().all(|(name, _)| *name != "min_instrumentalness"));
}

#[test]
fn test_genre_seeds_per_mood() {
    assert!(!genre_seeds(CoreMood::Happy).is_empty());
    assert!(!genre_seeds(CoreMood::Chill).is_empty());
    assert!(!genre_seeds(CoreMood::Sad).is_empty());
    assert!(!genre_seeds(CoreMood::Focus).is_empty());
    assert_ne!(genre_seeds(CoreMood::Happy), genre_seeds(CoreMood::Sad));
}

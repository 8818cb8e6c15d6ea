//! Mood and intent mapping.
//!
//! Maps the mood/intent labels the UI (or face-detection collaborator)
//! produces onto four internal mood buckets and four intents, and from
//! there onto audio-feature targets for the recommendation endpoint.
//! `target_*` values are preferences, `min_*`/`max_*` values are hard
//! requirements. Resolution never fails: unknown labels normalize to a
//! sensible bucket.

use std::fmt;

/// Mood labels the UI offers (matching the detector's output labels).
pub const UI_MOODS: [&str; 7] = [
    "happy",
    "angry",
    "sad",
    "fearful",
    "disgusted",
    "surprised",
    "neutral",
];

/// Intent labels the UI offers.
pub const UI_INTENTS: [&str; 5] = [
    "go-with-flow",
    "turn-it-up",
    "take-it-easy",
    "stay-focused",
    "change-the-mood",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreMood {
    Happy,
    Chill,
    Sad,
    Focus,
}

impl fmt::Display for CoreMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoreMood::Happy => "happy",
            CoreMood::Chill => "chill",
            CoreMood::Sad => "sad",
            CoreMood::Focus => "focus",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreIntent {
    TurnItUp,
    TakeItEasy,
    StayFocused,
    GoWithFlow,
}

impl fmt::Display for CoreIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoreIntent::TurnItUp => "turn-it-up",
            CoreIntent::TakeItEasy => "take-it-easy",
            CoreIntent::StayFocused => "stay-focused",
            CoreIntent::GoWithFlow => "go-with-flow",
        };
        write!(f, "{s}")
    }
}

/// Audio-feature parameters forwarded to the recommendation endpoint.
/// Field names match the provider's query parameters verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AudioTargets {
    pub target_energy: Option<f32>,
    pub target_valence: Option<f32>,
    pub target_danceability: Option<f32>,
    pub target_tempo: Option<f32>,
    pub target_acousticness: Option<f32>,
    pub target_instrumentalness: Option<f32>,
    pub min_energy: Option<f32>,
    pub max_energy: Option<f32>,
    pub min_valence: Option<f32>,
    pub max_valence: Option<f32>,
    pub min_danceability: Option<f32>,
    pub min_acousticness: Option<f32>,
    pub max_acousticness: Option<f32>,
    pub min_instrumentalness: Option<f32>,
    pub max_speechiness: Option<f32>,
}

impl AudioTargets {
    /// All set parameters as query pairs, names verbatim.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |name: &'static str, value: Option<f32>| {
            if let Some(v) = value {
                pairs.push((name, v.to_string()));
            }
        };
        push("target_energy", self.target_energy);
        push("target_valence", self.target_valence);
        push("target_danceability", self.target_danceability);
        push("target_tempo", self.target_tempo);
        push("target_acousticness", self.target_acousticness);
        push("target_instrumentalness", self.target_instrumentalness);
        push("min_energy", self.min_energy);
        push("max_energy", self.max_energy);
        push("min_valence", self.min_valence);
        push("max_valence", self.max_valence);
        push("min_danceability", self.min_danceability);
        push("min_acousticness", self.min_acousticness);
        push("max_acousticness", self.max_acousticness);
        push("min_instrumentalness", self.min_instrumentalness);
        push("max_speechiness", self.max_speechiness);
        pairs
    }
}

/// Resolved mapping result: the feature targets plus the normalized labels
/// they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodTargets {
    pub targets: AudioTargets,
    pub core_mood: CoreMood,
    pub core_intent: CoreIntent,
    pub is_change_mood: bool,
}

/// Normalizes a UI mood label to its internal bucket. Unknown labels fall
/// back to chill.
pub fn normalize_mood(label: &str) -> CoreMood {
    match label.trim().to_lowercase().as_str() {
        "happy" | "surprised" => CoreMood::Happy,
        "sad" => CoreMood::Sad,
        "angry" | "disgusted" => CoreMood::Focus,
        _ => CoreMood::Chill,
    }
}

/// Normalizes a UI intent label. `change-the-mood` rides on go-with-flow
/// targets and is flagged separately by [`targets`]. Unknown labels fall
/// back to go-with-flow.
pub fn normalize_intent(label: &str) -> CoreIntent {
    match label.trim().to_lowercase().as_str() {
        "turn-it-up" => CoreIntent::TurnItUp,
        "take-it-easy" => CoreIntent::TakeItEasy,
        "stay-focused" => CoreIntent::StayFocused,
        _ => CoreIntent::GoWithFlow,
    }
}

/// Resolves UI mood/intent labels to audio-feature targets.
pub fn targets(mood: &str, intent: &str) -> MoodTargets {
    let is_change_mood = intent.trim().eq_ignore_ascii_case("change-the-mood");
    let core_mood = normalize_mood(mood);
    let core_intent = normalize_intent(intent);

    MoodTargets {
        targets: feature_targets(core_mood, core_intent),
        core_mood,
        core_intent,
        is_change_mood,
    }
}

/// Fallback genre seeds per mood bucket, used when the listener has no
/// usable top-tracks/artists history to seed recommendations with.
pub fn genre_seeds(mood: CoreMood) -> &'static [&'static str] {
    match mood {
        CoreMood::Happy => &["pop", "dance"],
        CoreMood::Chill => &["chill", "ambient"],
        CoreMood::Sad => &["acoustic", "piano"],
        CoreMood::Focus => &["electronic", "study"],
    }
}

fn feature_targets(mood: CoreMood, intent: CoreIntent) -> AudioTargets {
    use CoreIntent::*;
    use CoreMood::*;

    match (mood, intent) {
        (Happy, TurnItUp) => AudioTargets {
            target_energy: Some(0.9),
            target_valence: Some(0.85),
            target_danceability: Some(0.8),
            target_tempo: Some(128.0),
            min_energy: Some(0.7),
            min_valence: Some(0.6),
            min_danceability: Some(0.6),
            max_acousticness: Some(0.4),
            ..Default::default()
        },
        (Happy, TakeItEasy) => AudioTargets {
            target_energy: Some(0.55),
            target_valence: Some(0.75),
            target_danceability: Some(0.55),
            target_tempo: Some(105.0),
            min_valence: Some(0.5),
            max_energy: Some(0.7),
            ..Default::default()
        },
        (Happy, StayFocused) => AudioTargets {
            target_energy: Some(0.65),
            target_valence: Some(0.6),
            target_danceability: Some(0.45),
            target_tempo: Some(115.0),
            min_valence: Some(0.4),
            max_speechiness: Some(0.3),
            ..Default::default()
        },
        (Happy, GoWithFlow) => AudioTargets {
            target_energy: Some(0.7),
            target_valence: Some(0.7),
            target_danceability: Some(0.65),
            target_tempo: Some(118.0),
            min_valence: Some(0.5),
            ..Default::default()
        },

        (Chill, TurnItUp) => AudioTargets {
            target_energy: Some(0.75),
            target_valence: Some(0.7),
            target_danceability: Some(0.75),
            target_tempo: Some(122.0),
            min_energy: Some(0.6),
            min_danceability: Some(0.5),
            ..Default::default()
        },
        (Chill, TakeItEasy) => AudioTargets {
            target_energy: Some(0.4),
            target_valence: Some(0.55),
            target_danceability: Some(0.5),
            target_tempo: Some(95.0),
            max_energy: Some(0.6),
            min_acousticness: Some(0.25),
            ..Default::default()
        },
        (Chill, StayFocused) => AudioTargets {
            target_energy: Some(0.55),
            target_valence: Some(0.5),
            target_danceability: Some(0.4),
            target_tempo: Some(108.0),
            min_instrumentalness: Some(0.3),
            max_speechiness: Some(0.25),
            ..Default::default()
        },
        (Chill, GoWithFlow) => AudioTargets {
            target_energy: Some(0.5),
            target_valence: Some(0.6),
            target_danceability: Some(0.55),
            target_tempo: Some(110.0),
            ..Default::default()
        },

        (Sad, TurnItUp) => AudioTargets {
            target_energy: Some(0.7),
            target_valence: Some(0.45),
            target_danceability: Some(0.65),
            target_tempo: Some(120.0),
            max_valence: Some(0.6),
            min_energy: Some(0.5),
            ..Default::default()
        },
        (Sad, TakeItEasy) => AudioTargets {
            target_energy: Some(0.35),
            target_valence: Some(0.25),
            target_danceability: Some(0.35),
            target_tempo: Some(85.0),
            max_energy: Some(0.5),
            max_valence: Some(0.45),
            min_acousticness: Some(0.3),
            ..Default::default()
        },
        (Sad, StayFocused) => AudioTargets {
            target_energy: Some(0.5),
            target_valence: Some(0.35),
            target_danceability: Some(0.3),
            target_tempo: Some(100.0),
            max_valence: Some(0.5),
            min_instrumentalness: Some(0.3),
            ..Default::default()
        },
        (Sad, GoWithFlow) => AudioTargets {
            target_energy: Some(0.45),
            target_valence: Some(0.4),
            target_danceability: Some(0.45),
            target_tempo: Some(104.0),
            max_valence: Some(0.55),
            ..Default::default()
        },

        (Focus, TurnItUp) => AudioTargets {
            target_energy: Some(0.8),
            target_valence: Some(0.55),
            target_danceability: Some(0.6),
            target_tempo: Some(130.0),
            min_energy: Some(0.65),
            min_instrumentalness: Some(0.2),
            max_speechiness: Some(0.3),
            ..Default::default()
        },
        (Focus, TakeItEasy) => AudioTargets {
            target_energy: Some(0.45),
            target_valence: Some(0.45),
            target_danceability: Some(0.35),
            target_tempo: Some(96.0),
            max_energy: Some(0.6),
            min_instrumentalness: Some(0.4),
            ..Default::default()
        },
        (Focus, StayFocused) => AudioTargets {
            target_energy: Some(0.6),
            target_valence: Some(0.5),
            target_danceability: Some(0.35),
            target_tempo: Some(112.0),
            min_instrumentalness: Some(0.5),
            max_speechiness: Some(0.2),
            ..Default::default()
        },
        (Focus, GoWithFlow) => AudioTargets {
            target_energy: Some(0.55),
            target_valence: Some(0.55),
            target_danceability: Some(0.45),
            target_tempo: Some(118.0),
            min_instrumentalness: Some(0.3),
            ..Default::default()
        },
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Fixed ingredient vocabulary the simulated scanner draws from.
pub const INGREDIENT_VOCABULARY: [&str; 10] = [
    "Eggs",
    "Tomatoes",
    "Cheese",
    "Onions",
    "Bell Peppers",
    "Milk",
    "Bread",
    "Spinach",
    "Garlic",
    "Olive Oil",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(with = "humantime_serde")]
    pub scan_interval: Duration,
    pub scan_step: u8,
    #[serde(with = "humantime_serde")]
    pub regenerate_delay: Duration,
    pub min_detected: usize,
    pub max_detected: usize,
    pub seed: Option<u64>,
    pub vocabulary: Vec<String>,
    pub export_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scan_interval: Duration::from_millis(200),
            scan_step: 10,
            regenerate_delay: Duration::from_secs(2),
            min_detected: 3,
            max_detected: 6,
            seed: None,
            vocabulary: INGREDIENT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            export_dir: None,
        }
    }
}

/// The five mutually exclusive top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Landing,
    Camera,
    Preferences,
    Results,
    Dashboard,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Landing,
        View::Camera,
        View::Preferences,
        View::Results,
        View::Dashboard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Landing => "Home",
            View::Camera => "Scanner",
            View::Preferences => "Preferences",
            View::Results => "Recipe",
            View::Dashboard => "Dashboard",
        }
    }

    pub fn index(self) -> usize {
        View::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// Next view in tab order, wrapping around.
    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    ScanStarted,
    ScanProgress {
        percent: u8,
    },
    ScanCompleted {
        ingredients: Vec<String>,
    },
    ScanFailed {
        reason: String,
    },
    Generating,
    RecipeReady,
    Info(InfoEvent),
}

/// Structured info events emitted by the orchestrator and consumed by UI/CLI layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InfoEvent {
    Message(String),
    ScanAlreadyRunning,
    RegenerateAlreadyRunning,
    NoScanToCancel,
}

impl InfoEvent {
    /// Render a human-readable message for UI/CLI layers.
    pub fn to_message(&self) -> String {
        match self {
            InfoEvent::Message(msg) => msg.clone(),
            InfoEvent::ScanAlreadyRunning => "A scan is already in progress".to_string(),
            InfoEvent::RegenerateAlreadyRunning => "Already generating a recipe…".to_string(),
            InfoEvent::NoScanToCancel => "No scan in progress".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_every_view() {
        let mut v = View::Landing;
        let mut seen = Vec::new();
        for _ in 0..View::ALL.len() {
            seen.push(v);
            v = v.next();
        }
        assert_eq!(v, View::Landing);
        assert_eq!(seen, View::ALL.to_vec());
    }

    #[test]
    fn default_config_uses_full_vocabulary() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.vocabulary.len(), 10);
        assert_eq!(cfg.scan_step, 10);
        assert_eq!(cfg.scan_interval, Duration::from_millis(200));
    }

    #[test]
    fn config_serializes_durations_as_humantime() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(json["scan_interval"], "200ms");
        assert_eq!(json["regenerate_delay"], "2s");
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_DURATION_SECS: f64 = 5.0;
pub const DEFAULT_MAX_DURATION_SECS: f64 = 10.0;
pub const DEFAULT_ROTATIONS_PER_SECOND: f64 = 10.0;
pub const DEFAULT_MIN_ROTATIONS: u32 = 50;
pub const DEFAULT_REVEAL_BUFFER_MS: u32 = 200;
pub const MAX_DURATION_SECS: f64 = 60.0;
pub const MAX_REVEAL_BUFFER_MS: u32 = 10_000;
pub const DEFAULT_EASING: &str = "cubic-bezier(0.12, 0.8, 0.2, 1)";

/// Tunables for the spin animation. Every field falls back to its default when
/// missing from the page-provided JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpinSettings {
    pub min_duration_secs: f64,
    pub max_duration_secs: f64,
    pub rotations_per_second: f64,
    pub min_rotations: u32,
    /// Extra wait after the animation duration before the result is revealed.
    pub reveal_buffer_ms: u32,
    pub easing: String,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            min_duration_secs: DEFAULT_MIN_DURATION_SECS,
            max_duration_secs: DEFAULT_MAX_DURATION_SECS,
            rotations_per_second: DEFAULT_ROTATIONS_PER_SECOND,
            min_rotations: DEFAULT_MIN_ROTATIONS,
            reveal_buffer_ms: DEFAULT_REVEAL_BUFFER_MS,
            easing: DEFAULT_EASING.to_string(),
        }
    }
}

impl SpinSettings {
    /// Parses settings from JSON, logging and falling back to defaults on bad input.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<SpinSettings>(raw) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring invalid spin settings: {}", e);
                Self::default()
            }
        }
    }

    /// Repairs values that would make the animation nonsensical.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.min_duration_secs.is_finite() || self.min_duration_secs <= 0.0 {
            self.min_duration_secs = defaults.min_duration_secs;
        }
        if !self.max_duration_secs.is_finite() || self.max_duration_secs <= 0.0 {
            self.max_duration_secs = defaults.max_duration_secs;
        }
        self.min_duration_secs = self.min_duration_secs.min(MAX_DURATION_SECS);
        self.max_duration_secs = self.max_duration_secs.min(MAX_DURATION_SECS);
        if self.max_duration_secs < self.min_duration_secs {
            std::mem::swap(&mut self.min_duration_secs, &mut self.max_duration_secs);
        }
        if !self.rotations_per_second.is_finite() || self.rotations_per_second < 0.0 {
            self.rotations_per_second = defaults.rotations_per_second;
        }
        self.reveal_buffer_ms = self.reveal_buffer_ms.min(MAX_REVEAL_BUFFER_MS);
        if self.easing.trim().is_empty() {
            self.easing = defaults.easing;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = SpinSettings::from_json(r#"{"reveal_buffer_ms": 500}"#);
        assert_eq!(settings.reveal_buffer_ms, 500);
        assert_eq!(settings.min_rotations, DEFAULT_MIN_ROTATIONS);
        assert_eq!(settings.easing, DEFAULT_EASING);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(SpinSettings::from_json("not json"), SpinSettings::default());
    }

    #[test]
    fn test_inverted_duration_range_is_swapped() {
        let settings = SpinSettings::from_json(r#"{"min_duration_secs": 8, "max_duration_secs": 3}"#);
        assert_eq!(settings.min_duration_secs, 3.0);
        assert_eq!(settings.max_duration_secs, 8.0);
    }

    #[test]
    fn test_oversized_values_are_clamped() {
        let settings = SpinSettings::from_json(
            r#"{"min_duration_secs": 5000000, "max_duration_secs": 5000000, "reveal_buffer_ms": 4294967295}"#,
        );
        assert_eq!(settings.min_duration_secs, MAX_DURATION_SECS);
        assert_eq!(settings.max_duration_secs, MAX_DURATION_SECS);
        assert_eq!(settings.reveal_buffer_ms, MAX_REVEAL_BUFFER_MS);
    }
}

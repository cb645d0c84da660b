//! Statement results
//!
//! The outcome of an experience: an optional score plus success/completion
//! flags, the learner's response, how long the experience took, and
//! extension data. Named `ActivityResult` to keep `Result` free for the
//! std error-handling type in importing code.

use serde::{Deserialize, Serialize};

use crate::extensions::Extensions;

// ============================================================================
// Score
// ============================================================================

/// The points scored in an experience
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scaled: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    raw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
}

impl Score {
    /// Create a score with every component absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new score with the scaled value set.
    pub fn with_scaled(&self, scaled: f64) -> Self {
        Self {
            scaled: Some(scaled),
            ..*self
        }
    }

    /// Returns a new score with the raw value set.
    pub fn with_raw(&self, raw: f64) -> Self {
        Self {
            raw: Some(raw),
            ..*self
        }
    }

    /// Returns a new score with the minimum set.
    pub fn with_min(&self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..*self
        }
    }

    /// Returns a new score with the maximum set.
    pub fn with_max(&self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..*self
        }
    }

    pub fn scaled(&self) -> Option<f64> {
        self.scaled
    }

    pub fn raw(&self) -> Option<f64> {
        self.raw
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }
}

// ============================================================================
// ActivityResult
// ============================================================================

/// The measured outcome of a statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extensions: Option<Extensions>,
}

impl ActivityResult {
    /// Create a result with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new result with the score set.
    pub fn with_score(&self, score: Score) -> Self {
        let mut result = self.clone();
        result.score = Some(score);
        result
    }

    /// Returns a new result with the success flag set.
    pub fn with_success(&self, success: bool) -> Self {
        let mut result = self.clone();
        result.success = Some(success);
        result
    }

    /// Returns a new result with the completion flag set.
    pub fn with_completion(&self, completion: bool) -> Self {
        let mut result = self.clone();
        result.completion = Some(completion);
        result
    }

    /// Returns a new result with the learner response set.
    pub fn with_response(&self, response: impl Into<String>) -> Self {
        let mut result = self.clone();
        result.response = Some(response.into());
        result
    }

    /// Returns a new result with the ISO 8601 duration text set.
    pub fn with_duration(&self, duration: impl Into<String>) -> Self {
        let mut result = self.clone();
        result.duration = Some(duration.into());
        result
    }

    /// Returns a new result with the extensions set.
    pub fn with_extensions(&self, extensions: Extensions) -> Self {
        let mut result = self.clone();
        result.extensions = Some(extensions);
        result
    }

    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    pub fn success(&self) -> Option<bool> {
        self.success
    }

    pub fn completion(&self) -> Option<bool> {
        self.completion
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }
}

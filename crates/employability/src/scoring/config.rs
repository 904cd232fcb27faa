use serde::{Deserialize, Serialize};

use super::policy::ScoreCategory;

/// Soft-skill level points at which Foundational saturates (three level-4 skills).
pub const FOUNDATIONAL_TARGET_POINTS: f64 = 12.0;
/// Soft-skill level points at which 21st Century saturates.
pub const CENTURY21_TARGET_POINTS: f64 = 12.0;
/// Share of an untagged soft skill's level credited to each soft-skill category.
pub const UNCLASSIFIED_SOFT_SKILL_SHARE: f64 = 0.5;

/// Technical-skill points at which Digital saturates (four verified level-4 skills).
pub const DIGITAL_TARGET_POINTS: f64 = 20.0;
pub const VERIFIED_SKILL_MULTIPLIER: f64 = 1.25;

/// Portion of Behavior driven by the training completion ratio.
pub const COMPLETION_SHARE: f64 = 70.0;
/// Portion of Behavior driven by sustained enrolment.
pub const CONSISTENCY_SHARE: f64 = 30.0;
pub const CONSISTENCY_TARGET_ENTRIES: usize = 4;

pub const EXPERIENCE_FIRST_ENTRY_POINTS: f64 = 25.0;
pub const CERTIFICATE_FIRST_ENTRY_POINTS: f64 = 15.0;
pub const EDUCATION_FIRST_ENTRY_POINTS: f64 = 20.0;
/// Each further entry of the same kind is worth this fraction of the previous one.
pub const CAREER_DECAY: f64 = 0.5;

pub const EXCELLENT_THRESHOLD: u8 = 85;
pub const GOOD_THRESHOLD: u8 = 70;
pub const MODERATE_THRESHOLD: u8 = 50;

/// Category weights applied to the breakdown. Must sum to 1.0.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    foundational: 0.20,
    century21: 0.20,
    digital: 0.25,
    behavior: 0.15,
    career: 0.20,
};

const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub foundational: f64,
    pub century21: f64,
    pub digital: f64,
    pub behavior: f64,
    pub career: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.foundational + self.century21 + self.digital + self.behavior + self.career
    }

    pub fn is_normalized(&self) -> bool {
        let all_valid = ScoreCategory::PRIORITY
            .iter()
            .map(|category| self.weight(*category))
            .all(|weight| weight.is_finite() && weight >= 0.0);
        all_valid && (self.sum() - 1.0).abs() < WEIGHT_TOLERANCE
    }

    pub fn weight(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Foundational => self.foundational,
            ScoreCategory::Century21 => self.century21,
            ScoreCategory::Digital => self.digital,
            ScoreCategory::Behavior => self.behavior,
            ScoreCategory::Career => self.career,
        }
    }

    pub fn set_weight(&mut self, category: ScoreCategory, weight: f64) {
        match category {
            ScoreCategory::Foundational => self.foundational = weight,
            ScoreCategory::Century21 => self.century21 = weight,
            ScoreCategory::Digital => self.digital = weight,
            ScoreCategory::Behavior => self.behavior = weight,
            ScoreCategory::Career => self.career = weight,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

//! Employability score aggregation.
//!
//! [`EmployabilityCalculator`] is a stateless value: it holds the category weights and
//! maps a [`StudentProfile`] to a [`ScoreResult`] without I/O or shared state. Results are
//! recomputed on every call; callers that want memoization key it on the profile value.

mod cohort;
mod config;
mod insights;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use cohort::{CategoryAverage, CohortExportError, CohortSummary, LevelCount, StudentScore};
pub use config::{
    ScoringWeights, CAREER_DECAY, CENTURY21_TARGET_POINTS, CERTIFICATE_FIRST_ENTRY_POINTS,
    COMPLETION_SHARE, CONSISTENCY_SHARE, CONSISTENCY_TARGET_ENTRIES, DEFAULT_WEIGHTS,
    DIGITAL_TARGET_POINTS, EDUCATION_FIRST_ENTRY_POINTS, EXCELLENT_THRESHOLD,
    EXPERIENCE_FIRST_ENTRY_POINTS, FOUNDATIONAL_TARGET_POINTS, GOOD_THRESHOLD,
    MODERATE_THRESHOLD, UNCLASSIFIED_SOFT_SKILL_SHARE, VERIFIED_SKILL_MULTIPLIER,
};
pub use insights::ScoreInsights;
pub use policy::{EmployabilityLevel, FocusArea, ScoreCategory};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::profile::{normalize_document, NormalizationReport, StudentDocument, StudentProfile};
use policy::select_focus_area;

/// Stateless scorer applying the category weights to a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployabilityCalculator {
    weights: ScoringWeights,
}

impl Default for EmployabilityCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS)
    }
}

impl EmployabilityCalculator {
    /// Weights that are negative, non-finite or do not sum to 1.0 fall back to the defaults.
    pub fn new(weights: ScoringWeights) -> Self {
        let weights = if weights.is_normalized() {
            weights
        } else {
            warn!(?weights, "scoring weights are not normalized; using defaults");
            DEFAULT_WEIGHTS
        };

        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, profile: &StudentProfile) -> ScoreResult {
        if profile.is_empty() {
            return ScoreResult::not_started();
        }

        let breakdown = rules::score_breakdown(profile);
        let weighted: f64 = ScoreCategory::PRIORITY
            .iter()
            .map(|category| self.weights.weight(*category) * f64::from(breakdown.get(*category)))
            .sum();
        let employability_score = rules::to_category_score(weighted);

        let level = EmployabilityLevel::from_score(employability_score);
        let focus_area = select_focus_area(&breakdown, employability_score);

        ScoreResult {
            employability_score,
            level,
            label: level.label(),
            focus_area,
            breakdown,
        }
    }

    /// Normalize a stored profile document and score it.
    pub fn score_document(&self, document: &Value) -> DocumentScore {
        let normalized = normalize_document(document);
        DocumentScore {
            result: self.score(&normalized.profile),
            normalization: normalized.report,
        }
    }

    /// Scores imported students in input order.
    pub fn score_cohort(&self, students: &[StudentDocument]) -> Vec<StudentScore> {
        students
            .iter()
            .map(|student| StudentScore {
                student_id: student.student_id.clone(),
                result: self.score(&student.normalized.profile),
            })
            .collect()
    }
}

/// Per-category sub-scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Breakdown {
    pub foundational: u8,
    pub century21: u8,
    pub digital: u8,
    pub behavior: u8,
    pub career: u8,
}

impl Breakdown {
    pub fn get(&self, category: ScoreCategory) -> u8 {
        match category {
            ScoreCategory::Foundational => self.foundational,
            ScoreCategory::Century21 => self.century21,
            ScoreCategory::Digital => self.digital,
            ScoreCategory::Behavior => self.behavior,
            ScoreCategory::Career => self.career,
        }
    }

    /// Categories with their scores in priority order.
    pub fn entries(&self) -> impl Iterator<Item = (ScoreCategory, u8)> + '_ {
        ScoreCategory::PRIORITY
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }
}

/// Score projection handed to presentation components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub employability_score: u8,
    pub level: EmployabilityLevel,
    pub label: &'static str,
    pub focus_area: FocusArea,
    pub breakdown: Breakdown,
}

impl ScoreResult {
    /// Result shown before any profile data exists.
    pub fn not_started() -> Self {
        let level = EmployabilityLevel::NotStarted;
        Self {
            employability_score: 0,
            level,
            label: level.label(),
            focus_area: FocusArea::AllAreas,
            breakdown: Breakdown::default(),
        }
    }

    pub fn insights(&self) -> ScoreInsights {
        insights::generate_insights(self)
    }
}

/// Score for a raw document together with what normalization discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentScore {
    pub result: ScoreResult,
    pub normalization: NormalizationReport,
}

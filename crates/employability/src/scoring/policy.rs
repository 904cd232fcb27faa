use serde::{Deserialize, Serialize, Serializer};

use super::config::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD, MODERATE_THRESHOLD};
use super::Breakdown;

/// The five breakdown categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Foundational,
    #[serde(rename = "century21")]
    Century21,
    Digital,
    Behavior,
    Career,
}

impl ScoreCategory {
    /// Tie-break order used when picking the focus area.
    pub const PRIORITY: [ScoreCategory; 5] = [
        ScoreCategory::Foundational,
        ScoreCategory::Century21,
        ScoreCategory::Digital,
        ScoreCategory::Behavior,
        ScoreCategory::Career,
    ];

    /// Display name shown to students.
    pub const fn name(self) -> &'static str {
        match self {
            ScoreCategory::Foundational => "Foundational",
            ScoreCategory::Century21 => "21st Century",
            ScoreCategory::Digital => "Digital",
            ScoreCategory::Behavior => "Behavior",
            ScoreCategory::Career => "Career",
        }
    }

    /// Column name for this category in cohort CSV exports.
    pub const fn key(self) -> &'static str {
        match self {
            ScoreCategory::Foundational => "foundational",
            ScoreCategory::Century21 => "century21",
            ScoreCategory::Digital => "digital",
            ScoreCategory::Behavior => "behavior",
            ScoreCategory::Career => "career",
        }
    }
}

/// Qualitative employability level, a step function of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployabilityLevel {
    Excellent,
    Good,
    Moderate,
    #[serde(rename = "Needs Support")]
    NeedsSupport,
    #[serde(rename = "Not Started")]
    NotStarted,
}

impl EmployabilityLevel {
    /// Highest level first.
    pub const ALL: [EmployabilityLevel; 5] = [
        EmployabilityLevel::Excellent,
        EmployabilityLevel::Good,
        EmployabilityLevel::Moderate,
        EmployabilityLevel::NeedsSupport,
        EmployabilityLevel::NotStarted,
    ];

    pub const fn from_score(score: u8) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else if score > 0 {
            Self::NeedsSupport
        } else {
            Self::NotStarted
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::NeedsSupport => "Needs Support",
            Self::NotStarted => "Not Started",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Highly Employable",
            Self::Good => "Job Ready",
            Self::Moderate => "Developing",
            Self::NeedsSupport => "Building Foundations",
            Self::NotStarted => "Getting Started",
        }
    }

    /// Minimum score for this level.
    pub const fn threshold(self) -> u8 {
        match self {
            Self::Excellent => EXCELLENT_THRESHOLD,
            Self::Good => GOOD_THRESHOLD,
            Self::Moderate => MODERATE_THRESHOLD,
            Self::NeedsSupport => 1,
            Self::NotStarted => 0,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Excellent => None,
            Self::Good => Some(Self::Excellent),
            Self::Moderate => Some(Self::Good),
            Self::NeedsSupport => Some(Self::Moderate),
            Self::NotStarted => Some(Self::NeedsSupport),
        }
    }
}

/// Weakest category, or every category when none stands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusArea {
    Category(ScoreCategory),
    AllAreas,
}

impl FocusArea {
    pub const fn name(self) -> &'static str {
        match self {
            FocusArea::Category(category) => category.name(),
            FocusArea::AllAreas => "All Areas",
        }
    }

    pub const fn category(self) -> Option<ScoreCategory> {
        match self {
            FocusArea::Category(category) => Some(category),
            FocusArea::AllAreas => None,
        }
    }
}

impl Serialize for FocusArea {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

pub(crate) fn select_focus_area(breakdown: &Breakdown, employability_score: u8) -> FocusArea {
    if employability_score == 0 {
        return FocusArea::AllAreas;
    }

    let first = breakdown.get(ScoreCategory::PRIORITY[0]);
    if ScoreCategory::PRIORITY
        .iter()
        .all(|category| breakdown.get(*category) == first)
    {
        return FocusArea::AllAreas;
    }

    // min_by_key keeps the first minimum, which is the priority order.
    ScoreCategory::PRIORITY
        .iter()
        .copied()
        .min_by_key(|category| breakdown.get(*category))
        .map(FocusArea::Category)
        .unwrap_or(FocusArea::AllAreas)
}

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Skill levels accepted by the scoring rubric. Anything outside is treated as malformed.
pub const SKILL_LEVEL_RANGE: RangeInclusive<i32> = 1..=5;

/// Canonical student profile consumed by the calculator.
///
/// Every section may be missing from a stored document; absent sections deserialize empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(default)]
    pub technical_skills: Vec<TechnicalSkill>,
    #[serde(default)]
    pub soft_skills: Vec<SoftSkill>,
    #[serde(default)]
    pub training: Vec<TrainingRecord>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub certificates: Vec<CertificateRecord>,
}

impl StudentProfile {
    pub fn is_empty(&self) -> bool {
        self.technical_skills.is_empty()
            && self.soft_skills.is_empty()
            && self.training.is_empty()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.certificates.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalSkill {
    pub name: String,
    pub level: i32,
    #[serde(default)]
    pub verified: bool,
}

impl TechnicalSkill {
    pub fn is_scorable(&self) -> bool {
        !self.name.trim().is_empty() && SKILL_LEVEL_RANGE.contains(&self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftSkill {
    pub name: String,
    pub level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SoftSkillCategory>,
}

impl SoftSkill {
    pub fn is_scorable(&self) -> bool {
        !self.name.trim().is_empty() && SKILL_LEVEL_RANGE.contains(&self.level)
    }

    /// Explicit tag first, then keywords in the skill name.
    pub fn resolved_category(&self) -> Option<SoftSkillCategory> {
        self.category
            .or_else(|| SoftSkillCategory::infer_from_name(&self.name))
    }
}

/// Competency tags the portal attaches to soft skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftSkillCategory {
    Communication,
    Comprehension,
    CriticalThinking,
    Collaboration,
    Creativity,
    ProblemSolving,
}

/// Which scoring category a soft skill feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetencyGroup {
    Foundational,
    Century21,
}

const CATEGORY_KEYWORDS: &[(&str, SoftSkillCategory)] = &[
    ("communicat", SoftSkillCategory::Communication),
    ("presentation", SoftSkillCategory::Communication),
    ("public speaking", SoftSkillCategory::Communication),
    ("writing", SoftSkillCategory::Communication),
    ("listening", SoftSkillCategory::Communication),
    ("comprehension", SoftSkillCategory::Comprehension),
    ("reading", SoftSkillCategory::Comprehension),
    ("numeracy", SoftSkillCategory::Comprehension),
    ("critical", SoftSkillCategory::CriticalThinking),
    ("analytical", SoftSkillCategory::CriticalThinking),
    ("reasoning", SoftSkillCategory::CriticalThinking),
    ("team", SoftSkillCategory::Collaboration),
    ("collaborat", SoftSkillCategory::Collaboration),
    ("leadership", SoftSkillCategory::Collaboration),
    ("interpersonal", SoftSkillCategory::Collaboration),
    ("creativ", SoftSkillCategory::Creativity),
    ("innovat", SoftSkillCategory::Creativity),
    ("design thinking", SoftSkillCategory::Creativity),
    ("problem", SoftSkillCategory::ProblemSolving),
    ("adaptab", SoftSkillCategory::ProblemSolving),
    ("decision", SoftSkillCategory::ProblemSolving),
];

impl SoftSkillCategory {
    pub const fn group(self) -> CompetencyGroup {
        match self {
            Self::Communication | Self::Comprehension | Self::CriticalThinking => {
                CompetencyGroup::Foundational
            }
            Self::Collaboration | Self::Creativity | Self::ProblemSolving => {
                CompetencyGroup::Century21
            }
        }
    }

    /// Parses a stored tag such as `"critical-thinking"` or `"Problem Solving"`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized: String = tag
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|ch| if ch == '-' || ch == ' ' { '_' } else { ch })
            .collect();

        match normalized.as_str() {
            "communication" => Some(Self::Communication),
            "comprehension" => Some(Self::Comprehension),
            "critical_thinking" | "critical" => Some(Self::CriticalThinking),
            "collaboration" | "teamwork" => Some(Self::Collaboration),
            "creativity" => Some(Self::Creativity),
            "problem_solving" => Some(Self::ProblemSolving),
            _ => None,
        }
    }

    pub fn infer_from_name(name: &str) -> Option<Self> {
        let lowered = name.to_ascii_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, category)| *category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub course: String,
    pub status: TrainingStatus,
    /// Percent complete for ongoing courses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl TrainingRecord {
    pub fn is_scorable(&self) -> bool {
        !self.course.trim().is_empty()
    }

    /// Completion credit in `[0, 1]`.
    pub fn completion(&self) -> f64 {
        match self.status {
            TrainingStatus::Completed => 1.0,
            TrainingStatus::Ongoing => f64::from(self.progress.unwrap_or(0).min(100)) / 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    Ongoing,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub university: String,
}

impl EducationRecord {
    pub fn is_scorable(&self) -> bool {
        !self.degree.trim().is_empty() || !self.university.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub organization: String,
}

impl ExperienceRecord {
    pub fn is_scorable(&self) -> bool {
        !self.role.trim().is_empty() || !self.organization.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub title: String,
    #[serde(default = "certificate_enabled_default")]
    pub enabled: bool,
}

fn certificate_enabled_default() -> bool {
    true
}

impl CertificateRecord {
    pub fn is_scorable(&self) -> bool {
        self.enabled && !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_categories_from_common_skill_names() {
        assert_eq!(
            SoftSkillCategory::infer_from_name("Communication"),
            Some(SoftSkillCategory::Communication)
        );
        assert_eq!(
            SoftSkillCategory::infer_from_name("Teamwork"),
            Some(SoftSkillCategory::Collaboration)
        );
        assert_eq!(
            SoftSkillCategory::infer_from_name("Creative Problem Solving"),
            Some(SoftSkillCategory::Creativity)
        );
        assert_eq!(SoftSkillCategory::infer_from_name("Punctuality"), None);
    }

    #[test]
    fn explicit_tag_wins_over_name() {
        let skill = SoftSkill {
            name: "Team presentations".to_string(),
            level: 3,
            category: SoftSkillCategory::from_tag("critical-thinking"),
        };
        assert_eq!(
            skill.resolved_category(),
            Some(SoftSkillCategory::CriticalThinking)
        );
    }

    #[test]
    fn out_of_range_levels_are_not_scorable() {
        let skill = TechnicalSkill {
            name: "Rust".to_string(),
            level: -2,
            verified: true,
        };
        assert!(!skill.is_scorable());

        let skill = TechnicalSkill {
            name: "  ".to_string(),
            level: 3,
            verified: false,
        };
        assert!(!skill.is_scorable());
    }

    #[test]
    fn partial_documents_deserialize_with_empty_sections() {
        let profile: StudentProfile = serde_json::from_str(
            r#"{"technicalSkills":[{"name":"SQL","level":2}]}"#,
        )
        .expect("partial profile parses");

        assert_eq!(profile.technical_skills.len(), 1);
        assert!(!profile.technical_skills[0].verified);
        assert!(profile.soft_skills.is_empty());
        assert!(profile.certificates.is_empty());
    }

    #[test]
    fn ongoing_training_earns_partial_completion() {
        let record = TrainingRecord {
            course: "Data Analytics".to_string(),
            status: TrainingStatus::Ongoing,
            progress: Some(40),
        };
        assert!((record.completion() - 0.4).abs() < f64::EPSILON);
    }
}

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::domain::{
    CertificateRecord, EducationRecord, ExperienceRecord, SoftSkill, SoftSkillCategory,
    StudentProfile, TechnicalSkill, TrainingRecord, TrainingStatus, SKILL_LEVEL_RANGE,
};

/// Counts of items dropped while normalizing a stored document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationReport {
    pub dropped_technical_skills: usize,
    pub dropped_soft_skills: usize,
    pub dropped_training: usize,
    pub dropped_education: usize,
    pub dropped_experience: usize,
    pub dropped_certificates: usize,
}

impl NormalizationReport {
    pub fn total_dropped(&self) -> usize {
        self.dropped_technical_skills
            + self.dropped_soft_skills
            + self.dropped_training
            + self.dropped_education
            + self.dropped_experience
            + self.dropped_certificates
    }
}

/// Canonical profile plus the audit of what normalization discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedProfile {
    pub profile: StudentProfile,
    pub report: NormalizationReport,
}

/// Convert a stored profile document into the canonical [`StudentProfile`].
///
/// Sections are looked up on the document itself and then under a nested `profile`
/// object, accepting camelCase and snake_case keys. Items missing a name or carrying a
/// non-numeric level are dropped and counted; the conversion itself never fails.
pub fn normalize_document(document: &Value) -> NormalizedProfile {
    let mut report = NormalizationReport::default();

    let technical_skills = collect(
        section(document, &["technicalSkills", "technical_skills"]),
        "technical skill",
        &mut report.dropped_technical_skills,
        technical_skill,
    );
    let soft_skills = collect(
        section(document, &["softSkills", "soft_skills"]),
        "soft skill",
        &mut report.dropped_soft_skills,
        soft_skill,
    );
    let training = collect(
        section(document, &["training", "trainings"]),
        "training",
        &mut report.dropped_training,
        training_record,
    );
    let education = collect(
        section(document, &["education"]),
        "education",
        &mut report.dropped_education,
        education_record,
    );
    let experience = collect(
        section(document, &["experience", "experiences"]),
        "experience",
        &mut report.dropped_experience,
        experience_record,
    );
    let certificates = collect(
        section(document, &["certificates"]),
        "certificate",
        &mut report.dropped_certificates,
        certificate_record,
    );

    NormalizedProfile {
        profile: StudentProfile {
            technical_skills,
            soft_skills,
            training,
            education,
            experience,
            certificates,
        },
        report,
    }
}

fn collect<T>(
    items: &[Value],
    kind: &'static str,
    dropped: &mut usize,
    convert: fn(&Map<String, Value>) -> Option<T>,
) -> Vec<T> {
    let mut converted = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_object().and_then(convert) {
            Some(value) => converted.push(value),
            None => {
                *dropped += 1;
                debug!(kind, index, "dropping malformed profile item");
            }
        }
    }
    converted
}

fn section<'a>(document: &'a Value, keys: &[&str]) -> &'a [Value] {
    let nested = document.get("profile").filter(|value| value.is_object());
    let containers = std::iter::once(Some(document)).chain(std::iter::once(nested));

    for container in containers.flatten() {
        for key in keys {
            match container.get(*key) {
                Some(Value::Array(items)) => return items,
                Some(Value::Null) | None => {}
                Some(_) => {
                    debug!(section = *key, "profile section is not an array; skipping");
                }
            }
        }
    }

    &[]
}

fn text(item: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| item.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn level(item: &Map<String, Value>) -> Option<i32> {
    let raw = match item.get("level")? {
        Value::Number(number) => number
            .as_i64()
            .map(|value| value as f64)
            .or_else(|| number.as_f64())?,
        Value::String(value) => value.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !raw.is_finite() {
        return None;
    }

    Some(raw.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}

/// Levels that round outside the skill range are malformed, like non-numeric ones.
fn scorable_level(item: &Map<String, Value>) -> Option<i32> {
    level(item).filter(|value| SKILL_LEVEL_RANGE.contains(value))
}

fn flag(item: &Map<String, Value>, key: &str) -> Option<bool> {
    match item.get(key)? {
        Value::Bool(value) => Some(*value),
        Value::String(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        Value::Number(number) => number.as_i64().map(|value| value != 0),
        _ => None,
    }
}

fn technical_skill(item: &Map<String, Value>) -> Option<TechnicalSkill> {
    Some(TechnicalSkill {
        name: text(item, &["name", "skill"])?,
        level: scorable_level(item)?,
        verified: flag(item, "verified").unwrap_or(false),
    })
}

fn soft_skill(item: &Map<String, Value>) -> Option<SoftSkill> {
    let category = ["category", "type"]
        .iter()
        .filter_map(|key| item.get(*key))
        .filter_map(Value::as_str)
        .find_map(SoftSkillCategory::from_tag);

    Some(SoftSkill {
        name: text(item, &["name", "skill"])?,
        level: scorable_level(item)?,
        category,
    })
}

fn training_record(item: &Map<String, Value>) -> Option<TrainingRecord> {
    let course = text(item, &["course", "title", "name"])?;
    let status = match text(item, &["status"]).map(|status| status.to_ascii_lowercase()) {
        Some(status) if matches!(status.as_str(), "completed" | "complete" | "done") => {
            TrainingStatus::Completed
        }
        _ => TrainingStatus::Ongoing,
    };
    let progress = item
        .get("progress")
        .and_then(Value::as_f64)
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0).round() as u8);

    Some(TrainingRecord {
        course,
        status,
        progress,
    })
}

fn education_record(item: &Map<String, Value>) -> Option<EducationRecord> {
    let degree = text(item, &["degree", "program", "course"]);
    let university = text(item, &["university", "institution", "school"]);
    if degree.is_none() && university.is_none() {
        return None;
    }

    Some(EducationRecord {
        degree: degree.unwrap_or_default(),
        university: university.unwrap_or_default(),
    })
}

fn experience_record(item: &Map<String, Value>) -> Option<ExperienceRecord> {
    let role = text(item, &["role", "position", "title"]);
    let organization = text(item, &["organization", "company", "employer"]);
    if role.is_none() && organization.is_none() {
        return None;
    }

    Some(ExperienceRecord {
        role: role.unwrap_or_default(),
        organization: organization.unwrap_or_default(),
    })
}

fn certificate_record(item: &Map<String, Value>) -> Option<CertificateRecord> {
    Some(CertificateRecord {
        title: text(item, &["title", "name"])?,
        enabled: flag(item, "enabled").unwrap_or(true),
    })
}

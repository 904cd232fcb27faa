use tracing::debug;

use crate::profile::{CompetencyGroup, StudentProfile};

use super::config::{
    CAREER_DECAY, CENTURY21_TARGET_POINTS, CERTIFICATE_FIRST_ENTRY_POINTS, COMPLETION_SHARE,
    CONSISTENCY_SHARE, CONSISTENCY_TARGET_ENTRIES, DIGITAL_TARGET_POINTS,
    EDUCATION_FIRST_ENTRY_POINTS, EXPERIENCE_FIRST_ENTRY_POINTS, FOUNDATIONAL_TARGET_POINTS,
    UNCLASSIFIED_SOFT_SKILL_SHARE, VERIFIED_SKILL_MULTIPLIER,
};
use super::Breakdown;

pub(crate) fn score_breakdown(profile: &StudentProfile) -> Breakdown {
    let (foundational_points, century21_points) = soft_skill_points(profile);

    Breakdown {
        foundational: to_category_score(saturate(foundational_points, FOUNDATIONAL_TARGET_POINTS)),
        century21: to_category_score(saturate(century21_points, CENTURY21_TARGET_POINTS)),
        digital: to_category_score(digital_score(profile)),
        behavior: to_category_score(behavior_score(profile)),
        career: to_category_score(career_score(profile)),
    }
}

/// Clamp to `[0, 100]` and round; non-finite input scores zero.
pub(crate) fn to_category_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}

fn saturate(points: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (points / target * 100.0).min(100.0)
}

fn soft_skill_points(profile: &StudentProfile) -> (f64, f64) {
    let mut foundational = 0.0;
    let mut century21 = 0.0;

    for (index, skill) in profile.soft_skills.iter().enumerate() {
        if !skill.is_scorable() {
            debug!(index, level = skill.level, "skipping soft skill");
            continue;
        }

        let level = f64::from(skill.level);
        match skill.resolved_category().map(|category| category.group()) {
            Some(CompetencyGroup::Foundational) => foundational += level,
            Some(CompetencyGroup::Century21) => century21 += level,
            None => {
                foundational += level * UNCLASSIFIED_SOFT_SKILL_SHARE;
                century21 += level * UNCLASSIFIED_SOFT_SKILL_SHARE;
            }
        }
    }

    (foundational, century21)
}

/// Sum of levels (count times average level), verified skills boosted.
fn digital_score(profile: &StudentProfile) -> f64 {
    let points: f64 = profile
        .technical_skills
        .iter()
        .enumerate()
        .filter(|(index, skill)| {
            let scorable = skill.is_scorable();
            if !scorable {
                debug!(index, level = skill.level, "skipping technical skill");
            }
            scorable
        })
        .map(|(_, skill)| {
            let multiplier = if skill.verified {
                VERIFIED_SKILL_MULTIPLIER
            } else {
                1.0
            };
            f64::from(skill.level) * multiplier
        })
        .sum();

    saturate(points, DIGITAL_TARGET_POINTS)
}

fn behavior_score(profile: &StudentProfile) -> f64 {
    let scorable: Vec<_> = profile
        .training
        .iter()
        .filter(|record| record.is_scorable())
        .collect();

    if scorable.is_empty() {
        return 0.0;
    }

    let total = scorable.len() as f64;
    let completion: f64 = scorable.iter().map(|record| record.completion()).sum();
    let completion_ratio = (completion / total).clamp(0.0, 1.0);
    let consistency =
        scorable.len().min(CONSISTENCY_TARGET_ENTRIES) as f64 / CONSISTENCY_TARGET_ENTRIES as f64;

    completion_ratio * COMPLETION_SHARE + consistency * CONSISTENCY_SHARE
}

fn career_score(profile: &StudentProfile) -> f64 {
    let experience = profile
        .experience
        .iter()
        .filter(|record| record.is_scorable())
        .count();
    let certificates = profile
        .certificates
        .iter()
        .filter(|record| record.is_scorable())
        .count();
    let education = profile
        .education
        .iter()
        .filter(|record| record.is_scorable())
        .count();

    diminishing_points(experience, EXPERIENCE_FIRST_ENTRY_POINTS)
        + diminishing_points(certificates, CERTIFICATE_FIRST_ENTRY_POINTS)
        + diminishing_points(education, EDUCATION_FIRST_ENTRY_POINTS)
}

/// Geometric series: entry `n` is worth `first * CAREER_DECAY^n`.
pub(crate) fn diminishing_points(entries: usize, first_entry_points: f64) -> f64 {
    let mut total = 0.0;
    let mut value = first_entry_points;
    // Past a few dozen entries the terms are below rounding precision.
    for _ in 0..entries.min(64) {
        total += value;
        value *= CAREER_DECAY;
    }
    total
}

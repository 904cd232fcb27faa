use serde::Serialize;

use super::policy::{EmployabilityLevel, FocusArea, ScoreCategory};
use super::ScoreResult;

/// Categories below this score are called out as gaps.
const GAP_THRESHOLD: u8 = 40;
/// Categories at or above this score are called out as strengths.
const STRENGTH_THRESHOLD: u8 = 75;

/// Guidance derived from a score, telling the student where to improve next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInsights {
    pub focus_area: FocusArea,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_area_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level: Option<EmployabilityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_to_next_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}

pub(crate) fn generate_insights(result: &ScoreResult) -> ScoreInsights {
    let focus_area = result.focus_area;
    let focus_area_score = focus_area
        .category()
        .map(|category| result.breakdown.get(category));

    let next_level = result.level.next();
    let points_to_next_level =
        next_level.map(|level| level.threshold().saturating_sub(result.employability_score));

    let strengths: Vec<&'static str> = result
        .breakdown
        .entries()
        .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
        .map(|(category, _)| category.name())
        .collect();

    let gaps: Vec<(ScoreCategory, u8)> = result
        .breakdown
        .entries()
        .filter(|(_, score)| *score < GAP_THRESHOLD)
        .collect();

    let mut observations = Vec::new();
    if result.level == EmployabilityLevel::NotStarted {
        observations
            .push("No scorable profile data yet; add skills, training or experience".to_string());
    } else {
        observations.push(format!(
            "Employability score {} ({})",
            result.employability_score,
            result.level.name()
        ));
    }

    if let (Some(level), Some(points)) = (next_level, points_to_next_level) {
        if result.level != EmployabilityLevel::NotStarted {
            observations.push(format!(
                "{} point{} away from {}",
                points,
                if points == 1 { "" } else { "s" },
                level.name()
            ));
        }
    }

    if !gaps.is_empty() && result.level != EmployabilityLevel::NotStarted {
        let names: Vec<&str> = gaps.iter().map(|(category, _)| category.name()).collect();
        observations.push(format!(
            "{} categor{} below {}: {}",
            gaps.len(),
            if gaps.len() == 1 { "y" } else { "ies" },
            GAP_THRESHOLD,
            names.join(", ")
        ));
    }

    let mut recommended_actions = Vec::new();
    match focus_area {
        FocusArea::Category(category) => {
            recommended_actions.extend(actions_for(category).iter().map(|a| a.to_string()));
        }
        FocusArea::AllAreas => {
            if result.level == EmployabilityLevel::NotStarted {
                recommended_actions
                    .push("Complete your profile: skills, education and training".to_string());
            } else {
                recommended_actions.push(
                    "Progress is balanced; raise every category together with a capstone project"
                        .to_string(),
                );
            }
        }
    }

    for (category, _) in gaps
        .iter()
        .filter(|(category, _)| focus_area.category() != Some(*category))
        .take(2)
    {
        if let Some(action) = actions_for(*category).first() {
            recommended_actions.push(action.to_string());
        }
    }

    ScoreInsights {
        focus_area,
        focus_area_score,
        next_level,
        points_to_next_level,
        strengths,
        observations,
        recommended_actions,
    }
}

fn actions_for(category: ScoreCategory) -> &'static [&'static str] {
    match category {
        ScoreCategory::Foundational => &[
            "Practice communication through presentations or writing assignments",
            "Take a comprehension or critical-thinking workshop",
        ],
        ScoreCategory::Century21 => &[
            "Join a team project or club to build collaboration skills",
            "Enter a hackathon or design challenge to exercise creativity and problem solving",
        ],
        ScoreCategory::Digital => &[
            "Add technical skills and get them verified through assessments",
            "Deepen one core technical skill to an advanced level",
        ],
        ScoreCategory::Behavior => &[
            "Finish ongoing training courses to raise your completion rate",
            "Enrol in a structured learning path and keep a steady pace",
        ],
        ScoreCategory::Career => &[
            "Apply for an internship or part-time role",
            "Earn an industry certificate and add it to your profile",
        ],
    }
}

use super::common::*;
use crate::profile::StudentProfile;
use crate::scoring::{EmployabilityLevel, FocusArea, ScoreCategory};

#[test]
fn insights_point_at_the_focus_area() {
    let insights = calculator().score(&scenario_profile()).insights();

    assert_eq!(
        insights.focus_area,
        FocusArea::Category(ScoreCategory::Foundational)
    );
    assert_eq!(insights.focus_area_score, Some(33));
    assert_eq!(insights.next_level, Some(EmployabilityLevel::Moderate));
    assert_eq!(insights.points_to_next_level, Some(4));
    assert!(insights.strengths.contains(&"Behavior"));
    assert!(insights.recommended_actions[0].contains("communication"));
    assert!(insights
        .observations
        .iter()
        .any(|observation| observation.contains("4 points away from Moderate")));
}

#[test]
fn empty_profile_insights_ask_for_profile_data() {
    let insights = calculator().score(&StudentProfile::default()).insights();

    assert_eq!(insights.focus_area, FocusArea::AllAreas);
    assert_eq!(insights.focus_area_score, None);
    assert_eq!(insights.next_level, Some(EmployabilityLevel::NeedsSupport));
    assert!(insights.strengths.is_empty());
    assert!(insights.recommended_actions[0].contains("Complete your profile"));
}

#[test]
fn excellent_profiles_have_no_next_level() {
    let insights = calculator().score(&saturated_profile()).insights();

    assert_eq!(insights.next_level, None);
    assert_eq!(insights.points_to_next_level, None);
    assert_eq!(insights.strengths.len(), 5);
    assert!(insights.recommended_actions[0].contains("internship"));
}

#[test]
fn secondary_gaps_add_recommendations() {
    let profile = StudentProfile {
        technical_skills: vec![technical("Excel", 5, true)],
        ..StudentProfile::default()
    };

    let insights = calculator().score(&profile).insights();

    // Foundational is the focus; 21st Century and Digital are the next gaps.
    assert_eq!(insights.recommended_actions.len(), 4);
    assert!(insights
        .recommended_actions
        .iter()
        .any(|action| action.contains("team project")));
}

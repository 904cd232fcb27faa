use employability::profile::ProfileImporter;
use employability::scoring::{
    CohortSummary, EmployabilityCalculator, EmployabilityLevel, FocusArea, ScoreCategory,
};
use serde_json::{json, Value};

fn scenario_document() -> Value {
    json!({
        "id": "stu-042",
        "technicalSkills": [
            { "name": "JS", "level": 4, "verified": true },
            { "name": "React", "level": 3 }
        ],
        "softSkills": [
            { "name": "Communication", "level": 4 },
            { "name": "Teamwork", "level": 5 }
        ],
        "training": [{ "course": "Full Stack Bootcamp", "status": "completed" }],
        "education": [{ "degree": "B.Tech Computer Science", "university": "State University" }],
        "experience": [{ "role": "Frontend Intern", "organization": "Acme Labs" }]
    })
}

#[test]
fn stored_document_scores_like_the_canonical_profile() {
    let calculator = EmployabilityCalculator::default();
    let scored = calculator.score_document(&scenario_document());

    assert_eq!(scored.normalization.total_dropped(), 0);
    assert_eq!(scored.result.employability_score, 46);
    assert_eq!(scored.result.level, EmployabilityLevel::NeedsSupport);
    assert_eq!(
        scored.result.focus_area,
        FocusArea::Category(ScoreCategory::Foundational)
    );

    let insights = scored.result.insights();
    assert_eq!(insights.next_level, Some(EmployabilityLevel::Moderate));
    assert_eq!(insights.points_to_next_level, Some(4));
    assert!(insights.strengths.contains(&"Behavior"));
}

#[test]
fn legacy_snake_case_documents_are_accepted() {
    let legacy = json!({
        "student_id": "legacy-7",
        "profile": {
            "technical_skills": [
                { "skill": "JS", "level": "4", "verified": "true" },
                { "skill": "React", "level": 3.0 }
            ],
            "soft_skills": [
                { "name": "Communication", "level": 4 },
                { "name": "Teamwork", "level": 5 }
            ],
            "trainings": [{ "title": "Full Stack Bootcamp", "status": "Completed" }],
            "education": [{ "program": "B.Tech", "institution": "State University" }],
            "experiences": [{ "position": "Frontend Intern", "company": "Acme Labs" }]
        }
    });

    let calculator = EmployabilityCalculator::default();
    let modern = calculator.score_document(&scenario_document()).result;
    let legacy = calculator.score_document(&legacy).result;

    assert_eq!(modern, legacy);
}

#[test]
fn cohort_import_summarizes_every_student() {
    let cohort = json!({
        "students": [
            scenario_document(),
            { "email": "empty@example.edu" },
            {
                "technicalSkills": [
                    { "name": "Bad", "level": "expert" },
                    { "name": "Python", "level": 2 }
                ]
            }
        ]
    });
    let raw = serde_json::to_vec(&cohort).expect("cohort serializes");

    let students = ProfileImporter::cohort_from_reader(raw.as_slice()).expect("cohort imports");
    assert_eq!(students.len(), 3);
    assert_eq!(students[2].normalized.report.dropped_technical_skills, 1);

    let calculator = EmployabilityCalculator::default();
    let scores = calculator.score_cohort(&students);

    let ids: Vec<&str> = scores.iter().map(|s| s.student_id.as_str()).collect();
    assert_eq!(ids, vec!["stu-042", "empty@example.edu", "student-003"]);

    let summary = CohortSummary::from_results(&scores);
    assert_eq!(summary.students, 3);
    assert_eq!(summary.count_for(EmployabilityLevel::NotStarted), 1);
    assert_eq!(summary.count_for(EmployabilityLevel::NeedsSupport), 2);
    assert!(summary.average_score < 46.0);

    let mut buffer = Vec::new();
    CohortSummary::write_csv(&scores, &mut buffer).expect("csv export");
    let text = String::from_utf8(buffer).expect("utf8 csv");
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("stu-042,46,Needs Support,Foundational,33,42,40,78,45"));
}

#[test]
fn cohort_entries_may_nest_the_profile() {
    let body = json!({
        "students": [
            { "id": "a-1", "profile": scenario_document() },
            { "id": "a-2", "profile": {} }
        ]
    });

    let students = ProfileImporter::cohort_from_value(&body).expect("cohort parses");
    let scores = EmployabilityCalculator::default().score_cohort(&students);

    assert_eq!(scores[0].student_id, "a-1");
    assert_eq!(scores[0].result.employability_score, 46);
    assert_eq!(scores[1].result.level, EmployabilityLevel::NotStarted);
}

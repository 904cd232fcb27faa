use crate::profile::{
    CertificateRecord, EducationRecord, ExperienceRecord, SoftSkill, StudentProfile,
    TechnicalSkill, TrainingRecord, TrainingStatus,
};
use crate::scoring::{EmployabilityCalculator, ScoringWeights, StudentScore};

pub(super) fn calculator() -> EmployabilityCalculator {
    EmployabilityCalculator::default()
}

pub(super) fn digital_only_calculator() -> EmployabilityCalculator {
    EmployabilityCalculator::new(ScoringWeights {
        foundational: 0.0,
        century21: 0.0,
        digital: 1.0,
        behavior: 0.0,
        career: 0.0,
    })
}

pub(super) fn technical(name: &str, level: i32, verified: bool) -> TechnicalSkill {
    TechnicalSkill {
        name: name.to_string(),
        level,
        verified,
    }
}

pub(super) fn soft(name: &str, level: i32) -> SoftSkill {
    SoftSkill {
        name: name.to_string(),
        level,
        category: None,
    }
}

pub(super) fn completed_training(course: &str) -> TrainingRecord {
    TrainingRecord {
        course: course.to_string(),
        status: TrainingStatus::Completed,
        progress: None,
    }
}

pub(super) fn ongoing_training(course: &str, progress: u8) -> TrainingRecord {
    TrainingRecord {
        course: course.to_string(),
        status: TrainingStatus::Ongoing,
        progress: Some(progress),
    }
}

pub(super) fn education(degree: &str) -> EducationRecord {
    EducationRecord {
        degree: degree.to_string(),
        university: "State University".to_string(),
    }
}

pub(super) fn experience(role: &str) -> ExperienceRecord {
    ExperienceRecord {
        role: role.to_string(),
        organization: "Acme Labs".to_string(),
    }
}

pub(super) fn certificate(title: &str, enabled: bool) -> CertificateRecord {
    CertificateRecord {
        title: title.to_string(),
        enabled,
    }
}

/// JS/React, Communication/Teamwork, one completed course, one degree, one role.
pub(super) fn scenario_profile() -> StudentProfile {
    StudentProfile {
        technical_skills: vec![technical("JS", 4, true), technical("React", 3, false)],
        soft_skills: vec![soft("Communication", 4), soft("Teamwork", 5)],
        training: vec![completed_training("Full Stack Bootcamp")],
        education: vec![education("B.Tech Computer Science")],
        experience: vec![experience("Frontend Intern")],
        certificates: Vec::new(),
    }
}

pub(super) fn saturated_profile() -> StudentProfile {
    StudentProfile {
        technical_skills: vec![
            technical("Rust", 4, true),
            technical("SQL", 4, true),
            technical("Docker", 4, true),
            technical("TypeScript", 4, true),
        ],
        soft_skills: vec![
            soft("Communication", 4),
            soft("Reading comprehension", 4),
            soft("Critical thinking", 4),
            soft("Teamwork", 4),
            soft("Creativity", 4),
            soft("Problem solving", 4),
        ],
        training: vec![
            completed_training("Data Structures"),
            completed_training("Cloud Fundamentals"),
            completed_training("Agile Practices"),
            completed_training("Interview Prep"),
        ],
        education: vec![education("B.Sc"), education("M.Sc")],
        experience: vec![
            experience("Intern"),
            experience("Teaching Assistant"),
            experience("Junior Developer"),
        ],
        certificates: vec![
            certificate("AWS Cloud Practitioner", true),
            certificate("Scrum Fundamentals", true),
        ],
    }
}

pub(super) fn scored(
    calculator: &EmployabilityCalculator,
    id: &str,
    profile: &StudentProfile,
) -> StudentScore {
    StudentScore {
        student_id: id.to_string(),
        result: calculator.score(profile),
    }
}

//! Canonical student profile model and the normalization step that produces it.

pub mod domain;
mod importer;
mod normalizer;

pub use domain::{
    CertificateRecord, CompetencyGroup, EducationRecord, ExperienceRecord, SoftSkill,
    SoftSkillCategory, StudentProfile, TechnicalSkill, TrainingRecord, TrainingStatus,
    SKILL_LEVEL_RANGE,
};
pub use importer::{student_id, ProfileImportError, ProfileImporter, StudentDocument};
pub use normalizer::{normalize_document, NormalizationReport, NormalizedProfile};

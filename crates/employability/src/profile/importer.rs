use std::io::Read;
use std::path::Path;

use serde_json::Value;

use super::normalizer::{normalize_document, NormalizedProfile};

#[derive(Debug)]
pub enum ProfileImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NotACohort,
}

impl std::fmt::Display for ProfileImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileImportError::Io(err) => write!(f, "failed to read profile document: {}", err),
            ProfileImportError::Json(err) => write!(f, "invalid profile JSON: {}", err),
            ProfileImportError::NotACohort => write!(
                f,
                "cohort documents must be a JSON array or an object with a `students` array"
            ),
        }
    }
}

impl std::error::Error for ProfileImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileImportError::Io(err) => Some(err),
            ProfileImportError::Json(err) => Some(err),
            ProfileImportError::NotACohort => None,
        }
    }
}

impl From<std::io::Error> for ProfileImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ProfileImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// One student read from a cohort document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDocument {
    pub student_id: String,
    pub normalized: NormalizedProfile,
}

/// Loads stored profile documents and runs them through normalization.
pub struct ProfileImporter;

impl ProfileImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<NormalizedProfile, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<NormalizedProfile, ProfileImportError> {
        let document: Value = serde_json::from_reader(reader)?;
        Ok(normalize_document(&document))
    }

    pub fn cohort_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<StudentDocument>, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::cohort_from_reader(file)
    }

    /// Reads either a bare array of student documents or `{ "students": [...] }`.
    pub fn cohort_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<StudentDocument>, ProfileImportError> {
        let document: Value = serde_json::from_reader(reader)?;
        Self::cohort_from_value(&document)
    }

    pub fn cohort_from_value(
        document: &Value,
    ) -> Result<Vec<StudentDocument>, ProfileImportError> {
        let students = match document {
            Value::Array(items) => items.as_slice(),
            Value::Object(map) => map
                .get("students")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .ok_or(ProfileImportError::NotACohort)?,
            _ => return Err(ProfileImportError::NotACohort),
        };

        Ok(students
            .iter()
            .enumerate()
            .map(|(index, student)| StudentDocument {
                student_id: student_id(student, index),
                normalized: normalize_document(student),
            })
            .collect())
    }
}

/// Student identifier from the document, else a positional fallback.
pub fn student_id(document: &Value, index: usize) -> String {
    ["id", "student_id", "studentId", "email"]
        .iter()
        .filter_map(|key| document.get(*key))
        .find_map(|value| match value {
            Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| format!("student-{:03}", index + 1))
}

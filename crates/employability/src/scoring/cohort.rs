use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::policy::{EmployabilityLevel, FocusArea, ScoreCategory};
use super::ScoreResult;

/// Scored student within a cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentScore {
    pub student_id: String,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub level: EmployabilityLevel,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverage {
    pub category: ScoreCategory,
    pub average: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum CohortExportError {
    #[error("failed to create cohort export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write cohort csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Aggregate view over a set of scored students.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortSummary {
    pub students: usize,
    pub average_score: f64,
    pub median_score: f64,
    pub level_counts: Vec<LevelCount>,
    pub category_averages: Vec<CategoryAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_focus_area: Option<FocusArea>,
}

impl CohortSummary {
    pub fn from_results(scores: &[StudentScore]) -> Self {
        let students = scores.len();

        let level_counts = EmployabilityLevel::ALL
            .iter()
            .map(|level| LevelCount {
                level: *level,
                count: scores
                    .iter()
                    .filter(|score| score.result.level == *level)
                    .count(),
            })
            .collect();

        let category_averages = ScoreCategory::PRIORITY
            .iter()
            .map(|category| CategoryAverage {
                category: *category,
                average: mean(
                    scores
                        .iter()
                        .map(|score| f64::from(score.result.breakdown.get(*category))),
                    students,
                ),
            })
            .collect();

        let mut sorted: Vec<u8> = scores
            .iter()
            .map(|score| score.result.employability_score)
            .collect();
        sorted.sort_unstable();

        Self {
            students,
            average_score: mean(sorted.iter().map(|value| f64::from(*value)), students),
            median_score: median(&sorted),
            level_counts,
            category_averages,
            dominant_focus_area: dominant_focus_area(scores),
        }
    }

    pub fn count_for(&self, level: EmployabilityLevel) -> usize {
        self.level_counts
            .iter()
            .find(|entry| entry.level == level)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    pub fn export_csv(scores: &[StudentScore], path: &Path) -> Result<(), CohortExportError> {
        let file = File::create(path)?;
        Self::write_csv(scores, file)
    }

    /// Export one row per student.
    pub fn write_csv<W: Write>(
        scores: &[StudentScore],
        writer: W,
    ) -> Result<(), CohortExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let header = ["student_id", "employability_score", "level", "focus_area"]
            .into_iter()
            .chain(ScoreCategory::PRIORITY.iter().map(|category| category.key()));
        csv_writer.write_record(header)?;

        for score in scores {
            let row = [
                score.student_id.clone(),
                score.result.employability_score.to_string(),
                score.result.level.name().to_string(),
                score.result.focus_area.name().to_string(),
            ]
            .into_iter()
            .chain(
                score
                    .result
                    .breakdown
                    .entries()
                    .map(|(_, value)| value.to_string()),
            );
            csv_writer.write_record(row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

fn median(sorted: &[u8]) -> f64 {
    match sorted.len() {
        0 => 0.0,
        len if len % 2 == 1 => f64::from(sorted[len / 2]),
        len => (f64::from(sorted[len / 2 - 1]) + f64::from(sorted[len / 2])) / 2.0,
    }
}

/// Most common specific focus area; ties go to the higher-priority category.
fn dominant_focus_area(scores: &[StudentScore]) -> Option<FocusArea> {
    let mut counts: HashMap<ScoreCategory, usize> = HashMap::new();
    for score in scores {
        if let Some(category) = score.result.focus_area.category() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }

    let best = ScoreCategory::PRIORITY
        .iter()
        .filter_map(|category| counts.get(category).map(|count| (*category, *count)))
        .fold(None::<(ScoreCategory, usize)>, |best, candidate| match best {
            Some((_, count)) if count >= candidate.1 => best,
            _ => Some(candidate),
        });

    match best {
        Some((category, _)) => Some(FocusArea::Category(category)),
        None if scores.is_empty() => None,
        None => Some(FocusArea::AllAreas),
    }
}

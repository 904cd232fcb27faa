use clap::Args;
use employability::config::AppConfig;
use employability::error::AppError;
use employability::profile::{NormalizationReport, ProfileImporter};
use employability::scoring::{
    CohortSummary, EmployabilityCalculator, ScoreInsights, ScoreResult, StudentScore,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a stored profile document (JSON)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Emit the score report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CohortArgs {
    /// Path to a JSON array of students, or an object with a `students` array
    #[arg(long)]
    pub(crate) profiles: PathBuf,
    /// Write one CSV row per student to this path
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

/// Calculator using the configured weight overrides.
pub(crate) fn configured_calculator() -> Result<EmployabilityCalculator, AppError> {
    let config = AppConfig::load()?;
    Ok(EmployabilityCalculator::new(config.scoring))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let calculator = configured_calculator()?;
    let normalized = ProfileImporter::from_path(&args.profile)?;
    let result = calculator.score(&normalized.profile);
    let insights = result.insights();

    if args.json {
        let payload = serde_json::json!({
            "result": result,
            "insights": insights,
            "normalization": normalized.report,
        });
        println!("{payload:#}");
    } else {
        render_score_report(&result, &insights, &normalized.report);
    }

    Ok(())
}

pub(crate) fn run_cohort(args: CohortArgs) -> Result<(), AppError> {
    let calculator = configured_calculator()?;
    let students = ProfileImporter::cohort_from_path(&args.profiles)?;
    let scores = calculator.score_cohort(&students);
    let summary = CohortSummary::from_results(&scores);

    render_cohort_summary(&summary, &scores);

    if let Some(path) = args.csv {
        CohortSummary::export_csv(&scores, &path)?;
        info!(path = %path.display(), students = scores.len(), "cohort csv exported");
        println!("\nCSV written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn render_score_report(
    result: &ScoreResult,
    insights: &ScoreInsights,
    report: &NormalizationReport,
) {
    println!("Employability report");
    println!(
        "Score: {} ({}, {})",
        result.employability_score,
        result.level.name(),
        result.label
    );
    println!("Focus area: {}", result.focus_area.name());

    println!("\nBreakdown");
    for (category, score) in result.breakdown.entries() {
        println!("- {}: {}", category.name(), score);
    }

    if let (Some(level), Some(points)) = (insights.next_level, insights.points_to_next_level) {
        println!("\nNext level: {} ({} points away)", level.name(), points);
    }

    if !insights.strengths.is_empty() {
        println!("Strengths: {}", insights.strengths.join(", "));
    }

    if !insights.observations.is_empty() {
        println!("\nObservations");
        for observation in &insights.observations {
            println!("- {}", observation);
        }
    }

    if !insights.recommended_actions.is_empty() {
        println!("\nRecommended actions");
        for action in &insights.recommended_actions {
            println!("- {}", action);
        }
    }

    if report.total_dropped() > 0 {
        println!(
            "\nSkipped {} malformed profile item(s) during import",
            report.total_dropped()
        );
    }
}

pub(crate) fn render_cohort_summary(summary: &CohortSummary, scores: &[StudentScore]) {
    println!("Cohort employability summary");
    println!(
        "Students: {} | average {:.1} | median {:.1}",
        summary.students, summary.average_score, summary.median_score
    );

    if let Some(focus) = summary.dominant_focus_area {
        println!("Most common focus area: {}", focus.name());
    }

    println!("\nLevels");
    for entry in &summary.level_counts {
        println!("- {}: {}", entry.level.name(), entry.count);
    }

    println!("\nCategory averages");
    for entry in &summary.category_averages {
        println!("- {}: {:.1}", entry.category.name(), entry.average);
    }

    if !scores.is_empty() {
        println!("\nStudents");
        for score in scores {
            println!(
                "- {}: {} ({}), focus {}",
                score.student_id,
                score.result.employability_score,
                score.result.level.name(),
                score.result.focus_area.name()
            );
        }
    }
}

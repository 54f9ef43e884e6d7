use std::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::models::employee::Employee;
use crate::models::report::Report;
use crate::models::review::Review;
use crate::services::{
    aggregation_service::{AggregationService, AggregationStats},
    dataset_service::DatasetService,
    export_service::ExportService,
    index_service::{DuplicatePolicy, IndexService, IndexStats},
    report_service::ReportService,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub employees_with_reviews: usize,
    pub total_employees: usize,
    pub total_reviews: usize,
    pub index: IndexStats,
    pub aggregation: AggregationStats,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Employee Count: {} of {}",
            self.employees_with_reviews, self.total_employees
        )?;
        writeln!(f, "Review Count: {}", self.total_reviews)?;
        write!(f, "Employees with Reviews: {}", self.employees_with_reviews)
    }
}

/// Joins already-loaded employees and reviews into ranked reports.
pub fn build_reports(
    employees: &[Employee],
    reviews: &[Review],
    policy: DuplicatePolicy,
) -> (Vec<Report>, RunSummary) {
    let (mut index, index_stats) = IndexService::build_index(employees, policy);
    let aggregation = AggregationService::aggregate(&mut index, reviews);
    let reports = ReportService::finalize(index);

    let summary = RunSummary {
        employees_with_reviews: reports.len(),
        total_employees: employees.len(),
        total_reviews: reviews.len(),
        index: index_stats,
        aggregation,
    };
    (reports, summary)
}

/// Loads both inputs, aggregates, and writes the output file.
///
/// Both inputs are loaded before any work starts; nothing is written if
/// either fails.
pub fn run(config: &Config) -> Result<RunSummary> {
    let employees = DatasetService::load_employees(&config.employees_file)?;
    let reviews = DatasetService::load_reviews(&config.reviews_file)?;

    let (reports, summary) = build_reports(&employees, &reviews, config.duplicate_policy);
    ExportService::write_reports(&config.output_file, &reports)?;

    tracing::info!(
        reports = summary.employees_with_reviews,
        dropped_employees = summary.index.skipped_invalid,
        dropped_reviews = summary.aggregation.dropped(),
        "Run complete"
    );
    Ok(summary)
}

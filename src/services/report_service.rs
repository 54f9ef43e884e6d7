use crate::models::report::Report;
use crate::services::index_service::EmployeeIndex;

pub struct ReportService;

impl ReportService {
    /// Reports that received at least one review, best average first.
    ///
    /// Equal averages keep the index's insertion order.
    pub fn finalize(index: EmployeeIndex) -> Vec<Report> {
        let mut reports: Vec<Report> = index
            .into_reports()
            .into_iter()
            .filter(Report::has_reviews)
            .collect();
        reports.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Employee;
    use crate::models::review::Review;
    use crate::services::aggregation_service::AggregationService;
    use crate::services::index_service::{DuplicatePolicy, IndexService};

    fn employee(code: &str) -> Employee {
        Employee {
            id: code.to_lowercase(),
            employee_code: code.to_string(),
            first_name: "Emp".to_string(),
            last_name: code.to_string(),
            ..Default::default()
        }
    }

    fn rating(code: &str, tx: &str, rating: i32) -> Review {
        Review {
            id: format!("r-{}", tx),
            employee_code: code.to_string(),
            transaction_id: tx.to_string(),
            rating,
            created_at: 1_700_000_000,
            ..Default::default()
        }
    }

    #[test]
    fn drops_reports_without_reviews_and_ranks_by_average() {
        let employees = vec![employee("E1"), employee("E2"), employee("E3"), employee("E4")];
        let (mut index, _) = IndexService::build_index(&employees, DuplicatePolicy::default());
        AggregationService::aggregate(
            &mut index,
            &[
                rating("E1", "t1", 3),
                rating("E2", "t2", 5),
                rating("E4", "t3", 4),
                rating("E4", "t4", 5),
            ],
        );

        let reports = ReportService::finalize(index);
        let codes: Vec<&str> = reports.iter().map(|r| r.qr_code.as_str()).collect();
        assert_eq!(codes, vec!["E2", "E4", "E1"]);
        assert!(reports.iter().all(|r| !r.reviews.is_empty()));
    }

    #[test]
    fn ties_keep_index_order() {
        let employees = vec![employee("E1"), employee("E2"), employee("E3")];
        let (mut index, _) = IndexService::build_index(&employees, DuplicatePolicy::default());
        AggregationService::aggregate(
            &mut index,
            &[rating("E3", "t1", 4), rating("E1", "t2", 4), rating("E2", "t3", 4)],
        );

        let reports = ReportService::finalize(index);
        let codes: Vec<&str> = reports.iter().map(|r| r.qr_code.as_str()).collect();
        assert_eq!(codes, vec!["E1", "E2", "E3"]);
    }

    #[test]
    fn empty_index_yields_nothing() {
        assert!(ReportService::finalize(EmployeeIndex::default()).is_empty());
    }
}

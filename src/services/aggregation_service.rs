use crate::models::report::SimpleReview;
use crate::models::review::Review;
use crate::services::index_service::EmployeeIndex;
use crate::utils::time::epoch_to_local_iso;
use crate::utils::validation::{failed_fields, validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    pub applied: usize,
    pub skipped_invalid: usize,
    pub unmatched: usize,
    pub bad_timestamp: usize,
}

impl AggregationStats {
    pub fn dropped(&self) -> usize {
        self.skipped_invalid + self.unmatched + self.bad_timestamp
    }
}

/// Why a review was left out of every report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Invalid(Vec<String>),
    UnknownEmployee,
    BadTimestamp(i64),
}

pub struct AggregationService;

impl AggregationService {
    /// Folds every admissible review into its employee's report.
    pub fn aggregate(index: &mut EmployeeIndex, reviews: &[Review]) -> AggregationStats {
        let mut stats = AggregationStats::default();

        for (position, review) in reviews.iter().enumerate() {
            match Self::apply(index, review) {
                Ok(()) => stats.applied += 1,
                Err(rejection) => {
                    tracing::debug!(position, review_id = %review.id, ?rejection, "Skipping review");
                    match rejection {
                        Rejection::Invalid(_) => stats.skipped_invalid += 1,
                        Rejection::UnknownEmployee => stats.unmatched += 1,
                        Rejection::BadTimestamp(_) => stats.bad_timestamp += 1,
                    }
                }
            }
        }

        tracing::info!(
            applied = stats.applied,
            invalid = stats.skipped_invalid,
            unmatched = stats.unmatched,
            bad_timestamp = stats.bad_timestamp,
            "Reviews aggregated"
        );

        stats
    }

    /// Applies a single review, or reports why it was rejected. The index is
    /// untouched on rejection.
    pub fn apply(index: &mut EmployeeIndex, review: &Review) -> Result<(), Rejection> {
        validate(review).map_err(|errors| Rejection::Invalid(failed_fields(&errors)))?;

        let report = index
            .get_mut(&review.employee_code)
            .ok_or(Rejection::UnknownEmployee)?;

        let date = epoch_to_local_iso(review.created_at)
            .ok_or(Rejection::BadTimestamp(review.created_at))?;

        report.add_review(SimpleReview {
            date,
            rating: review.rating,
            feedback: review.feedback.clone(),
            hashtags: review.hash_tags.clone(),
            transaction_id: review.transaction_id.clone(),
        });

        Ok(())
    }
}

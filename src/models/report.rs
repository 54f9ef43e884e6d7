use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;
use crate::utils::rating::average_rating;

/// Per-employee output aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub qr_code: String,
    pub average_rating: f64,
    pub reviews: Vec<SimpleReview>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleReview {
    pub date: String,
    pub rating: i32,
    pub feedback: String,
    pub hashtags: Vec<String>,
    pub transaction_id: String,
}

impl Report {
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            name: employee.display_name(),
            phone: employee.phone_number.clone(),
            email: employee.email.clone(),
            qr_code: employee.employee_code.clone(),
            average_rating: 0.0,
            reviews: Vec::new(),
        }
    }

    /// Adds a review, keeps the list newest-first and refreshes the average.
    ///
    /// The sort is stable, so a review sharing its date with an earlier one
    /// lands after it.
    pub fn add_review(&mut self, review: SimpleReview) {
        self.reviews.push(review);
        self.reviews.sort_by(|a, b| b.date.cmp(&a.date));
        let ratings: Vec<i32> = self.reviews.iter().map(|r| r.rating).collect();
        self.average_rating = average_rating(&ratings);
    }

    pub fn has_reviews(&self) -> bool {
        !self.reviews.is_empty()
    }
}

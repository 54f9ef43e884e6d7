use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::employee::Employee;
use crate::models::review::Review;

pub struct DatasetService;

impl DatasetService {
    pub fn load_employees(path: &Path) -> Result<Vec<Employee>> {
        let employees: Vec<Employee> = Self::load_array(path)?;
        tracing::info!(path = %path.display(), count = employees.len(), "Loaded employees");
        Ok(employees)
    }

    pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
        let reviews: Vec<Review> = Self::load_array(path)?;
        tracing::info!(path = %path.display(), count = reviews.len(), "Loaded reviews");
        Ok(reviews)
    }

    /// Reads a whole JSON array document. Any failure is fatal for the run.
    fn load_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::models::employee::Employee;
use crate::models::report::Report;
use crate::utils::validation::{failed_fields, validate};

/// What to do when a second valid employee arrives with a code already indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later employee replaces the earlier one in the same slot.
    #[default]
    LastWriteWins,
    /// The later employee is ignored.
    KeepFirst,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last_write_wins" => Ok(Self::LastWriteWins),
            "keep_first" => Ok(Self::KeepFirst),
            other => Err(format!(
                "unknown duplicate policy '{}', expected last_write_wins or keep_first",
                other
            )),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastWriteWins => f.write_str("last_write_wins"),
            Self::KeepFirst => f.write_str("keep_first"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub accepted: usize,
    pub skipped_invalid: usize,
    pub duplicates: usize,
}

/// Reports keyed by employee code.
///
/// Reports live in insertion order; the map only holds slot handles, so an
/// entry is updated in place and never moves.
#[derive(Debug, Default)]
pub struct EmployeeIndex {
    reports: Vec<Report>,
    slots: HashMap<String, usize>,
}

impl EmployeeIndex {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.slots.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&Report> {
        self.slots.get(code).map(|&slot| &self.reports[slot])
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Report> {
        match self.slots.get(code) {
            Some(&slot) => self.reports.get_mut(slot),
            None => None,
        }
    }

    /// Reports in first-insertion order.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<Report> {
        self.reports
    }

    /// Inserts or replaces according to `policy`. Returns true when the code
    /// was already present.
    fn insert(&mut self, report: Report, policy: DuplicatePolicy) -> bool {
        match self.slots.get(&report.qr_code) {
            Some(&slot) => {
                if policy == DuplicatePolicy::LastWriteWins {
                    self.reports[slot] = report;
                }
                true
            }
            None => {
                self.slots.insert(report.qr_code.clone(), self.reports.len());
                self.reports.push(report);
                false
            }
        }
    }
}

pub struct IndexService;

impl IndexService {
    /// Builds the code → report index, skipping employees missing an ID,
    /// code, first name or last name.
    pub fn build_index(
        employees: &[Employee],
        policy: DuplicatePolicy,
    ) -> (EmployeeIndex, IndexStats) {
        let mut index = EmployeeIndex::default();
        let mut stats = IndexStats::default();

        for (position, employee) in employees.iter().enumerate() {
            if let Err(errors) = validate(employee) {
                stats.skipped_invalid += 1;
                tracing::debug!(
                    position,
                    fields = ?failed_fields(&errors),
                    "Skipping employee with blank required fields"
                );
                continue;
            }

            if index.insert(Report::for_employee(employee), policy) {
                stats.duplicates += 1;
                tracing::warn!(
                    position,
                    code = %employee.employee_code,
                    %policy,
                    "Duplicate employee code"
                );
            } else {
                stats.accepted += 1;
            }
        }

        tracing::info!(
            indexed = index.len(),
            skipped = stats.skipped_invalid,
            duplicates = stats.duplicates,
            "Employee index built"
        );

        (index, stats)
    }
}

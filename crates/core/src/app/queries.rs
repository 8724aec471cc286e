use crate::domain::{Aggregates, CourseRecord, CourseRoster, UngradedPolicy};
use serde::Serialize;

/// Read-only projection of the roster for UI consumption
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSnapshot {
    /// Course rows in display order
    pub courses: Vec<CourseRecord>,

    /// Totals derived from `courses`
    pub aggregates: Aggregates,

    /// Whether the remove control should be offered
    pub can_remove: bool,
}

impl RosterSnapshot {
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.courses.len()
    }
}

impl CourseRoster {
    /// Capture the current rows and totals
    pub fn snapshot(&self, policy: UngradedPolicy) -> RosterSnapshot {
        RosterSnapshot {
            courses: self.courses().to_vec(),
            aggregates: self.compute_aggregates_with(policy),
            can_remove: self.can_remove(),
        }
    }
}

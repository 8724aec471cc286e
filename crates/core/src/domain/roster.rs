use super::aggregate::{Aggregates, UngradedPolicy};
use super::course::{CourseField, CourseId, CourseRecord, CourseUpdate};
use crate::error::Result;

/// The ordered collection of course rows under edit
///
/// Always holds at least one row, and ids are unique for the lifetime of the
/// roster. Insertion order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRoster {
    courses: Vec<CourseRecord>,
    next_id: u64,
}

impl Default for CourseRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseRoster {
    /// Create a roster holding a single empty row
    pub fn new() -> Self {
        let mut roster = Self {
            courses: Vec::new(),
            next_id: 1,
        };
        roster.add_course();
        roster
    }

    /// Append an empty row and return its id
    pub fn add_course(&mut self) -> CourseId {
        let id = CourseId(self.next_id);
        self.next_id += 1;
        self.courses.push(CourseRecord::empty(id));
        id
    }

    /// Remove the row with `id`.
    ///
    /// Returns `false` without touching anything if `id` is unknown or it
    /// would leave the roster empty.
    pub fn remove_course(&mut self, id: CourseId) -> bool {
        if !self.can_remove() {
            return false;
        }
        match self.position(id) {
            Some(index) => {
                self.courses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace one field of the row with `id`. Returns `false` if `id` is unknown.
    pub fn update_course(&mut self, id: CourseId, update: CourseUpdate) -> bool {
        match self.courses.iter_mut().find(|c| c.id == id) {
            Some(course) => {
                course.apply(update);
                true
            }
            None => false,
        }
    }

    /// Like [`update_course`](Self::update_course), keyed by field name.
    ///
    /// An unrecognized name is a caller bug and fails with
    /// [`CoreError::UnknownField`](crate::CoreError::UnknownField) before
    /// anything is changed.
    pub fn update_course_field(&mut self, id: CourseId, field: &str, value: impl Into<String>) -> Result<bool> {
        let field: CourseField = field.parse()?;
        Ok(self.update_course(id, field.with_value(value)))
    }

    /// Totals under the default policy, where an unset grade reads as 0.0
    pub fn compute_aggregates(&self) -> Aggregates {
        self.compute_aggregates_with(UngradedPolicy::default())
    }

    pub fn compute_aggregates_with(&self, policy: UngradedPolicy) -> Aggregates {
        Aggregates::compute(&self.courses, policy)
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn get(&self, id: CourseId) -> Option<&CourseRecord> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: CourseId) -> Option<usize> {
        self.courses.iter().position(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Never true; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether a remove would be honored
    pub fn can_remove(&self) -> bool {
        self.courses.len() > 1
    }

    pub fn last_id(&self) -> CourseId {
        // at least one row is always present
        self.courses[self.courses.len() - 1].id
    }
}

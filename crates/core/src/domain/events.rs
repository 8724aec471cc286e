use super::course::{CourseField, CourseId};

/// Domain events emitted by the roster when a command changes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new empty course row was appended
    CourseAdded { id: CourseId },

    /// A course row was removed
    CourseRemoved { id: CourseId },

    /// One field of a course row was replaced
    CourseUpdated { id: CourseId, field: CourseField },
}

impl Event {
    pub fn course_id(&self) -> CourseId {
        match self {
            Event::CourseAdded { id } | Event::CourseRemoved { id } | Event::CourseUpdated { id, .. } => *id,
        }
    }
}

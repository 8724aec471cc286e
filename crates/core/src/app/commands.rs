use crate::domain::course::{CourseId, CourseUpdate};
use crate::domain::events::Event;
use crate::domain::roster::CourseRoster;

/// Commands the presentation layer sends to the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append an empty course row
    AddCourse,

    /// Remove a course row, unless it is the last one
    RemoveCourse { id: CourseId },

    /// Replace one field of a course row
    UpdateCourse { id: CourseId, update: CourseUpdate },
}

impl CourseRoster {
    /// Apply a command, returning the resulting event or `None` if nothing changed
    pub fn execute(&mut self, command: &Command) -> Option<Event> {
        match command {
            Command::AddCourse => Some(Event::CourseAdded {
                id: self.add_course(),
            }),

            Command::RemoveCourse { id } => self
                .remove_course(*id)
                .then_some(Event::CourseRemoved { id: *id }),

            Command::UpdateCourse { id, update } => {
                let field = update.field();
                self.update_course(*id, update.clone())
                    .then_some(Event::CourseUpdated { id: *id, field })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::CourseField;

    #[test]
    fn test_execute_reports_changes() {
        let mut roster = CourseRoster::new();
        let first = roster.last_id();

        let added = roster.execute(&Command::AddCourse);
        let second = roster.last_id();
        assert_eq!(added, Some(Event::CourseAdded { id: second }));

        let updated = roster.execute(&Command::UpdateCourse {
            id: first,
            update: CourseUpdate::Credit("4".to_string()),
        });
        assert_eq!(
            updated,
            Some(Event::CourseUpdated {
                id: first,
                field: CourseField::Credit
            })
        );

        let removed = roster.execute(&Command::RemoveCourse { id: second });
        assert_eq!(removed, Some(Event::CourseRemoved { id: second }));
        assert_eq!(removed.map(|e| e.course_id()), Some(second));
    }

    #[test]
    fn test_execute_noops_return_none() {
        let mut roster = CourseRoster::new();
        let only = roster.last_id();

        assert_eq!(roster.execute(&Command::RemoveCourse { id: only }), None);
        assert_eq!(
            roster.execute(&Command::UpdateCourse {
                id: CourseId(500),
                update: CourseUpdate::GradePoint("4".to_string()),
            }),
            None
        );
        assert_eq!(roster.len(), 1);
    }
}

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for a course row
///
/// Handed out by the roster from a counter that only moves forward, so an id
/// is never reused within a session even after its row is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub u64);

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "course-{}", self.0)
    }
}

/// One row of user input
///
/// `credit` and `grade_point` hold the raw value the user selected or typed.
/// An empty string means the field is unset. Parsing happens at aggregation
/// time so that whatever the user entered is kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: CourseId,
    pub course_name: String,
    pub credit: String,
    pub grade_point: String,
}

impl CourseRecord {
    /// Create an empty record with the given id
    pub fn empty(id: CourseId) -> Self {
        Self {
            id,
            course_name: String::new(),
            credit: String::new(),
            grade_point: String::new(),
        }
    }

    /// Read a field by selector
    pub fn field(&self, field: CourseField) -> &str {
        match field {
            CourseField::CourseName => &self.course_name,
            CourseField::Credit => &self.credit,
            CourseField::GradePoint => &self.grade_point,
        }
    }

    /// Replace exactly one field, leaving the others untouched
    pub fn apply(&mut self, update: CourseUpdate) {
        match update {
            CourseUpdate::CourseName(value) => self.course_name = value,
            CourseUpdate::Credit(value) => self.credit = value,
            CourseUpdate::GradePoint(value) => self.grade_point = value,
        }
    }
}

/// The editable fields of a course row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseField {
    CourseName,
    Credit,
    GradePoint,
}

impl CourseField {
    pub const ALL: [CourseField; 3] = [Self::CourseName, Self::Credit, Self::GradePoint];

    /// The field name presentation layers use as a key
    pub fn name(self) -> &'static str {
        match self {
            Self::CourseName => "courseName",
            Self::Credit => "credit",
            Self::GradePoint => "gradePoint",
        }
    }

    /// Pair this selector with a value
    pub fn with_value(self, value: impl Into<String>) -> CourseUpdate {
        let value = value.into();
        match self {
            Self::CourseName => CourseUpdate::CourseName(value),
            Self::Credit => CourseUpdate::Credit(value),
            Self::GradePoint => CourseUpdate::GradePoint(value),
        }
    }
}

impl std::fmt::Display for CourseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CourseField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "courseName" | "course_name" => Ok(Self::CourseName),
            "credit" => Ok(Self::Credit),
            "gradePoint" | "grade_point" => Ok(Self::GradePoint),
            other => Err(CoreError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

/// A single-field change to a course row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseUpdate {
    CourseName(String),
    Credit(String),
    GradePoint(String),
}

impl CourseUpdate {
    pub fn field(&self) -> CourseField {
        match self {
            Self::CourseName(_) => CourseField::CourseName,
            Self::Credit(_) => CourseField::Credit,
            Self::GradePoint(_) => CourseField::GradePoint,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::CourseName(v) | Self::Credit(v) | Self::GradePoint(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_parse() {
        assert_eq!("courseName".parse::<CourseField>(), Ok(CourseField::CourseName));
        assert_eq!("course_name".parse::<CourseField>(), Ok(CourseField::CourseName));
        assert_eq!("credit".parse::<CourseField>(), Ok(CourseField::Credit));
        assert_eq!("gradePoint".parse::<CourseField>(), Ok(CourseField::GradePoint));
        assert_eq!("grade_point".parse::<CourseField>(), Ok(CourseField::GradePoint));

        for field in CourseField::ALL {
            assert_eq!(field.name().parse::<CourseField>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let err = "letterGrade".parse::<CourseField>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownField {
                name: "letterGrade".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unknown course field: letterGrade");
    }

    #[test]
    fn test_apply_touches_only_one_field() {
        let mut record = CourseRecord::empty(CourseId(7));
        record.apply(CourseUpdate::Credit("3".to_string()));
        record.apply(CourseUpdate::GradePoint("3.75".to_string()));
        record.apply(CourseUpdate::CourseName("Algorithms".to_string()));

        assert_eq!(record.id, CourseId(7));
        assert_eq!(record.course_name, "Algorithms");
        assert_eq!(record.credit, "3");
        assert_eq!(record.grade_point, "3.75");

        record.apply(CourseUpdate::CourseName("Data Structures".to_string()));
        assert_eq!(record.field(CourseField::CourseName), "Data Structures");
        assert_eq!(record.field(CourseField::Credit), "3");
        assert_eq!(record.field(CourseField::GradePoint), "3.75");
    }

    #[test]
    fn test_with_value_matches_field() {
        for field in CourseField::ALL {
            let update = field.with_value("x");
            assert_eq!(update.field(), field);
            assert_eq!(update.value(), "x");
        }
    }

    #[test]
    fn test_course_id_display() {
        assert_eq!(CourseId(42).to_string(), "course-42");
    }
}

//! Static reference data for the choice widgets.

/// A letter grade and the grade point it maps to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeOption {
    pub letter: &'static str,
    pub point: f64,
}

/// Grade chart, ordered by descending point value for display.
///
/// `F` and `I` share a point value of zero.
pub const GRADE_OPTIONS: [GradeOption; 11] = [
    GradeOption { letter: "A+", point: 4.0 },
    GradeOption { letter: "A", point: 3.75 },
    GradeOption { letter: "A-", point: 3.5 },
    GradeOption { letter: "B+", point: 3.25 },
    GradeOption { letter: "B", point: 3.0 },
    GradeOption { letter: "B-", point: 2.75 },
    GradeOption { letter: "C+", point: 2.5 },
    GradeOption { letter: "C", point: 2.25 },
    GradeOption { letter: "D", point: 2.0 },
    GradeOption { letter: "F", point: 0.0 },
    GradeOption { letter: "I", point: 0.0 },
];

impl GradeOption {
    pub fn all() -> &'static [GradeOption] {
        &GRADE_OPTIONS
    }

    pub fn by_letter(letter: &str) -> Option<&'static GradeOption> {
        GRADE_OPTIONS.iter().find(|g| g.letter == letter)
    }

    /// First grade in display order whose point matches `point`
    pub fn by_point(point: f64) -> Option<&'static GradeOption> {
        GRADE_OPTIONS.iter().find(|g| g.point == point)
    }

    /// The raw value stored in a course row when this grade is selected
    pub fn value(&self) -> String {
        self.point.to_string()
    }

    /// Label for choice widgets, e.g. `A (3.75)`
    pub fn label(&self) -> String {
        format!("{} ({:.2})", self.letter, self.point)
    }
}

/// Allowed credit-hour values
pub const CREDIT_OPTIONS: [f64; 4] = [1.5, 2.0, 3.0, 4.0];

/// A credit-hour choice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditOption(pub f64);

impl CreditOption {
    pub fn all() -> impl Iterator<Item = CreditOption> {
        CREDIT_OPTIONS.iter().copied().map(CreditOption)
    }

    /// The raw value stored in a course row, `1.5` or `3` rather than `3.0`
    pub fn value(&self) -> String {
        self.0.to_string()
    }
}

impl std::fmt::Display for CreditOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_options_descending_and_in_range() {
        for pair in GRADE_OPTIONS.windows(2) {
            assert!(pair[0].point >= pair[1].point, "{} before {}", pair[0].letter, pair[1].letter);
        }
        for grade in GradeOption::all() {
            assert!((0.0..=4.0).contains(&grade.point));
        }
    }

    #[test]
    fn test_grade_lookup() {
        assert_eq!(GradeOption::by_letter("B+").map(|g| g.point), Some(3.25));
        assert_eq!(GradeOption::by_letter("Z"), None);
        // F comes before I in display order
        assert_eq!(GradeOption::by_point(0.0).map(|g| g.letter), Some("F"));
        assert_eq!(GradeOption::by_point(3.1), None);
    }

    #[test]
    fn test_values_and_labels() {
        let a = GradeOption::by_letter("A").unwrap();
        assert_eq!(a.value(), "3.75");
        assert_eq!(a.label(), "A (3.75)");
        assert_eq!(GradeOption::by_letter("F").unwrap().value(), "0");

        let credits: Vec<String> = CreditOption::all().map(|c| c.value()).collect();
        assert_eq!(credits, vec!["1.5", "2", "3", "4"]);
    }
}

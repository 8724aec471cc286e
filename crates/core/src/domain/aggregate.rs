use super::course::CourseRecord;
use serde::{Deserialize, Serialize};

/// How a row with credit but no usable grade is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UngradedPolicy {
    /// An unset grade reads as 0.0 and the row's credit counts toward the total
    #[default]
    CountAsZero,
    /// The row contributes nothing until a grade is chosen. Explicit 0.0
    /// grades (F, I) still count.
    Exclude,
}

/// Derived totals for a roster
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aggregates {
    pub total_credits: f64,
    pub total_points: f64,
    pub gpa: f64,
}

impl Aggregates {
    /// Fold the contributing rows of `records` into totals.
    ///
    /// Order does not matter. When no credit contributes the GPA is exactly 0.
    pub fn compute<'a, I>(records: I, policy: UngradedPolicy) -> Self
    where
        I: IntoIterator<Item = &'a CourseRecord>,
    {
        let (total_credits, total_points) = records
            .into_iter()
            .filter_map(|record| contribution(record, policy))
            .fold((0.0, 0.0), |(credits, points), (credit, grade_point)| {
                (credits + credit, points + grade_point * credit)
            });

        let gpa = if total_credits > 0.0 {
            total_points / total_credits
        } else {
            0.0
        };

        Self {
            total_credits,
            total_points,
            gpa,
        }
    }

    pub fn total_credits_display(&self) -> String {
        format!("{:.2}", self.total_credits)
    }

    pub fn gpa_display(&self) -> String {
        format!("{:.2}", self.gpa)
    }
}

/// The `(credit, grade_point)` a record adds to the totals, if any
pub fn contribution(record: &CourseRecord, policy: UngradedPolicy) -> Option<(f64, f64)> {
    let credit = parse_decimal(&record.credit);
    let grade_point = match (policy, parse_decimal_opt(&record.grade_point)) {
        (UngradedPolicy::Exclude, None) => return None,
        (_, parsed) => parsed.unwrap_or(0.0),
    };

    (credit > 0.0 && grade_point >= 0.0).then_some((credit, grade_point))
}

/// Parse user input as a decimal, reading zero for anything unusable
pub fn parse_decimal(raw: &str) -> f64 {
    parse_decimal_opt(raw).unwrap_or(0.0)
}

/// Parse the leading decimal number of `raw`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so `" 3 hrs"`
/// reads as 3. Returns `None` when there is no number or it is not finite.
pub fn parse_decimal_opt(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let scan_digits = |from: usize| {
        from + bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = scan_digits(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = scan_digits(end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = end + 1 + sign;
        let exp_end = scan_digits(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::CourseId;

    fn record(credit: &str, grade_point: &str) -> CourseRecord {
        CourseRecord {
            id: CourseId(0),
            course_name: String::new(),
            credit: credit.to_string(),
            grade_point: grade_point.to_string(),
        }
    }

    #[test]
    fn test_parse_decimal_plain_numbers() {
        assert_eq!(parse_decimal("3"), 3.0);
        assert_eq!(parse_decimal("1.5"), 1.5);
        assert_eq!(parse_decimal(".5"), 0.5);
        assert_eq!(parse_decimal("4."), 4.0);
        assert_eq!(parse_decimal("-2"), -2.0);
        assert_eq!(parse_decimal("+2.25"), 2.25);
        assert_eq!(parse_decimal("1e1"), 10.0);
    }

    #[test]
    fn test_parse_decimal_reads_leading_number() {
        assert_eq!(parse_decimal("  3 hrs"), 3.0);
        assert_eq!(parse_decimal("3.75abc"), 3.75);
        assert_eq!(parse_decimal("2e"), 2.0);
        assert_eq!(parse_decimal("2e+"), 2.0);
        assert_eq!(parse_decimal("1.2.3"), 1.2);
    }

    #[test]
    fn test_parse_decimal_garbage_is_zero() {
        assert_eq!(parse_decimal(""), 0.0);
        assert_eq!(parse_decimal("   "), 0.0);
        assert_eq!(parse_decimal("abc"), 0.0);
        assert_eq!(parse_decimal("."), 0.0);
        assert_eq!(parse_decimal("-"), 0.0);
        assert_eq!(parse_decimal("1e999"), 0.0);
        assert_eq!(parse_decimal_opt(""), None);
        assert_eq!(parse_decimal_opt("inf"), None);
        assert_eq!(parse_decimal_opt("0"), Some(0.0));
    }

    #[test]
    fn test_weighted_average() {
        let records = [record("3", "4.0"), record("4", "3.0"), record("3", "0.0")];
        let agg = Aggregates::compute(&records, UngradedPolicy::CountAsZero);

        assert_eq!(agg.total_credits, 10.0);
        assert_eq!(agg.total_points, 24.0);
        assert!((agg.gpa - 2.4).abs() < 1e-9);
        assert_eq!(agg.gpa_display(), "2.40");
        assert_eq!(agg.total_credits_display(), "10.00");
    }

    #[test]
    fn test_no_credit_means_zero_gpa() {
        let records = [record("", ""), record("0", "4.0"), record("abc", "3.0")];
        let agg = Aggregates::compute(&records, UngradedPolicy::CountAsZero);

        assert_eq!(agg.total_credits, 0.0);
        assert_eq!(agg.gpa, 0.0);
        assert!(!agg.gpa.is_nan());
        assert_eq!(agg.gpa_display(), "0.00");
    }

    #[test]
    fn test_negative_values_do_not_contribute() {
        assert_eq!(contribution(&record("-3", "4.0"), UngradedPolicy::CountAsZero), None);
        assert_eq!(contribution(&record("3", "-1"), UngradedPolicy::CountAsZero), None);
    }

    #[test]
    fn test_ungraded_policy() {
        let ungraded = record("3", "");
        let failed = record("3", "0");

        assert_eq!(contribution(&ungraded, UngradedPolicy::CountAsZero), Some((3.0, 0.0)));
        assert_eq!(contribution(&ungraded, UngradedPolicy::Exclude), None);

        // An explicit F counts under both policies
        assert_eq!(contribution(&failed, UngradedPolicy::CountAsZero), Some((3.0, 0.0)));
        assert_eq!(contribution(&failed, UngradedPolicy::Exclude), Some((3.0, 0.0)));

        let records = [ungraded, record("3", "4.0")];
        let counted = Aggregates::compute(&records, UngradedPolicy::CountAsZero);
        let excluded = Aggregates::compute(&records, UngradedPolicy::Exclude);
        assert_eq!(counted.total_credits, 6.0);
        assert_eq!(counted.gpa, 2.0);
        assert_eq!(excluded.total_credits, 3.0);
        assert_eq!(excluded.gpa, 4.0);
    }

    #[test]
    fn test_order_independent() {
        let forward = [record("1.5", "3.25"), record("4", "2.75"), record("2", "4.0")];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = Aggregates::compute(&forward, UngradedPolicy::CountAsZero);
        let b = Aggregates::compute(&reversed, UngradedPolicy::CountAsZero);
        assert_eq!(a.total_credits, b.total_credits);
        assert!((a.gpa - b.gpa).abs() < 1e-12);
    }
}

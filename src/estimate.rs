//! Worst-case output size, shown before a run starts.
//!
//! Name widths are rough averages for English; the figures are advisory and
//! never influence rendering.

use std::fmt;

use crate::{CalendarDate, DAY_FIRST_SEPARATOR, DateRange, Field, FieldSpec, FormatSpec, Style};

/// Average width, in bytes, of one rendered field.
const fn average_width(field: FieldSpec) -> f64 {
    match (field.field, field.style) {
        // only days 1-9 are a single byte
        (Field::Day, Style::Short) => 1.5,
        // only months 1-9 are a single byte
        (Field::Month, Style::Short) => 1.3,
        (Field::Year, Style::Short) | (Field::Day | Field::Month, Style::Long) => 2.0,
        (Field::Year, Style::Long) => 4.0,
        (Field::Weekday | Field::MonthName, Style::Short) => 3.0,
        (Field::Weekday, Style::Long) => 6.8,
        (Field::MonthName, Style::Long) => 6.1,
    }
}

/// Line and byte counts for a run with no duplicate suppression.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub range:       DateRange,
    pub total_days:  usize,
    pub total_lines: usize,
    pub bytes:       f64,
}

impl Estimate {
    pub fn new(range: &DateRange, specs: &[FormatSpec], divider: &str) -> Self {
        let per_day: f64 = specs
            .iter()
            .map(|spec| {
                let fields = spec.fields();
                let dividers = fields.len().saturating_sub(1) * divider.len();
                fields.iter().copied().map(average_width).sum::<f64>() + dividers as f64
            })
            .sum();

        let total_days = range.len();
        let total_lines = total_days * specs.len();

        Self {
            range: *range,
            total_days,
            total_lines,
            bytes: (total_days as f64).mul_add(per_day, total_lines as f64),
        }
    }

    /// Byte estimate rounded down to a whole byte.
    pub fn approx_bytes(&self) -> u64 {
        self.bytes as u64
    }

    pub fn megabytes(&self) -> f64 {
        self.bytes / 1_000_000.0
    }
}

/// `DD/MM/YYYY`, the form dates are entered in.
struct DayFirst(CalendarDate);

impl fmt::Display for DayFirst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = DAY_FIRST_SEPARATOR;
        write!(
            f,
            "{:02}{sep}{:02}{sep}{:04}",
            self.0.day().get(),
            self.0.month().get(),
            self.0.year().get()
        )
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Start date .................. {}", DayFirst(self.range.start()))?;
        writeln!(f, "End date .................... {}", DayFirst(self.range.end()))?;
        writeln!(f, "Total days .................. {}", self.total_days)?;
        writeln!(f, "Total lines worst case ...... {}", self.total_lines)?;
        writeln!(f, "Size worst case (bytes) ..... ~{}", self.approx_bytes())?;
        write!(f, "Size worst case (MB)    ..... ~{:.2}", self.megabytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{range, specs};

    #[test]
    fn test_counts() {
        let estimate = Estimate::new(&range((2001, 1, 1), (2001, 1, 5)), &specs(&["DMY", "dby"]), "");
        assert_eq!(estimate.total_days, 4);
        assert_eq!(estimate.total_lines, 8);
    }

    #[test]
    fn test_bytes_for_fixed_width_format() {
        // "DMY" is always 8 bytes plus a newline.
        let estimate = Estimate::new(&range((2001, 1, 1), (2001, 1, 11)), &specs(&["DMY"]), "");
        assert_eq!(estimate.approx_bytes(), 90);
    }

    #[test]
    fn test_divider_counts_between_fields_only() {
        // 8 bytes, two dividers of 2 bytes, one newline.
        let estimate = Estimate::new(&range((2001, 1, 1), (2001, 1, 2)), &specs(&["DMY"]), "--");
        assert_eq!(estimate.approx_bytes(), 13);

        let single = Estimate::new(&range((2001, 1, 1), (2001, 1, 2)), &specs(&["Y"]), "--");
        assert_eq!(single.approx_bytes(), 5);
    }

    #[test]
    fn test_field_widths() {
        struct TestCase {
            symbol: char,
            width:  f64,
        }

        let cases = [
            TestCase {
                symbol: 'd',
                width:  1.5,
            },
            TestCase {
                symbol: 'D',
                width:  2.0,
            },
            TestCase {
                symbol: 'm',
                width:  1.3,
            },
            TestCase {
                symbol: 'M',
                width:  2.0,
            },
            TestCase {
                symbol: 'y',
                width:  2.0,
            },
            TestCase {
                symbol: 'Y',
                width:  4.0,
            },
            TestCase {
                symbol: 'a',
                width:  3.0,
            },
            TestCase {
                symbol: 'A',
                width:  6.8,
            },
            TestCase {
                symbol: 'b',
                width:  3.0,
            },
            TestCase {
                symbol: 'B',
                width:  6.1,
            },
        ];

        for case in &cases {
            let field = FieldSpec::from_symbol(case.symbol).unwrap();
            assert!(
                (average_width(field) - case.width).abs() < f64::EPSILON,
                "width of {}",
                case.symbol
            );
        }
    }

    #[test]
    fn test_empty_range() {
        let estimate = Estimate::new(&range((2001, 1, 1), (2001, 1, 1)), &crate::vocabulary(), "-");
        assert_eq!(estimate.total_days, 0);
        assert_eq!(estimate.total_lines, 0);
        assert_eq!(estimate.approx_bytes(), 0);
    }

    #[test]
    fn test_display_block() {
        let estimate = Estimate::new(&range((2001, 1, 1), (2001, 1, 11)), &specs(&["DMY"]), "");
        let text = estimate.to_string();
        assert!(text.contains("Start date .................. 01/01/2001"));
        assert!(text.contains("End date .................... 11/01/2001"));
        assert!(text.contains("Total days .................. 10"));
        assert!(text.contains("Size worst case (bytes) ..... ~90"));
        assert!(text.ends_with("~0.00"));
    }
}

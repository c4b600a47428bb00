use crate::angles::Orientation;
use crate::common::Timestamp;

pub const COMMENT_MARKER: char = '#';

/// Parses one sensor log line of the form
/// `MM/DD/YY HH:MM:SS.ffffff x,y,z,w`.
///
/// Returns `None` for anything that is not a record: blank lines, comments,
/// lines with fewer than three fields, a bad timestamp, or fewer than four
/// numeric components. Extra fields and extra components are ignored.
pub fn parse_record(line: &str) -> Option<(Timestamp, Orientation)> {
    if line.starts_with(COMMENT_MARKER) || line.trim().is_empty() {
        return None;
    }

    let mut fields = line.split_whitespace();
    let (date, time, components) = (fields.next()?, fields.next()?, fields.next()?);

    let timestamp = Timestamp::parse_sensor(date, time)?;
    let components = parse_components(components)?;

    Some((timestamp, Orientation::from_xyzw(components)))
}

fn parse_components(field: &str) -> Option<[f64; 4]> {
    let values = field
        .split(',')
        .map(|value| value.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .ok()?;
    if values.len() < 4 {
        return None;
    }
    Some([values[0], values[1], values[2], values[3]])
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn well_formed_line() {
        let (timestamp, q) = parse_record("07/14/23 13:05:02.123456 1.0,0.0,0.0,0.0").unwrap();
        let expected = NaiveDate::from_ymd_opt(2023, 7, 14)
            .unwrap()
            .and_hms_micro_opt(13, 5, 2, 123456)
            .unwrap();
        assert_eq!(timestamp.date_time(), expected);
        assert_eq!((q.w(), q.x(), q.y(), q.z()), (0.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn trailing_newline_and_tabs() {
        let (_, q) = parse_record("07/14/23\t13:05:02.5\t0.1,0.2,0.3,0.9\r\n").unwrap();
        assert_eq!((q.w(), q.x(), q.y(), q.z()), (0.9, 0.1, 0.2, 0.3));
    }

    #[test]
    fn extra_components_and_fields_ignored() {
        let (_, q) = parse_record("07/14/23 13:05:02.5 0.1,0.2,0.3,0.9,42.0 trailing").unwrap();
        assert_eq!((q.w(), q.x(), q.y(), q.z()), (0.9, 0.1, 0.2, 0.3));
    }

    #[test]
    fn scientific_notation() {
        let (_, q) = parse_record("07/14/23 13:05:02.5 1e-3,-2E-2,0,1").unwrap();
        assert_eq!((q.w(), q.x(), q.y(), q.z()), (1.0, 0.001, -0.02, 0.0));
    }

    #[test]
    fn not_a_record() {
        let lines = [
            "",
            "   ",
            "\n",
            "# 07/14/23 13:05:02.123456 1.0,0.0,0.0,0.0",
            "#comment",
            "07/14/23 13:05:02.123456",
            "07/14/23",
            "07/14/23 13:05:02.123456 1.0,0.0,0.0",
            "07/14/23 13:05:02.123456 1.0,0.0,abc,0.0",
            "07/14/23 13:05:02.123456 1.0,,0.0,0.0",
            "07/14/23 13:05:02.123456 1.0;0.0;0.0;0.0",
            "2023-07-14 13:05:02.123456 1.0,0.0,0.0,0.0",
            "07/14/23 13:05:02 1.0,0.0,0.0,0.0",
            "07/32/23 13:05:02.1 1.0,0.0,0.0,0.0",
            "07/14/23 13:05:60.5 0.0,0.0,0.0,1.0",
            "timestamp time quaternion",
        ];
        for line in lines {
            assert!(parse_record(line).is_none(), "{:?} parsed as a record", line);
        }
    }
}

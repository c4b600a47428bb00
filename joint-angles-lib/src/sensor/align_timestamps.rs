use super::sensor_stream::SensorStream;
use crate::common::Timestamp;

/// Timestamps present in every stream, ascending. Exact matches only.
pub fn common_timestamps(streams: &[&SensorStream]) -> Vec<Timestamp> {
    let Some((smallest, others)) = smallest_first(streams) else {
        return Vec::new();
    };

    smallest
        .timestamps()
        .filter(|timestamp| others.iter().all(|stream| stream.contains(timestamp)))
        .copied()
        .collect()
}

// iterate the smallest stream, probe the rest
fn smallest_first<'a>(
    streams: &[&'a SensorStream],
) -> Option<(&'a SensorStream, Vec<&'a SensorStream>)> {
    let (index, smallest) = streams
        .iter()
        .enumerate()
        .min_by_key(|(_, stream)| stream.len())?;
    let others = streams
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, stream)| *stream)
        .collect();
    Some((*smallest, others))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::angles::Orientation;

    fn timestamp(second: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2023, 7, 14)
            .unwrap()
            .and_hms_micro_opt(13, 5, second, 250)
            .unwrap()
            .into()
    }

    fn stream(seconds: &[u32]) -> SensorStream {
        seconds
            .iter()
            .map(|&second| (timestamp(second), Orientation::identity()))
            .collect()
    }

    #[test]
    fn intersection_is_sorted() {
        let a = stream(&[9, 1, 5, 3, 7]);
        let b = stream(&[7, 3, 2, 9, 5]);
        let c = stream(&[5, 9, 3, 4]);
        assert_eq!(
            common_timestamps(&[&a, &b, &c]),
            vec![timestamp(3), timestamp(5), timestamp(9)]
        );
    }

    #[test]
    fn matches_set_intersection() {
        let sets: [&[u32]; 3] = [&[0, 2, 4, 6, 8, 10], &[0, 3, 6, 9], &[6, 0, 12, 1]];
        let streams: Vec<SensorStream> = sets.iter().map(|s| stream(s)).collect();

        let expected: BTreeSet<u32> = sets
            .iter()
            .map(|s| s.iter().copied().collect::<BTreeSet<_>>())
            .reduce(|acc, s| acc.intersection(&s).copied().collect())
            .unwrap();
        let expected: Vec<Timestamp> = expected.into_iter().map(timestamp).collect();

        let refs: Vec<&SensorStream> = streams.iter().collect();
        assert_eq!(common_timestamps(&refs), expected);
    }

    #[test]
    fn empty_stream_gives_empty_intersection() {
        let a = stream(&[1, 2, 3]);
        let b = stream(&[]);
        let c = stream(&[1, 2, 3]);
        assert!(common_timestamps(&[&a, &b, &c]).is_empty());
    }

    #[test]
    fn disjoint_streams() {
        let a = stream(&[1, 2]);
        let b = stream(&[3, 4]);
        let c = stream(&[1, 4]);
        assert!(common_timestamps(&[&a, &b, &c]).is_empty());
    }

    #[test]
    fn no_streams() {
        assert!(common_timestamps(&[]).is_empty());
    }

    #[test]
    fn microsecond_difference_does_not_match() {
        let a = stream(&[1]);
        let mut b = SensorStream::new();
        let off_by_one = NaiveDate::from_ymd_opt(2023, 7, 14)
            .unwrap()
            .and_hms_micro_opt(13, 5, 1, 251)
            .unwrap();
        b.insert(off_by_one.into(), Orientation::identity());
        assert!(common_timestamps(&[&a, &b]).is_empty());
    }
}

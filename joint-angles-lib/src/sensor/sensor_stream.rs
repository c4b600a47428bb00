use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, trace};

use super::parse_record::parse_record;
use crate::angles::Orientation;
use crate::common::{list_files, readers::open_buffered, Timestamp};

/// Counters collected while loading a sensor folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub files: usize,
    pub lines: usize,
    pub records: usize,
    pub skipped: usize,
    /// Records that replaced an earlier reading with the same timestamp.
    pub overwritten: usize,
}

impl LoadStats {
    fn merge(&mut self, other: LoadStats) {
        self.files += other.files;
        self.lines += other.lines;
        self.records += other.records;
        self.skipped += other.skipped;
        self.overwritten += other.overwritten;
    }
}

/// All orientation readings of one sensor, keyed by timestamp.
///
/// A later reading with the same timestamp replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct SensorStream {
    readings: BTreeMap<Timestamp, Orientation>,
}

impl SensorStream {
    pub fn new() -> Self {
        Self {
            readings: BTreeMap::new(),
        }
    }

    /// Loads every file under `root`, recursively.
    ///
    /// Fails on the first directory or file that cannot be read.
    pub fn load(root: &Path) -> Result<(Self, LoadStats)> {
        let mut stream = Self::new();
        let mut stats = LoadStats::default();

        let files = list_files(root)
            .with_context(|| format!("failed to load sensor folder {}", root.display()))?;
        for file_path in &files {
            let reader = open_buffered(file_path)?;
            let file_stats = stream
                .read_lines(reader)
                .with_context(|| format!("failed to read {}", file_path.display()))?;
            debug!("{}: {:?}", file_path.display(), file_stats);
            stats.merge(file_stats);
            stats.files += 1;
        }

        info!(
            "Loaded {} readings from {} files in {}",
            stream.len(),
            stats.files,
            root.display()
        );
        Ok((stream, stats))
    }

    /// Parses every line of `reader` into the stream.
    pub fn read_lines<R: BufRead>(&mut self, reader: R) -> Result<LoadStats> {
        let mut stats = LoadStats::default();
        for line in reader.lines() {
            let line = line?;
            stats.lines += 1;
            match parse_record(&line) {
                Some((timestamp, orientation)) => {
                    stats.records += 1;
                    if self.insert(timestamp, orientation).is_some() {
                        stats.overwritten += 1;
                    }
                }
                None => {
                    trace!("skipped line {}: {:?}", stats.lines, line);
                    stats.skipped += 1;
                }
            }
        }
        Ok(stats)
    }

    /// Inserts a reading, returning the one it replaced.
    pub fn insert(&mut self, timestamp: Timestamp, orientation: Orientation) -> Option<Orientation> {
        self.readings.insert(timestamp, orientation)
    }

    pub fn get(&self, timestamp: &Timestamp) -> Option<&Orientation> {
        self.readings.get(timestamp)
    }

    pub fn contains(&self, timestamp: &Timestamp) -> bool {
        self.readings.contains_key(timestamp)
    }

    /// Timestamps in ascending order.
    pub fn timestamps(&self) -> impl Iterator<Item = &Timestamp> {
        self.readings.keys()
    }

    pub fn first_timestamp(&self) -> Option<Timestamp> {
        self.readings.keys().next().copied()
    }

    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.readings.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl FromIterator<(Timestamp, Orientation)> for SensorStream {
    fn from_iter<I: IntoIterator<Item = (Timestamp, Orientation)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}

//! Joint angles from three body-worn orientation sensors.
//!
//! Each sensor folder holds text logs of timestamped quaternions. The readings
//! of the three sensors are joined on exact timestamps and the relative
//! rotations between sensors (1, 2) and (2, 3) are reported as flexion,
//! extension, lateral flexion and axial rotation.

pub mod analysis;
pub mod angles;
pub mod common;
pub mod sensor;

pub use analysis::{read_analysis_config, run_analysis, AnalysisConfig, AnalysisSummary};
pub use angles::{Orientation, PitchDomain};
pub use common::Timestamp;
pub use sensor::SensorStream;

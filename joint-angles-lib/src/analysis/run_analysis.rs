use std::path::PathBuf;

use anyhow::Result;
use log::{info, warn};

use super::analysis_config::AnalysisConfig;
use crate::angles::{compute_joint_angles, AngleReportWriter, JointAngleSeries, PitchDomain};
use crate::sensor::{common_timestamps, LoadStats, SensorStream};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    pub output_path: PathBuf,
    pub rows: usize,
    pub sensor_stats: [LoadStats; 3],
}

/// Aligns three sensor streams and computes their joint angles.
pub fn analyze_streams(
    sensors: [&SensorStream; 3],
    pitch_domain: PitchDomain,
) -> Result<JointAngleSeries> {
    let timestamps = common_timestamps(&sensors);
    if timestamps.is_empty() {
        warn!("Sensors share no timestamps, the report will be empty");
    } else {
        info!("{} timestamps common to all sensors", timestamps.len());
    }

    compute_joint_angles(&timestamps, sensors, pitch_domain)
}

/// Loads the three sensor folders, computes the joint angles and writes the
/// report to `config.output_path`.
///
/// The report file is only created once every angle has been computed.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisSummary> {
    let [dir_1, dir_2, dir_3] = config.sensor_directories();
    let (sensor_1, stats_1) = SensorStream::load(&dir_1)?;
    let (sensor_2, stats_2) = SensorStream::load(&dir_2)?;
    let (sensor_3, stats_3) = SensorStream::load(&dir_3)?;

    let series = analyze_streams([&sensor_1, &sensor_2, &sensor_3], config.pitch_domain)?;
    drop((sensor_1, sensor_2, sensor_3));

    let mut writer = AngleReportWriter::create(&config.output_path)?;
    writer.write_all(&series)?;
    writer.flush()?;
    info!(
        "Wrote {} rows to {}",
        writer.rows(),
        config.output_path.display()
    );

    Ok(AnalysisSummary {
        output_path: config.output_path.clone(),
        rows: writer.rows(),
        sensor_stats: [stats_1, stats_2, stats_3],
    })
}

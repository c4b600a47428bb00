use anyhow::{anyhow, Context, Result};
use log::warn;

use super::euler::{to_euler_degrees, EulerAngles, PitchDomain};
use crate::common::Timestamp;
use crate::sensor::SensorStream;

/// One angle measured across both sensor pairs, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnglePair {
    /// Sensor 2 relative to sensor 1.
    pub pair_12: f64,
    /// Sensor 3 relative to sensor 2.
    pub pair_23: f64,
}

impl AnglePair {
    pub fn new(pair_12: f64, pair_23: f64) -> Self {
        Self { pair_12, pair_23 }
    }
}

impl core::ops::Neg for AnglePair {
    type Output = AnglePair;

    fn neg(self) -> AnglePair {
        AnglePair::new(-self.pair_12, -self.pair_23)
    }
}

/// Joint angle series, index aligned with `timestamps`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointAngleSeries {
    pub timestamps: Vec<Timestamp>,
    /// Roll.
    pub flexion: Vec<AnglePair>,
    /// Negated flexion.
    pub extension: Vec<AnglePair>,
    /// Pitch.
    pub lateral_flexion: Vec<AnglePair>,
    /// Yaw.
    pub rotation: Vec<AnglePair>,
    /// Pitch values whose `asin` argument was clamped, counted per sensor pair.
    pub pitch_clamped: usize,
}

impl JointAngleSeries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            flexion: Vec::with_capacity(capacity),
            extension: Vec::with_capacity(capacity),
            lateral_flexion: Vec::with_capacity(capacity),
            rotation: Vec::with_capacity(capacity),
            pitch_clamped: 0,
        }
    }

    fn push(&mut self, timestamp: Timestamp, angles_12: EulerAngles, angles_23: EulerAngles) {
        let flexion = AnglePair::new(angles_12.roll, angles_23.roll);
        self.timestamps.push(timestamp);
        self.flexion.push(flexion);
        self.extension.push(-flexion);
        self.lateral_flexion
            .push(AnglePair::new(angles_12.pitch, angles_23.pitch));
        self.rotation.push(AnglePair::new(angles_12.yaw, angles_23.yaw));
        self.pitch_clamped += [angles_12, angles_23]
            .iter()
            .filter(|angles| angles.pitch_clamped)
            .count();
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Row view: timestamp plus flexion, extension, lateral flexion, rotation.
    pub fn rows(&self) -> impl Iterator<Item = (Timestamp, [AnglePair; 4])> + '_ {
        (0..self.len()).map(move |i| {
            (
                self.timestamps[i],
                [
                    self.flexion[i],
                    self.extension[i],
                    self.lateral_flexion[i],
                    self.rotation[i],
                ],
            )
        })
    }
}

/// Computes the joint angles between sensors (1, 2) and (2, 3) at every
/// timestamp in `timestamps`.
///
/// Each timestamp must be present in all three streams, which holds for the
/// output of [`common_timestamps`](crate::sensor::common_timestamps).
pub fn compute_joint_angles(
    timestamps: &[Timestamp],
    sensors: [&SensorStream; 3],
    pitch_domain: PitchDomain,
) -> Result<JointAngleSeries> {
    let mut series = JointAngleSeries::with_capacity(timestamps.len());

    for timestamp in timestamps {
        let [q1, q2, q3] = [0, 1, 2].map(|i| sensors[i].get(timestamp));
        let (q1, q2, q3) = match (q1, q2, q3) {
            (Some(q1), Some(q2), Some(q3)) => (q1, q2, q3),
            _ => {
                return Err(anyhow!(
                    "timestamp {} is not present in all three sensors",
                    timestamp
                ))
            }
        };

        let r12 = q2
            .relative_to(q1)
            .with_context(|| format!("sensor 1 reading at {}", timestamp))?;
        let r23 = q3
            .relative_to(q2)
            .with_context(|| format!("sensor 2 reading at {}", timestamp))?;

        let angles_12 = to_euler_degrees(&r12, pitch_domain)
            .with_context(|| format!("sensors 1-2 at {}", timestamp))?;
        let angles_23 = to_euler_degrees(&r23, pitch_domain)
            .with_context(|| format!("sensors 2-3 at {}", timestamp))?;

        series.push(*timestamp, angles_12, angles_23);
    }

    if series.pitch_clamped > 0 {
        warn!(
            "Clamped {} pitch asin arguments to [-1, 1] over {} timestamps",
            series.pitch_clamped,
            series.len()
        );
    }
    Ok(series)
}

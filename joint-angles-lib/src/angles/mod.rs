mod angle_report_writer;
mod euler;
mod joint_angles;
mod orientation;

pub use angle_report_writer::{AngleReportWriter, REPORT_COLUMNS};
pub use euler::{to_euler_degrees, EulerAngles, PitchDomain};
pub use joint_angles::{compute_joint_angles, AnglePair, JointAngleSeries};
pub use orientation::Orientation;

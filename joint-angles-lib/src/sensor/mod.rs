mod align_timestamps;
mod parse_record;
mod sensor_stream;

pub use align_timestamps::common_timestamps;
pub use parse_record::{parse_record, COMMENT_MARKER};
pub use sensor_stream::{LoadStats, SensorStream};

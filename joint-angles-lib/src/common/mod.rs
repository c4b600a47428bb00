mod list_files;
pub(crate) mod readers;
mod timestamp;

use std::path::{Path, PathBuf};

pub use list_files::list_files;
pub use timestamp::{Timestamp, SENSOR_TIMESTAMP_FORMAT};

pub fn extend_path(path: &Path, extend: &str) -> PathBuf {
    let mut path = path.to_path_buf();
    path.push(extend);
    path
}

use std::path::Path;

use anyhow::Result;
use joint_angles_lib::SensorStream;

pub fn inspect_sensor_folder(folder: &Path) -> Result<()> {
    let (stream, stats) = SensorStream::load(folder)?;

    println!("Sensor folder: {}", folder.display());
    println!("Files:         {}", stats.files);
    println!("Lines:         {}", stats.lines);
    println!("Records:       {}", stats.records);
    println!("Skipped lines: {}", stats.skipped);
    println!("Overwritten:   {}", stats.overwritten);
    println!("Readings:      {}", stream.len());
    match (stream.first_timestamp(), stream.last_timestamp()) {
        (Some(first), Some(last)) => {
            println!("First reading: {}", first);
            println!("Last reading:  {}", last);
        }
        _ => println!("No readings"),
    }

    Ok(())
}

//! JSON persistence for run records.

use crate::recording::run_record::SimulationRecord;
use crate::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Writes `record` as pretty JSON, creating parent directories as needed.
pub fn save_record<P: AsRef<Path>>(path: P, record: &SimulationRecord) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.flush()?;
    log::info!("run record written to {}", path.display());
    Ok(())
}

pub fn load_record<P: AsRef<Path>>(path: P) -> Result<SimulationRecord> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::supply::{ShuffleMode, Supply};
    use crate::recording::RunRecorder;
    use crate::simulation::Simulation;
    use crate::SupplyError;
    use assert_matches::assert_matches;

    #[test]
    fn test_save_then_load_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs").join("seeded.json");

        let mode = ShuffleMode::Seeded(99);
        let supply = Supply::build(3, mode).unwrap();
        let mut recorder = RunRecorder::start(&supply, mode);
        let mut simulation = Simulation::new(supply);
        let summary = simulation.run(|sim, outcome| recorder.record_turn(sim, outcome));
        let record = recorder.finish(summary);

        save_record(&path, &record).unwrap();
        let loaded = load_record(&path).unwrap();

        assert_eq!(loaded, record);
        assert_eq!(loaded.shuffle, ShuffleMode::Seeded(99));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_record(dir.path().join("missing.json"));
        assert_matches!(result, Err(SupplyError::Io(_)));
    }

    #[test]
    fn test_load_garbage_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_matches!(load_record(&path), Err(SupplyError::Serialization(_)));
    }
}

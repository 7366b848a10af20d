use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde_json;

use crate::repository::document::CalendarDocument;
use crate::repository::traits::CalendarRepository;

const DEFAULT_FILE_NAME: &str = "calendar.json";

/// `~/.nova`, where the calendar and the configuration live by default.
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".nova"))
}

#[derive(Clone)]
pub struct FileCalendarRepository {
    file_path: PathBuf,
}

impl FileCalendarRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create data directory {}", path.display()))?;
        path.push(DEFAULT_FILE_NAME);

        Ok(FileCalendarRepository { file_path: path })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl CalendarRepository for FileCalendarRepository {
    fn load(&self) -> Result<Option<CalendarDocument>> {
        if !self.file_path.exists() {
            log::info!("No calendar file at {}", self.file_path.display());
            return Ok(None);
        }

        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let document = serde_json::from_reader(reader)
            .with_context(|| format!("Malformed calendar file {}", self.file_path.display()))?;
        log::info!("Loaded calendar from {}", self.file_path.display());
        Ok(Some(document))
    }

    fn save(&self, document: &CalendarDocument) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush()?;
        log::debug!("Saved calendar to {}", self.file_path.display());
        Ok(())
    }
}

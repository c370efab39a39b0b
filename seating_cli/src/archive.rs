use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use seating::TournamentRecord;
use tracing::debug;

const EXTENSION: &str = "json";

/// A directory of stored tournaments, one JSON file each.
pub struct Archive {
    directory: PathBuf,
}

impl Archive {
    /// Nothing is created on disk until the first tournament is stored.
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Writes the record, replacing any earlier record with the same name and date.
    pub fn store(&self, record: &TournamentRecord) -> anyhow::Result<PathBuf> {
        if !self.directory.is_dir() {
            debug!(directory = %self.directory.display(), "Creating archive directory");
            std::fs::create_dir_all(&self.directory)?;
        }
        let filepath = self.directory.join(record.file_name());
        let file = File::create(&filepath)
            .with_context(|| format!("Could not create '{}'", filepath.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(record.to_json()?.as_bytes())?;
        writer.flush()?;
        Ok(filepath)
    }

    /// File names of all stored tournaments, sorted. Empty if the directory
    /// doesn't exist yet.
    pub fn list(&self) -> anyhow::Result<Vec<String>> {
        if !self.directory.is_dir() {
            return Ok(Vec::new());
        }
        let mut file_names = Vec::new();
        for entry in std::fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                file_names.push(String::from(file_name));
            }
        }
        file_names.sort();
        Ok(file_names)
    }

    pub fn load(&self, file_name: &str) -> anyhow::Result<TournamentRecord> {
        if Path::new(file_name).file_name().and_then(|name| name.to_str()) != Some(file_name) {
            anyhow::bail!("'{}' is not a plain file name", file_name);
        }
        let filepath = self.directory.join(file_name);
        if !filepath.is_file() {
            anyhow::bail!("Tournament '{}' does not exist", filepath.display());
        }
        let json = std::fs::read_to_string(&filepath)?;
        Ok(TournamentRecord::from_json(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use seating::Participant;

    use super::*;

    fn record(name: &str) -> TournamentRecord {
        TournamentRecord::new(
            name,
            "2024-03-09",
            vec![vec![Participant::from("Alice"), Participant::from("Bob")]],
        )
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let archive = Archive::new(dir.path().join("tournaments"));
        assert!(archive.list().unwrap().is_empty());
    }

    #[test]
    fn store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let archive = Archive::new(dir.path().join("tournaments"));
        let path = archive.store(&record("Spring Cup")).unwrap();
        assert_eq!(path, dir.path().join("tournaments/Spring_Cup_2024-03-09.json"));
        assert!(path.is_file());
    }

    #[test]
    fn store_list_load() {
        let dir = tempfile::tempdir().unwrap();
        let archive = Archive::new(dir.path().to_path_buf());
        archive.store(&record("b")).unwrap();
        archive.store(&record("a")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a tournament").unwrap();

        assert_eq!(
            archive.list().unwrap(),
            vec!["a_2024-03-09.json", "b_2024-03-09.json"]
        );
        assert_eq!(archive.load("b_2024-03-09.json").unwrap(), record("b"));
    }

    #[test]
    fn names_with_path_separators_stay_inside() {
        let dir = tempfile::tempdir().unwrap();
        let archive = Archive::new(dir.path().join("tournaments"));
        let path = archive.store(&record("../escaped")).unwrap();
        assert_eq!(path.parent(), Some(archive.directory()));
        assert!(!dir.path().join("escaped_2024-03-09.json").exists());

        archive.store(&record("Cup 1/2")).unwrap();
        assert_eq!(
            archive.list().unwrap(),
            vec![".._escaped_2024-03-09.json", "Cup_1_2_2024-03-09.json"]
        );
        assert_eq!(archive.load("Cup_1_2_2024-03-09.json").unwrap(), record("Cup 1/2"));
    }

    #[test]
    fn store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let archive = Archive::new(dir.path().to_path_buf());
        archive.store(&record("a")).unwrap();
        let mut changed = record("a");
        changed.tables[0].reverse();
        archive.store(&changed).unwrap();
        assert_eq!(archive.list().unwrap().len(), 1);
        assert_eq!(archive.load("a_2024-03-09.json").unwrap(), changed);
    }

    #[test]
    fn load_rejects_paths_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let archive = Archive::new(dir.path().to_path_buf());
        assert!(archive.load("../elsewhere.json").is_err());
        assert!(archive.load("missing.json").is_err());
    }
}

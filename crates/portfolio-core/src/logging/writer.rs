//! Append-only JSONL log file for one app session.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of the log file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,
    pub level: String,
    pub session: String,
    pub target: String,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

impl LogEntry {
    pub fn new(
        level: impl Into<String>,
        session: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            session: session.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }
}

/// Writes `<logs_dir>/raw/<date>_<session>.jsonl`.
pub struct SessionLogWriter {
    session: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl SessionLogWriter {
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        let session = session.into();
        let raw_dir = logs_dir.as_ref().join("raw");
        fs::create_dir_all(&raw_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = raw_dir.join(format!("{}_{}.jsonl", date, session));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            session,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry and flush, so a crash loses at most the entry
    /// being written.
    pub fn write(&self, entry: &LogEntry) -> std::io::Result<()> {
        let line = serde_json::to_string(entry)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| std::io::Error::other("log writer poisoned"))?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

/// Read every entry from a JSONL file, skipping malformed lines.
pub fn read_entries(path: impl AsRef<Path>) -> std::io::Result<Vec<LogEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let temp = TempDir::new().unwrap();
        let writer = SessionLogWriter::new(temp.path(), "desk").unwrap();
        assert!(writer.path().to_string_lossy().ends_with("_desk.jsonl"));

        writer
            .write(&LogEntry::new("info", "desk", "portfolio", "hello"))
            .unwrap();
        writer
            .write(
                &LogEntry::new("warn", "desk", "portfolio", "fields")
                    .with_fields(serde_json::json!({"count": 2})),
            )
            .unwrap();

        let entries = read_entries(writer.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "hello");
        assert_eq!(entries[1].fields.as_ref().unwrap()["count"], 2);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x.jsonl");
        std::fs::write(&path, "not json\n\n").unwrap();
        assert!(read_entries(&path).unwrap().is_empty());
    }
}

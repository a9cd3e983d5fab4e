//! Result sinks consuming one [`AnalysisRecord`] per ticker

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::models::result::AnalysisRecord;

#[async_trait]
pub trait ResultSink {
    async fn append(&self, record: &AnalysisRecord) -> Result<()>;
}

/// Appends each record as one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    // Serialises appends so concurrent tickers never interleave lines.
    lock: Mutex<()>,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read back every record in the file
    pub async fn read_all(&self) -> Result<Vec<AnalysisRecord>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {:?}", self.path));
            }
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).context("Failed to parse result record"))
            .collect()
    }
}

#[async_trait]
impl ResultSink for JsonLinesSink {
    async fn append(&self, record: &AnalysisRecord) -> Result<()> {
        let mut line = serde_json::to_string(record).context("Failed to serialize record")?;
        line.push('\n');

        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open results file: {:?}", self.path))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Keeps records in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<AnalysisRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<AnalysisRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn append(&self, record: &AnalysisRecord) -> Result<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }
}

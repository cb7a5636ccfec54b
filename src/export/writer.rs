//! Copyright © 2025-2026 The Dashi Authors. All Rights Reserved.
//!
//! This file is part of Dashi.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Export Writer Module
//!
//! Stream writer for compiled saved objects. NDJSON is the import format
//! of the target application (one saved object per line, optionally
//! followed by an export summary line); the JSON array format exists for
//! inspection and tooling.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::Result;
use crate::view::DashiSavedObject;

/// Supported output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashiOutputFormat {
    /// Line-delimited JSON, the import format of the target application.
    Ndjson,
    /// JSON array format.
    Json,
}

/// Configuration for the stream writer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashiWriterConfig {
    /// Output format.
    pub format: DashiOutputFormat,
    /// Pretty-print JSON output. Ignored for NDJSON.
    pub pretty: bool,
    /// Append the export summary line after the saved objects. NDJSON
    /// only.
    pub summary_line: bool,
    /// Gzip-compress the output file.
    pub compress: bool,
    /// Use atomic write (write to temp then rename).
    pub atomic_write: bool,
}

impl Default for DashiWriterConfig {
    fn default() -> Self {
        Self {
            format: DashiOutputFormat::Ndjson,
            pretty: false,
            summary_line: false,
            compress: false,
            atomic_write: true,
        }
    }
}

/// Statistics about write operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashiWriteStats {
    /// Total number of saved objects written.
    pub objects_written: usize,
    /// Total number of bytes written.
    pub bytes_written: usize,
    /// Number of files created.
    pub files_created: usize,
}

/// Serializes saved objects to an NDJSON string, one object per line.
pub fn to_ndjson_string(objects: &[DashiSavedObject]) -> Result<String> {
    let mut out = String::new();
    for object in objects {
        out.push_str(&serde_json::to_string(object)?);
        out.push('\n');
    }
    Ok(out)
}

/// Serializes saved objects to a JSON array string.
pub fn to_json_string(objects: &[DashiSavedObject], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(objects)?
    } else {
        serde_json::to_string(objects)?
    };
    Ok(json)
}

/// Stream writer for exporting saved objects to disk.
#[derive(Debug, Default)]
pub struct DashiStreamWriter {
    config: DashiWriterConfig,
    stats: DashiWriteStats,
}

impl DashiStreamWriter {
    /// Creates a new stream writer with default configuration.
    pub fn new() -> Self {
        Self {
            config: DashiWriterConfig::default(),
            stats: DashiWriteStats::default(),
        }
    }

    /// Creates a new stream writer with custom configuration.
    pub fn with_config(mut self, config: DashiWriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Writes saved objects to the specified path.
    pub fn write(&mut self, objects: &[DashiSavedObject], path: &Path) -> Result<DashiWriteStats> {
        self.stats = DashiWriteStats::default();

        if self.config.atomic_write {
            let temp_path = self.temp_path(path);
            self.write_to_path(objects, &temp_path)?;
            std::fs::rename(&temp_path, path)?;
        } else {
            self.write_to_path(objects, path)?;
        }

        self.stats.objects_written = objects.len();
        self.stats.files_created += 1;
        if let Ok(metadata) = std::fs::metadata(path) {
            self.stats.bytes_written += metadata.len() as usize;
        }

        log::info!(
            "wrote {} saved objects to {}",
            objects.len(),
            path.display()
        );
        Ok(self.stats.clone())
    }

    /// Writes to a specific path with compression handling.
    fn write_to_path(&self, objects: &[DashiSavedObject], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if self.config.compress {
            self.write_compressed(objects, path)
        } else {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            self.write_formatted(objects, &mut writer)
        }
    }

    #[cfg(feature = "compression")]
    fn write_compressed(&self, objects: &[DashiSavedObject], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        let mut writer = BufWriter::new(encoder);
        self.write_formatted(objects, &mut writer)
    }

    #[cfg(not(feature = "compression"))]
    fn write_compressed(&self, _objects: &[DashiSavedObject], _path: &Path) -> Result<()> {
        Err(crate::errors::DashiError::internal(
            "gzip output requires the 'compression' feature",
        ))
    }

    /// Writes objects in the configured format.
    fn write_formatted<W: Write>(
        &self,
        objects: &[DashiSavedObject],
        writer: &mut BufWriter<W>,
    ) -> Result<()> {
        match self.config.format {
            DashiOutputFormat::Ndjson => {
                for object in objects {
                    let line = serde_json::to_string(object)?;
                    writeln!(writer, "{}", line)?;
                }
                if self.config.summary_line {
                    let summary = json!({
                        "excludedObjects": [],
                        "excludedObjectsCount": 0,
                        "exportedCount": objects.len(),
                        "missingRefCount": 0,
                        "missingReferences": [],
                    });
                    writeln!(writer, "{}", serde_json::to_string(&summary)?)?;
                }
            }
            DashiOutputFormat::Json => {
                let json = to_json_string(objects, self.config.pretty)?;
                write!(writer, "{}", json)?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Generates the temporary path for atomic writes.
    fn temp_path(&self, path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let parent = path.parent().unwrap_or(Path::new("."));
        parent.join(format!(".{}.tmp", stem))
    }
}

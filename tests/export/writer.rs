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

//! # Dashi Export Writer Tests
//!
//! NDJSON and JSON serialization of compiled saved objects, in memory
//! and on disk: line framing, the optional export summary line, and
//! atomic writes.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test export_writer
//! ```

use dashix::compile_str;
use dashix::export::{
    to_json_string, to_ndjson_string, DashiOutputFormat, DashiStreamWriter, DashiWriterConfig,
};
use dashix::view::DashiSavedObject;
use serde_json::Value;

fn sample_objects() -> Vec<DashiSavedObject> {
    let yaml = r#"
title: First
panels:
  - type: markdown
    content: one
---
title: Second
"#;
    compile_str(yaml).unwrap()
}

/// Tests that NDJSON output has one line per saved object and each line
/// parses back to the same id.
#[test]
fn test_ndjson_framing() {
    let objects = sample_objects();
    let ndjson = to_ndjson_string(&objects).unwrap();
    let lines: Vec<&str> = ndjson.lines().collect();
    assert_eq!(lines.len(), 2);

    for (line, object) in lines.iter().zip(&objects) {
        let parsed: Value = serde_json::from_str(line).unwrap();
        assert_eq!(parsed["id"], object.id.as_str());
        assert_eq!(parsed["type"], "dashboard");
    }
}

/// Tests the JSON array format, compact and pretty.
#[test]
fn test_json_array() {
    let objects = sample_objects();
    let compact = to_json_string(&objects, false).unwrap();
    let parsed: Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert!(!compact.contains('\n'));

    let pretty = to_json_string(&objects, true).unwrap();
    assert!(pretty.contains('\n'));
    let reparsed: Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(parsed, reparsed);
}

/// Tests writing an NDJSON file to disk and the returned statistics.
#[test]
fn test_write_ndjson_file() {
    let objects = sample_objects();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboards.ndjson");

    let stats = DashiStreamWriter::new().write(&objects, &path).unwrap();
    assert_eq!(stats.objects_written, 2);
    assert_eq!(stats.files_created, 1);
    assert!(stats.bytes_written > 0);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    // No leftover temp file from the atomic write.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

/// Tests that the export summary line appends after the objects and
/// carries the exported count.
#[test]
fn test_summary_line() {
    let objects = sample_objects();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ndjson");

    let config = DashiWriterConfig {
        summary_line: true,
        ..DashiWriterConfig::default()
    };
    DashiStreamWriter::new()
        .with_config(config)
        .write(&objects, &path)
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);

    let summary: Value = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(summary["exportedCount"], 2);
    assert_eq!(summary["missingRefCount"], 0);
    assert_eq!(summary["excludedObjectsCount"], 0);
}

/// Tests writing the JSON array format to disk.
#[test]
fn test_write_json_file() {
    let objects = sample_objects();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboards.json");

    let config = DashiWriterConfig {
        format: DashiOutputFormat::Json,
        pretty: true,
        ..DashiWriterConfig::default()
    };
    DashiStreamWriter::new()
        .with_config(config)
        .write(&objects, &path)
        .unwrap();

    let parsed: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

/// Tests that missing parent directories are created on write.
#[test]
fn test_creates_parent_dirs() {
    let objects = sample_objects();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deep/dashboards.ndjson");

    DashiStreamWriter::new().write(&objects, &path).unwrap();
    assert!(path.exists());
}

/// Tests gzip output: the file starts with the gzip magic bytes and
/// decompresses back to the NDJSON content.
#[cfg(feature = "compression")]
#[test]
fn test_gzip_output() {
    use std::io::Read;

    let objects = sample_objects();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboards.ndjson.gz");

    let config = DashiWriterConfig {
        compress: true,
        ..DashiWriterConfig::default()
    };
    DashiStreamWriter::new()
        .with_config(config)
        .write(&objects, &path)
        .unwrap();

    let raw = std::fs::read(&path).unwrap();
    assert_eq!(&raw[..2], &[0x1f, 0x8b]);

    let mut decoder = flate2::read::GzDecoder::new(raw.as_slice());
    let mut content = String::new();
    decoder.read_to_string(&mut content).unwrap();
    assert_eq!(content, to_ndjson_string(&objects).unwrap());
}

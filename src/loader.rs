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

//! # Loader Module
//!
//! Reads dashboard definitions from YAML or JSON text. A YAML file may hold
//! several documents separated by `---`, one dashboard each; a JSON file
//! holds either a single dashboard object or an array of them.
//!
//! In the default lenient mode a malformed document is skipped with a
//! warning while the remaining documents load; strict mode turns the first
//! malformed document into an error.

use std::path::Path;

use serde::Deserialize;

use crate::config::DashiDashboardConfig;
use crate::errors::{DashiError, Result};

/// Result of loading one source: the dashboards that parsed, plus
/// warnings for anything skipped in lenient mode.
#[derive(Debug)]
pub struct DashiParseResult {
    pub dashboards: Vec<DashiDashboardConfig>,
    pub warnings: Vec<String>,
}

/// Loader configuration.
#[derive(Clone, Debug, Default)]
pub struct DashiLoaderConfig {
    /// Fail on the first malformed document instead of skipping it.
    pub strict: bool,
}

/// Reads dashboard config documents from strings or files.
#[derive(Debug, Default)]
pub struct DashiLoader {
    config: DashiLoaderConfig,
}

impl DashiLoader {
    /// Creates a loader with default (lenient) configuration.
    pub fn new() -> Self {
        Self {
            config: DashiLoaderConfig::default(),
        }
    }

    /// Sets strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Loads dashboards from a file, dispatching on the extension.
    ///
    /// `.json` is parsed as JSON; everything else (`.yaml`, `.yml`, or no
    /// extension) as a YAML document stream.
    pub fn load_file(&self, path: &Path) -> Result<DashiParseResult> {
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => self.load_json(&content),
            _ => self.load_yaml(&content),
        }
    }

    /// Loads dashboards from a YAML document stream.
    pub fn load_yaml(&self, source: &str) -> Result<DashiParseResult> {
        let mut dashboards = Vec::new();
        let mut warnings = Vec::new();

        for (idx, document) in serde_yaml::Deserializer::from_str(source).enumerate() {
            let value = match serde_yaml::Value::deserialize(document) {
                Ok(value) => value,
                Err(e) => {
                    return Err(DashiError::Yaml(format!("document {}: {}", idx, e)));
                }
            };

            // Blank documents between separators are not an error.
            if matches!(value, serde_yaml::Value::Null) {
                continue;
            }

            match serde_yaml::from_value::<DashiDashboardConfig>(value) {
                Ok(dashboard) => {
                    log::debug!("loaded dashboard '{}'", dashboard.title);
                    dashboards.push(dashboard);
                }
                Err(e) => {
                    if self.config.strict {
                        return Err(DashiError::schema(format!("document {}: {}", idx, e)));
                    }
                    log::warn!("skipping document {}: {}", idx, e);
                    warnings.push(format!("document {}: {}", idx, e));
                }
            }
        }

        Ok(DashiParseResult {
            dashboards,
            warnings,
        })
    }

    /// Loads dashboards from JSON: one object or an array of objects.
    pub fn load_json(&self, source: &str) -> Result<DashiParseResult> {
        let value: serde_json::Value = serde_json::from_str(source)
            .map_err(|e| DashiError::schema(format!("invalid JSON: {}", e)))?;

        let mut dashboards = Vec::new();
        let mut warnings = Vec::new();

        match value {
            serde_json::Value::Array(items) => {
                for (idx, item) in items.into_iter().enumerate() {
                    match serde_json::from_value::<DashiDashboardConfig>(item) {
                        Ok(dashboard) => dashboards.push(dashboard),
                        Err(e) => {
                            if self.config.strict {
                                return Err(DashiError::schema(format!(
                                    "document {}: {}",
                                    idx, e
                                )));
                            }
                            warnings.push(format!("document {}: {}", idx, e));
                        }
                    }
                }
            }
            serde_json::Value::Object(_) => {
                let dashboard = serde_json::from_value::<DashiDashboardConfig>(value)
                    .map_err(|e| DashiError::schema(e.to_string()))?;
                dashboards.push(dashboard);
            }
            _ => {
                return Err(DashiError::schema(
                    "JSON input must be an object or an array of objects",
                ));
            }
        }

        Ok(DashiParseResult {
            dashboards,
            warnings,
        })
    }
}

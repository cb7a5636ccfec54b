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

//! # Dashi
//!
//! Dashi compiles human-authored YAML dashboard definitions into the
//! saved-object JSON consumed by the target application's import API.
//! One YAML document describes one dashboard; the compiler emits one
//! NDJSON line per dashboard, ready for import.
//!
//! ## Pipeline
//!
//! ```text
//! YAML -> config model -> validation -> compile -> view model -> NDJSON
//! ```
//!
//! - [`loader`]: Parses YAML or JSON input into the config model
//! - [`config`]: The typed input model (panels, controls, filters)
//! - [`validate`]: Semantic checks serde cannot express
//! - [`compile`]: Pure translation to the saved-object view model
//! - [`view`]: Serialize-only output model matching the target schema
//! - [`export`]: NDJSON/JSON serialization, in memory or to disk
//!
//! ## Example
//!
//! ```no_run
//! use dashix::{compile_str, export::to_ndjson_string};
//!
//! # fn main() -> dashix::Result<()> {
//! let yaml = r#"
//! title: Web traffic
//! panels:
//!   - type: metric
//!     title: Requests
//!     esql: FROM logs-web-* | STATS requests = COUNT(*)
//!     value: requests
//! "#;
//! let objects = compile_str(yaml)?;
//! let ndjson = to_ndjson_string(&objects)?;
//! # Ok(())
//! # }
//! ```
//!
//! Compilation is deterministic: the same input always produces byte
//! identical output, including every derived id.

pub mod compile;
pub mod config;
pub mod errors;
pub mod export;
pub mod loader;
pub mod validate;
pub mod version;
pub mod view;

use std::path::Path;

pub use compile::DashiCompiler;
pub use config::DashiDashboardConfig;
pub use errors::{DashiError, Result};
pub use export::{DashiStreamWriter, DashiWriterConfig};
pub use loader::{DashiLoader, DashiParseResult};
pub use validate::DashiValidator;
pub use view::DashiSavedObject;

/// Compiles every dashboard document in a YAML string.
///
/// Runs the full pipeline: parse, validate, compile. Validation
/// warnings are logged through the `log` facade; validation errors
/// abort the compilation.
pub fn compile_str(input: &str) -> Result<Vec<DashiSavedObject>> {
    let parsed = DashiLoader::new().load_yaml(input)?;
    for warning in &parsed.warnings {
        log::warn!("{}", warning);
    }
    compile_all(&parsed.dashboards)
}

/// Compiles every dashboard document in a YAML or JSON file.
pub fn compile_file(path: impl AsRef<Path>) -> Result<Vec<DashiSavedObject>> {
    let parsed = DashiLoader::new().load_file(path.as_ref())?;
    for warning in &parsed.warnings {
        log::warn!("{}", warning);
    }
    compile_all(&parsed.dashboards)
}

/// Validates and compiles a slice of parsed dashboard configs.
pub fn compile_all(dashboards: &[DashiDashboardConfig]) -> Result<Vec<DashiSavedObject>> {
    let validator = DashiValidator::new();
    let compiler = DashiCompiler::new();
    let mut objects = Vec::with_capacity(dashboards.len());
    for dashboard in dashboards {
        for warning in validator.validate(dashboard)? {
            log::warn!("dashboard '{}': {}", dashboard.title, warning);
        }
        objects.push(compiler.compile(dashboard)?);
    }
    Ok(objects)
}

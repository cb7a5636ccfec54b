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

//! # Dashi Error Module
//!
//! This module defines the error types and utilities used throughout the
//! Dashi compiler for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Dashi uses a structured error approach with the following principles:
//!
//! - **Explicit Error Types**: Each error variant represents a specific
//!   category of failure, making it easier to handle errors appropriately
//! - **Context-Rich**: Errors include relevant context (panel ids, compile
//!   stage names, detailed messages) to aid debugging
//! - **Serde Support**: Errors can be serialized for logging and for
//!   surfacing to editor tooling that embeds the compiler
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors from the loader and the writer
//! - **Yaml**: Malformed YAML input documents
//! - **Schema**: Structural mismatches between YAML and the config model
//! - **Validation**: Semantic validation failures
//! - **Panel**: Failures scoped to a single panel's compilation
//! - **Compile**: Failures while assembling the dashboard saved object
//! - **Serde**: JSON serialization errors on the output side
//! - **Internal**: Unexpected internal failures

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Dashi.
///
/// This is a type alias for `std::result::Result<T, DashiError>` that
/// provides a more concise way to write function signatures that return
/// Dashi errors.
pub type Result<T> = std::result::Result<T, DashiError>;

/// Canonical error enumeration for Dashi.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum DashiError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Errors raised while parsing YAML input documents.
    #[error("yaml error: {0}")]
    Yaml(String),

    /// Errors caused by input that does not match the config schema.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// Validation errors triggered by semantically invalid configuration.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Any failure scoped to the compilation of a single panel.
    #[error("panel '{panel}' failed to compile: {message}")]
    Panel { panel: String, message: String },

    /// Failures that occur while assembling the dashboard saved object.
    #[error("compile error at stage '{stage}': {message}")]
    Compile { stage: String, message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for DashiError {
    fn from(err: io::Error) -> Self {
        DashiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashiError {
    fn from(err: serde_json::Error) -> Self {
        DashiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for DashiError {
    fn from(err: serde_yaml::Error) -> Self {
        DashiError::Yaml(err.to_string())
    }
}

impl DashiError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        DashiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        DashiError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct panel-scoped compile errors.
    pub fn panel(panel: impl Into<String>, message: impl Into<String>) -> Self {
        DashiError::Panel {
            panel: panel.into(),
            message: message.into(),
        }
    }

    /// Helper to construct compile-stage errors.
    pub fn compile(stage: impl Into<String>, message: impl Into<String>) -> Self {
        DashiError::Compile {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        DashiError::Internal(message.into())
    }
}

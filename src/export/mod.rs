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

//! # Export Module
//!
//! Serialization of compiled saved objects to NDJSON or JSON, in memory
//! or to disk with atomic writes and optional gzip compression.

pub mod writer;

pub use writer::{
    to_json_string, to_ndjson_string, DashiOutputFormat, DashiStreamWriter, DashiWriteStats,
    DashiWriterConfig,
};

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

//! Version constants for the compiler and the target saved-object schema.

/// Version of the Dashi crate itself.
pub const DASHI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core migration version stamped onto every exported saved object.
pub const CORE_MIGRATION_VERSION: &str = "8.8.0";

/// Dashboard type migration version stamped onto every exported saved object.
pub const TYPE_MIGRATION_VERSION: &str = "10.2.0";

/// Schema version recorded inside dashboard attributes.
pub const DASHBOARD_ATTRIBUTES_VERSION: u32 = 3;

/// Compatibility summary for the target saved-object schema.
#[derive(Clone, Debug)]
pub struct DashiCompat {
    pub dashi: &'static str,
    pub core_migration: &'static str,
    pub type_migration: &'static str,
}

/// Reports the schema versions this build of the compiler emits.
pub fn compat() -> DashiCompat {
    DashiCompat {
        dashi: DASHI_VERSION,
        core_migration: CORE_MIGRATION_VERSION,
        type_migration: TYPE_MIGRATION_VERSION,
    }
}

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

//! # View Model Module
//!
//! Serialize-only representation of the target saved-object schema: the
//! output side of the compiler. Field names follow the target JSON schema
//! exactly (camelCase, stringified nested JSON), so serialization is a
//! plain `serde_json::to_string` away.
//!
//! - **saved_object**: Saved-object envelope, dashboard attributes, panel
//!   entries, references
//! - **lens**: Embedded Lens attributes and the textBased datasource state
//! - **controls**: Control group input

pub mod controls;
pub mod lens;
pub mod saved_object;

pub use controls::DashiControlGroupInput;
pub use lens::{
    DashiAdHocDataView, DashiColumnMeta, DashiDatasourceStates, DashiEsqlQuery,
    DashiLensAttributes, DashiLensColumn, DashiLensState, DashiTextBasedLayer,
    DashiTextBasedState,
};
pub use saved_object::{
    DashiDashboardAttributes, DashiGridData, DashiPanelJson, DashiReference, DashiSavedObject,
    DashiSavedObjectMeta,
};

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

//! Image panels compile to an image embeddable referencing either a URL
//! or a previously uploaded file id.

use serde_json::{json, Value};

use crate::config::{DashiImagePanel, DashiImageSource};

/// Builds the `embeddableConfig` of an image panel.
pub fn compile(config: &DashiImagePanel) -> Value {
    let src = match &config.src {
        DashiImageSource::Url { url } => json!({ "type": "url", "url": url }),
        DashiImageSource::File { file_id } => json!({ "type": "file", "fileId": file_id }),
    };

    let mut image_config = json!({
        "src": src,
        "altText": config.alt_text.clone().unwrap_or_default(),
        "sizing": { "objectFit": config.fit.as_str() },
    });
    if let Some(color) = &config.background_color {
        image_config["backgroundColor"] = json!(color);
    }

    json!({ "imageConfig": image_config })
}

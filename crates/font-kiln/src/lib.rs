// Copyright (c) 2026 the font-kiln contributors.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tracing::info;

use crate::atlas::AtlasGeometry;
use crate::definition::FontDefinition;
use crate::descriptor::FontDescriptor;
use crate::error::FontResult;
use crate::raster::{rasterize, AtlasBitmap};

/// Atlas layout computation.
pub mod atlas;

/// Definition parsing and validation.
pub mod definition;

/// BMFont descriptor building and rendering.
pub mod descriptor;

/// Error types.
pub mod error;

/// Raster surfaces and PNG encoding.
pub mod raster;

/// Helper function to set up console logging with reasonable defaults.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::format().compact();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .event_format(format)
        .init();
}

/// The two output artifacts of one conversion run.
pub struct FontArtifacts {
    pub image_png: Vec<u8>,
    pub descriptor_xml: String,
}

/// Bakes a definition into its atlas image and descriptor.
///
/// The geometry is computed once and handed to both the rasterizer and
/// the descriptor builder, so the two artifacts always agree on every
/// glyph's placement.
pub fn bake(definition: &FontDefinition) -> FontResult<FontArtifacts> {
    let geometry = AtlasGeometry::compute(definition)?;

    let mut surface = AtlasBitmap::new(geometry.width, geometry.height);
    rasterize(definition, &geometry, &mut surface);

    let descriptor = FontDescriptor::build(definition, &geometry);

    info!(
        "baked {} glyphs of {:?} into a {}x{} atlas",
        definition.glyphs.len(),
        definition.name,
        geometry.width,
        geometry.height
    );

    Ok(FontArtifacts {
        image_png: surface.encode_png()?,
        descriptor_xml: descriptor.to_string(),
    })
}

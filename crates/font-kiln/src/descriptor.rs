// Copyright (c) 2026 the font-kiln contributors.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::fmt::Formatter;

use crate::atlas::AtlasGeometry;
use crate::definition::FontDefinition;

/// The `<common>` block: line metrics and the atlas scale dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonBlock {
    pub line_height: u32,
    pub base: u32,
    pub scale_w: u32,
    pub scale_h: u32,
    pub pages: u32,
}

/// One `<page>` record naming an atlas image file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageBlock {
    pub id: u32,
    pub file: String,
}

/// One `<char>` record: a glyph's placement and advance metrics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharBlock {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub xadvance: u32,
    pub page: u32,
    pub chnl: u32,
}

/// The complete BMFont metadata document for one baked atlas.
///
/// Built once from the definition and its geometry; every char record
/// copies its rectangle straight from the corresponding placement, so
/// the descriptor describes the atlas image pixel for pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontDescriptor {
    pub face: String,
    pub size: u32,
    pub common: CommonBlock,
    pub pages: Vec<PageBlock>,
    pub chars: Vec<CharBlock>,
}

impl FontDescriptor {
    /// Derives the four metadata blocks from the definition and the
    /// already-computed geometry.
    ///
    /// The one-pixel inter-glyph gap lives only in `xadvance`; no gap
    /// pixel exists in the atlas itself.
    pub fn build(definition: &FontDefinition, geometry: &AtlasGeometry) -> Self {
        let chars = definition
            .glyphs
            .keys()
            .zip(&geometry.placements)
            .map(|(&glyph, placement)| CharBlock {
                id: glyph as u32,
                x: placement.x,
                y: placement.y,
                width: placement.width,
                height: placement.height,
                xoffset: 0,
                yoffset: 0,
                xadvance: placement.width + 1,
                page: 0,
                chnl: 15,
            })
            .collect();

        Self {
            face: definition.name.clone(),
            size: geometry.height,
            common: CommonBlock {
                line_height: geometry.height,
                base: geometry.height,
                scale_w: geometry.width,
                scale_h: geometry.height,
                pages: 1,
            },
            pages: vec![PageBlock {
                id: 0,
                file: format!("{}.png", definition.name),
            }],
            chars,
        }
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

impl fmt::Display for FontDescriptor {
    /// Renders the BMFont XML text format. Fixed structure: pretty
    /// printed with two-space indentation, self-closing empty
    /// elements, no trailing newline.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\"?>")?;
        writeln!(f, "<font>")?;
        writeln!(
            f,
            "  <info face=\"{}\" size=\"{}\" bold=\"0\" italic=\"0\" charset=\"\" \
             unicode=\"\" stretchH=\"100\" smooth=\"1\" aa=\"0\" padding=\"0,0,0,0\" \
             spacing=\"0,0\" outline=\"0\"/>",
            escape(&self.face),
            self.size
        )?;
        writeln!(
            f,
            "  <common lineHeight=\"{}\" base=\"{}\" scaleW=\"{}\" scaleH=\"{}\" \
             pages=\"{}\" packed=\"0\"/>",
            self.common.line_height,
            self.common.base,
            self.common.scale_w,
            self.common.scale_h,
            self.common.pages
        )?;

        writeln!(f, "  <pages>")?;
        for page in &self.pages {
            writeln!(
                f,
                "    <page id=\"{}\" file=\"{}\"/>",
                page.id,
                escape(&page.file)
            )?;
        }
        writeln!(f, "  </pages>")?;

        writeln!(f, "  <chars count=\"{}\">", self.chars.len())?;
        for c in &self.chars {
            writeln!(
                f,
                "    <char id=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
                 xoffset=\"{}\" xadvance=\"{}\" yoffset=\"{}\" page=\"{}\" chnl=\"{}\"/>",
                c.id, c.x, c.y, c.width, c.height, c.xoffset, c.xadvance, c.yoffset, c.page, c.chnl
            )?;
        }
        writeln!(f, "  </chars>")?;

        write!(f, "</font>")
    }
}

// Copyright (c) 2026 the font-kiln contributors.
// SPDX-License-Identifier: Apache-2.0

use tracing::debug;

use crate::definition::FontDefinition;
use crate::error::{FontError, FontResult};

/// One glyph's rectangle within the atlas.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphPlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The computed atlas dimensions and per-glyph placements, in
/// definition order.
///
/// Placements tile a single row left to right with no gaps: the atlas
/// width is the sum of all glyph widths and the height is the tallest
/// glyph's height. Both the rasterizer and the descriptor builder
/// consume the same geometry value, so the image and the descriptor
/// cannot disagree about where a glyph lives.
#[derive(Clone, Debug)]
pub struct AtlasGeometry {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<GlyphPlacement>,
}

impl AtlasGeometry {
    /// Lays out every glyph with a running x-cursor. Deterministic and
    /// order-preserving, no sorting or bin-packing heuristics.
    pub fn compute(definition: &FontDefinition) -> FontResult<Self> {
        if definition.glyphs.is_empty() {
            return Err(FontError::EmptyDefinition);
        }

        let mut placements = Vec::with_capacity(definition.glyphs.len());
        let mut cursor = 0;
        let mut height = 0;
        for glyph in definition.glyphs.values() {
            placements.push(GlyphPlacement {
                x: cursor,
                y: 0,
                width: glyph.width,
                height: glyph.height,
            });

            cursor += glyph.width;
            height = height.max(glyph.height);
        }

        debug!(
            "packed {} glyphs into a {}x{} atlas",
            placements.len(),
            cursor,
            height
        );

        Ok(Self {
            width: cursor,
            height,
            placements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(json: &str) -> FontDefinition {
        FontDefinition::from_json(json.as_bytes()).unwrap()
    }

    #[test]
    fn demo_scenario() {
        let def = definition(r#"{"name": "demo", "characters": {"A": [[1,0],[0,1]], "B": [[1,1,1]]}}"#);
        let geometry = AtlasGeometry::compute(&def).unwrap();

        assert_eq!(geometry.width, 5);
        assert_eq!(geometry.height, 2);
        assert_eq!(
            geometry.placements,
            vec![
                GlyphPlacement {
                    x: 0,
                    y: 0,
                    width: 2,
                    height: 2
                },
                GlyphPlacement {
                    x: 2,
                    y: 0,
                    width: 3,
                    height: 1
                },
            ]
        );
    }

    #[test]
    fn single_glyph_atlas_matches_glyph() {
        let def = definition(r#"{"name": "one", "characters": {".": [[1]]}}"#);
        let geometry = AtlasGeometry::compute(&def).unwrap();

        assert_eq!(geometry.width, 1);
        assert_eq!(geometry.height, 1);
        assert_eq!(
            geometry.placements,
            vec![GlyphPlacement {
                x: 0,
                y: 0,
                width: 1,
                height: 1
            }]
        );
    }

    #[test]
    fn placements_tile_the_row_exactly() {
        let def = definition(
            r#"{"name": "f", "characters": {
                "a": [[1,1,1,1]],
                "b": [[1],[1],[1]],
                "c": [[1,1],[1,1]]
            }}"#,
        );

        let geometry = AtlasGeometry::compute(&def).unwrap();

        let widths: u32 = def.glyphs.values().map(|g| g.width).sum();
        let tallest = def.glyphs.values().map(|g| g.height).max().unwrap();
        assert_eq!(geometry.width, widths);
        assert_eq!(geometry.height, tallest);

        assert_eq!(geometry.placements[0].x, 0);
        for pair in geometry.placements.windows(2) {
            assert_eq!(pair[0].x + pair[0].width, pair[1].x);
        }

        let last = geometry.placements.last().unwrap();
        assert_eq!(last.x + last.width, geometry.width);
        assert!(geometry.placements.iter().all(|p| p.y == 0));
    }

    #[test]
    fn rejects_empty_definition() {
        let def = FontDefinition {
            name: "empty".into(),
            glyphs: indexmap::IndexMap::new(),
        };

        let err = AtlasGeometry::compute(&def).unwrap_err();
        assert!(matches!(err, FontError::EmptyDefinition));
    }
}

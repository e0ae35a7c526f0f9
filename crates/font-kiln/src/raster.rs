// Copyright (c) 2026 the font-kiln contributors.
// SPDX-License-Identifier: Apache-2.0

use crate::atlas::AtlasGeometry;
use crate::definition::FontDefinition;
use crate::error::FontResult;

/// The drawing capability the rasterizer needs: set one foreground
/// pixel. Encoding and surface format stay behind this seam.
pub trait RasterSurface {
    fn fill_pixel(&mut self, x: u32, y: u32);
}

/// A flat RGBA8 surface. Starts fully transparent; filled pixels are
/// opaque white.
pub struct AtlasBitmap {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl AtlasBitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn data_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Encodes the surface as an RGBA8 PNG.
    pub fn encode_png(&self) -> FontResult<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut encoder = png::Encoder::new(&mut bytes, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;
        writer.finish()?;
        Ok(bytes)
    }
}

impl RasterSurface for AtlasBitmap {
    fn fill_pixel(&mut self, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            panic!("fill_pixel out-of-bounds");
        }

        let offset = ((y * self.width + x) * 4) as usize;
        self.data[offset..offset + 4].copy_from_slice(&[0xff; 4]);
    }
}

/// Draws every glyph's foreground pixels at its placement offset.
/// Placements never overlap, so draw order is immaterial.
pub fn rasterize(
    definition: &FontDefinition,
    geometry: &AtlasGeometry,
    surface: &mut impl RasterSurface,
) {
    for (glyph, placement) in definition.glyphs.values().zip(&geometry.placements) {
        for row in 0..glyph.height {
            for col in 0..glyph.width {
                if glyph.is_set(col, row) {
                    surface.fill_pixel(placement.x + col, placement.y + row);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn pixel(bitmap: &AtlasBitmap, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * bitmap.width + x) * 4) as usize;
        bitmap.data_bytes()[offset..offset + 4].try_into().unwrap()
    }

    #[test]
    fn rasterizes_demo_definition() {
        let def = FontDefinition::from_json(
            br#"{"name": "demo", "characters": {"A": [[1,0],[0,1]], "B": [[1,1,1]]}}"#,
        )
        .unwrap();
        let geometry = AtlasGeometry::compute(&def).unwrap();
        let mut bitmap = AtlasBitmap::new(geometry.width, geometry.height);
        rasterize(&def, &geometry, &mut bitmap);

        let white = [0xff; 4];
        let clear = [0x00; 4];

        // 'A' at x = 0: diagonal on a 2x2 square.
        assert_eq!(pixel(&bitmap, 0, 0), white);
        assert_eq!(pixel(&bitmap, 1, 0), clear);
        assert_eq!(pixel(&bitmap, 0, 1), clear);
        assert_eq!(pixel(&bitmap, 1, 1), white);

        // 'B' at x = 2: one full row, nothing beneath it.
        for x in 2..5 {
            assert_eq!(pixel(&bitmap, x, 0), white);
            assert_eq!(pixel(&bitmap, x, 1), clear);
        }
    }

    #[test]
    fn new_surface_is_transparent() {
        let bitmap = AtlasBitmap::new(3, 2);
        assert!(bitmap.data_bytes().iter().all(|&b| b == 0));
        assert_eq!(bitmap.data_bytes().len(), 3 * 2 * 4);
    }

    #[test]
    fn encodes_png() {
        let mut bitmap = AtlasBitmap::new(2, 2);
        bitmap.fill_pixel(0, 0);
        let bytes = bitmap.encode_png().unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    #[should_panic(expected = "fill_pixel out-of-bounds")]
    fn fill_pixel_rejects_out_of_bounds() {
        let mut bitmap = AtlasBitmap::new(2, 2);
        bitmap.fill_pixel(2, 0);
    }
}

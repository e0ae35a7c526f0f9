// Copyright (c) 2026 the font-kiln contributors.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::fmt::Formatter;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::{FontError, FontResult};

/// One boolean-ish matrix cell from the definition document.
///
/// Definitions in the wild write pixels as `1`/`0`, `true`/`false`, or
/// whatever else their author's tooling emits, so any JSON scalar is
/// accepted and collapsed to its truthiness.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel(pub bool);

impl<'de> Deserialize<'de> for Pixel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PixelVisitor;

        impl<'de> Visitor<'de> for PixelVisitor {
            type Value = Pixel;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "a boolean, number, string, or null")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Pixel, E> {
                Ok(Pixel(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Pixel, E> {
                Ok(Pixel(v != 0))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Pixel, E> {
                Ok(Pixel(v != 0))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Pixel, E> {
                Ok(Pixel(v != 0.0))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Pixel, E> {
                Ok(Pixel(!v.is_empty()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Pixel, E> {
                Ok(Pixel(false))
            }
        }

        deserializer.deserialize_any(PixelVisitor)
    }
}

/// One character's pixel matrix, stored row-major.
#[derive(Debug)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    data: Vec<bool>,
}

impl GlyphBitmap {
    /// Builds a bitmap from the rows of a definition matrix, rejecting
    /// empty and ragged matrices.
    pub fn from_rows(glyph: char, rows: &[Vec<Pixel>]) -> FontResult<Self> {
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(FontError::EmptyGlyph { glyph });
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(FontError::RaggedGlyph {
                    glyph,
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            data: rows
                .iter()
                .flat_map(|cells| cells.iter().map(|&Pixel(on)| on))
                .collect(),
        })
    }

    /// Whether the pixel at (x, y) is a foreground pixel.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.data[(y * self.width + x) as usize]
    }
}

#[derive(Deserialize)]
struct RawDefinition {
    name: String,
    characters: IndexMap<String, Vec<Vec<Pixel>>>,
}

/// A parsed, validated font definition.
///
/// `glyphs` keeps the definition document's key order. That order is
/// the atlas pack order, glyph by glyph left to right, and is not
/// required to be sorted by code point.
#[derive(Debug)]
pub struct FontDefinition {
    pub name: String,
    pub glyphs: IndexMap<char, GlyphBitmap>,
}

impl FontDefinition {
    /// Parses a JSON definition document and validates every glyph,
    /// naming the offending key on failure.
    pub fn from_json(bytes: &[u8]) -> FontResult<Self> {
        let raw: RawDefinition = serde_json::from_slice(bytes)?;

        if raw.characters.is_empty() {
            return Err(FontError::EmptyDefinition);
        }

        let mut glyphs = IndexMap::with_capacity(raw.characters.len());
        for (key, rows) in &raw.characters {
            let mut chars = key.chars();
            let (Some(glyph), None) = (chars.next(), chars.next()) else {
                return Err(FontError::InvalidCharacter(key.clone()));
            };

            glyphs.insert(glyph, GlyphBitmap::from_rows(glyph, rows)?);
        }

        Ok(Self {
            name: raw.name,
            glyphs,
        })
    }
}

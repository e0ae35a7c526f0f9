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

use std::fmt;
use std::fmt::Formatter;

#[derive(Debug)]
pub enum FontError {
    /// The definition document could not be deserialized at all.
    Parse(serde_json::Error),

    /// A key in the character map is not exactly one character long.
    InvalidCharacter(String),

    /// The definition declares no characters.
    EmptyDefinition,

    /// A glyph matrix with zero rows or zero columns.
    EmptyGlyph { glyph: char },

    /// A glyph matrix whose rows disagree on length.
    RaggedGlyph {
        glyph: char,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The atlas image failed to encode.
    Encode(png::EncodingError),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Parse(err) => {
                write!(f, "malformed definition: {}", err)
            }
            FontError::InvalidCharacter(key) => {
                write!(f, "character key {:?} must be a single character", key)
            }
            FontError::EmptyDefinition => {
                write!(f, "definition contains no characters")
            }
            FontError::EmptyGlyph { glyph } => {
                write!(f, "glyph {:?} has an empty pixel matrix", glyph)
            }
            FontError::RaggedGlyph {
                glyph,
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "glyph {:?} row {} has {} columns, expected {}",
                    glyph, row, found, expected
                )
            }
            FontError::Encode(err) => {
                write!(f, "failed to encode atlas image: {}", err)
            }
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Parse(err) => Some(err),
            FontError::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FontError {
    fn from(err: serde_json::Error) -> Self {
        FontError::Parse(err)
    }
}

impl From<png::EncodingError> for FontError {
    fn from(err: png::EncodingError) -> Self {
        FontError::Encode(err)
    }
}

pub type FontResult<T> = Result<T, FontError>;

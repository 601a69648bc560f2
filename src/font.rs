//! Font metric queries.
//!
//! Wraps `ttf-parser` behind the narrow surface the width cache needs:
//! per-character advance widths and per-pair kerning deltas, both in
//! font design units.

use std::fs;
use std::path::Path;

use crate::error::{WfResult, WordfitError};

/// Metric queries against a font.
///
/// `advance` returns `None` for characters the font has no glyph for;
/// `kern` returns `None` for pairs without a registered kerning value.
/// Any source answering these two queries can drive the width cache.
pub trait GlyphMetrics {
    fn advance(&self, ch: char) -> Option<u32>;
    fn kern(&self, left: char, right: char) -> Option<i32>;
}

/// A parsed OpenType/TrueType font file.
///
/// Owns the raw bytes, validated once at construction. Queries re-create
/// the zero-copy `ttf_parser::Face`, which is header validation only.
pub struct FontFace {
    bytes: Vec<u8>,
}

impl FontFace {
    pub fn load<P: AsRef<Path>>(path: P) -> WfResult<Self> {
        let bytes = fs::read(path.as_ref()).map_err(|e| {
            WordfitError::Config(format!(
                "could not open font '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> WfResult<Self> {
        ttf_parser::Face::parse(&bytes, 0).map_err(|e| WordfitError::Font(e.to_string()))?;
        Ok(Self { bytes })
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        // Bytes were validated in from_bytes; this cannot fail in practice.
        ttf_parser::Face::parse(&self.bytes, 0).ok()
    }
}

impl GlyphMetrics for FontFace {
    fn advance(&self, ch: char) -> Option<u32> {
        let face = self.face()?;
        let gid = face.glyph_index(ch)?;
        face.glyph_hor_advance(gid).map(u32::from)
    }

    fn kern(&self, left: char, right: char) -> Option<i32> {
        let face = self.face()?;
        let l = face.glyph_index(left)?;
        let r = face.glyph_index(right)?;
        face.tables()
            .kern
            .and_then(|kern| {
                kern.subtables
                    .into_iter()
                    .find_map(|st| st.glyphs_kerning(l, r))
            })
            .map(i32::from)
    }
}

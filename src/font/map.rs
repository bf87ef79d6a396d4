//! A glyph set assembled from explicit glyphs.

use std::collections::HashMap;

use super::{FontId, Glyph, GlyphSet};

/// [`GlyphSet`] backed by a map, for custom or synthetic fonts.
///
/// ```
/// use ticker::font::{FontId, Glyph, GlyphSet, MapGlyphs};
///
/// let set = MapGlyphs::new(Glyph::blank(1, 8))
///     .with(FontId::Small, 'i', Glyph::from_rows(&["#", "", "#", "#", "#", "#", "#", ""]));
/// assert_eq!(set.glyph(FontId::Small, 'i').width(), 1);
/// assert_eq!(set.glyph(FontId::Large, 'i'), &Glyph::blank(1, 8));
/// ```
#[derive(Debug, Clone)]
pub struct MapGlyphs {
    glyphs: HashMap<(FontId, char), Glyph>,
    fallback: Glyph,
}

impl MapGlyphs {
    /// An empty set; every lookup returns `fallback` until glyphs are added.
    pub fn new(fallback: Glyph) -> Self {
        Self {
            glyphs: HashMap::new(),
            fallback,
        }
    }

    pub fn with(mut self, font: FontId, ch: char, glyph: Glyph) -> Self {
        self.insert(font, ch, glyph);
        self
    }

    pub fn insert(&mut self, font: FontId, ch: char, glyph: Glyph) {
        self.glyphs.insert((font, ch), glyph);
    }
}

impl GlyphSet for MapGlyphs {
    fn glyph(&self, font: FontId, ch: char) -> &Glyph {
        self.glyphs.get(&(font, ch)).unwrap_or(&self.fallback)
    }
}

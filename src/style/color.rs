//! Marker colors for categorical attributes.

use std::fmt;

use serde::{Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline] pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Neutral gray used for any value missing from a table.
pub const FALLBACK: Rgb = Rgb::new(0x6b, 0x72, 0x80);

/// The attribute a color lookup is keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Crop,
    Fertility,
}

const CROP_COLORS: &[(&str, Rgb)] = &[
    ("rice",      Rgb::new(0x22, 0xc5, 0x5e)), // green
    ("wheat",     Rgb::new(0xea, 0xb3, 0x08)), // yellow
    ("cotton",    Rgb::new(0xf9, 0x73, 0x16)), // orange
    ("sugarcane", Rgb::new(0x8b, 0x5c, 0xf6)), // purple
    ("maize",     Rgb::new(0x06, 0xb6, 0xd4)), // cyan
    ("groundnut", Rgb::new(0xa3, 0xa3, 0xa3)), // gray
    ("tomato",    Rgb::new(0xef, 0x44, 0x44)), // red
    ("banana",    Rgb::new(0xfb, 0xbf, 0x24)), // amber
];

const FERTILITY_COLORS: &[(&str, Rgb)] = &[
    ("High",   Rgb::new(0x22, 0xc5, 0x5e)),
    ("Medium", Rgb::new(0xea, 0xb3, 0x08)),
    ("Low",    Rgb::new(0xef, 0x44, 0x44)),
];

/// Look up the marker color for `value`, falling back to [`FALLBACK`]. Never fails.
pub fn color_for(category: Category, value: &str) -> Rgb {
    let table = match category {
        Category::Crop => CROP_COLORS,
        Category::Fertility => FERTILITY_COLORS,
    };
    table.iter()
        .find(|(key, _)| *key == value)
        .map_or(FALLBACK, |&(_, color)| color)
}

#[inline] pub fn crop_color(crop: &str) -> Rgb { color_for(Category::Crop, crop) }

#[inline] pub fn fertility_color(fertility: &str) -> Rgb { color_for(Category::Fertility, fertility) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(crop_color("rice").to_string(), "#22c55e");
        assert_eq!(crop_color("banana").to_string(), "#fbbf24");
        assert_eq!(fertility_color("Low").to_string(), "#ef4444");
    }

    #[test]
    fn unknown_values_fall_back() {
        assert_eq!(crop_color("millet"), FALLBACK);
        assert_eq!(crop_color("Rice"), FALLBACK);
        assert_eq!(fertility_color(""), FALLBACK);
        assert_eq!(FALLBACK.to_string(), "#6b7280");
    }

    #[test]
    fn tables_are_disjoint_by_category() {
        // "High" is a fertility level, not a crop.
        assert_eq!(color_for(Category::Crop, "High"), FALLBACK);
        assert_ne!(color_for(Category::Fertility, "High"), FALLBACK);
    }

    #[test]
    fn serializes_as_hex() {
        assert_eq!(serde_json::to_string(&crop_color("maize")).unwrap(), "\"#06b6d4\"");
    }
}

use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n).map(|i| palette_color(i, n)).collect()
}

/// Colour `i` of an `n`-colour palette.
pub fn palette_color(i: usize, n: usize) -> Color32 {
    let hue = (i as f32 / n.max(1) as f32) * 360.0 + 210.0;
    let hsl = Hsl::new(hue, 0.70, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Color mapping: booster category → Color32
// ---------------------------------------------------------------------------

/// Maps booster categories to distinct colours. Built once per dataset so a
/// category keeps its colour while the filters change.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn from_categories<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        let unique: BTreeSet<&str> = categories.into_iter().collect();
        let palette = generate_palette(unique.len());
        let mapping = unique
            .into_iter()
            .zip(palette)
            .map(|(category, color)| (category.to_string(), color))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (category → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(category, color)| (category.clone(), *color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colours() {
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        let unique: BTreeSet<[u8; 4]> = colors.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 5);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn color_map_is_stable_and_falls_back_to_gray() {
        let map = ColorMap::from_categories(["v1.1", "FT", "v1.1", "B5"]);
        assert_eq!(map.legend_entries().len(), 3);
        assert_eq!(map.color_for("FT"), map.color_for("FT"));
        assert_ne!(map.color_for("FT"), map.color_for("B5"));
        assert_eq!(map.color_for("Starship"), Color32::GRAY);
    }
}

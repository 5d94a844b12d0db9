// Chunk: docs/chunks/font_zoom - Bounded font zoom stepper
// Chunk: docs/chunks/font_choice - Font colour and family lookups

//! Lookup collaborators: the fixed lists the view menus are built from.

use crate::zoom::ZoomLevel;

/// A selectable text colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontColour {
    pub key: String,
    pub name: String,
    /// RGB triple.
    pub rgb: [u8; 3],
}

impl FontColour {
    pub fn new(key: &str, name: &str, rgb: [u8; 3]) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            rgb,
        }
    }

    /// `#rrggbb` form of the colour.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// A selectable font family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    pub key: String,
    pub name: String,
}

impl FontFamily {
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
        }
    }
}

/// Supplies the ordered list of font colours.
pub trait FontColourLookup {
    fn font_colours(&self) -> Vec<FontColour>;
}

/// Supplies the ordered list of font families.
pub trait FontFamilyLookup {
    fn font_families(&self) -> Vec<FontFamily>;
}

/// Supplies the ordered zoom levels and the default one.
pub trait ZoomLookup {
    fn zoom_levels(&self) -> Vec<ZoomLevel>;
    fn default_zoom(&self) -> ZoomLevel;
}

/// Zoom magnitudes shipped with the editor, in percent.
const ZOOM_MAGNITUDES: [u32; 9] = [25, 50, 75, 100, 125, 150, 200, 300, 400];

/// Key of the 100% level.
const DEFAULT_ZOOM_KEY: u32 = 3;

/// The lists shipped with the editor.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLookups;

impl FontColourLookup for BuiltinLookups {
    fn font_colours(&self) -> Vec<FontColour> {
        vec![
            FontColour::new("white", "White", [0xf0, 0xf0, 0xf0]),
            FontColour::new("silver", "Silver", [0xc0, 0xc0, 0xc0]),
            FontColour::new("amber", "Amber", [0xff, 0xb0, 0x00]),
            FontColour::new("green", "Green", [0x33, 0xff, 0x33]),
            FontColour::new("cyan", "Cyan", [0x00, 0xe5, 0xff]),
        ]
    }
}

impl FontFamilyLookup for BuiltinLookups {
    fn font_families(&self) -> Vec<FontFamily> {
        vec![
            FontFamily::new("consolas", "Consolas"),
            FontFamily::new("courier-new", "Courier New"),
            FontFamily::new("lucida-console", "Lucida Console"),
            FontFamily::new("monospace", "Monospace"),
        ]
    }
}

impl ZoomLookup for BuiltinLookups {
    fn zoom_levels(&self) -> Vec<ZoomLevel> {
        ZOOM_MAGNITUDES
            .iter()
            .enumerate()
            .map(|(key, &magnitude)| ZoomLevel::new(key as u32, magnitude))
            .collect()
    }

    fn default_zoom(&self) -> ZoomLevel {
        ZoomLevel::new(DEFAULT_ZOOM_KEY, ZOOM_MAGNITUDES[DEFAULT_ZOOM_KEY as usize])
    }
}

//! Built-in 16-color palette presets.
//!
//! Four presets are registered: `classic` (bright primaries plus dark
//! shades), `gameboy` (green monochrome ramp), `sepia` (warm brown ramp),
//! and `neon` (saturated accents plus greys). Slot 0 of every preset is
//! the transparent slot; its stored color is black by convention but
//! carries no meaning of its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PaletteError;
use crate::color::Rgb888;

/// Named built-in palette preset.
///
/// # Example
///
/// ```
/// use retro_palette::Preset;
///
/// let preset: Preset = "gameboy".parse().unwrap();
/// assert_eq!(preset, Preset::Gameboy);
/// assert!("vaporwave".parse::<Preset>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Bright primaries, secondaries, and a ramp of dark shades.
    #[default]
    Classic,
    /// Sixteen-step green monochrome ramp.
    Gameboy,
    /// Warm brown ramp from white to near-black.
    Sepia,
    /// Saturated accent colors plus a grey ramp.
    Neon,
}

impl Preset {
    /// All registered presets, in declaration order.
    pub const ALL: [Preset; 4] = [Preset::Classic, Preset::Gameboy, Preset::Sepia, Preset::Neon];

    /// The preset's 16 colors in slot order.
    pub fn colors(self) -> [Rgb888; 16] {
        let table: [[u8; 3]; 16] = match self {
            Preset::Classic => [
                [0, 0, 0],       // 0: transparent slot
                [255, 255, 255], // 1: white
                [248, 0, 0],     // 2: red
                [0, 248, 0],     // 3: green
                [0, 0, 248],     // 4: blue
                [248, 248, 0],   // 5: yellow
                [248, 0, 248],   // 6: magenta
                [0, 248, 248],   // 7: cyan
                [132, 132, 132], // 8: grey
                [252, 100, 0],   // 9: orange
                [128, 0, 0],     // 10: dark red
                [0, 100, 0],     // 11: dark green
                [0, 0, 128],     // 12: dark blue
                [132, 100, 0],   // 13: brown
                [66, 66, 66],    // 14: dark grey
                [33, 33, 33],    // 15: near-black
            ],
            Preset::Gameboy => [
                [0, 0, 0],
                [155, 188, 15],
                [139, 172, 15],
                [123, 156, 15],
                [107, 140, 15],
                [91, 124, 15],
                [75, 108, 15],
                [59, 92, 15],
                [43, 76, 15],
                [27, 60, 15],
                [15, 56, 15],
                [0, 40, 0],
                [0, 32, 0],
                [0, 24, 0],
                [0, 16, 0],
                [0, 8, 0],
            ],
            Preset::Sepia => [
                [0, 0, 0],
                [255, 255, 255],
                [240, 220, 180],
                [220, 200, 160],
                [200, 180, 140],
                [180, 160, 120],
                [160, 140, 100],
                [140, 120, 80],
                [120, 100, 60],
                [100, 80, 40],
                [80, 60, 20],
                [70, 50, 15],
                [60, 40, 10],
                [50, 30, 5],
                [40, 20, 0],
                [20, 10, 0],
            ],
            Preset::Neon => [
                [0, 0, 0],
                [255, 255, 255],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 0],
                [255, 128, 0],
                [128, 255, 0],
                [0, 255, 128],
                [0, 128, 255],
                [128, 0, 255],
                [255, 0, 128],
                [192, 192, 192],
                [128, 128, 128],
                [64, 64, 64],
                [32, 32, 32],
                [16, 16, 16],
            ],
        };
        table.map(Rgb888::from_bytes)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Classic => "classic",
            Preset::Gameboy => "gameboy",
            Preset::Sepia => "sepia",
            Preset::Neon => "neon",
        };
        f.write_str(name)
    }
}

impl FromStr for Preset {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Preset::Classic),
            "gameboy" => Ok(Preset::Gameboy),
            "sepia" => Ok(Preset::Sepia),
            "neon" => Ok(Preset::Neon),
            other => Err(PaletteError::UnknownPreset {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_have_16_colors() {
        for preset in Preset::ALL {
            assert_eq!(preset.colors().len(), 16);
        }
    }

    #[test]
    fn test_slot_zero_is_black_by_convention() {
        for preset in Preset::ALL {
            assert_eq!(preset.colors()[0], Rgb888::new(0, 0, 0));
        }
    }

    #[test]
    fn test_classic_spot_values() {
        let colors = Preset::Classic.colors();
        assert_eq!(colors[1], Rgb888::new(255, 255, 255));
        assert_eq!(colors[9], Rgb888::new(252, 100, 0));
        assert_eq!(colors[15], Rgb888::new(33, 33, 33));
    }

    #[test]
    fn test_parse_roundtrip() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "cga".parse::<Preset>().unwrap_err();
        assert!(matches!(err, PaletteError::UnknownPreset { name } if name == "cga"));
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&Preset::Gameboy).unwrap();
        assert_eq!(json, "\"gameboy\"");
        let back: Preset = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(back, Preset::Sepia);
    }
}

//! Colors and the named-color registry.

use std::collections::HashMap;

/// An RGBA color with straight (non-premultiplied) alpha, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a new color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create a color from a 32-bit RGBA value (0xRRGGBBAA).
    #[inline]
    pub fn from_u32(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Six-digit colors are opaque.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if (hex.len() != 6 && hex.len() != 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }

    /// Convert to 8-bit channels, rounding to nearest.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Named colors that stylesheets may reference instead of hex literals.
///
/// Lookup is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    colors: HashMap<String, Color>,
}

impl ColorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the standard named palette.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, rgba) in DEFAULT_COLORS {
            registry.insert(*name, Color::from_u32(*rgba));
        }
        registry
    }

    /// Register or replace a named color.
    pub fn insert(&mut self, name: impl AsRef<str>, color: Color) {
        self.colors.insert(name.as_ref().to_ascii_lowercase(), color);
    }

    /// Look up a named color.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(&name.to_ascii_lowercase()).copied()
    }

    /// Resolve a color reference: a `#` literal or a registered name.
    pub fn resolve(&self, text: &str) -> Option<Color> {
        if text.starts_with('#') {
            Color::from_hex(text)
        } else {
            self.get(text)
        }
    }

    /// Number of registered colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if no colors are registered.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

const DEFAULT_COLORS: &[(&str, u32)] = &[
    ("clear", 0x00000000),
    ("black", 0x000000FF),
    ("white", 0xFFFFFFFF),
    ("light_gray", 0xBFBFBFFF),
    ("gray", 0x7F7F7FFF),
    ("dark_gray", 0x3F3F3FFF),
    ("blue", 0x0000FFFF),
    ("navy", 0x00007FFF),
    ("royal", 0x4169E1FF),
    ("slate", 0x708090FF),
    ("sky", 0x87CEEBFF),
    ("cyan", 0x00FFFFFF),
    ("teal", 0x007F7FFF),
    ("green", 0x00FF00FF),
    ("chartreuse", 0x7FFF00FF),
    ("lime", 0x32CD32FF),
    ("forest", 0x228B22FF),
    ("olive", 0x6B8E23FF),
    ("yellow", 0xFFFF00FF),
    ("gold", 0xFFD700FF),
    ("goldenrod", 0xDAA520FF),
    ("orange", 0xFFA500FF),
    ("brown", 0x8B4513FF),
    ("tan", 0xD2B48CFF),
    ("firebrick", 0xB22222FF),
    ("red", 0xFF0000FF),
    ("scarlet", 0xFF341CFF),
    ("coral", 0xFF7F50FF),
    ("salmon", 0xFA8072FF),
    ("pink", 0xFF69B4FF),
    ("magenta", 0xFF00FFFF),
    ("purple", 0xA020F0FF),
    ("violet", 0xEE82EEFF),
    ("maroon", 0xB03060FF),
];

//! Convenience accessors on resolved styles.

use super::ComputedStyle;

impl Default for ComputedStyle {
    /// The style of a widget no rule applies to: everything zero-filled.
    fn default() -> Self {
        Self::from_properties(&super::StyleProperties::default())
    }
}

impl ComputedStyle {
    /// Get total horizontal padding.
    pub fn horizontal_padding(&self) -> f32 {
        self.pad_left + self.pad_right
    }

    /// Get total vertical padding.
    pub fn vertical_padding(&self) -> f32 {
        self.pad_top + self.pad_bottom
    }

    /// Get total horizontal spacing to neighbours.
    pub fn horizontal_spacing(&self) -> f32 {
        self.space_left + self.space_right
    }

    /// Get total vertical spacing to neighbours.
    pub fn vertical_spacing(&self) -> f32 {
        self.space_top + self.space_bottom
    }

    /// Check if a background should be drawn.
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Check if a foreground should be drawn.
    pub fn has_foreground(&self) -> bool {
        self.foreground.is_some()
    }
}

//! Type-safe style builder DSL.

use super::StyleProperties;
use crate::types::{Align, Color, Drawable, StyleValue};

/// Builder for creating style properties with a fluent API.
///
/// Used for rules declared in code rather than in a stylesheet document.
///
/// # Example
///
/// ```
/// use cui_style::prelude::*;
///
/// let props = Style::new()
///     .pad(4.0)
///     .background(Drawable::region("button-up"))
///     .font_color(Color::WHITE)
///     .transition(0.2)
///     .build();
///
/// assert_eq!(props.pad_top.as_set(), Some(&4.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    props: StyleProperties,
}

impl Style {
    /// Create a new style builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final StyleProperties.
    pub fn build(self) -> StyleProperties {
        self.props
    }

    // === Padding ===

    /// Set padding on all four sides.
    pub fn pad(self, value: f32) -> Self {
        self.pad_left(value)
            .pad_top(value)
            .pad_right(value)
            .pad_bottom(value)
    }

    /// Set left padding.
    pub fn pad_left(mut self, value: f32) -> Self {
        self.props.pad_left = StyleValue::Set(value);
        self
    }

    /// Set top padding.
    pub fn pad_top(mut self, value: f32) -> Self {
        self.props.pad_top = StyleValue::Set(value);
        self
    }

    /// Set right padding.
    pub fn pad_right(mut self, value: f32) -> Self {
        self.props.pad_right = StyleValue::Set(value);
        self
    }

    /// Set bottom padding.
    pub fn pad_bottom(mut self, value: f32) -> Self {
        self.props.pad_bottom = StyleValue::Set(value);
        self
    }

    // === Spacing ===

    /// Set spacing on all four sides.
    pub fn space(self, value: f32) -> Self {
        self.space_left(value)
            .space_top(value)
            .space_right(value)
            .space_bottom(value)
    }

    /// Set left spacing.
    pub fn space_left(mut self, value: f32) -> Self {
        self.props.space_left = StyleValue::Set(value);
        self
    }

    /// Set top spacing.
    pub fn space_top(mut self, value: f32) -> Self {
        self.props.space_top = StyleValue::Set(value);
        self
    }

    /// Set right spacing.
    pub fn space_right(mut self, value: f32) -> Self {
        self.props.space_right = StyleValue::Set(value);
        self
    }

    /// Set bottom spacing.
    pub fn space_bottom(mut self, value: f32) -> Self {
        self.props.space_bottom = StyleValue::Set(value);
        self
    }

    // === Size ===

    /// Set minimum width.
    pub fn min_width(mut self, value: f32) -> Self {
        self.props.min_width = StyleValue::Set(value);
        self
    }

    /// Set minimum height.
    pub fn min_height(mut self, value: f32) -> Self {
        self.props.min_height = StyleValue::Set(value);
        self
    }

    /// Fill available width.
    pub fn fill_x(mut self, fill: bool) -> Self {
        self.props.fill_x = StyleValue::Set(fill);
        self
    }

    /// Fill available height.
    pub fn fill_y(mut self, fill: bool) -> Self {
        self.props.fill_y = StyleValue::Set(fill);
        self
    }

    /// Set content alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.props.align = StyleValue::Set(align);
        self
    }

    // === Appearance ===

    /// Set the background drawable.
    pub fn background(mut self, drawable: Drawable) -> Self {
        self.props.background = StyleValue::Set(drawable);
        self
    }

    /// Set the foreground drawable.
    pub fn foreground(mut self, drawable: Drawable) -> Self {
        self.props.foreground = StyleValue::Set(drawable);
        self
    }

    /// Set the tint color.
    pub fn color(mut self, color: Color) -> Self {
        self.props.color = StyleValue::Set(color);
        self
    }

    /// Set the opacity multiplier.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.props.alpha = StyleValue::Set(alpha);
        self
    }

    // === Text ===

    /// Set the font name.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.props.font = StyleValue::Set(font.into());
        self
    }

    /// Set the font scale.
    pub fn font_scale(mut self, scale: f32) -> Self {
        self.props.font_scale = StyleValue::Set(scale);
        self
    }

    /// Set the text color.
    pub fn font_color(mut self, color: Color) -> Self {
        self.props.font_color = StyleValue::Set(color);
        self
    }

    // === State ===

    /// Set the transition duration into this style, in seconds.
    pub fn transition(mut self, seconds: f32) -> Self {
        self.props.transition = StyleValue::Set(seconds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let props = Style::new()
            .pad(10.0)
            .space_top(2.0)
            .font("default")
            .font_color(Color::BLACK)
            .fill_x(true)
            .build();

        assert_eq!(props.pad_right.as_set(), Some(&10.0));
        assert_eq!(props.space_top.as_set(), Some(&2.0));
        assert!(!props.space_left.is_set());
        assert_eq!(props.font.as_set().map(String::as_str), Some("default"));
        assert_eq!(props.fill_x.as_set(), Some(&true));
        assert_eq!(props.set_count(), 8);
    }

    #[test]
    fn later_setters_override_shorthands() {
        let props = Style::new().pad(4.0).pad_top(1.0).build();

        assert_eq!(props.pad_top.as_set(), Some(&1.0));
        assert_eq!(props.pad_bottom.as_set(), Some(&4.0));
    }
}

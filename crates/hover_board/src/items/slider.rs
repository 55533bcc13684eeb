//! Slider item data
//!
//! Slider values are stored normalized to `[0, 1]`; `range_min`/`range_max`
//! only affect display and the zero-crossing ratio.

use crate::foundation::math::{clamp01, inverse_lerp, lerp};

/// Formats the handle label of a slider
pub type SliderLabelFormatter = fn(&str, &SliderItem) -> String;

/// Where the filled part of a slider track starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SliderFillType {
    /// Fill from the minimum end of the range
    #[default]
    MinimumValue,
    /// Fill from the zero crossing of the range
    Zero,
    /// Fill from the maximum end of the range
    MaximumValue,
}

/// Default label: `"{label}: {range value rounded}"`
pub fn default_slider_label(label: &str, slider: &SliderItem) -> String {
    // Adding zero folds -0 into 0 for display.
    format!("{label}: {}", slider.range_value().round() + 0.0)
}

/// Slider-specific item state
#[derive(Debug, Clone)]
pub struct SliderItem {
    /// Range value at the bottom of the slider
    pub range_min: f32,
    /// Range value at the top of the slider
    pub range_max: f32,
    /// Number of snap points; fewer than 2 means continuous
    pub snaps: u32,
    /// Where the track fill starts
    pub fill_starting_point: SliderFillType,
    /// Whether pointing at the track shows a jump preview
    pub allow_jump: bool,
    /// Whether a cursor currently holds the slider in a drag
    pub is_sticky_selected: bool,
    /// Handle label formatter
    pub label_formatter: SliderLabelFormatter,
    value: f32,
    hover_value: Option<f32>,
}

impl Default for SliderItem {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl PartialEq for SliderItem {
    fn eq(&self, other: &Self) -> bool {
        self.range_min == other.range_min
            && self.range_max == other.range_max
            && self.snaps == other.snaps
            && self.fill_starting_point == other.fill_starting_point
            && self.allow_jump == other.allow_jump
            && self.is_sticky_selected == other.is_sticky_selected
            && self.value == other.value
            && self.hover_value == other.hover_value
    }
}

impl SliderItem {
    /// Create a continuous slider over `[range_min, range_max]`
    pub fn new(range_min: f32, range_max: f32) -> Self {
        Self {
            range_min,
            range_max,
            snaps: 0,
            fill_starting_point: SliderFillType::MinimumValue,
            allow_jump: false,
            is_sticky_selected: false,
            label_formatter: default_slider_label,
            value: 0.0,
            hover_value: None,
        }
    }

    /// Set the snap count
    pub fn with_snaps(mut self, snaps: u32) -> Self {
        self.snaps = snaps;
        self
    }

    /// Set the initial normalized value
    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(value);
        self
    }

    /// Set the fill starting point
    pub fn with_fill_starting_point(mut self, fill: SliderFillType) -> Self {
        self.fill_starting_point = fill;
        self
    }

    /// Enable or disable jump previews
    pub fn with_allow_jump(mut self, allow_jump: bool) -> Self {
        self.allow_jump = allow_jump;
        self
    }

    /// Use a custom label formatter
    pub fn with_label_formatter(mut self, formatter: SliderLabelFormatter) -> Self {
        self.label_formatter = formatter;
        self
    }

    /// Normalized value in `[0, 1]`
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the normalized value, clamped to `[0, 1]`
    pub fn set_value(&mut self, value: f32) {
        self.value = clamp01(value);
    }

    /// Transient normalized value under the nearest cursor, if any
    pub fn hover_value(&self) -> Option<f32> {
        self.hover_value
    }

    /// Set or clear the hover value; set values are clamped to `[0, 1]`
    pub fn set_hover_value(&mut self, hover_value: Option<f32>) {
        self.hover_value = hover_value.map(clamp01);
    }

    /// Value quantized to the nearest snap point
    pub fn snapped_value(&self) -> f32 {
        self.snap(self.value)
    }

    /// Hover value quantized to the nearest snap point
    pub fn snapped_hover_value(&self) -> Option<f32> {
        self.hover_value.map(|value| self.snap(value))
    }

    /// Snapped value mapped into `[range_min, range_max]`
    pub fn range_value(&self) -> f32 {
        lerp(self.range_min, self.range_max, self.snapped_value())
    }

    /// Where zero falls within the range, clamped to `[0, 1]`
    pub fn zero_value(&self) -> f32 {
        inverse_lerp(self.range_min, self.range_max, 0.0)
    }

    /// Handle label built by the configured formatter
    pub fn formatted_label(&self, label: &str) -> String {
        (self.label_formatter)(label, self)
    }

    fn snap(&self, value: f32) -> f32 {
        if self.snaps < 2 {
            return value;
        }

        #[allow(clippy::cast_precision_loss)]
        let steps = (self.snaps - 1) as f32;
        (value * steps).round() / steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_value_is_clamped() {
        let mut slider = SliderItem::default();
        slider.set_value(1.7);
        assert_eq!(slider.value(), 1.0);
        slider.set_value(-0.2);
        assert_eq!(slider.value(), 0.0);

        slider.set_hover_value(Some(2.0));
        assert_eq!(slider.hover_value(), Some(1.0));
        slider.set_hover_value(None);
        assert_eq!(slider.hover_value(), None);
    }

    #[test]
    fn test_snapping() {
        let slider = SliderItem::new(0.0, 100.0).with_snaps(5).with_value(0.3);
        assert_relative_eq!(slider.snapped_value(), 0.25);
        assert_relative_eq!(slider.range_value(), 25.0);

        let mut continuous = SliderItem::new(0.0, 100.0).with_value(0.3);
        assert_relative_eq!(continuous.snapped_value(), 0.3);
        continuous.set_hover_value(Some(0.73));
        assert_eq!(continuous.snapped_hover_value(), Some(0.73));
    }

    #[test]
    fn test_zero_value() {
        assert_relative_eq!(SliderItem::new(-50.0, 50.0).zero_value(), 0.5);
        assert_relative_eq!(SliderItem::new(0.0, 100.0).zero_value(), 0.0);
        assert_relative_eq!(SliderItem::new(-100.0, -10.0).zero_value(), 1.0);
    }

    #[test]
    fn test_label_formatting() {
        let slider = SliderItem::new(-10.0, 10.0).with_value(0.5);
        assert_eq!(slider.formatted_label("Pan"), "Pan: 0");

        fn percent(label: &str, slider: &SliderItem) -> String {
            format!("{label} {:.0}%", slider.value() * 100.0)
        }
        let custom = slider.with_label_formatter(percent);
        assert_eq!(custom.formatted_label("Mix"), "Mix 50%");
    }
}

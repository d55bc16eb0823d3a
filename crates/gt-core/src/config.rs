//! Render options record. Every field is optional in the sense that
//! `Options::default()` matches the documented defaults; callers only set
//! what they want to change.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendMode {
    SourceOver,
    Copy,
}

impl Default for BlendMode {
    fn default() -> Self {
        Self::SourceOver
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl Default for HAlign {
    fn default() -> Self {
        Self::Center
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

impl Default for VAlign {
    fn default() -> Self {
        Self::Middle
    }
}

/// Render options. `#[serde(default)]` on every field lets a caller's TOML
/// override only the keys it mentions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub blend_mode: BlendMode,
    pub halign: HAlign,
    pub valign: VAlign,
    pub allow_out_caching: bool,
    pub border_color: u8,
    pub border_shiny: bool,
    pub blink_time_ms: u32,
    pub blur_amount: f32,
    pub blur_scale: f32,
    pub blur_foreground: bool,
    pub blur_background: bool,
    pub noise_texture: bool,
    pub noise_amount: f32,
    pub tonemapping: bool,
    pub tonemapping_ratio: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            blend_mode: BlendMode::default(),
            halign: HAlign::default(),
            valign: VAlign::default(),
            allow_out_caching: false,
            border_color: 0,
            border_shiny: false,
            blink_time_ms: 1200,
            blur_amount: 1.0,
            blur_scale: 1.0,
            blur_foreground: true,
            blur_background: true,
            noise_texture: true,
            noise_amount: 1.0,
            tonemapping: false,
            tonemapping_ratio: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let o = Options::default();
        assert_eq!(o.blend_mode, BlendMode::SourceOver);
        assert_eq!(o.halign, HAlign::Center);
        assert_eq!(o.valign, VAlign::Middle);
        assert!(!o.allow_out_caching);
        assert_eq!(o.blink_time_ms, 1200);
        assert!((o.blur_amount - 1.0).abs() < f32::EPSILON);
        assert!(o.noise_texture);
        assert!(!o.tonemapping);
    }

    #[test]
    fn round_trips_through_toml() {
        let o = Options { border_color: 4, ..Options::default() };
        let s = toml::to_string(&o).expect("serialize");
        let back: Options = toml::from_str(&s).expect("deserialize");
        assert_eq!(o, back);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let partial: Options = toml::from_str("borderColor = 7\n").expect("deserialize");
        assert_eq!(partial.border_color, 7);
        assert_eq!(partial.blink_time_ms, Options::default().blink_time_ms);
    }
}

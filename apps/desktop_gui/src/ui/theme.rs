//! Theme presets, palette lookup, and persisted appearance settings.

use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "storefront_gui.settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreset {
    VerdantLight,
    VerdantDark,
    EguiDark,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::VerdantLight => "Verdant Light",
            ThemePreset::VerdantDark => "Verdant Dark",
            ThemePreset::EguiDark => "Egui Dark",
        }
    }

    pub const ALL: [ThemePreset; 3] = [
        ThemePreset::VerdantLight,
        ThemePreset::VerdantDark,
        ThemePreset::EguiDark,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub accent_color: egui::Color32,
    pub panel_rounding: u8,
    pub card_shading: bool,
}

impl ThemeSettings {
    pub fn verdant_default() -> Self {
        Self {
            preset: ThemePreset::VerdantLight,
            accent_color: egui::Color32::from_rgb(22, 163, 74),
            panel_rounding: 10,
            card_shading: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiReadabilitySettings {
    pub text_scale: f32,
    pub compact_density: bool,
    pub show_review_dates: bool,
}

impl Default for UiReadabilitySettings {
    fn default() -> Self {
        Self {
            text_scale: 1.0,
            compact_density: false,
            show_review_dates: true,
        }
    }
}

pub struct StorefrontPalette {
    // Backgrounds:
    pub page_background: egui::Color32,
    pub hero_top: egui::Color32,
    pub hero_bottom: egui::Color32,
    pub card_background: egui::Color32,
    pub card_stroke: egui::Color32,

    // Text:
    pub heading_text: egui::Color32,
    pub body_text: egui::Color32,
    pub muted_text: egui::Color32,
    pub price_text: egui::Color32,

    // Category chips:
    pub chip_fill: egui::Color32,
    pub chip_text: egui::Color32,
}

fn verdant_light_palette() -> StorefrontPalette {
    StorefrontPalette {
        // Backgrounds:
        page_background: egui::Color32::from_rgb(250, 250, 249),
        hero_top: egui::Color32::from_rgb(240, 253, 244),
        hero_bottom: egui::Color32::from_rgb(236, 253, 245),
        card_background: egui::Color32::WHITE,
        card_stroke: egui::Color32::from_rgb(220, 252, 231),
        // Text:
        heading_text: egui::Color32::from_rgb(22, 101, 52),
        body_text: egui::Color32::from_rgb(55, 65, 81),
        muted_text: egui::Color32::from_rgb(107, 114, 128),
        price_text: egui::Color32::from_rgb(21, 128, 61),
        // Category chips:
        chip_fill: egui::Color32::from_rgb(220, 252, 231),
        chip_text: egui::Color32::from_rgb(22, 101, 52),
    }
}

fn verdant_dark_palette() -> StorefrontPalette {
    StorefrontPalette {
        // Backgrounds:
        page_background: egui::Color32::from_rgb(20, 24, 21),
        hero_top: egui::Color32::from_rgb(16, 34, 23),
        hero_bottom: egui::Color32::from_rgb(14, 30, 25),
        card_background: egui::Color32::from_rgb(28, 33, 29),
        card_stroke: egui::Color32::from_rgb(42, 58, 46),
        // Text:
        heading_text: egui::Color32::from_rgb(187, 247, 208),
        body_text: egui::Color32::from_rgb(209, 213, 219),
        muted_text: egui::Color32::from_rgb(148, 163, 184),
        price_text: egui::Color32::from_rgb(134, 239, 172),
        // Category chips:
        chip_fill: egui::Color32::from_rgb(34, 52, 38),
        chip_text: egui::Color32::from_rgb(187, 247, 208),
    }
}

pub fn theme_verdant_palette(theme: ThemeSettings) -> Option<StorefrontPalette> {
    match theme.preset {
        ThemePreset::VerdantLight => Some(verdant_light_palette()),
        ThemePreset::VerdantDark => Some(verdant_dark_palette()),
        ThemePreset::EguiDark => None,
    }
}

/// Palette for pages that always render storefront chrome, even when the
/// active preset leaves the stock egui look in place.
pub fn verdant_fallback_palette() -> StorefrontPalette {
    verdant_light_palette()
}

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let mut visuals = match theme.preset {
        ThemePreset::VerdantLight => {
            let mut v = egui::Visuals::light();
            v.override_text_color = None;
            v
        }
        ThemePreset::VerdantDark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = None;
            v
        }
        ThemePreset::EguiDark => egui::Visuals::dark(),
    };

    visuals.hyperlink_color = theme.accent_color;
    visuals.selection.bg_fill = theme.accent_color;
    visuals.widgets.active.bg_fill = theme.accent_color;
    visuals.widgets.hovered.bg_fill = theme.accent_color.gamma_multiply(0.85);

    // Popup/menu polish so menu_button dropdowns match the active theme.
    let popup_radius = theme.panel_rounding.clamp(4, 16);
    visuals.menu_corner_radius = egui::CornerRadius::same(popup_radius);
    visuals.window_corner_radius = egui::CornerRadius::same(popup_radius.saturating_add(2));

    if let Some(palette) = theme_verdant_palette(theme) {
        visuals.window_fill = palette.card_background;
        visuals.panel_fill = palette.page_background;
        visuals.extreme_bg_color = palette.hero_top;
        visuals.faint_bg_color = palette.chip_fill;
        visuals.window_stroke = egui::Stroke::new(1.0, palette.card_stroke);
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
        visuals.widgets.inactive.bg_fill = palette.chip_fill;
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.price_text);
    }

    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

pub fn lighten_color(c: egui::Color32, amount: f32) -> egui::Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let mix = |v: u8| -> u8 {
        let v = v as f32;
        (v + (255.0 - v) * amount).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PersistedThemePreset {
    VerdantLight,
    VerdantDark,
    EguiDark,
}

impl From<ThemePreset> for PersistedThemePreset {
    fn from(value: ThemePreset) -> Self {
        match value {
            ThemePreset::VerdantLight => PersistedThemePreset::VerdantLight,
            ThemePreset::VerdantDark => PersistedThemePreset::VerdantDark,
            ThemePreset::EguiDark => PersistedThemePreset::EguiDark,
        }
    }
}

impl From<PersistedThemePreset> for ThemePreset {
    fn from(value: PersistedThemePreset) -> Self {
        match value {
            PersistedThemePreset::VerdantLight => ThemePreset::VerdantLight,
            PersistedThemePreset::VerdantDark => ThemePreset::VerdantDark,
            PersistedThemePreset::EguiDark => ThemePreset::EguiDark,
        }
    }
}

/// Appearance settings as stored by eframe between runs. Restored values pass
/// through the same clamps as the settings window so a stale or hand-edited
/// blob cannot produce an unusable UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedStorefrontSettings {
    pub theme_preset: PersistedThemePreset,
    pub accent_rgb: [u8; 3],
    pub panel_rounding: u8,
    pub card_shading: bool,
    pub text_scale: f32,
    pub compact_density: bool,
    pub show_review_dates: bool,
}

impl Default for PersistedStorefrontSettings {
    fn default() -> Self {
        Self::from_runtime(
            ThemeSettings::verdant_default(),
            UiReadabilitySettings::default(),
        )
    }
}

impl PersistedStorefrontSettings {
    pub fn into_runtime(self) -> (ThemeSettings, UiReadabilitySettings) {
        let theme = ThemeSettings {
            preset: self.theme_preset.into(),
            accent_color: egui::Color32::from_rgb(
                self.accent_rgb[0],
                self.accent_rgb[1],
                self.accent_rgb[2],
            ),
            panel_rounding: self.panel_rounding.min(16),
            card_shading: self.card_shading,
        };
        let readability = UiReadabilitySettings {
            text_scale: self.text_scale.clamp(0.8, 1.4),
            compact_density: self.compact_density,
            show_review_dates: self.show_review_dates,
        };
        (theme, readability)
    }

    pub fn from_runtime(theme: ThemeSettings, readability: UiReadabilitySettings) -> Self {
        let accent = theme.accent_color;
        Self {
            theme_preset: theme.preset.into(),
            accent_rgb: [accent.r(), accent.g(), accent.b()],
            panel_rounding: theme.panel_rounding,
            card_shading: theme.card_shading,
            text_scale: readability.text_scale,
            compact_density: readability.compact_density,
            show_review_dates: readability.show_review_dates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_settings_round_trip_through_runtime() {
        let theme = ThemeSettings {
            preset: ThemePreset::VerdantDark,
            accent_color: egui::Color32::from_rgb(10, 120, 60),
            panel_rounding: 12,
            card_shading: false,
        };
        let readability = UiReadabilitySettings {
            text_scale: 1.2,
            compact_density: true,
            show_review_dates: false,
        };

        let persisted = PersistedStorefrontSettings::from_runtime(theme, readability);
        let json = serde_json::to_string(&persisted).expect("settings should serialize");
        let restored: PersistedStorefrontSettings =
            serde_json::from_str(&json).expect("settings should deserialize");
        let (theme_back, readability_back) = restored.into_runtime();

        assert_eq!(theme_back, theme);
        assert_eq!(readability_back, readability);
    }

    #[test]
    fn out_of_range_persisted_values_are_clamped() {
        let persisted = PersistedStorefrontSettings {
            panel_rounding: 99,
            text_scale: 3.0,
            ..PersistedStorefrontSettings::default()
        };
        let (theme, readability) = persisted.into_runtime();
        assert_eq!(theme.panel_rounding, 16);
        assert_eq!(readability.text_scale, 1.4);
    }

    #[test]
    fn missing_fields_fall_back_to_the_verdant_defaults() {
        let restored: PersistedStorefrontSettings =
            serde_json::from_str("{}").expect("empty settings blob should deserialize");
        let (theme, _) = restored.into_runtime();
        assert_eq!(theme.preset, ThemePreset::VerdantLight);
        assert_eq!(theme.accent_color, egui::Color32::from_rgb(22, 163, 74));
    }
}

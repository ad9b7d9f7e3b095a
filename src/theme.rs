// Colour palettes for light/dark mode and the tint easing used by cards.

use eframe::egui::{self, Color32};
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn label_id(self) -> &'static str {
        match self {
            ThemePreference::Light => "theme-light",
            ThemePreference::Dark => "theme-dark",
        }
    }

    /// Next variant, wrapping around.
    pub fn next(self) -> Self {
        use strum::IntoEnumIterator;
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Container colours for cards. Collapsed cards use the secondary pair,
/// expanded cards the primary pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary_container: Color32,
    pub on_primary_container: Color32,
    pub secondary_container: Color32,
    pub on_secondary_container: Color32,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            primary_container: Color32::from_rgb(0xEA, 0xDD, 0xFF),
            on_primary_container: Color32::from_rgb(0x21, 0x00, 0x5D),
            secondary_container: Color32::from_rgb(0xE8, 0xDE, 0xF8),
            on_secondary_container: Color32::from_rgb(0x1D, 0x19, 0x2B),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary_container: Color32::from_rgb(0x4F, 0x37, 0x8B),
            on_primary_container: Color32::from_rgb(0xEA, 0xDD, 0xFF),
            secondary_container: Color32::from_rgb(0x4A, 0x44, 0x58),
            on_secondary_container: Color32::from_rgb(0xE8, 0xDE, 0xF8),
        }
    }

    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    /// Card background at expansion progress `t` (0 = collapsed, 1 = expanded).
    pub fn container_at(&self, t: f32) -> Color32 {
        lerp_color(self.secondary_container, self.primary_container, t)
    }

    /// Text colour for a card. Snaps rather than eases.
    pub fn on_container(&self, expanded: bool) -> Color32 {
        if expanded {
            self.on_primary_container
        } else {
            self.on_secondary_container
        }
    }
}

pub fn apply_visuals(ctx: &egui::Context, theme: ThemePreference) {
    let visuals = match theme {
        ThemePreference::Light => egui::Visuals::light(),
        ThemePreference::Dark => egui::Visuals::dark(),
    };
    ctx.set_visuals(visuals);
}

/// Linear blend of two opaque-ish colours, channel by channel.
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |a: u8, b: u8| egui::lerp(a as f32..=b as f32, t).round() as u8;
    Color32::from_rgba_unmultiplied(
        ch(from.r(), to.r()),
        ch(from.g(), to.g()),
        ch(from.b(), to.b()),
        ch(from.a(), to.a()),
    )
}

use serde::Deserialize;
use web_sys::Document;

use crate::error::FxError;

/// Id of the optional `<script type="application/json">` block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Tuning constants for every interaction on the page.
///
/// All fields have defaults, so a config block only needs the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Viewports wider than this get the parallax layers.
    pub desktop_breakpoint: f64,
    pub hero_parallax_rate: f64,
    /// Scroll distance over which the hero logo fades out.
    pub logo_fade_distance: f64,
    pub contact_parallax_rate: f64,
    pub header_scrolled_threshold: f64,
    pub text_reveal_ms: u32,
    pub advance_period_ms: u32,
    pub nav_animation_restore_ms: u32,
    /// Time the menu needs to slide shut before a delayed scroll starts.
    pub menu_close_delay_ms: u32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: 768.0,
            hero_parallax_rate: 0.5,
            logo_fade_distance: 500.0,
            contact_parallax_rate: 0.3,
            header_scrolled_threshold: 50.0,
            text_reveal_ms: 1500,
            advance_period_ms: 5700,
            nav_animation_restore_ms: 50,
            menu_close_delay_ms: 400,
        }
    }
}

impl FxConfig {
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        let config: FxConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FxError> {
        if self.logo_fade_distance.is_nan() || self.logo_fade_distance <= 0.0 {
            return Err(FxError::InvalidConfig(format!(
                "logo_fade_distance must be positive, got {}",
                self.logo_fade_distance
            )));
        }
        for (name, rate) in [
            ("hero_parallax_rate", self.hero_parallax_rate),
            ("contact_parallax_rate", self.contact_parallax_rate),
        ] {
            if rate.is_nan() || rate <= 0.0 {
                return Err(FxError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, rate
                )));
            }
        }
        if self.advance_period_ms == 0 {
            return Err(FxError::InvalidConfig(
                "advance_period_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads the config block from the page, falling back to defaults when it
    /// is missing or broken.
    pub fn from_document(document: &Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width > self.desktop_breakpoint
    }
}

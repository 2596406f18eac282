use core::str::FromStr;
use serde::Deserialize;
use thiserror::Error;

#[cfg(feature = "ssr")]
use crate::theme::ThemeTokens;
#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

/// Shared server state. Built once in `main` and never mutated afterwards.
#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub theme: std::sync::Arc<ThemeTokens>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {field} `{value}`")]
    InvalidConfiguration { field: &'static str, value: String },
}

/// Spinner diameter and stroke preset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum IndicatorSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FromStr for IndicatorSize {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sm" | "small" => Ok(Self::Small),
            "md" | "medium" => Ok(Self::Medium),
            "lg" | "large" => Ok(Self::Large),
            other => Err(ConfigError::InvalidConfiguration {
                field: "size",
                value: other.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for IndicatorSize {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Spinner stroke preset. `Inverse` is meant for dark backgrounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum IndicatorColor {
    #[default]
    Primary,
    Inverse,
    Neutral,
}

impl FromStr for IndicatorColor {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "primary" => Ok(Self::Primary),
            "white" | "inverse" => Ok(Self::Inverse),
            "gray" | "neutral" => Ok(Self::Neutral),
            other => Err(ConfigError::InvalidConfiguration {
                field: "color",
                value: other.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for IndicatorColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Configuration for one loading indicator render.
///
/// Deserializes from the loose `{ size, color, text, fullScreen }` shape;
/// out-of-range sizes or colors fail there rather than at render time.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    pub size: IndicatorSize,
    pub color: IndicatorColor,
    #[serde(rename = "text", alias = "caption")]
    pub caption: Option<String>,
    #[serde(rename = "fullScreen", alias = "overlay")]
    pub overlay: bool,
}

impl IndicatorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn size(mut self, size: IndicatorSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn color(mut self, color: IndicatorColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }
}

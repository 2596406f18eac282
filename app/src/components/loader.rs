//! This module defines the `loader` component, a configurable spinner that
//! signals an in-progress operation.
//!
//! The rendered markup is a pure function of [`IndicatorConfig`]: the same
//! configuration always yields the same tree, and nothing here reads context or
//! creates signals. Class selection is split out into [`IndicatorStyle`] so the
//! presets can be checked without rendering.

use crate::types::{IndicatorColor, IndicatorConfig, IndicatorSize};
use leptos::{
    either::Either,
    html::{div, p},
    prelude::*,
};

const SPINNER_BASE: &str = "animate-spin rounded-full border-solid border-t-transparent";
const INLINE_CONTAINER: &str = "flex flex-col gap-2 justify-center items-center";
const OVERLAY_CONTAINER: &str = "flex relative z-10 flex-col gap-2 justify-center items-center";
const OVERLAY_ROOT: &str = "flex fixed inset-0 z-50 justify-center items-center";
const OVERLAY_BACKDROP: &str = "absolute inset-0 bg-black/40 backdrop-blur-sm";

/// Tailwind classes for one indicator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorStyle {
    pub container: &'static str,
    pub spinner: String,
    /// `None` when the configuration carries no caption.
    pub caption: Option<&'static str>,
}

impl IndicatorSize {
    /// Diameter and ring thickness.
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Small => "h-4 w-4 border-2",
            Self::Medium => "h-8 w-8 border-4",
            Self::Large => "h-12 w-12 border-4",
        }
    }
}

impl IndicatorColor {
    pub const fn stroke_class(self) -> &'static str {
        match self {
            Self::Primary => "border-primary",
            Self::Inverse => "border-white",
            Self::Neutral => "border-gray-400",
        }
    }

    /// Caption color with enough contrast against the background the stroke
    /// color is meant for.
    pub const fn caption_class(self) -> &'static str {
        match self {
            Self::Inverse => "text-sm text-white",
            Self::Primary | Self::Neutral => "text-sm text-gray-600",
        }
    }
}

impl IndicatorStyle {
    pub fn resolve(config: &IndicatorConfig) -> Self {
        Self {
            container: if config.overlay {
                OVERLAY_CONTAINER
            } else {
                INLINE_CONTAINER
            },
            spinner: format!(
                "{SPINNER_BASE} {} {}",
                config.size.classes(),
                config.color.stroke_class()
            ),
            caption: config
                .caption
                .as_ref()
                .map(|_| config.color.caption_class()),
        }
    }
}

/// Renders a loading indicator.
///
/// In overlay mode the spinner is centered over a blurred, semi-transparent
/// backdrop covering the whole viewport, which also swallows pointer input
/// meant for the page underneath.
pub fn component(config: IndicatorConfig) -> impl IntoView {
    let style = IndicatorStyle::resolve(&config);
    let caption = config
        .caption
        .zip(style.caption)
        .map(|(text, class)| p().class(class).child(text));

    let indicator = div()
        .class(style.container)
        .attr("role", "status")
        .attr("aria-live", "polite")
        .child((div().class(style.spinner), caption));

    if config.overlay {
        Either::Left(
            div()
                .class(OVERLAY_ROOT)
                .attr("aria-busy", "true")
                .child((div().class(OVERLAY_BACKDROP), indicator)),
        )
    } else {
        Either::Right(indicator)
    }
}

/// Medium primary spinner with no caption, for plain `Suspense` fallbacks.
pub fn default_component() -> impl IntoView {
    component(IndicatorConfig::default())
}

//! Length values and their resolution.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;

use crate::style::warning::warn_unsupported_unit;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// A tagged length value as consumed by the layout pipeline. Percentages
/// stay unresolved until layout supplies a reference length; `auto` keeps
/// its keyword identity because several consumers (auto margins, auto
/// cross sizes) give it meaning beyond its numeric fallback of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Length {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    ///
    /// An absolute value in pixels.
    Fixed(f32),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    ///
    /// A percentage of a reference length supplied by the container.
    Percent(f32),
    /// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
    ///
    /// "This keyword allows the user agent to compute the value based on
    /// other properties."
    Auto,
}

impl Default for Length {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl Length {
    /// Check if the value is an absolute pixel length.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Check if the value is a percentage.
    #[must_use]
    pub const fn is_percent(self) -> bool {
        matches!(self, Self::Percent(_))
    }

    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The raw numeric payload, or 0.0 for 'auto'.
    ///
    /// Used by the border setters, which store plain pixel floats.
    #[must_use]
    pub const fn value(self) -> f32 {
        match self {
            Self::Fixed(value) | Self::Percent(value) => value,
            Self::Auto => 0.0,
        }
    }

    /// [§ 6.1 Used Values](https://www.w3.org/TR/css-cascade-4/#used)
    ///
    /// Resolve to pixels against a reference length.
    ///
    /// NOTE: 'auto' resolves to 0.0 as a numeric fallback. Callers that
    /// give 'auto' special meaning (margin centering, stretch) must test
    /// [`Length::is_auto`] before resolving.
    #[must_use]
    pub fn resolve(self, reference: f32) -> f32 {
        match self {
            Self::Fixed(value) => value,
            Self::Percent(value) => value * reference / 100.0,
            Self::Auto => 0.0,
        }
    }

    /// Parse a length from the property-value grammar
    /// `"<float>px" | "<float>%" | "auto"`.
    ///
    /// Returns `None` for anything else so the caller leaves the property
    /// at its prior value. A bare numeric is rejected on purpose: lengths
    /// require a unit. Unknown alphabetic units are reported once through
    /// the warning system.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if value == "auto" {
            return Some(Self::Auto);
        }
        if let Some(number) = value.strip_suffix("px") {
            return number.parse::<f32>().ok().map(Self::Fixed);
        }
        if let Some(number) = value.strip_suffix('%') {
            return number.parse::<f32>().ok().map(Self::Percent);
        }
        if value.parse::<f32>().is_ok() {
            // Unitless numbers are not lengths (other than in properties
            // like flex-grow, which parse floats directly).
            return None;
        }
        if !value.is_empty() && value.bytes().any(|byte| byte.is_ascii_alphabetic()) {
            warn_unsupported_unit(value);
        }
        None
    }
}

use std::fmt;

use thiserror::Error;

use super::{LayoutConfig, SizeBounds};

/// Why a width/height field could not be turned into centimetres.
/// The caller keeps its previous valid value when it sees one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("dimension is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("dimension is not a finite number")]
    NonFinite,
}

/// Resolved print size and its split into panels (strips).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub width_cm: u32,
    pub height_cm: u32,
    /// Printed area in m², rounded to 2 decimals
    pub area_m2: f64,
    pub panel_count: u32,
    /// Width of each panel under equal division, rounded to whole cm
    pub panel_width_cm: u32,
}

impl PanelLayout {
    /// Width the panels cover together. Differs from `width_cm` when the
    /// equal split was rounded.
    pub fn covered_width_cm(&self) -> u64 {
        u64::from(self.panel_count) * u64::from(self.panel_width_cm)
    }
}

impl fmt::Display for PanelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} m² | {}x{} cm | {} x {} cm",
            self.area_m2, self.width_cm, self.height_cm, self.panel_count, self.panel_width_cm
        )
    }
}

/// Parse a user-typed dimension. Accepts `,` as the decimal separator and
/// rounds to the nearest whole centimetre.
pub fn parse_dimension(text: &str) -> Result<f64, DimensionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DimensionError::Empty);
    }

    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| DimensionError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(DimensionError::NonFinite);
    }
    Ok(value.round())
}

/// Constrain `value` to `[min, max]`. Assumes `min <= max`; never panics.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Round to whole centimetres and apply an optional upper bound.
///
/// A positive finite `max` clamps into `[1, floor(max)]`. Anything else
/// (absent, zero, negative, non-finite) only floors the value at 1.
pub fn resolve_dimension(value: f64, max: Option<f64>) -> u32 {
    let value = value.round();
    let resolved = match max.filter(|m| m.is_finite() && *m > 0.0) {
        Some(max) => clamp(value, 1.0, max.floor().max(1.0)),
        None => value.max(1.0),
    };
    // Float-to-int casts saturate, so absurd inputs cap at u32::MAX.
    resolved as u32
}

/// cm² → m² at 2 decimals, half away from zero. Exact in integers:
/// hundredths of m² are cm² / 100.
fn area_m2(width_cm: u32, height_cm: u32) -> f64 {
    let square_cm = u64::from(width_cm) * u64::from(height_cm);
    ((square_cm + 50) / 100) as f64 / 100.0
}

/// Compute the clamped size, area and panel split for a requested print.
pub fn compute_layout(
    width: f64,
    height: f64,
    bounds: &SizeBounds,
    config: &LayoutConfig,
) -> Result<PanelLayout, DimensionError> {
    if !width.is_finite() || !height.is_finite() {
        return Err(DimensionError::NonFinite);
    }

    let width_cm = resolve_dimension(width, bounds.max_width_cm);
    let height_cm = resolve_dimension(height, bounds.max_height_cm);

    let area_m2 = area_m2(width_cm, height_cm);

    let max_panel = config.effective_panel_width();
    let panel_count = ((f64::from(width_cm) / max_panel).ceil() as u32).max(1);
    let panel_width_cm = ((f64::from(width_cm) / f64::from(panel_count)).round() as u32).max(1);

    tracing::debug!(
        "Panel layout for {}x{} (requested {}x{}): {} x {} cm",
        width_cm,
        height_cm,
        width,
        height,
        panel_count,
        panel_width_cm
    );

    Ok(PanelLayout {
        width_cm,
        height_cm,
        area_m2,
        panel_count,
        panel_width_cm,
    })
}

/// Same as [`compute_layout`], straight from the configurator's text fields.
pub fn compute_layout_from_text(
    width: &str,
    height: &str,
    bounds: &SizeBounds,
    config: &LayoutConfig,
) -> Result<PanelLayout, DimensionError> {
    let width = parse_dimension(width)?;
    let height = parse_dimension(height)?;
    compute_layout(width, height, bounds, config)
}

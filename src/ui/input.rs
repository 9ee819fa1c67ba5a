use crate::layout::{
    compute_layout, parse_dimension, DimensionError, LayoutConfig, PanelLayout, SizeBounds,
};

/// One free-form numeric input of the configurator.
/// Keeps the last valid value while the user types something unparseable.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionField {
    text: String,
    value: f64,
    error: Option<DimensionError>,
}

impl DimensionField {
    pub fn new(initial: f64) -> Self {
        let value = if initial.is_finite() {
            initial.round()
        } else {
            1.0
        };
        Self {
            text: value.to_string(),
            value,
            error: None,
        }
    }

    /// Apply an edit. On error the previous value stays in effect.
    pub fn set_text(&mut self, text: &str) -> Result<f64, DimensionError> {
        self.text = text.to_string();
        match parse_dimension(text) {
            Ok(value) => {
                self.value = value;
                self.error = None;
                Ok(value)
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last valid value (whole centimetres).
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn error(&self) -> Option<&DimensionError> {
        self.error.as_ref()
    }
}

/// Edit events produced by the configurator form.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfiguratorEdit {
    Width(String),
    Height(String),
}

/// Width/height form state for one product, recomputed on every edit.
#[derive(Debug, Clone)]
pub struct ConfiguratorState {
    pub width: DimensionField,
    pub height: DimensionField,
    pub bounds: SizeBounds,
    pub config: LayoutConfig,
}

impl ConfiguratorState {
    pub fn new(width: f64, height: f64, bounds: SizeBounds, config: LayoutConfig) -> Self {
        Self {
            width: DimensionField::new(width),
            height: DimensionField::new(height),
            bounds,
            config,
        }
    }

    /// Apply one edit and return the layout for the values now in effect.
    pub fn apply(&mut self, edit: ConfiguratorEdit) -> Result<PanelLayout, DimensionError> {
        let (name, field, text) = match edit {
            ConfiguratorEdit::Width(text) => ("width", &mut self.width, text),
            ConfiguratorEdit::Height(text) => ("height", &mut self.height, text),
        };
        // The error stays on the field; the layout uses the last good value.
        if let Err(err) = field.set_text(&text) {
            tracing::debug!("Rejected {} edit, keeping {}: {}", name, field.value(), err);
        }
        self.layout()
    }

    pub fn layout(&self) -> Result<PanelLayout, DimensionError> {
        compute_layout(self.width.value(), self.height.value(), &self.bounds, &self.config)
    }
}

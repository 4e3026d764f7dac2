use std::env;

use crate::error::{Result, SelectorError};
use crate::geometry::Size;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};

/// Smallest selection edge, in logical units, on both axes.
pub const DEFAULT_MIN_SIDE: f64 = 50.0;

const MIN_WIDTH_VAR: &str = "AREA_SELECTOR_MIN_WIDTH";
const MIN_HEIGHT_VAR: &str = "AREA_SELECTOR_MIN_HEIGHT";
const BORDER_WIDTH_VAR: &str = "AREA_SELECTOR_BORDER_WIDTH";

/// Tunables shared by the validator and the transforms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// A selection may not be narrower *and* shorter than this.
    pub min_size: Size,
    /// Thickness of the border the host draws around the selection.
    /// The move transform keeps this much room free at the edges.
    pub border_width: f64,
}

impl SelectorConfig {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists, ignore if it doesn't
        let _ = dotenv();

        let defaults = Self::default();
        let min_width = read_var(MIN_WIDTH_VAR)?.unwrap_or(defaults.min_size.width);
        let min_height = read_var(MIN_HEIGHT_VAR)?.unwrap_or(defaults.min_size.height);
        let border_width = read_var(BORDER_WIDTH_VAR)?.unwrap_or(defaults.border_width);

        Ok(Self {
            min_size: Size::new(min_width, min_height),
            border_width,
        })
    }

    /// Overrides the border width, with the same checks as the environment.
    pub fn set_border_width(&mut self, width: f64) -> Result<()> {
        self.border_width = check_length("border width", width)?;
        Ok(())
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_size: Size::new(DEFAULT_MIN_SIDE, DEFAULT_MIN_SIDE),
            border_width: 0.0,
        }
    }
}

fn read_var(name: &str) -> Result<Option<f64>> {
    match env::var(name) {
        Ok(raw) => parse_length(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_length(name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SelectorError::config(format!("{name} must be a number, got {raw:?}")))?;
    check_length(name, value)
}

fn check_length(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(SelectorError::config(format!(
            "{name} must be a non-negative finite number, got {value}"
        )));
    }
    Ok(value)
}

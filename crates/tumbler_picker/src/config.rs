//! Date picker options

use serde::{Deserialize, Serialize};
use tumbler_scroll::ScrollOptionsPatch;

use crate::calendar::YearRange;
use crate::error::Result;

const DEFAULT_SIZE: [f32; 2] = [200.0, 300.0];
const DEFAULT_RANGE: usize = 5;

/// Date picker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerOptions {
    /// Overall `[width, height]`; each slot gets a third of the width
    pub size: [f32; 2],
    /// Visible items per slot; must be odd
    pub range: usize,
    /// Selectable years; defaults to the current year plus and minus nine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<YearRange>,
    /// Overrides applied to every slot's scroll view
    pub scroll: ScrollOptionsPatch,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            range: DEFAULT_RANGE,
            years: None,
            scroll: ScrollOptionsPatch::default(),
        }
    }
}

impl PickerOptions {
    /// Coerce unusable values to their defaults
    pub fn sanitized(mut self) -> Self {
        if self.range % 2 != 1 {
            tracing::warn!(
                "Picker range must be odd, got {}; using {}",
                self.range,
                DEFAULT_RANGE
            );
            self.range = DEFAULT_RANGE;
        }
        if !self.size.iter().all(|side| side.is_finite() && *side > 0.0) {
            tracing::warn!(
                "Picker size must be positive, got {:?}; using {:?}",
                self.size,
                DEFAULT_SIZE
            );
            self.size = DEFAULT_SIZE;
        }
        if let Some(years) = self.years {
            if years.start > years.end {
                tracing::warn!(
                    "Picker year range {}..={} is empty",
                    years.start,
                    years.end
                );
            }
        }
        self
    }

    /// Placeholders on each side of a slot's values
    pub fn gap(&self) -> usize {
        (self.range.max(1) - 1) / 2
    }

    /// Extent of one item in a slot
    pub fn item_extent(&self) -> f32 {
        self.size[1] / self.range.max(1) as f32
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: PickerOptions = toml::from_str(source)?;
        Ok(options.sanitized())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

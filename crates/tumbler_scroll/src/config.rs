//! Scroll options
//!
//! [`ScrollOptions`] is the full, resolved configuration of a
//! [`ScrollView`](crate::ScrollView). Callers change it through a
//! [`ScrollOptionsPatch`], which only carries the fields they want to
//! override; [`ScrollOptions::merge`] applies a patch without touching the
//! shared defaults.
//!
//! Both types use the camel-case option names in serialized form:
//!
//! ```toml
//! paginated = true
//! pagePeriod = 500.0
//! edgeGrip = 0.5
//! ```

use serde::{Deserialize, Serialize};
use tumbler_core::{Axis, SyncOptions};

use crate::error::Result;

/// Resolved scroll configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollOptions {
    /// Scroll axis
    pub direction: Axis,
    /// Only process input along the scroll axis
    pub rails: bool,
    /// Linear resistance, dominant at low speed
    pub friction: f32,
    /// Quadratic resistance, dominant at high speed
    pub drag: f32,
    /// Input and release-speed multiplier while on an edge
    pub edge_grip: f32,
    /// Period of the edge spring (ms)
    pub edge_period: f32,
    /// Damping ratio of the edge spring
    pub edge_damp: f32,
    /// Extra distance beyond the clip that items stay materialized for (px)
    pub margin: f32,
    /// Visible extent; defaults to the viewport extent along the axis
    pub clip_size: Option<f32>,
    /// Snap to whole items once motion settles
    pub paginated: bool,
    /// Period of the page spring (ms)
    pub page_period: f32,
    /// Damping ratio of the page spring
    pub page_damp: f32,
    /// Speed at or above which no pagination decision is made (px/ms)
    pub page_stop_speed: f32,
    /// Release speed above which a flick switches pages (px/ms)
    pub page_switch_speed: f32,
    /// Maximum release speed (px/ms)
    pub speed_limit: f32,
    /// Accept input captured by rendered items as well as the container
    pub group_scroll: bool,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            direction: Axis::Y,
            rails: true,
            friction: 0.001,
            drag: 0.0001,
            edge_grip: 0.5,
            edge_period: 300.0,
            edge_damp: 1.0,
            margin: 1000.0,
            clip_size: None,
            paginated: false,
            page_period: 500.0,
            page_damp: 0.8,
            page_stop_speed: 10.0,
            page_switch_speed: 0.5,
            speed_limit: 10.0,
            group_scroll: false,
        }
    }
}

/// Partial options; `None` fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollOptionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_grip: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_period: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_damp: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paginated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_period: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_damp: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_stop_speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_switch_speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_limit: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_scroll: Option<bool>,
}

impl ScrollOptionsPatch {
    /// Combine two patches; fields set in `other` win
    pub fn and(self, other: ScrollOptionsPatch) -> Self {
        Self {
            direction: other.direction.or(self.direction),
            rails: other.rails.or(self.rails),
            friction: other.friction.or(self.friction),
            drag: other.drag.or(self.drag),
            edge_grip: other.edge_grip.or(self.edge_grip),
            edge_period: other.edge_period.or(self.edge_period),
            edge_damp: other.edge_damp.or(self.edge_damp),
            margin: other.margin.or(self.margin),
            clip_size: other.clip_size.or(self.clip_size),
            paginated: other.paginated.or(self.paginated),
            page_period: other.page_period.or(self.page_period),
            page_damp: other.page_damp.or(self.page_damp),
            page_stop_speed: other.page_stop_speed.or(self.page_stop_speed),
            page_switch_speed: other.page_switch_speed.or(self.page_switch_speed),
            speed_limit: other.speed_limit.or(self.speed_limit),
            group_scroll: other.group_scroll.or(self.group_scroll),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ScrollOptions {
    /// Options for a snapping picker column
    pub fn paginated() -> Self {
        Self {
            paginated: true,
            ..Default::default()
        }
    }

    /// Apply a patch, returning new options
    pub fn merge(&self, patch: &ScrollOptionsPatch) -> Self {
        Self {
            direction: patch.direction.unwrap_or(self.direction),
            rails: patch.rails.unwrap_or(self.rails),
            friction: patch.friction.unwrap_or(self.friction),
            drag: patch.drag.unwrap_or(self.drag),
            edge_grip: patch.edge_grip.unwrap_or(self.edge_grip),
            edge_period: patch.edge_period.unwrap_or(self.edge_period),
            edge_damp: patch.edge_damp.unwrap_or(self.edge_damp),
            margin: patch.margin.unwrap_or(self.margin),
            clip_size: patch.clip_size.or(self.clip_size),
            paginated: patch.paginated.unwrap_or(self.paginated),
            page_period: patch.page_period.unwrap_or(self.page_period),
            page_damp: patch.page_damp.unwrap_or(self.page_damp),
            page_stop_speed: patch.page_stop_speed.unwrap_or(self.page_stop_speed),
            page_switch_speed: patch.page_switch_speed.unwrap_or(self.page_switch_speed),
            speed_limit: patch.speed_limit.unwrap_or(self.speed_limit),
            group_scroll: patch.group_scroll.unwrap_or(self.group_scroll),
        }
        .sanitized()
    }

    /// Replace values the engine cannot work with by their defaults.
    ///
    /// Invalid values are never an error: they are logged and coerced.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn coerce(name: &str, value: &mut f32, fallback: f32, valid: fn(f32) -> bool) {
            if !value.is_finite() || !valid(*value) {
                tracing::warn!("Invalid scroll option {}={}, using {}", name, value, fallback);
                *value = fallback;
            }
        }
        let non_negative: fn(f32) -> bool = |v| v >= 0.0;
        let positive: fn(f32) -> bool = |v| v > 0.0;

        coerce("friction", &mut self.friction, defaults.friction, non_negative);
        coerce("drag", &mut self.drag, defaults.drag, non_negative);
        coerce("edgeGrip", &mut self.edge_grip, defaults.edge_grip, non_negative);
        coerce("edgePeriod", &mut self.edge_period, defaults.edge_period, positive);
        coerce("edgeDamp", &mut self.edge_damp, defaults.edge_damp, non_negative);
        coerce("margin", &mut self.margin, defaults.margin, non_negative);
        coerce("pagePeriod", &mut self.page_period, defaults.page_period, positive);
        coerce("pageDamp", &mut self.page_damp, defaults.page_damp, non_negative);
        coerce(
            "pageSwitchSpeed",
            &mut self.page_switch_speed,
            defaults.page_switch_speed,
            non_negative,
        );
        coerce("speedLimit", &mut self.speed_limit, defaults.speed_limit, positive);
        // An infinite stop speed is meaningful: always allow a pagination decision.
        if self.page_stop_speed.is_nan() || self.page_stop_speed <= 0.0 {
            tracing::warn!(
                "Invalid scroll option pageStopSpeed={}, using {}",
                self.page_stop_speed,
                defaults.page_stop_speed
            );
            self.page_stop_speed = defaults.page_stop_speed;
        }
        if let Some(clip) = self.clip_size {
            if !clip.is_finite() || clip <= 0.0 {
                tracing::warn!("Invalid scroll option clipSize={}, ignoring", clip);
                self.clip_size = None;
            }
        }
        self
    }

    /// Input sync settings derived from these options (at full scale)
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            direction: self.direction,
            rails: self.rails,
            scale: 1.0,
        }
    }

    /// Parse options from a TOML document; missing keys take defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: ScrollOptions = toml::from_str(source)?;
        Ok(options.sanitized())
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl ScrollOptionsPatch {
    /// Parse a patch from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

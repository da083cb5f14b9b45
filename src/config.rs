//! Tunable page behavior settings.
//!
//! Defaults come from [`crate::consts`]. A page may override any subset by
//! embedding a JSON object in `<script type="application/json"
//! id="page-config">`; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use serde::de::{Error as _, Unexpected};
use serde_json::Value;

use crate::consts::{
    LAZY_ROOT_MARGIN, MAGNETIC_SCALE, MAGNETIC_STRENGTH, NAVBAR_SCROLLED_PX, PARALLAX_DAMPING, PARALLAX_RANGE,
    PARALLAX_SPEED_STEP, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SECTION_LOOKAHEAD_PX,
};
use crate::error::PageError;
use crate::observe::ObserverOptions;

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// All tunables consumed by [`crate::controller::PageCore`] and the bindings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub section_lookahead_px: f64,
    pub navbar_scrolled_px: f64,
    pub magnetic_strength: f64,
    pub magnetic_scale: f64,
    pub parallax_range: f64,
    pub parallax_speed_step: f64,
    pub parallax_damping: f64,
    pub reveal: ObserverOptions,
    pub lazy: ObserverOptions,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            section_lookahead_px: SECTION_LOOKAHEAD_PX,
            navbar_scrolled_px: NAVBAR_SCROLLED_PX,
            magnetic_strength: MAGNETIC_STRENGTH,
            magnetic_scale: MAGNETIC_SCALE,
            parallax_range: PARALLAX_RANGE,
            parallax_speed_step: PARALLAX_SPEED_STEP,
            parallax_damping: PARALLAX_DAMPING,
            reveal: ObserverOptions::new(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN),
            lazy: ObserverOptions::new(0.0, LAZY_ROOT_MARGIN),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] if `raw` is not a valid config object.
    /// Arrays are rejected even though serde would fill fields by position.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(serde_json::Error::invalid_type(unexpected(&value), &"a JSON object").into());
        }
        Ok(Self::deserialize(value)?.with_valid_observers())
    }

    /// Replace observer options the browser would reject with their defaults.
    fn with_valid_observers(mut self) -> Self {
        let defaults = Self::default();
        if !self.reveal.is_valid() {
            log::warn!("invalid reveal observer options {:?}; using defaults", self.reveal);
            self.reveal = defaults.reveal;
        }
        if !self.lazy.is_valid() {
            log::warn!("invalid lazy observer options {:?}; using defaults", self.lazy);
            self.lazy = defaults.lazy;
        }
        self
    }

    /// Like [`Self::from_json`], but logs and falls back to defaults on error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default page config");
                Self::default()
            }
        }
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

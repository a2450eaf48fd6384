use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FILL: &str = "gray";
pub const DEFAULT_ACTIVE_FILL: &str = "red";

/// A CSS color as given by the caller. Kept verbatim so vector output can pass it through.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Fill(String);

crate::impl_string_newtype!(Fill);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickColors {
    pub fill: Fill,
    pub active_fill: Fill,
}

impl Default for TickColors {
    fn default() -> Self {
        Self {
            fill: Fill::from(DEFAULT_FILL),
            active_fill: Fill::from(DEFAULT_ACTIVE_FILL),
        }
    }
}

impl TickColors {
    pub fn new(fill: Option<Fill>, active_fill: Option<Fill>) -> Self {
        let defaults = Self::default();
        Self {
            fill: fill.unwrap_or(defaults.fill),
            active_fill: active_fill.unwrap_or(defaults.active_fill),
        }
    }

    pub fn pick(&self, active: bool) -> &Fill {
        if active { &self.active_fill } else { &self.fill }
    }
}

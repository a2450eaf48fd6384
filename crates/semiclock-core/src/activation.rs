use crate::geometry::Threshold;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

/// Which ticks light up for a given percentage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
    /// Only the tick for the last passed threshold, like a clock hand.
    #[default]
    Closest,
    /// Every tick up to the current percentage, like a fill gauge.
    Range,
}

impl ActivationMode {
    pub fn policy(self) -> &'static dyn ActivationPolicy {
        match self {
            Self::Closest => &ClosestPolicy,
            Self::Range => &RangePolicy,
        }
    }

    pub fn is_active(self, thresholds: &[Threshold], percentage: f64, threshold: Threshold) -> bool {
        self.policy().is_active(&ActivationContext {
            thresholds,
            percentage,
            threshold,
        })
    }
}

/// Inputs for deciding one tick. `thresholds` is the full ordered list for the gauge.
#[derive(Debug, Clone, Copy)]
pub struct ActivationContext<'a> {
    pub thresholds: &'a [Threshold],
    pub percentage: f64,
    pub threshold: Threshold,
}

impl ActivationContext<'_> {
    /// Matched by value: with more than 100 ticks the trailing thresholds repeat and
    /// all of them count as last.
    fn is_last(&self) -> bool {
        self.thresholds.last() == Some(&self.threshold)
    }

    fn is_zero(&self) -> bool {
        self.percentage == 0.0
    }
}

pub trait ActivationPolicy {
    fn is_active(&self, ctx: &ActivationContext<'_>) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestPolicy;

impl ActivationPolicy for ClosestPolicy {
    fn is_active(&self, ctx: &ActivationContext<'_>) -> bool {
        if ctx.is_zero() {
            return false;
        }

        if ctx.is_last() && ctx.percentage >= 100.0 {
            return true;
        }

        // the final entry never takes part in the scan
        let Some((_, candidates)) = ctx.thresholds.split_last() else {
            return false;
        };

        let closest = candidates
            .iter()
            .copied()
            .filter(|t| t.as_f64() < ctx.percentage)
            .last();

        closest == Some(ctx.threshold) && ctx.percentage < 100.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RangePolicy;

impl ActivationPolicy for RangePolicy {
    fn is_active(&self, ctx: &ActivationContext<'_>) -> bool {
        if ctx.is_zero() {
            return false;
        }

        if ctx.is_last() {
            return ctx.percentage >= 100.0;
        }

        ctx.percentage.floor() >= ctx.threshold.as_f64()
    }
}

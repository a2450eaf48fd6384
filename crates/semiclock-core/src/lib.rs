//! Tick layout and activation for a semi-circular progress clock.
//!
//! A [`Gauge`] places `count` ticks evenly along a top-opening half circle and,
//! for a given percentage, decides which of them are lit according to an
//! [`ActivationMode`]. Everything here is a pure function of its inputs.

pub mod activation;
pub mod color;
pub mod error;
pub mod gauge;
pub mod geometry;
pub mod macros;

pub use activation::{
    ActivationContext, ActivationMode, ActivationPolicy, ClosestPolicy, RangePolicy,
};
pub use color::{Fill, TickColors};
pub use error::ConfigurationError;
pub use gauge::{Frame, Gauge, GaugeOptions, Overflow, RectangleOptions, RenderedTick, Tick};
pub use geometry::{ArcConfiguration, Placement, Point, Threshold};

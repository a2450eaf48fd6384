use crate::activation::{ActivationContext, ActivationMode};
use crate::color::{Fill, TickColors};
use crate::error::ConfigurationError;
use crate::geometry::{self, ArcConfiguration, Placement, Threshold};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

/// Passed through to the drawing surface untouched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleOptions {
    pub width: f64,
    pub height: f64,
    pub count: usize,
    #[serde(default)]
    pub colors: TickColors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeOptions {
    pub canvas_width: f64,
    pub rectangle: RectangleOptions,
    #[serde(default)]
    pub mode: ActivationMode,
    #[serde(default)]
    pub overflow: Option<Overflow>,
}

impl GaugeOptions {
    pub fn new(canvas_width: f64, rectangle: RectangleOptions) -> Self {
        Self {
            canvas_width,
            rectangle,
            mode: ActivationMode::default(),
            overflow: None,
        }
    }

    pub fn with_mode(mut self, mode: ActivationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_overflow(mut self, overflow: Option<Overflow>) -> Self {
        self.overflow = overflow;
        self
    }
}

/// A positioned tick with its colors. Fixed for the lifetime of a [`Gauge`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    #[serde(flatten)]
    pub placement: Placement,
    pub width: f64,
    pub height: f64,
    pub fill: Fill,
    pub active_fill: Fill,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTick {
    #[serde(flatten)]
    pub tick: Tick,
    pub active: bool,
}

impl RenderedTick {
    pub fn color(&self) -> &Fill {
        if self.active {
            &self.tick.active_fill
        } else {
            &self.tick.fill
        }
    }
}

/// One evaluated state of the gauge, ready for a drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub percentage: f64,
    pub mode: ActivationMode,
    pub overflow: Option<Overflow>,
    pub ticks: Vec<RenderedTick>,
}

impl Frame {
    pub fn active_count(&self) -> usize {
        self.ticks.iter().filter(|t| t.active).count()
    }
}

#[derive(Debug, Clone)]
pub struct Gauge {
    arc: ArcConfiguration,
    mode: ActivationMode,
    overflow: Option<Overflow>,
    ticks: Vec<Tick>,
    thresholds: Vec<Threshold>,
}

impl Gauge {
    pub fn new(options: GaugeOptions) -> Result<Self, ConfigurationError> {
        let GaugeOptions {
            canvas_width,
            rectangle,
            mode,
            overflow,
        } = options;

        let canvas_width = ConfigurationError::check_dimension("canvas width", canvas_width)?;
        let tick_width = ConfigurationError::check_dimension("tick width", rectangle.width)?;
        let tick_height = ConfigurationError::check_dimension("tick height", rectangle.height)?;

        let arc = ArcConfiguration::new(canvas_width, tick_height);
        let placements = geometry::layout(
            arc.center(),
            arc.radius(),
            rectangle.count,
            tick_width,
            tick_height,
        )?;

        log::debug!(
            "Gauge {}x{} radius {} with {} ticks ({} mode)",
            arc.width(),
            arc.height(),
            arc.radius(),
            placements.len(),
            mode
        );

        let thresholds = placements.iter().map(|p| p.threshold).collect();
        let ticks = placements
            .into_iter()
            .map(|placement| Tick {
                placement,
                width: tick_width,
                height: tick_height,
                fill: rectangle.colors.fill.clone(),
                active_fill: rectangle.colors.active_fill.clone(),
            })
            .collect();

        Ok(Self {
            arc,
            mode,
            overflow,
            ticks,
            thresholds,
        })
    }

    pub fn arc(&self) -> &ArcConfiguration {
        &self.arc
    }

    /// Evaluates every tick against `percentage`. The value is not clamped.
    pub fn render(&self, percentage: f64) -> Frame {
        let policy = self.mode.policy();
        let ticks: Vec<RenderedTick> = self
            .ticks
            .iter()
            .map(|tick| RenderedTick {
                active: policy.is_active(&ActivationContext {
                    thresholds: &self.thresholds,
                    percentage,
                    threshold: tick.placement.threshold,
                }),
                tick: tick.clone(),
            })
            .collect();

        let frame = Frame {
            width: self.arc.width(),
            height: self.arc.height(),
            percentage,
            mode: self.mode,
            overflow: self.overflow,
            ticks,
        };
        log::trace!(
            "Rendered {}% with {}/{} ticks active",
            percentage,
            frame.active_count(),
            frame.ticks.len()
        );
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(count: usize, mode: ActivationMode) -> GaugeOptions {
        GaugeOptions::new(
            400.0,
            RectangleOptions {
                width: 4.0,
                height: 8.0,
                count,
                colors: TickColors::default(),
            },
        )
        .with_mode(mode)
    }

    fn lit(frame: &Frame) -> Vec<u32> {
        frame
            .ticks
            .iter()
            .filter(|t| t.active)
            .map(|t| t.tick.placement.threshold.value())
            .collect()
    }

    #[test]
    fn test_frame_dimensions() {
        let gauge = Gauge::new(options(27, ActivationMode::Closest)).unwrap();
        let frame = gauge.render(0.0);
        assert_eq!(frame.width, 400.0);
        assert_eq!(frame.height, 208.0);
        assert_eq!(frame.ticks.len(), 27);
        assert_eq!(frame.active_count(), 0);
        assert_eq!(gauge.arc().radius(), 196.0);
    }

    #[test]
    fn test_closest_frames() {
        let gauge = Gauge::new(options(4, ActivationMode::Closest)).unwrap();
        assert_eq!(lit(&gauge.render(100.0)), vec![75]);
        assert_eq!(lit(&gauge.render(40.0)), vec![25]);
        assert!(lit(&gauge.render(0.0)).is_empty());
    }

    #[test]
    fn test_range_frames() {
        let gauge = Gauge::new(options(4, ActivationMode::Range)).unwrap();
        assert_eq!(lit(&gauge.render(60.0)), vec![0, 25, 50]);
        assert_eq!(lit(&gauge.render(100.0)), vec![0, 25, 50, 75]);
    }

    #[test]
    fn test_colors_follow_activation() {
        let mut opts = options(4, ActivationMode::Range);
        opts.rectangle.colors = TickColors::new(None, Some(Fill::from("blue")));
        let frame = Gauge::new(opts).unwrap().render(30.0);

        let colors: Vec<&str> = frame.ticks.iter().map(|t| t.color().as_str()).collect();
        assert_eq!(colors, vec!["blue", "blue", "gray", "gray"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let gauge = Gauge::new(options(27, ActivationMode::Closest)).unwrap();
        let a = gauge.render(42.5);
        let b = Gauge::new(options(27, ActivationMode::Closest))
            .unwrap()
            .render(42.5);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_invalid_options() {
        assert_eq!(
            Gauge::new(options(1, ActivationMode::Closest)).unwrap_err(),
            ConfigurationError::TooFewTicks { count: 1 }
        );

        let mut opts = options(4, ActivationMode::Closest);
        opts.canvas_width = f64::NAN;
        assert!(matches!(
            Gauge::new(opts),
            Err(ConfigurationError::InvalidDimension { name: "canvas width", .. })
        ));

        let mut opts = options(4, ActivationMode::Closest);
        opts.rectangle.height = -1.0;
        assert!(matches!(
            Gauge::new(opts),
            Err(ConfigurationError::InvalidDimension { name: "tick height", .. })
        ));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let json = r#"{
            "canvas_width": 300,
            "rectangle": { "width": 2, "height": 6, "count": 10 },
            "overflow": "Hidden"
        }"#;
        let opts: GaugeOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.mode, ActivationMode::Closest);
        assert_eq!(opts.overflow, Some(Overflow::Hidden));
        assert_eq!(opts.rectangle.colors, TickColors::default());
    }
}

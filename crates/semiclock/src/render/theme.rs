use super::RenderError;
use palette::Srgb;
use semiclock_core::Fill;

/// Resolves a CSS color name or `#rgb`/`#rrggbb` hex string for raster output.
pub fn resolve_color(fill: &Fill) -> Result<Srgb<f64>, RenderError> {
    let name = fill.trim().to_ascii_lowercase();

    palette::named::from_str(&name)
        .or_else(|| {
            name.starts_with('#')
                .then(|| name.parse::<Srgb<u8>>().ok())
                .flatten()
        })
        .map(|c| c.into_format::<f64>())
        .ok_or_else(|| RenderError::UnknownColor(fill.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPalette {
    pub fill: Srgb<f64>,
    pub active_fill: Srgb<f64>,
}

impl TickPalette {
    pub fn new(fill: &Fill, active_fill: &Fill) -> Result<Self, RenderError> {
        Ok(Self {
            fill: resolve_color(fill)?,
            active_fill: resolve_color(active_fill)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_and_hex() {
        let cases = vec![
            ("red", (1.0, 0.0, 0.0)),
            ("Blue", (0.0, 0.0, 1.0)),
            ("#00ff00", (0.0, 1.0, 0.0)),
            ("#FFF", (1.0, 1.0, 1.0)),
        ];

        for (input, expected) in cases {
            let color = resolve_color(&Fill::from(input)).unwrap();
            assert_eq!(color.into_components(), expected, "{input}");
        }

        let gray = resolve_color(&Fill::from("gray")).unwrap();
        assert!((gray.red - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_color() {
        for input in ["nope", "00ff00", "rgb(1, 2, 3)", ""] {
            assert!(matches!(
                resolve_color(&Fill::from(input)),
                Err(RenderError::UnknownColor(_))
            ));
        }
    }
}

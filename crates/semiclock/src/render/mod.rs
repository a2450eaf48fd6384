pub mod raster;
pub mod svg;
pub mod theme;

use semiclock_core::Frame;
use std::io::Write;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

pub use raster::write_png;
pub use svg::to_svg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Format {
    #[default]
    Svg,
    Png,
    Json,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown color '{0}'")]
    UnknownColor(String),
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("PNG encoding error: {0}")]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub fn write_frame<W: Write>(frame: &Frame, format: Format, out: &mut W) -> Result<(), RenderError> {
    match format {
        Format::Svg => out.write_all(to_svg(frame).as_bytes())?,
        Format::Png => write_png(frame, out)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, frame)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

use super::RenderError;
use super::theme::TickPalette;
use cairo::{Context, Format, ImageSurface};
use palette::Srgb;
use semiclock_core::{Frame, RenderedTick};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickState {
    Active,
    Idle,
}

impl TickState {
    fn resolve(tick: &RenderedTick) -> Self {
        if tick.active { Self::Active } else { Self::Idle }
    }

    fn color(&self, colors: &TickPalette) -> Srgb<f64> {
        match self {
            Self::Active => colors.active_fill,
            Self::Idle => colors.fill,
        }
    }
}

struct TickRenderer<'a> {
    rendered: &'a RenderedTick,
    palette: TickPalette,
}

impl<'a> TickRenderer<'a> {
    fn new(rendered: &'a RenderedTick) -> Result<Self, RenderError> {
        let palette = TickPalette::new(&rendered.tick.fill, &rendered.tick.active_fill)?;
        Ok(Self { rendered, palette })
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        let tick = &self.rendered.tick;
        let position = tick.placement.position;
        let (r, g, b) = TickState::resolve(self.rendered)
            .color(&self.palette)
            .into_components();

        cr.save()?;
        cr.set_source_rgb(r, g, b);
        // same result as an SVG rotate(angle, cx, cy) on the corner-placed rect
        cr.translate(position.x, position.y);
        cr.rotate(tick.placement.angle.to_radians());
        cr.rectangle(-tick.width / 2.0, -tick.height / 2.0, tick.width, tick.height);
        cr.fill()?;
        cr.restore()
    }
}

pub fn draw(cr: &Context, frame: &Frame) -> Result<(), RenderError> {
    for rendered in &frame.ticks {
        TickRenderer::new(rendered)?.draw(cr)?;
    }
    Ok(())
}

pub fn create_surface(frame: &Frame) -> Result<ImageSurface, RenderError> {
    let (w, h) = (frame.width.ceil() as i32, frame.height.ceil() as i32);
    if frame.overflow.is_some() {
        log::warn!("Raster output always clips to the canvas, ignoring overflow setting");
    }
    Ok(ImageSurface::create(Format::ARgb32, w.max(1), h.max(1))?)
}

pub fn write_png<W: Write>(frame: &Frame, out: &mut W) -> Result<(), RenderError> {
    let surface = create_surface(frame)?;
    {
        let cr = Context::new(&surface)?;
        draw(&cr, frame)?;
    }
    surface.flush();
    surface.write_to_png(out)?;
    Ok(())
}

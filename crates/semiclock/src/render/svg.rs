use semiclock_core::Frame;
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn escape(value: &str) -> String {
    value
        .chars()
        .fold(String::with_capacity(value.len()), |mut out, c| {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&apos;"),
                _ => out.push(c),
            }
            out
        })
}

/// One `<rect>` per tick, rotated about its own center.
pub fn to_svg(frame: &Frame) -> String {
    let mut doc = String::new();

    // writing into a String cannot fail
    let _ = write!(
        doc,
        r#"<svg xmlns="{SVG_NS}" width="{}" height="{}""#,
        frame.width, frame.height
    );
    if let Some(overflow) = frame.overflow {
        let _ = write!(doc, r#" overflow="{overflow}""#);
    }
    doc.push_str(">\n");

    for rendered in &frame.ticks {
        let tick = &rendered.tick;
        let p = &tick.placement;
        let _ = writeln!(
            doc,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" transform="rotate({},{},{})" style="fill: {}"/>"#,
            p.origin.x,
            p.origin.y,
            tick.width,
            tick.height,
            p.angle,
            p.position.x,
            p.position.y,
            escape(rendered.color())
        );
    }

    doc.push_str("</svg>\n");
    doc
}

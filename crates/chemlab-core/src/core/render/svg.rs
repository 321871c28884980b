use super::scene::{AtomGlyph, BondGlyph, Scene, Stroke};
use std::fmt::Write;

/// Serializes a [`Scene`] as a standalone SVG document.
///
/// The document uses the scene's logical size as its `viewBox` and lets the
/// viewer scale it. Every bond and atom group carries `data-kind` and `data-id`
/// attributes so an embedding page can route clicks; atom labels ignore pointer
/// events so a click on a label lands on its atom.
pub fn to_svg(scene: &Scene, title: Option<&str>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_svg(&mut out, scene, title);
    out
}

fn write_svg(out: &mut String, scene: &Scene, title: Option<&str>) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
        scene.width, scene.height
    )?;
    if let Some(title) = title {
        writeln!(out, "  <title>{}</title>", escape(title))?;
    }
    for bond in &scene.bonds {
        write_bond(out, bond)?;
    }
    for atom in &scene.atoms {
        write_atom(out, atom)?;
    }
    writeln!(out, "</svg>")
}

fn write_bond(out: &mut String, bond: &BondGlyph) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <g data-kind="bond" data-id="{}" class="bond{}" cursor="pointer">"#,
        escape(&bond.bond_id),
        if bond.selected { " selected" } else { "" }
    )?;
    write_line(out, &bond.hit_area, false)?;
    for stroke in &bond.strokes {
        write_line(out, stroke, true)?;
    }
    writeln!(out, "  </g>")
}

fn write_line(out: &mut String, stroke: &Stroke, round_cap: bool) -> std::fmt::Result {
    writeln!(
        out,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
        fmt_num(stroke.from.x),
        fmt_num(stroke.from.y),
        fmt_num(stroke.to.x),
        fmt_num(stroke.to.y),
        stroke.color,
        fmt_num(stroke.width),
        if round_cap { r#" stroke-linecap="round""# } else { "" }
    )
}

fn write_atom(out: &mut String, atom: &AtomGlyph) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <g data-kind="atom" data-id="{}" class="atom{}" cursor="pointer">"#,
        escape(&atom.atom_id),
        if atom.selected { " selected" } else { "" }
    )?;
    writeln!(
        out,
        r#"    <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt_num(atom.center.x),
        fmt_num(atom.center.y),
        fmt_num(atom.radius),
        atom.fill,
        atom.outline_color,
        fmt_num(atom.outline_width)
    )?;
    writeln!(
        out,
        r#"    <text x="{}" y="{}" dy=".35em" text-anchor="middle" fill="{}" font-size="{}" font-weight="bold" pointer-events="none">{}</text>"#,
        fmt_num(atom.center.x),
        fmt_num(atom.center.y),
        atom.label_color,
        fmt_num(atom.font_size),
        escape(atom.label)
    )?;
    writeln!(out, "  </g>")
}

// Two decimals are plenty for a 600 × 400 canvas; trailing zeros are trimmed so
// integral coordinates print as integers.
fn fmt_num(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

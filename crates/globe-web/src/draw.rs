//! The per-frame paint: edges, then points far-to-near, then markers.

use crate::constants::*;
use globe_core::{MarkerSet, ParticleField, Viewport};
use web_sys as web;

pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    viewport: &Viewport,
    field: &ParticleField,
    markers: &MarkerSet,
    angle: f32,
) {
    ctx.clear_rect(0.0, 0.0, viewport.width() as f64, viewport.height() as f64);
    let radius = field.params.radius;

    // edges first so points paint over them
    ctx.set_stroke_style_str(EDGE_STROKE);
    ctx.set_line_width(1.0);
    for edge in field.edges() {
        let alpha = field.edge_alpha(edge);
        if alpha < EDGE_MIN_ALPHA {
            continue;
        }
        let a = field.points()[edge.a as usize].position;
        let b = field.points()[edge.b as usize].position;
        let (x1, y1) = viewport.project(a, radius);
        let (x2, y2) = viewport.project(b, radius);
        ctx.set_global_alpha(alpha as f64);
        ctx.begin_path();
        ctx.move_to(x1 as f64, y1 as f64);
        ctx.line_to(x2 as f64, y2 as f64);
        ctx.stroke();
    }

    // points far-to-near so the near side occludes
    ctx.set_fill_style_str(POINT_FILL);
    for i in field.draw_order() {
        let p = &field.points()[i];
        let (x, y) = viewport.project(p.position, radius);
        ctx.set_global_alpha(field.point_alpha(i) as f64);
        ctx.begin_path();
        let _ = ctx.arc(
            x as f64,
            y as f64,
            (p.size * 0.5) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }

    draw_markers(ctx, viewport, markers, angle, radius);
    ctx.set_global_alpha(1.0);
}

fn draw_markers(
    ctx: &web::CanvasRenderingContext2d,
    viewport: &Viewport,
    markers: &MarkerSet,
    angle: f32,
    radius: f32,
) {
    ctx.set_font(MARKER_FONT);
    for (i, m) in markers.markers().iter().enumerate() {
        let world = markers.world(i, angle, radius);
        let depth = ((world.z + radius) / (2.0 * radius)).clamp(0.25, 1.0);
        let (x, y) = viewport.project(world, radius);
        let r = MARKER_BASE_RADIUS_PX * m.scale();

        ctx.set_fill_style_str(&css_rgb(m.color));
        ctx.set_global_alpha((depth * (0.6 + 0.4 * m.hover())) as f64);
        ctx.begin_path();
        let _ = ctx.arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU);
        ctx.fill();

        if m.hover() > 0.05 && world.z > 0.0 {
            ctx.set_global_alpha(m.hover() as f64);
            let _ = ctx.fill_text(m.label, (x + r + 4.0) as f64, y as f64);
        }
    }
}

fn css_rgb(c: [f32; 3]) -> String {
    format!(
        "rgb({}, {}, {})",
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8
    )
}

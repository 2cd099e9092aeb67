use crate::core::{dot_style, DotStyle, ParticleField};
use crate::dom::js_err;
use std::f64::consts::TAU;
use web_sys as web;

fn fill_dot(ctx: &web::CanvasRenderingContext2d, dot: &DotStyle) -> anyhow::Result<()> {
    ctx.begin_path();
    ctx.arc(
        dot.center.x as f64,
        dot.center.y as f64,
        dot.radius as f64,
        0.0,
        TAU,
    )
    .map_err(js_err)?;
    ctx.set_fill_style_str(&dot.fill.to_string());
    ctx.fill();
    Ok(())
}

fn draw_dot(ctx: &web::CanvasRenderingContext2d, dot: &DotStyle) -> anyhow::Result<()> {
    match &dot.glow {
        Some(glow) => {
            ctx.save();
            ctx.set_shadow_blur(glow.blur as f64);
            ctx.set_shadow_color(&glow.color.to_string());
            let res = fill_dot(ctx, dot);
            ctx.restore();
            res
        }
        None => fill_dot(ctx, dot),
    }
}

/// Clear the overlay and draw every particle in its current style.
pub fn draw_field(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) -> anyhow::Result<()> {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    for particle in &field.particles {
        draw_dot(ctx, &dot_style(particle))?;
    }
    Ok(())
}

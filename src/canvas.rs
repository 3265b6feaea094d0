use crate::surface::DrawSurface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`DrawSurface`] over a canvas 2D context. Width and height are read from
/// the canvas on every call so a resize takes effect on the next frame.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn set_stroke_style(&mut self, color: &str) {
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&JsValue::from_str(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        let segments: js_sys::Array = pattern.iter().map(|v| JsValue::from_f64(*v)).collect();
        _ = self.ctx.set_line_dash(&segments);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

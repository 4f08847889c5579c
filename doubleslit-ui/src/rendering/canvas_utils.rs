use doubleslit_core::PixelBuffer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{CanvasRenderingContext2d, ContextAttributes2d, HtmlCanvasElement, ImageData};

/// Get the current time in milliseconds (for render timing).
pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Get an opaque 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let attributes = ContextAttributes2d::new();
    attributes.set_alpha(false);
    Ok(canvas
        .get_context_with_context_options("2d", &attributes)?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?)
}

/// Present a finished frame: size the canvas to the frame and blit it in one
/// `putImageData` call.
pub fn present_frame(canvas: &HtmlCanvasElement, frame: &PixelBuffer) -> Result<(), JsValue> {
    if frame.is_empty() {
        return Ok(());
    }
    // Assigning width/height clears the canvas, so only do it on a real change.
    if canvas.width() != frame.width() {
        canvas.set_width(frame.width());
    }
    if canvas.height() != frame.height() {
        canvas.set_height(frame.height());
    }

    let ctx = get_2d_context(canvas)?;
    let image_data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(frame.as_bytes()),
        frame.width(),
        frame.height(),
    )?;
    ctx.put_image_data(&image_data, 0.0, 0.0)
}

use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        // a hidden or collapsed container reports zero; keep the old backing size
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        canvas.set_width((rect.width() * dpr) as u32);
        canvas.set_height((rect.height() * dpr) as u32);
    }
}

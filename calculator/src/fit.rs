//! Shrink-to-fit font sizing for the display lines

use egui::{Color32, FontId};

/// Never shrink below this, however long the text.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Largest whole-point size, at most `max_size`, whose rendered width
/// fits `available`. `measure` returns the text width at a given size.
pub fn fit_font_size(max_size: f32, available: f32, measure: impl Fn(f32) -> f32) -> f32 {
    let mut size = max_size.floor().max(MIN_FONT_SIZE);
    while size > MIN_FONT_SIZE && measure(size) > available {
        size -= 1.0;
    }
    size
}

/// Fit `text` into `width` minus `margin`, measured with the ui's fonts.
pub fn fitted_font(ui: &egui::Ui, text: &str, max_size: f32, width: f32, margin: f32) -> FontId {
    let available = (width - margin).max(0.0);
    let size = fit_font_size(max_size, available, |size| {
        ui.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), FontId::proportional(size), Color32::BLACK)
                .size()
                .x
        })
    });
    FontId::proportional(size)
}

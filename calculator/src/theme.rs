//! Calculator theme — black on white, e-ink friendly
//!
//! 1px black outlines, no rounding, no shadows. Disabled keys fade to grey.
//! Rubik is used for every text style when it can be found on disk.

use egui::{
    Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle,
    Visuals,
};
use std::path::PathBuf;
use tracing::debug;

pub struct Palette;

impl Palette {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    /// Error text and disabled keys
    pub const GREY: Color32 = Color32::from_rgb(136, 136, 136);
}

pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_button: f32,
    pub font_size_heading: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_button: 18.0,
            font_size_heading: 20.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

const FONT_FILE: &str = "Rubik-Regular.ttf";

impl CalcTheme {
    /// Look for the display font next to the executable, in the workspace
    /// `fonts/` folder, then in the system font folders.
    fn load_font() -> Option<Vec<u8>> {
        let mut search_paths = Vec::new();

        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                search_paths.push(dir.join("fonts").join(FONT_FILE));
                search_paths.push(dir.join(FONT_FILE));
                // target/{debug,release}/calculator
                if let Some(workspace) = dir.parent().and_then(|p| p.parent()) {
                    search_paths.push(workspace.join("fonts").join(FONT_FILE));
                }
            }
        }
        search_paths.push(PathBuf::from("fonts").join(FONT_FILE));
        search_paths.push(PathBuf::from("/usr/share/fonts/truetype/rubik").join(FONT_FILE));
        search_paths.push(PathBuf::from("/usr/share/fonts").join(FONT_FILE));

        let found = search_paths.iter().find_map(|path| std::fs::read(path).ok());
        if found.is_none() {
            debug!("{} not found, using the default font", FONT_FILE);
        }
        found
    }

    pub fn apply(&self, ctx: &egui::Context) {
        if let Some(data) = Self::load_font() {
            let mut fonts = FontDefinitions::default();
            fonts.font_data.insert("Rubik".to_owned(), FontData::from_owned(data));
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "Rubik".to_owned());
            ctx.set_fonts(fonts);
        }

        let mut style = Style::default();
        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = Palette::WHITE;
        visuals.panel_fill = Palette::WHITE;
        visuals.faint_bg_color = Palette::WHITE;
        visuals.extreme_bg_color = Palette::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, Palette::BLACK);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = Palette::WHITE;
            ws.weak_bg_fill = Palette::WHITE;
            ws.bg_stroke = Stroke::new(1.0, Palette::BLACK);
            ws.fg_stroke = Stroke::new(1.0, Palette::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.open);
        bw(&mut visuals.widgets.active);
        // pressed keys invert
        visuals.widgets.active.weak_bg_fill = Palette::BLACK;
        visuals.widgets.active.bg_fill = Palette::BLACK;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Palette::WHITE);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, Palette::BLACK);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar: white strip with a 1px black outline
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(Palette::WHITE)
        .stroke(Stroke::new(1.0, Palette::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Drop key events the keypad has no use for. Call at the start of `update()`.
/// - Tab: egui would cycle focus onto the menu buttons
/// - Cmd+/Cmd-/Cmd=: egui would zoom the whole window
///
/// egui has already applied Tab focus movement by the time `update()` runs,
/// so the widget focused before the Tab press is focused again.
pub fn consume_special_keys(ctx: &egui::Context) {
    let tab_pressed = ctx.input(|i| {
        i.events.iter().any(|e| {
            matches!(e, egui::Event::Key { key: egui::Key::Tab, pressed: true, .. })
        })
    });
    let focused_before = if tab_pressed {
        ctx.memory(|mem| mem.focused())
    } else {
        None
    };

    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Text(text) if text.contains('\t') => false,
            egui::Event::Key { key, modifiers, .. } if modifiers.command => !matches!(
                key,
                egui::Key::Plus | egui::Key::Minus | egui::Key::Equals
            ),
            _ => true,
        });
    });

    if tab_pressed {
        match focused_before {
            Some(id) => ctx.memory_mut(|mem| mem.request_focus(id)),
            None => {
                if let Some(id) = ctx.memory(|mem| mem.focused()) {
                    ctx.memory_mut(|mem| mem.surrender_focus(id));
                }
            }
        }
    }
}

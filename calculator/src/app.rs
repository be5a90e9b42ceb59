//! Calculator application

use crate::fit::fitted_font;
use crate::theme::{consume_special_keys, menu_bar, Palette};
use calccore::{Config, Evaluator, Input, Operator};
use egui::{Context, Key};
use tracing::{debug, info};

/// Keypad rows. A short row gives its first key the spare columns.
const KEYPAD: [&[Input]; 5] = [
    &[Input::Clear, Input::Backspace, Input::ToggleSign, Input::Operator(Operator::Div)],
    &[Input::Digit(7), Input::Digit(8), Input::Digit(9), Input::Operator(Operator::Mul)],
    &[Input::Digit(4), Input::Digit(5), Input::Digit(6), Input::Operator(Operator::Sub)],
    &[Input::Digit(1), Input::Digit(2), Input::Digit(3), Input::Operator(Operator::Add)],
    &[Input::Digit(0), Input::Point, Input::Equals],
];
const COLUMNS: usize = 4;

/// Space kept free on the right of the entry text
const ENTRY_MARGIN: f32 = 15.0;
/// Space kept free on the right of the expression text
const EXPRESSION_MARGIN: f32 = 10.0;

pub struct CalculatorApp {
    evaluator: Evaluator,
    config: Config,
    show_about: bool,
}

impl CalculatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: Config) -> Self {
        Self {
            evaluator: Evaluator::with_max_entry_len(config.max_entry_len),
            config,
            show_about: false,
        }
    }

    /// Feed one key to the evaluator. Keys that are greyed out while an
    /// error is shown are dropped here as well, so the keyboard matches.
    fn press(&mut self, input: Input) {
        if self.evaluator.is_error_state() && !input.allowed_in_error() {
            return;
        }
        match self.evaluator.handle(input) {
            Ok(Some(result)) => debug!(%result, "calculated"),
            Ok(None) => {}
            Err(err) => info!(%err, "calculation failed"),
        }
    }

    /// Entry text with the configured error wording.
    fn entry_text(&self) -> String {
        match self.evaluator.error() {
            Some(err) => self.config.error_messages.message_for(err),
            None => self.evaluator.current_entry_text(),
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        let inputs: Vec<Input> = ctx.input(|i| {
            let mut inputs = Vec::new();
            for event in &i.events {
                match event {
                    egui::Event::Text(text) => {
                        inputs.extend(text.chars().filter_map(Input::from_char))
                    }
                    egui::Event::Key { key, pressed: true, .. } => match key {
                        Key::Enter => inputs.push(Input::Equals),
                        Key::Backspace => inputs.push(Input::Backspace),
                        Key::Escape | Key::Delete => inputs.push(Input::Clear),
                        _ => {}
                    },
                    _ => {}
                }
            }
            inputs
        });

        for input in inputs {
            self.press(input);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let expression = self.evaluator.current_expression_text();
        let entry = self.entry_text();
        let entry_color = if self.evaluator.is_error_state() {
            Palette::GREY
        } else {
            Palette::BLACK
        };

        egui::Frame::none()
            .fill(Palette::WHITE)
            .stroke(egui::Stroke::new(1.0, Palette::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                let width = ui.available_width();
                let expression_font = fitted_font(
                    ui,
                    &expression,
                    self.config.expression_font_size,
                    width,
                    EXPRESSION_MARGIN,
                );
                let entry_font =
                    fitted_font(ui, &entry, self.config.entry_font_size, width, ENTRY_MARGIN);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.set_min_height(self.config.expression_font_size + 4.0);
                    ui.label(
                        egui::RichText::new(&expression)
                            .font(expression_font)
                            .color(Palette::GREY),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.set_min_height(self.config.entry_font_size + 8.0);
                    ui.label(egui::RichText::new(&entry).font(entry_font).color(entry_color));
                });
            });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing;
        let btn_w = (ui.available_width() - spacing.x * (COLUMNS - 1) as f32) / COLUMNS as f32;
        let rows = KEYPAD.len() as f32;
        let btn_h = ((ui.available_height() - spacing.y * (rows - 1.0)) / rows).max(28.0);
        let locked = self.evaluator.is_error_state();

        let mut pressed = None;
        for row in KEYPAD {
            ui.horizontal(|ui| {
                for (i, &input) in row.iter().enumerate() {
                    let span = if i == 0 { COLUMNS - row.len() + 1 } else { 1 };
                    let width = btn_w * span as f32 + spacing.x * (span - 1) as f32;
                    let enabled = !locked || input.allowed_in_error();
                    let clicked = ui
                        .add_enabled_ui(enabled, |ui| {
                            ui.add_sized([width, btn_h], egui::Button::new(input.label()))
                        })
                        .inner
                        .clicked();
                    if clicked {
                        pressed = Some(input);
                    }
                }
            });
        }

        if let Some(input) = pressed {
            self.press(input);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys: 0-9 . + - * / Enter");
                ui.label("Backspace deletes, Esc clears");
                ui.add_space(2.0);
                ui.label("press an operator twice to chain");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if !self.show_about {
            self.handle_keys(ctx);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("copy result").clicked() {
                        ui.output_mut(|o| o.copied_text = self.entry_text());
                        ui.close_menu();
                    }
                    if ui.button("clear").clicked() {
                        self.press(Input::Clear);
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Palette::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calccore::CalcError;

    fn app() -> CalculatorApp {
        CalculatorApp::with_config(Config::default())
    }

    #[test]
    fn test_keypad_rows_fill_four_columns() {
        for row in KEYPAD {
            let span = COLUMNS - row.len() + 1;
            assert_eq!(span + row.len() - 1, COLUMNS);
        }
    }

    #[test]
    fn test_keypad_has_every_key() {
        let keys: Vec<Input> = KEYPAD.iter().flat_map(|row| row.iter().copied()).collect();
        for d in 0..=9 {
            assert!(keys.contains(&Input::Digit(d)));
        }
        for op in Operator::ALL {
            assert!(keys.contains(&Input::Operator(op)));
        }
        let keys_other = [
            Input::Point,
            Input::ToggleSign,
            Input::Backspace,
            Input::Clear,
            Input::Equals,
        ];
        for key in keys_other {
            assert!(keys.contains(&key));
        }
    }

    #[test]
    fn test_press_sequence() {
        let mut app = app();
        let inputs = [
            Input::Digit(9),
            Input::Operator(Operator::Sub),
            Input::Digit(4),
            Input::Equals,
        ];
        for input in inputs {
            app.press(input);
        }
        assert_eq!(app.entry_text(), "5");
    }

    #[test]
    fn test_configured_error_message() {
        let mut config = Config::default();
        config.error_messages.division_by_zero = "Cannot divide by zero".to_string();
        let mut app = CalculatorApp::with_config(config);
        for input in [Input::Digit(3), Input::Operator(Operator::Div), Input::Equals] {
            app.press(input);
        }
        assert_eq!(app.evaluator.error(), Some(CalcError::DivisionByZero));
        assert_eq!(app.entry_text(), "Cannot divide by zero");
    }

    #[test]
    fn test_locked_keys_ignored_in_error() {
        let mut app = app();
        let inputs = [
            Input::Operator(Operator::Div),
            Input::Equals,
            Input::Point,
            Input::ToggleSign,
        ];
        for input in inputs {
            app.press(input);
        }
        assert_eq!(app.evaluator.error(), Some(CalcError::UndefinedResult));
        app.press(Input::Clear);
        assert_eq!(app.entry_text(), "0");
    }

    #[test]
    fn test_max_entry_len_from_config() {
        let mut config = Config::default();
        config.max_entry_len = 3;
        let mut app = CalculatorApp::with_config(config);
        for _ in 0..5 {
            app.press(Input::Digit(7));
        }
        assert_eq!(app.entry_text(), "777");
    }
}

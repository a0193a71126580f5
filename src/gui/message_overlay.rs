use eframe::egui;

use crate::gui::theme::Theme;

/// Dims the window and shows a spinner until the word list request settles.
pub struct MessageOverlay {
    active: bool,
    message: String,
}

impl MessageOverlay {
    pub fn loading_from(words_url: &str) -> Self {
        Self { active: true, message: format!("Loading words from {words_url}...") }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn dismiss(&mut self) {
        self.active = false;
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) {
        if !self.active {
            return;
        }

        let screen = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("overlay_dim")))
            .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));

        egui::Window::new("loading_words")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .frame(egui::Frame::window(&ctx.style()).stroke(egui::Stroke::new(2.0, theme.accent)))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label(&self.message);
                });
            });
    }
}

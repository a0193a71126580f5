use eframe::egui;

use super::{
    scene::BannerState,
    theme::Theme,
};

pub struct ResultBanner;

impl ResultBanner {
    pub fn show(ctx: &egui::Context, banner: Option<&BannerState>, theme: &Theme) {
        let Some(banner) = banner else {
            return;
        };

        egui::Area::new(egui::Id::new("result_banner"))
            .order(egui::Order::Foreground)
            .interactable(false)
            .anchor(egui::Align2::CENTER_TOP, egui::Vec2::new(0.0, 24.0))
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(theme.background.gamma_multiply(0.85))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(24, 8))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&banner.text)
                                .size(36.0)
                                .strong()
                                .color(Theme::rgb(banner.color)),
                        );
                    });
            });
    }
}

use eframe::egui;
use wordstack::{
    config::Settings,
    core::http::WordApi,
    gui::WordstackApp,
    logging,
};

fn main() -> eframe::Result<()> {
    logging::init();

    let settings = Settings::load();
    tracing::info!(server_url = %settings.server_url, "starting wordstack");

    let api = match WordApi::new(&settings.server_url, settings.request_timeout()) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "could not create HTTP client");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wordstack")
            .with_inner_size([settings.window_width, settings.window_height]),
        ..Default::default()
    };

    eframe::run_native("Wordstack", options, Box::new(|cc| Ok(Box::new(WordstackApp::new(cc, api)))))
}

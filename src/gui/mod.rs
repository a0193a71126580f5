pub mod app;
pub mod banner;
pub mod card;
pub mod message_overlay;
pub mod scene;
pub mod theme;

pub use app::WordstackApp;

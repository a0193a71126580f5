//! Swipeable vocabulary flashcards.
//!
//! Words come from `GET /api/words` on a word server and each verdict goes
//! back through `POST /api/update`. The [`controller`] owns all interaction
//! state and draws through a [`controller::RenderTarget`]; [`gui`] provides
//! the eframe surface for it.

pub mod config;
pub mod controller;
pub mod core;
pub mod deck;
pub mod gesture;
pub mod gui;
pub mod logging;
pub mod persistence;
pub mod timers;

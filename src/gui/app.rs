use std::time::Instant;

use eframe::egui;

use super::{
    banner::ResultBanner,
    card::{
        paint_stack,
        StackLayout,
    },
    message_overlay::MessageOverlay,
    scene::Scene,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    controller::{
        CardStackController,
        JudgementSink,
        KeyInput,
        RenderTarget,
    },
    core::{
        http::WordApi,
        tasks::{
            TaskDispatcher,
            TaskManager,
            TaskResult,
        },
    },
    gesture::Point,
};

const KEY_BINDINGS: [(egui::Key, KeyInput); 3] = [
    (egui::Key::ArrowLeft, KeyInput::ArrowLeft),
    (egui::Key::ArrowRight, KeyInput::ArrowRight),
    (egui::Key::Enter, KeyInput::Enter),
];

pub struct WordstackApp {
    controller: CardStackController<Scene, TaskDispatcher>,
    task_manager: TaskManager,
    theme: Theme,
    message_overlay: MessageOverlay,
}

impl WordstackApp {
    pub fn new(cc: &eframe::CreationContext<'_>, api: WordApi) -> Self {
        let message_overlay = MessageOverlay::loading_from(&api.words_url());
        let task_manager = TaskManager::new(api);
        let controller = CardStackController::new(Scene::default(), task_manager.dispatcher());

        task_manager.load_deck();

        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);

        Self { controller, task_manager, theme, message_overlay }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::DeckLoaded(result) => {
                self.message_overlay.dismiss();
                match result {
                    Ok(words) => self.controller.load_deck(words),
                    Err(e) => self.controller.load_failed(&e),
                }
            }
            TaskResult::JudgementReported { word, result } => match result {
                Ok(()) => tracing::debug!(word = %word, "judgement recorded"),
                Err(e) => tracing::warn!(word = %word, error = %e, "error updating word"),
            },
        }
    }
}

/// Feeds this frame's pointer and key events to the controller in arrival order,
/// so a move and a release landing in the same frame are seen as a drag then a drop.
pub(crate) fn route_input<R: RenderTarget, J: JudgementSink>(
    ctx: &egui::Context,
    controller: &mut CardStackController<R, J>,
    layout: &StackLayout,
    now: Instant,
) {
    let viewport_width = ctx.screen_rect().width();
    let events = ctx.input(|i| i.events.clone());

    for event in events {
        match event {
            egui::Event::PointerMoved(pos) => controller.pointer_move(Point::new(pos.x, pos.y)),
            egui::Event::PointerButton { pos, button: egui::PointerButton::Primary, pressed, .. } => {
                if !pressed {
                    controller.pointer_up(Point::new(pos.x, pos.y), viewport_width, now);
                } else if layout.top_card_rect().contains(pos) {
                    // Presses only count on the front card; moves and releases are window-wide.
                    controller.pointer_down(Point::new(pos.x, pos.y));
                }
            }
            egui::Event::Key { key, pressed: true, repeat: false, .. } => {
                if let Some((_, input)) = KEY_BINDINGS.iter().find(|(bound, _)| *bound == key) {
                    controller.key(*input, now);
                }
            }
            _ => {}
        }
    }
}

impl eframe::App for WordstackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let now = Instant::now();
        self.controller.tick(now);

        let layout = StackLayout::new(ctx.screen_rect());
        if self.controller.is_loaded() {
            route_input(ctx, &mut self.controller, &layout, now);
        }

        let viewport_width = ctx.screen_rect().width();
        egui::CentralPanel::default().show(ctx, |ui| {
            paint_stack(ui.painter(), &layout, self.controller.target(), &self.theme, viewport_width, now);
        });

        ResultBanner::show(ctx, self.controller.target().banner.as_ref(), &self.theme);
        self.message_overlay.show(ctx, &self.theme);

        if self.controller.target().is_animating() {
            ctx.request_repaint();
        } else if let Some(deadline) = self.controller.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        } else if self.message_overlay.is_active() {
            // Keep polling the task channel until the word list arrives.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

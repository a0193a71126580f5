//! The card stack controller.
//!
//! Owns the deck, the cursor and the handle to the interactive top card, and
//! turns pointer/keyboard input into flips and judgements. Drawing goes
//! through [`RenderTarget`] and reports through [`JudgementSink`], so the
//! controller runs the same against the egui surface and against test fakes.

use std::time::Instant;

use crate::{
    core::{
        Judgement,
        Rgb,
        Verdict,
        WordEntry,
    },
    deck::{
        visible_stack,
        CardView,
        Cursor,
        Deck,
        StackView,
        NO_MORE_WORDS,
    },
    gesture::{
        CardTransform,
        GestureInterpreter,
        GestureOutcome,
        Point,
    },
    timers::{
        TimerKind,
        Timers,
        JUDGEMENT_DELAY,
    },
};

pub trait RenderTarget {
    /// Replaces whatever was shown with `cards`, front to back.
    fn render_stack(&mut self, cards: &[CardView]);

    /// Replaces whatever was shown with the terminal placeholder.
    fn render_exhausted(&mut self, message: &str);

    fn update_top_card(&mut self, card: &TopCard);

    fn show_banner(&mut self, text: &str, color: Rgb);

    fn hide_banner(&mut self);
}

/// Receives judgements. Implementations must not block; delivery failures
/// are theirs to log.
pub trait JudgementSink {
    fn report(&mut self, judgement: Judgement);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    ArrowLeft,
    ArrowRight,
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitMotion {
    pub verdict: Verdict,
    pub started_at: Instant,
    pub from: CardTransform,
}

/// Interactive state of the front card.
#[derive(Debug, Clone, PartialEq)]
pub struct TopCard {
    pub deck_index: usize,
    pub word: String,
    pub flipped: bool,
    pub transform: CardTransform,
    pub exit: Option<ExitMotion>,
}

impl TopCard {
    fn from_view(view: &CardView) -> Self {
        Self {
            deck_index: view.deck_index,
            word: view.front.clone(),
            flipped: false,
            transform: CardTransform::identity(),
            exit: None,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.exit.is_some()
    }
}

pub struct CardStackController<R: RenderTarget, J: JudgementSink> {
    deck: Deck,
    cursor: Cursor,
    top_card: Option<TopCard>,
    gesture: GestureInterpreter,
    timers: Timers,
    loaded: bool,
    target: R,
    sink: J,
}

impl<R: RenderTarget, J: JudgementSink> CardStackController<R, J> {
    pub fn new(target: R, sink: J) -> Self {
        Self {
            deck: Deck::default(),
            cursor: Cursor::start(),
            top_card: None,
            gesture: GestureInterpreter::new(),
            timers: Timers::new(),
            loaded: false,
            target,
            sink,
        }
    }

    /// Installs the fetched deck and draws the first stack. The deck is
    /// loaded once per session; later loads are dropped.
    pub fn load_deck(&mut self, entries: Vec<WordEntry>) {
        if self.loaded {
            tracing::warn!(words = entries.len(), "deck already loaded, ignoring new word list");
            return;
        }

        tracing::info!(words = entries.len(), "deck loaded");
        self.loaded = true;
        self.deck = Deck::new(entries);
        self.render();
    }

    /// Leaves the deck empty; the surface shows the same placeholder as an
    /// exhausted deck.
    pub fn load_failed(&mut self, error: &str) {
        tracing::error!(error, "error fetching words");
        if self.loaded {
            return;
        }

        self.loaded = true;
        self.render();
    }

    pub fn render(&mut self) {
        self.gesture.reset();

        match visible_stack(&self.deck, self.cursor) {
            StackView::Exhausted => {
                self.top_card = None;
                self.target.render_exhausted(NO_MORE_WORDS);
            }
            StackView::Cards(cards) => {
                self.top_card = cards.first().map(TopCard::from_view);
                self.target.render_stack(&cards);
            }
        }
    }

    pub fn pointer_down(&mut self, at: Point) {
        if !self.accepts_input() {
            return;
        }
        self.gesture.pointer_down(at);
    }

    pub fn pointer_move(&mut self, at: Point) {
        if !self.accepts_input() {
            return;
        }

        if let Some(transform) = self.gesture.pointer_move(at) {
            if let Some(card) = self.top_card.as_mut() {
                card.transform = transform;
                self.target.update_top_card(card);
            }
        }
    }

    pub fn pointer_up(&mut self, at: Point, viewport_width: f32, now: Instant) {
        if !self.accepts_input() {
            return;
        }

        match self.gesture.pointer_up(at, viewport_width) {
            GestureOutcome::Ignored => {}
            GestureOutcome::Flip => self.flip(),
            GestureOutcome::SnapBack => {
                tracing::debug!("drag below swipe threshold, snapping back");
                if let Some(card) = self.top_card.as_mut() {
                    card.transform = CardTransform::identity();
                    self.target.update_top_card(card);
                }
            }
            GestureOutcome::Swipe(verdict) => self.judge(verdict, now),
        }
    }

    pub fn key(&mut self, key: KeyInput, now: Instant) {
        if !self.accepts_input() {
            return;
        }

        match key {
            KeyInput::ArrowLeft => self.judge(Verdict::Wrong, now),
            KeyInput::ArrowRight => self.judge(Verdict::Right, now),
            KeyInput::Enter => self.flip(),
        }
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for kind in self.timers.poll_due(now) {
            match kind {
                TimerKind::HideBanner => self.target.hide_banner(),
                TimerKind::Advance => self.advance(),
            }
        }
    }

    pub fn show_banner(&mut self, text: &str, color: Rgb, now: Instant) {
        self.target.show_banner(text, color);
        self.timers.schedule(TimerKind::HideBanner, now, JUDGEMENT_DELAY);
    }

    fn flip(&mut self) {
        if let Some(card) = self.top_card.as_mut() {
            card.flipped = !card.flipped;
            self.target.update_top_card(card);
        }
    }

    fn judge(&mut self, verdict: Verdict, now: Instant) {
        let Some(card) = self.top_card.as_mut() else {
            return;
        };
        if card.is_exiting() {
            return;
        }

        self.gesture.reset();
        card.exit = Some(ExitMotion { verdict, started_at: now, from: card.transform });
        self.target.update_top_card(card);

        let word = card.word.clone();
        tracing::debug!(word = %word, verdict = verdict.label(), "card judged");

        self.show_banner(verdict.label(), verdict.banner_color(), now);
        self.sink.report(Judgement { word, is_correct: verdict.is_correct() });
        self.timers.schedule(TimerKind::Advance, now, JUDGEMENT_DELAY);
    }

    fn advance(&mut self) {
        self.cursor.advance();
        tracing::info!(cursor = self.cursor.position(), total = self.deck.len(), "advanced to next card");
        self.render();
    }

    /// Input only reaches a top card that is not already on its way out.
    fn accepts_input(&self) -> bool {
        self.top_card.as_ref().is_some_and(|card| !card.is_exiting())
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn top_card(&self) -> Option<&TopCard> {
        self.top_card.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_advance_pending(&self) -> bool {
        self.timers.is_pending(TimerKind::Advance)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn sink(&self) -> &J {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const VIEWPORT: f32 = 800.0;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Stack(Vec<String>),
        Exhausted(String),
        TopCard { flipped: bool, transform: CardTransform, exiting: Option<Verdict> },
        Banner(String, Rgb),
        HideBanner,
    }

    #[derive(Default)]
    struct RecordingTarget {
        events: Vec<Event>,
        last_stack: Vec<CardView>,
    }

    impl RecordingTarget {
        fn banners(&self) -> Vec<&Event> {
            self.events.iter().filter(|e| matches!(e, Event::Banner(..))).collect()
        }
    }

    impl RenderTarget for RecordingTarget {
        fn render_stack(&mut self, cards: &[CardView]) {
            self.last_stack = cards.to_vec();
            self.events.push(Event::Stack(cards.iter().map(|c| c.front.clone()).collect()));
        }

        fn render_exhausted(&mut self, message: &str) {
            self.last_stack.clear();
            self.events.push(Event::Exhausted(message.to_string()));
        }

        fn update_top_card(&mut self, card: &TopCard) {
            self.events.push(Event::TopCard {
                flipped: card.flipped,
                transform: card.transform,
                exiting: card.exit.map(|e| e.verdict),
            });
        }

        fn show_banner(&mut self, text: &str, color: Rgb) {
            self.events.push(Event::Banner(text.to_string(), color));
        }

        fn hide_banner(&mut self) {
            self.events.push(Event::HideBanner);
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        reports: Vec<Judgement>,
    }

    impl JudgementSink for RecordingSink {
        fn report(&mut self, judgement: Judgement) {
            self.reports.push(judgement);
        }
    }

    type TestController = CardStackController<RecordingTarget, RecordingSink>;

    fn controller_with(words: &[&str]) -> TestController {
        let mut controller = CardStackController::new(RecordingTarget::default(), RecordingSink::default());
        controller.load_deck(words.iter().map(|w| WordEntry::new(*w)).collect());
        controller
    }

    fn swipe(controller: &mut TestController, dx: f32, now: Instant) {
        let start = Point::new(400.0, 300.0);
        let end = Point::new(start.x + dx, start.y);
        controller.pointer_down(start);
        controller.pointer_move(end);
        controller.pointer_up(end, VIEWPORT, now);
    }

    fn stack_words(controller: &TestController) -> Vec<String> {
        controller.target().last_stack.iter().map(|c| c.front.clone()).collect()
    }

    #[test]
    fn test_initial_render() {
        let controller = controller_with(&["W1", "W2", "W3", "W4"]);
        assert_eq!(stack_words(&controller), vec!["W1", "W2", "W3"]);

        let interactive: Vec<bool> = controller.target().last_stack.iter().map(|c| c.interactive).collect();
        assert_eq!(interactive, vec![true, false, false]);
        assert_eq!(controller.top_card().unwrap().word, "W1");
        assert!(controller.is_loaded());
    }

    #[test]
    fn test_nothing_renders_before_load() {
        let controller: TestController =
            CardStackController::new(RecordingTarget::default(), RecordingSink::default());
        assert!(controller.target().events.is_empty());
        assert!(controller.top_card().is_none());
        assert!(!controller.is_loaded());
    }

    #[test]
    fn test_empty_deck_shows_placeholder() {
        let controller = controller_with(&[]);
        assert_eq!(controller.target().events, vec![Event::Exhausted(NO_MORE_WORDS.to_string())]);
        assert!(controller.top_card().is_none());
    }

    #[test]
    fn test_load_failure_shows_placeholder() {
        let mut controller: TestController =
            CardStackController::new(RecordingTarget::default(), RecordingSink::default());
        controller.load_failed("connection refused");

        assert!(controller.is_loaded());
        assert!(controller.deck().is_empty());
        assert_eq!(controller.target().events, vec![Event::Exhausted(NO_MORE_WORDS.to_string())]);
    }

    #[test]
    fn test_deck_is_loaded_once() {
        let mut controller = controller_with(&["W1", "W2"]);
        controller.load_deck(vec![WordEntry::new("X")]);
        assert_eq!(controller.deck().len(), 2);
        assert_eq!(stack_words(&controller), vec!["W1", "W2"]);
    }

    #[test]
    fn test_tap_flips_without_report() {
        let mut controller = controller_with(&["W1", "W2"]);
        let now = Instant::now();

        controller.pointer_down(Point::new(100.0, 100.0));
        controller.pointer_move(Point::new(105.0, 104.0));
        controller.pointer_up(Point::new(105.0, 104.0), VIEWPORT, now);
        assert!(controller.top_card().unwrap().flipped);

        controller.pointer_down(Point::new(100.0, 100.0));
        controller.pointer_up(Point::new(100.0, 100.0), VIEWPORT, now);
        assert!(!controller.top_card().unwrap().flipped);

        assert!(controller.sink().reports.is_empty());
        assert!(controller.target().banners().is_empty());
        controller.tick(now + Duration::from_secs(5));
        assert_eq!(controller.cursor().position(), 0);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut controller = controller_with(&["W1", "W2"]);
        let now = Instant::now();
        swipe(&mut controller, 150.0, now);

        let card = controller.top_card().unwrap();
        assert!(card.transform.is_identity());
        assert!(!card.is_exiting());
        assert!(!card.flipped);
        assert!(controller.sink().reports.is_empty());
        assert!(controller.target().banners().is_empty());
        assert!(!controller.is_advance_pending());

        controller.tick(now + Duration::from_secs(5));
        assert_eq!(controller.cursor().position(), 0);
    }

    #[test]
    fn test_drag_moves_card() {
        let mut controller = controller_with(&["W1"]);
        controller.pointer_down(Point::new(0.0, 0.0));
        controller.pointer_move(Point::new(60.0, 20.0));

        let transform = controller.top_card().unwrap().transform;
        assert_eq!(transform.dx, 60.0);
        assert_eq!(transform.dy, 20.0);
        assert!((transform.rotation_deg - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_swipe_left_is_wrong() {
        let mut controller = controller_with(&["W1", "W2"]);
        let now = Instant::now();
        swipe(&mut controller, -400.0, now);

        assert_eq!(controller.top_card().unwrap().exit.unwrap().verdict, Verdict::Wrong);
        assert_eq!(controller.target().banners(), vec![&Event::Banner("Wrong".to_string(), Rgb::RED)]);
        assert_eq!(
            controller.sink().reports,
            vec![Judgement { word: "W1".to_string(), is_correct: false }]
        );

        controller.tick(now + Duration::from_millis(1199));
        assert_eq!(controller.cursor().position(), 0);
        controller.tick(now + JUDGEMENT_DELAY);
        assert_eq!(controller.cursor().position(), 1);
        controller.tick(now + Duration::from_secs(10));
        assert_eq!(controller.cursor().position(), 1);
    }

    #[test]
    fn test_swipe_right_is_right() {
        let mut controller = controller_with(&["W1", "W2"]);
        let now = Instant::now();
        swipe(&mut controller, 400.0, now);

        assert_eq!(
            controller.target().banners(),
            vec![&Event::Banner("Right".to_string(), Rgb::LIME_GREEN)]
        );
        assert!(controller.sink().reports[0].is_correct);

        controller.tick(now + JUDGEMENT_DELAY);
        assert_eq!(controller.cursor().position(), 1);
        assert_eq!(stack_words(&controller), vec!["W2"]);
    }

    #[test]
    fn test_keyboard_matches_gestures() {
        let mut controller = controller_with(&["W1", "W2", "W3"]);
        let now = Instant::now();

        controller.key(KeyInput::Enter, now);
        assert!(controller.top_card().unwrap().flipped);
        assert!(controller.sink().reports.is_empty());

        controller.key(KeyInput::ArrowRight, now);
        assert_eq!(controller.top_card().unwrap().exit.unwrap().verdict, Verdict::Right);
        controller.tick(now + JUDGEMENT_DELAY);
        assert_eq!(stack_words(&controller), vec!["W2", "W3"]);
        assert!(!controller.top_card().unwrap().flipped);

        let later = now + Duration::from_secs(2);
        controller.key(KeyInput::ArrowLeft, later);
        controller.tick(later + JUDGEMENT_DELAY);

        assert_eq!(
            controller.sink().reports,
            vec![
                Judgement { word: "W1".to_string(), is_correct: true },
                Judgement { word: "W2".to_string(), is_correct: false },
            ]
        );
        assert_eq!(controller.cursor().position(), 2);
    }

    #[test]
    fn test_keyboard_ignored_without_top_card() {
        let mut controller = controller_with(&[]);
        let now = Instant::now();
        controller.key(KeyInput::ArrowRight, now);
        controller.key(KeyInput::Enter, now);
        controller.tick(now + Duration::from_secs(5));

        assert!(controller.sink().reports.is_empty());
        assert_eq!(controller.cursor().position(), 0);
    }

    #[test]
    fn test_input_during_exit_is_ignored() {
        let mut controller = controller_with(&["W1", "W2", "W3"]);
        let now = Instant::now();

        controller.key(KeyInput::ArrowRight, now);
        controller.key(KeyInput::ArrowRight, now + Duration::from_millis(100));
        controller.key(KeyInput::Enter, now + Duration::from_millis(200));
        swipe(&mut controller, -400.0, now + Duration::from_millis(300));

        assert_eq!(controller.sink().reports.len(), 1);
        assert!(!controller.top_card().unwrap().flipped);

        controller.tick(now + Duration::from_secs(3));
        assert_eq!(controller.cursor().position(), 1);
    }

    #[test]
    fn test_banner_hides_after_delay() {
        let mut controller = controller_with(&["W1"]);
        let now = Instant::now();
        controller.show_banner("Right", Rgb::LIME_GREEN, now);
        let later = now + Duration::from_millis(600);
        controller.show_banner("Wrong", Rgb::RED, later);

        controller.tick(now + JUDGEMENT_DELAY);
        assert!(!controller.target().events.contains(&Event::HideBanner));

        controller.tick(later + JUDGEMENT_DELAY);
        assert_eq!(controller.target().events.last(), Some(&Event::HideBanner));
        assert_eq!(controller.next_deadline(), None);
    }

    #[test]
    fn test_full_deck_walkthrough() {
        let mut controller = controller_with(&["W1", "W2", "W3", "W4"]);
        let mut now = Instant::now();
        assert_eq!(stack_words(&controller), vec!["W1", "W2", "W3"]);

        swipe(&mut controller, 400.0, now);
        assert_eq!(
            controller.sink().reports.last(),
            Some(&Judgement { word: "W1".to_string(), is_correct: true })
        );
        now += JUDGEMENT_DELAY;
        controller.tick(now);
        assert_eq!(controller.cursor().position(), 1);
        assert_eq!(stack_words(&controller), vec!["W2", "W3", "W4"]);

        swipe(&mut controller, -400.0, now);
        assert_eq!(controller.target().banners().last(), Some(&&Event::Banner("Wrong".to_string(), Rgb::RED)));
        now += JUDGEMENT_DELAY;
        controller.tick(now);
        assert_eq!(controller.cursor().position(), 2);
        assert_eq!(stack_words(&controller), vec!["W3", "W4"]);

        for _ in 0..2 {
            swipe(&mut controller, 400.0, now);
            now += JUDGEMENT_DELAY;
            controller.tick(now);
        }

        assert_eq!(controller.cursor().position(), 4);
        assert!(controller.top_card().is_none());
        assert_eq!(
            controller.target().events.iter().rev().find(|e| matches!(e, Event::Exhausted(_) | Event::Stack(_))),
            Some(&Event::Exhausted(NO_MORE_WORDS.to_string()))
        );
        assert_eq!(controller.sink().reports.len(), 4);
    }
}

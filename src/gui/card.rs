use std::time::Instant;

use eframe::egui::{
    self,
    emath::Rot2,
    epaint::TextShape,
    Color32,
    FontId,
    Painter,
    Pos2,
    Rect,
    Shape,
    Stroke,
    Vec2,
};

use super::{
    scene::{
        Scene,
        TopCardVisual,
    },
    theme::Theme,
};
use crate::{
    deck::CardView,
    gesture::{
        exit_transform,
        CardTransform,
    },
    timers::JUDGEMENT_DELAY,
};

const CARD_SIZE: Vec2 = Vec2::new(360.0, 240.0);
const STACK_OFFSET_Y: f32 = 14.0;
const STACK_SHRINK: f32 = 0.05;
const CARD_MARGIN: f32 = 18.0;

/// Where the cards rest, computed from the available area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    pub center: Pos2,
    pub card_size: Vec2,
}

impl StackLayout {
    pub fn new(area: Rect) -> Self {
        let max_width = (area.width() - 2.0 * CARD_MARGIN).max(120.0);
        let scale = (max_width / CARD_SIZE.x).min(1.0);
        Self { center: area.center(), card_size: CARD_SIZE * scale }
    }

    /// Resting rect of the card `depth` places behind the front one.
    pub fn card_rect(&self, depth: usize) -> Rect {
        let scale = 1.0 - STACK_SHRINK * depth as f32;
        let center = self.center + Vec2::new(0.0, STACK_OFFSET_Y * depth as f32);
        Rect::from_center_size(center, self.card_size * scale)
    }

    pub fn top_card_rect(&self) -> Rect {
        self.card_rect(0)
    }
}

pub fn paint_stack(
    painter: &Painter,
    layout: &StackLayout,
    scene: &Scene,
    theme: &Theme,
    viewport_width: f32,
    now: Instant,
) {
    if let Some(message) = &scene.placeholder {
        painter.text(
            layout.center,
            egui::Align2::CENTER_CENTER,
            message,
            FontId::proportional(24.0),
            theme.foreground,
        );
        return;
    }

    // Back to front so the interactive card ends up on top.
    for (depth, card) in scene.cards.iter().enumerate().rev() {
        let rect = layout.card_rect(depth);
        if card.interactive {
            let transform = current_transform(&scene.top, viewport_width, now);
            paint_top_card(painter, rect, card, scene.top.flipped, transform, theme);
        } else {
            paint_card_shape(painter, rect, CardTransform::identity(), theme.card_behind, theme);
            paint_card_text(
                painter,
                rect,
                CardTransform::identity(),
                &card.front,
                FontId::proportional(28.0),
                theme.muted,
            );
        }
    }
}

fn current_transform(top: &TopCardVisual, viewport_width: f32, now: Instant) -> CardTransform {
    match top.exit {
        Some(exit) => {
            let elapsed = now.saturating_duration_since(exit.started_at);
            let progress = elapsed.as_secs_f32() / JUDGEMENT_DELAY.as_secs_f32();
            exit_transform(exit.from, exit.verdict, progress, viewport_width)
        }
        None => top.transform,
    }
}

fn paint_top_card(
    painter: &Painter,
    rect: Rect,
    card: &CardView,
    flipped: bool,
    transform: CardTransform,
    theme: &Theme,
) {
    if flipped {
        paint_card_shape(painter, rect, transform, theme.card_back, theme);
        paint_card_text(
            painter,
            rect,
            transform,
            &card.back.join("\n"),
            FontId::proportional(14.0),
            theme.card_text,
        );
    } else {
        paint_card_shape(painter, rect, transform, theme.card_front, theme);
        paint_card_text(
            painter,
            rect,
            transform,
            &card.front,
            FontId::proportional(32.0),
            theme.card_text,
        );
    }
}

fn rotated_corners(rect: Rect, transform: CardTransform) -> Vec<Pos2> {
    let rot = Rot2::from_angle(transform.rotation_deg.to_radians());
    let center = rect.center() + Vec2::new(transform.dx, transform.dy);
    let half = rect.size() / 2.0;

    [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .into_iter()
    .map(|corner| center + rot * corner)
    .collect()
}

fn paint_card_shape(painter: &Painter, rect: Rect, transform: CardTransform, fill: Color32, theme: &Theme) {
    painter.add(Shape::convex_polygon(
        rotated_corners(rect, transform),
        fill,
        Stroke::new(2.0, theme.card_stroke),
    ));
}

fn paint_card_text(
    painter: &Painter,
    rect: Rect,
    transform: CardTransform,
    text: &str,
    font: FontId,
    color: Color32,
) {
    let galley = painter.layout(text.to_string(), font, color, rect.width() - 2.0 * CARD_MARGIN);
    let angle = transform.rotation_deg.to_radians();
    let rot = Rot2::from_angle(angle);
    let center = rect.center() + Vec2::new(transform.dx, transform.dy);

    // Text shapes rotate about their top-left corner.
    let top_left = center + rot * (-galley.size() / 2.0);
    painter.add(TextShape::new(top_left, galley, color).with_angle(angle));
}

use crate::{
    controller::{
        ExitMotion,
        RenderTarget,
        TopCard,
    },
    core::Rgb,
    deck::CardView,
    gesture::CardTransform,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BannerState {
    pub text: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TopCardVisual {
    pub flipped: bool,
    pub transform: CardTransform,
    pub exit: Option<ExitMotion>,
}

/// Retained description of what the window should draw. The controller
/// writes it through [`RenderTarget`]; the painter reads it every frame.
#[derive(Debug, Default)]
pub struct Scene {
    pub cards: Vec<CardView>,
    pub placeholder: Option<String>,
    pub top: TopCardVisual,
    pub banner: Option<BannerState>,
}

impl Scene {
    pub fn is_animating(&self) -> bool {
        self.top.exit.is_some()
    }
}

impl RenderTarget for Scene {
    fn render_stack(&mut self, cards: &[CardView]) {
        self.cards = cards.to_vec();
        self.placeholder = None;
        self.top = TopCardVisual::default();
    }

    fn render_exhausted(&mut self, message: &str) {
        self.cards.clear();
        self.placeholder = Some(message.to_string());
        self.top = TopCardVisual::default();
    }

    fn update_top_card(&mut self, card: &TopCard) {
        self.top = TopCardVisual { flipped: card.flipped, transform: card.transform, exit: card.exit };
    }

    fn show_banner(&mut self, text: &str, color: Rgb) {
        self.banner = Some(BannerState { text: text.to_string(), color });
    }

    fn hide_banner(&mut self) {
        self.banner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    #[test]
    fn test_render_replaces_previous_state() {
        let mut scene = Scene::default();
        let cards = vec![CardView::from_entry(0, &WordEntry::new("W1"), true)];

        scene.render_exhausted("No more words!");
        scene.render_stack(&cards);
        assert_eq!(scene.cards, cards);
        assert!(scene.placeholder.is_none());

        scene.top.flipped = true;
        scene.render_exhausted("No more words!");
        assert!(scene.cards.is_empty());
        assert_eq!(scene.placeholder.as_deref(), Some("No more words!"));
        assert!(!scene.top.flipped);
    }

    #[test]
    fn test_banner_visibility() {
        let mut scene = Scene::default();
        scene.show_banner("Right", Rgb::LIME_GREEN);
        assert_eq!(scene.banner, Some(BannerState { text: "Right".to_string(), color: Rgb::LIME_GREEN }));
        scene.hide_banner();
        assert!(scene.banner.is_none());
    }
}

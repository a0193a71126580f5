//! Deck, cursor and the bounded slice of cards that is on screen.

use crate::core::WordEntry;

pub const MAX_VISIBLE_CARDS: usize = 3;
pub const NO_MORE_WORDS: &str = "No more words!";

/// Ordered word list for one session. Fetched once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    entries: Vec<WordEntry>,
}

impl Deck {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `entries[cursor .. cursor + min(3, remaining)]`, empty once exhausted.
    pub fn visible(&self, cursor: Cursor) -> &[WordEntry] {
        let start = cursor.position().min(self.entries.len());
        let end = (start + MAX_VISIBLE_CARDS).min(self.entries.len());
        &self.entries[start..end]
    }
}

/// Index of the next unjudged entry. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(usize);

impl Cursor {
    pub fn start() -> Self {
        Self(0)
    }

    pub fn position(self) -> usize {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 += 1;
    }

    pub fn is_exhausted(self, deck: &Deck) -> bool {
        self.0 >= deck.len()
    }
}

/// Render-ready description of one card in the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub deck_index: usize,
    pub front: String,
    pub back: Vec<String>,
    pub interactive: bool,
}

impl CardView {
    pub fn from_entry(deck_index: usize, entry: &WordEntry, interactive: bool) -> Self {
        Self { deck_index, front: entry.word.clone(), back: back_face_lines(entry), interactive }
    }
}

pub fn back_face_lines(entry: &WordEntry) -> Vec<String> {
    vec![
        format!("Pronunciation: {}", entry.pronunciation),
        format!("Type: {}", entry.word_type),
        format!("Definition: {}", entry.definition),
        format!("Example: {}", entry.example),
        format!("Synonyms: {}", entry.synonyms.join(", ")),
        format!("Antonyms: {}", entry.antonyms.join(", ")),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackView {
    Cards(Vec<CardView>),
    Exhausted,
}

impl StackView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            StackView::Cards(cards) => cards,
            StackView::Exhausted => &[],
        }
    }
}

/// Rebuilds the visible stack from scratch. Only the front card is interactive.
pub fn visible_stack(deck: &Deck, cursor: Cursor) -> StackView {
    if cursor.is_exhausted(deck) {
        return StackView::Exhausted;
    }

    let start = cursor.position();
    let cards = deck
        .visible(cursor)
        .iter()
        .enumerate()
        .map(|(offset, entry)| CardView::from_entry(start + offset, entry, offset == 0))
        .collect();

    StackView::Cards(cards)
}

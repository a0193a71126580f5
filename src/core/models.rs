use serde::{
    Deserialize,
    Serialize,
};

/// One vocabulary entry as served by `GET /api/words`.
///
/// The server decorates entries with its own bookkeeping (`correct`, `wrong`);
/// those fields are not part of the card and are dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordEntry {
    pub word: String,
    pub pronunciation: String,
    #[serde(rename = "type")]
    pub word_type: String,
    pub definition: String,
    pub example: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into(), ..Default::default() }
    }
}

/// Body of `POST /api/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Judgement {
    pub word: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Right,
    Wrong,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Right)
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Right => "Right",
            Verdict::Wrong => "Wrong",
        }
    }

    pub fn banner_color(self) -> Rgb {
        match self {
            Verdict::Right => Rgb::LIME_GREEN,
            Verdict::Wrong => Rgb::RED,
        }
    }

    /// Horizontal direction the card leaves the screen in: -1 left, +1 right.
    pub fn exit_direction(self) -> f32 {
        match self {
            Verdict::Right => 1.0,
            Verdict::Wrong => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const LIME_GREEN: Rgb = Rgb(50, 205, 50);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

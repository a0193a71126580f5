use crate::core::WordEntry;

#[derive(Debug, Clone)]
pub enum TaskResult {
    DeckLoaded(Result<Vec<WordEntry>, String>),
    JudgementReported { word: String, result: Result<(), String> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::DeckLoaded(_) => "deck_loaded",
            TaskResult::JudgementReported { .. } => "judgement_reported",
        }
    }
}

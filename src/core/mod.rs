pub mod errors;
pub mod http;
pub mod models;
pub mod tasks;

pub use errors::WordstackError;
pub use models::{
    Judgement,
    Rgb,
    Verdict,
    WordEntry,
};

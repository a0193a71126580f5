pub mod manager;
pub mod types;

pub use manager::{
    TaskDispatcher,
    TaskManager,
};
pub use types::TaskResult;

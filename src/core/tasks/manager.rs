use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    controller::JudgementSink,
    core::{
        http::WordApi,
        Judgement,
    },
};

/// Owns the async runtime and the result channel. Background work is
/// fire-and-forget; the UI picks results up with [`TaskManager::poll_results`].
pub struct TaskManager {
    dispatcher: TaskDispatcher,
    receiver: mpsc::Receiver<TaskResult>,
}

impl TaskManager {
    pub fn new(api: WordApi) -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { dispatcher: TaskDispatcher { runtime, sender, api }, receiver }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    /// Cloneable handle that can start tasks without access to the receiver.
    pub fn dispatcher(&self) -> TaskDispatcher {
        self.dispatcher.clone()
    }

    pub fn load_deck(&self) {
        self.dispatcher.load_deck();
    }
}

#[derive(Clone)]
pub struct TaskDispatcher {
    runtime: Arc<Runtime>,
    sender: mpsc::Sender<TaskResult>,
    api: WordApi,
}

impl TaskDispatcher {
    pub fn load_deck(&self) {
        let (sender, runtime, api) = self.task_context();

        thread::spawn(move || {
            tracing::info!(url = %api.words_url(), "fetching word list");
            let result = runtime.block_on(async { api.fetch_words().await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::DeckLoaded(result));
        });
    }

    pub fn report_judgement(&self, judgement: Judgement) {
        let (sender, runtime, api) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async { api.report(&judgement).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::JudgementReported { word: judgement.word, result });
        });
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, WordApi) {
        (self.sender.clone(), self.runtime.clone(), self.api.clone())
    }
}

impl JudgementSink for TaskDispatcher {
    fn report(&mut self, judgement: Judgement) {
        self.report_judgement(judgement);
    }
}

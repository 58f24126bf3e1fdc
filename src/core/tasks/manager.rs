use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::api;

/// Runs network calls off the UI thread. Each request spawns a thread that
/// blocks on the async call and reports back over the channel; the GUI drains
/// the channel once per frame. In-flight requests are never cancelled or
/// de-duplicated, stale results are filtered by token on the receiving side.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn fetch_joke(&self, base_url: String, request: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::fetch_random_joke(&base_url).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::JokeFetched { request, result });
        });
    }

    pub fn translate_joke(&self, base_url: String, request: u64, text: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::translate(&base_url, &text).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::TranslationFetched { request, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

use std::{collections::HashMap, future::Future};

use tokio::task::JoinHandle;

/// Background tasks addressed by name. Spawning under a name that is still
/// running aborts the previous task.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn<F>(&mut self, key: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.insert(key, tokio::spawn(task)) {
            handle.abort();
        }
    }

    pub fn abort(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|h| !h.is_finished())
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn respawn_aborts_previous() {
        let (tx, rx) = flume::unbounded();
        let mut tasks = TaskManager::new();

        let first = tx.clone();
        tasks.spawn("timer", async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = first.send("first");
        });
        tasks.spawn("timer", async move {
            let _ = tx.send("second");
        });

        assert_eq!(rx.recv_async().await.unwrap(), "second");
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn abort_stops_task() {
        let mut tasks = TaskManager::new();
        tasks.spawn("idle", std::future::pending());
        assert!(tasks.is_running("idle"));

        tasks.abort("idle");
        assert!(!tasks.is_running("idle"));
    }
}

use std::sync::Arc;

use gf_core::{ArticleSource, FetchOutcome};
use tokio::sync::oneshot;

/// Runs each load on its own task and hands the outcome back once it is
/// complete.
#[derive(Clone)]
pub struct FeedLoader {
    source: Arc<dyn ArticleSource>,
}

impl FeedLoader {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&self, request_url: impl Into<String>) -> LoadHandle {
        let (tx, rx) = oneshot::channel();
        let source = self.source.clone();
        let request_url = request_url.into();

        tokio::spawn(async move {
            tracing::debug!("Starting load from {}", source.name());
            let outcome = source.fetch(&request_url).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("Load finished after its handle was dropped; result discarded");
            }
        });

        LoadHandle { rx }
    }

    /// Starts a load only when the network is reachable.
    pub fn start_if_connected(&self, connected: bool, request_url: impl Into<String>) -> Option<LoadHandle> {
        if !connected {
            tracing::info!("No connectivity, skipping load");
            return None;
        }
        Some(self.start(request_url))
    }
}

/// Pending result of one load.
pub struct LoadHandle {
    rx: oneshot::Receiver<FetchOutcome>,
}

impl LoadHandle {
    /// Waits for the load. `None` only if the task died before delivering.
    pub async fn finished(self) -> Option<FetchOutcome> {
        self.rx.await.ok()
    }

    /// Gives up on the result. The request itself runs to completion and
    /// releases its resources; only the delivery is dropped.
    pub fn discard(self) {
        drop(self.rx);
    }
}

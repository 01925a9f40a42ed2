//! Asynchronous model loading with a channel-based completion signal.
//!
//! The game asks for a model and keeps a [`ModelHandle`]. The host receives the
//! matching [`ModelRequest`], fetches the bytes however it likes (browser
//! `fetch`, a test fixture) and completes it. The handle is polled once per
//! tick; nothing ever blocks the frame loop.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::assets::model::ModelAsset;
use crate::assets::AssetError;

type Completion = Result<Vec<u8>, AssetError>;

/// The host side of a pending model load.
#[derive(Debug)]
pub struct ModelRequest {
    path: String,
    sender: Sender<Completion>,
}

impl ModelRequest {
    /// Relative URL of the model file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Deliver the fetched bytes.
    pub fn complete(self, bytes: Vec<u8>) {
        // The handle may already be gone (game torn down); nothing to report then.
        let _ = self.sender.send(Ok(bytes));
    }

    /// Report that the fetch failed.
    pub fn fail(self, error: AssetError) {
        let _ = self.sender.send(Err(error));
    }
}

/// Result of polling a [`ModelHandle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadStatus<'a> {
    Pending,
    Ready(&'a ModelAsset),
    Failed,
}

enum HandleState {
    Pending(Receiver<Completion>),
    Ready(ModelAsset),
    Failed,
}

/// The game side of a pending model load.
pub struct ModelHandle {
    path: String,
    state: HandleState,
}

/// Create a linked request/handle pair for `path`.
pub fn model_channel(path: impl Into<String>) -> (ModelRequest, ModelHandle) {
    let path = path.into();
    let (sender, receiver) = mpsc::channel();
    (
        ModelRequest { path: path.clone(), sender },
        ModelHandle { path, state: HandleState::Pending(receiver) },
    )
}

impl ModelHandle {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check for completion. Parses the bytes the first time they arrive.
    /// Failures are logged once and the handle stays `Failed`.
    pub fn poll(&mut self) -> LoadStatus<'_> {
        if let HandleState::Pending(receiver) = &self.state {
            let outcome = match receiver.try_recv() {
                Ok(Ok(bytes)) => Some(ModelAsset::from_glb(&bytes)),
                Ok(Err(error)) => Some(Err(error)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(AssetError::Disconnected)),
            };

            match outcome {
                None => {}
                Some(Ok(model)) => {
                    log::info!(
                        "model {} ready: {} nodes, {} clips",
                        self.path,
                        model.node_count,
                        model.clips.len()
                    );
                    self.state = HandleState::Ready(model);
                }
                Some(Err(error)) => {
                    log::error!("Error loading model {}: {}", self.path, error);
                    self.state = HandleState::Failed;
                }
            }
        }

        match &self.state {
            HandleState::Pending(_) => LoadStatus::Pending,
            HandleState::Ready(model) => LoadStatus::Ready(model),
            HandleState::Failed => LoadStatus::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::model::test_glb;

    #[test]
    fn pending_until_completed() {
        let (request, mut handle) = model_channel("./models/ship.glb");
        assert_eq!(handle.poll(), LoadStatus::Pending);
        assert_eq!(request.path(), "./models/ship.glb");

        request.complete(test_glb::animated_ship());
        match handle.poll() {
            LoadStatus::Ready(model) => assert_eq!(model.clips.len(), 1),
            other => panic!("expected Ready, got {other:?}"),
        }
        // Stays ready on later polls.
        assert!(matches!(handle.poll(), LoadStatus::Ready(_)));
    }

    #[test]
    fn fetch_failure_marks_failed() {
        let (request, mut handle) = model_channel("./models/ship.glb");
        request.fail(AssetError::Fetch("404".into()));
        assert_eq!(handle.poll(), LoadStatus::Failed);
        assert_eq!(handle.poll(), LoadStatus::Failed);
    }

    #[test]
    fn parse_failure_marks_failed() {
        let (request, mut handle) = model_channel("./models/ship.glb");
        request.complete(vec![1, 2, 3]);
        assert_eq!(handle.poll(), LoadStatus::Failed);
    }

    #[test]
    fn dropped_request_marks_failed() {
        let (request, mut handle) = model_channel("./models/ship.glb");
        drop(request);
        assert_eq!(handle.poll(), LoadStatus::Failed);
    }
}

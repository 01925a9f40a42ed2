//! Side effects the engine asks the embedding page to perform.

use crate::assets::loader::ModelRequest;

/// The page hosting the engine.
///
/// The browser implementation fetches over HTTP and sets `window.location`;
/// tests record the calls instead.
pub trait Host {
    /// Start fetching the model bytes and complete `request` when done.
    fn fetch_model(&mut self, request: ModelRequest);

    /// Leave the current page for `url`.
    fn navigate(&mut self, url: &str);
}

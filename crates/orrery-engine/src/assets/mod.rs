pub mod loader;
pub mod manifest;
pub mod model;

/// Everything that can go wrong between requesting a model and using it.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to fetch asset: {0}")]
    Fetch(String),

    #[error("failed to parse glTF model: {0}")]
    Parse(#[from] gltf::Error),

    #[error("asset request was dropped before completing")]
    Disconnected,
}

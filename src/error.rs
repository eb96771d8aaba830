use crate::config::ConfigError;
use crate::fetch::error::FetchError;
use crate::frames::error::TransformError;
#[cfg(feature = "charts")]
use crate::render::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Covid19Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[cfg(feature = "charts")]
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

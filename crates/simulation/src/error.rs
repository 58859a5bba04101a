//! Error taxonomy shared by the simulation and its front ends.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed, missing or out-of-range input. Raised before any grid exists.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The rendering surface could not be acquired.
    #[error("failed to initialize the rendering surface")]
    Initialization(#[source] io::Error),

    /// The rendering surface failed while frames were being drawn.
    #[error("failed to render frame")]
    Render(#[source] io::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

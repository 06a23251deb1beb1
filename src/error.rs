use std::io;

/// Errors that end a run before it reaches a terminal state.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing or help-requesting arguments")]
    Usage,
    #[error("cannot set SIGTERM disposition: {0}")]
    Signal(#[from] nix::Error),
    #[error("cannot write to stdout: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

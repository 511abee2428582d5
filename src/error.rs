use std::path::PathBuf;

/// Fatal conditions. Each one ends the run with its own exit status.
///
/// These ride along as `anyhow` context on the underlying I/O error, so the
/// caller recovers them with `downcast_ref::<Failure>()`.
#[derive(Debug)]
pub enum Failure {
    Open(PathBuf),
    Close(PathBuf),
    Write,
}

impl Failure {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Open(_)  => 1,
            Self::Close(_) => 2,
            Self::Write    => 3,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(p)  => write!(f, "failed to open {}", p.display()),
            Self::Close(p) => write!(f, "failed to close {}", p.display()),
            Self::Write    => write!(f, "failed to write output"),
        }
    }
}

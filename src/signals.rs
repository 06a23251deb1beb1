use crate::config::RunConfig;
use crate::error::Result;
use nix::sys::signal::{self, SigHandler, Signal};

/// What the process does on receipt of SIGTERM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalPolicy {
    /// Leave the default action in place: the process terminates.
    Default,
    /// Discard SIGTERM at the kernel level.
    Ignore,
}

impl SignalPolicy {
    pub fn from_config(config: &RunConfig) -> Self {
        if config.ignore_terminate {
            SignalPolicy::Ignore
        } else {
            SignalPolicy::Default
        }
    }
}

/// Capability to change the process-wide SIGTERM disposition.
pub trait Disposition {
    fn apply(&mut self, policy: SignalPolicy) -> Result<()>;
}

/// Installs the disposition with `signal(2)` through nix.
///
/// `SIG_IGN` makes the kernel drop SIGTERM before delivery, so a blocking
/// sleep is never interrupted by it.
pub struct OsDisposition;

impl Disposition for OsDisposition {
    fn apply(&mut self, policy: SignalPolicy) -> Result<()> {
        let handler = match policy {
            SignalPolicy::Default => SigHandler::SigDfl,
            SignalPolicy::Ignore => SigHandler::SigIgn,
        };
        // Safety: SigIgn and SigDfl install no user code, so there is no
        // async-signal-safety concern.
        let previous = unsafe { signal::signal(Signal::SIGTERM, handler)? };
        log::debug!("SIGTERM disposition {:?} -> {:?}", previous, handler);
        Ok(())
    }
}

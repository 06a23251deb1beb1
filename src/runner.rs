use crate::config::RunConfig;
use crate::error::Result;
use crate::signals::{Disposition, SignalPolicy};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Time between two heartbeats.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);

/// Observable position of the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Initializing,
    SignalConfigured,
    /// Heartbeat `i` is being emitted or its interval is elapsing.
    Heartbeating(u64),
    Completed,
}

/// Suspension point between heartbeats.
pub trait Pause {
    fn pause(&mut self, interval: Duration);
}

/// Blocks the calling thread. Only the signal dispositions decide whether
/// a delivered signal ends the process mid-sleep.
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Drives one execution: argument echo, signal setup, heartbeats, completion.
pub struct Runner<W, D, P> {
    out: W,
    disposition: D,
    pause: P,
    interval: Duration,
    state: RunState,
}

impl<W: Write, D: Disposition, P: Pause> Runner<W, D, P> {
    pub fn new(out: W, disposition: D, pause: P) -> Self {
        Runner {
            out,
            disposition,
            pause,
            interval: HEARTBEAT_INTERVAL,
            state: RunState::Initializing,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Runs to completion and returns the exit status (always 0).
    /// Termination by SIGTERM happens outside this call.
    pub fn run(&mut self, config: &RunConfig) -> Result<i32> {
        for (i, arg) in config.passthrough_args.iter().enumerate() {
            writeln!(self.out, "argv[{}]='{}'", i, arg)?;
        }

        // Must be in place before the first heartbeat.
        let policy = SignalPolicy::from_config(config);
        self.disposition.apply(policy)?;
        if policy == SignalPolicy::Ignore {
            writeln!(self.out, "Ignoring SIGTERM.")?;
        }
        self.out.flush()?;
        self.transition(RunState::SignalConfigured);

        for i in 0..config.total_cycles {
            self.transition(RunState::Heartbeating(i));
            write!(self.out, "{} ", i)?;
            self.out.flush()?;
            self.pause.pause(self.interval);
        }

        writeln!(self.out)?;
        self.out.flush()?;
        self.transition(RunState::Completed);
        Ok(0)
    }

    fn transition(&mut self, next: RunState) {
        log::debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

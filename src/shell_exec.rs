//! Logged execution of external commands.
//!
//! Every subprocess goes through [`Cmd`] so that `--verbose` shows exactly what
//! was run, where, and how long it took. Commands run synchronously, one at a
//! time, with no timeout: a hang in the external tool hangs the caller.

use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;
use std::time::Instant;

/// Monotonic epoch for trace timestamps.
static TRACE_EPOCH: OnceLock<Instant> = OnceLock::new();

fn trace_epoch() -> &'static Instant {
    TRACE_EPOCH.get_or_init(Instant::now)
}

/// Builder for a single external command invocation.
///
/// ```no_run
/// use glimpse::shell_exec::Cmd;
///
/// let output = Cmd::new("git")
///     .args(["status", "--porcelain"])
///     .current_dir(".")
///     .run()?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cmd {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    context: Option<String>,
}

impl Cmd {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            context: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the command.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Set the logging context (typically the repository path).
    pub fn context(mut self, ctx: impl Into<String>) -> Self {
        self.context = Some(ctx.into());
        self
    }

    /// The command line as it appears in logs and error messages.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    /// Execute the command to completion and return its captured output.
    pub fn run(self) -> std::io::Result<Output> {
        let cmd_str = self.display();

        match &self.context {
            Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
            None => log::debug!("$ {}", cmd_str),
        }

        let t0 = Instant::now();
        let ts = t0.duration_since(*trace_epoch()).as_micros() as u64;

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        let result = cmd.output();

        let dur_us = t0.elapsed().as_micros() as u64;
        match &result {
            Ok(output) => log::debug!(
                "[glimpse-trace] ts={} cmd=\"{}\" dur_us={} ok={}",
                ts,
                cmd_str,
                dur_us,
                output.status.success()
            ),
            Err(e) => log::debug!(
                "[glimpse-trace] ts={} cmd=\"{}\" dur_us={} err=\"{}\"",
                ts,
                cmd_str,
                dur_us,
                e
            ),
        }

        result
    }
}

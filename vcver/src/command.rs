use std::io;

use duct::cmd;
use tracing::{debug, trace};

use crate::util::join_quote;


/// Captured output of a command that could be spawned.
///
/// The exit status is not kept: only the content of `stdout` decides whether
/// the command produced a version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        CommandOutput { stdout: stdout.into(), stderr: stderr.into() }
    }

    /// Decoded `stdout`, stripped of surrounding whitespace.
    pub fn stdout_trimmed(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim().to_string()
    }

    /// Decoded `stderr`, one entry per line.
    pub fn stderr_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.stderr).lines().map(str::to_string).collect()
    }
}


/// Run a command synchronously and capture both its output streams.
///
/// An `Err` means the command could not be spawned at all (eg: executable
/// not found).
pub trait CommandRunner {
    fn run(&self, args: &[String]) -> io::Result<CommandOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, args: &[String]) -> io::Result<CommandOutput> {
        (**self).run(args)
    }
}


/// Runs commands as actual OS processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommand;

impl CommandRunner for SystemCommand {
    fn run(&self, args: &[String]) -> io::Result<CommandOutput> {
        let Some((program, rest)) = args.split_first() else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty command line"));
        };

        debug!("Running command: {}", pretty_command(args));
        let output = cmd(program, rest)
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()?;

        trace!("Command exited with {}", output.status);
        Ok(CommandOutput { stdout: output.stdout, stderr: output.stderr })
    }
}


/// Return a string repr of the command that can be easily copy-pasted.
pub fn pretty_command(args: &[String]) -> String {
    let args: Vec<_> = args.iter().map(String::as_str).collect();
    join_quote(&args)
}

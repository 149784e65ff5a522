//! Runs the build tool as a child process.

use std::path::Path;
use std::process::{Command, Stdio};

use mvnkit_core::application::ports::{BuildInvoker, Invocation};
use tracing::debug;

/// Spawns `argv[0]` with the remaining arguments and waits for it.
///
/// stdout and stderr are captured separately and concatenated in that
/// order, decoded lossily. There is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInvoker;

impl ProcessInvoker {
    pub fn new() -> Self {
        Self
    }
}

impl BuildInvoker for ProcessInvoker {
    fn invoke(&self, argv: &[String], cwd: &Path) -> Invocation {
        let Some((program, args)) = argv.split_first() else {
            return Invocation::failure("empty command");
        };

        let output = Command::new(program_name(program))
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(out) => {
                let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&out.stderr));
                debug!(program = %program, status = ?out.status.code(), "Process exited");
                Invocation {
                    succeeded: out.status.success(),
                    output: text,
                }
            }
            Err(e) => {
                debug!(program = %program, error = %e, "Process failed to start");
                Invocation::failure(format!(
                    "failed to run `{}` in {}: {e}",
                    argv.join(" "),
                    cwd.display()
                ))
            }
        }
    }
}

/// `mvn` ships as a `.cmd` launcher on Windows.
fn program_name(program: &str) -> String {
    if cfg!(windows) && program == "mvn" {
        "mvn.cmd".to_string()
    } else {
        program.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn missing_executable_is_a_failed_invocation() {
        let outcome = ProcessInvoker::new().invoke(
            &argv(&["mvnkit-definitely-not-installed", "clean"]),
            Path::new("."),
        );
        assert!(!outcome.succeeded);
        assert!(outcome.output.contains("mvnkit-definitely-not-installed"));
    }

    #[cfg(unix)]
    #[test]
    fn missing_working_directory_is_a_failed_invocation() {
        let outcome = ProcessInvoker::new().invoke(
            &argv(&["echo", "hi"]),
            Path::new("/mvnkit/no/such/dir"),
        );
        assert!(!outcome.succeeded);
        assert!(!outcome.output.is_empty());
    }

    #[test]
    fn empty_command_fails() {
        let outcome = ProcessInvoker::new().invoke(&[], Path::new("."));
        assert_eq!(outcome, Invocation::failure("empty command"));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_then_stderr() {
        let outcome = ProcessInvoker::new().invoke(
            &argv(&["sh", "-c", "echo out; echo err 1>&2; exit 3"]),
            Path::new("."),
        );
        assert!(!outcome.succeeded);
        assert_eq!(outcome.output, "out\nerr\n");
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_succeeds() {
        let outcome = ProcessInvoker::new().invoke(&argv(&["true"]), Path::new("."));
        assert!(outcome.succeeded);
    }
}

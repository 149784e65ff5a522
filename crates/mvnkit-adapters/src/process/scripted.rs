//! Test double that replays canned invocations.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use mvnkit_core::application::ports::{BuildInvoker, Invocation};

type Rule = (String, Invocation);

#[derive(Debug, Default)]
struct Script {
    rules: Vec<Rule>,
    queue: VecDeque<Invocation>,
    fallback: Option<Invocation>,
    calls: Vec<(Vec<String>, PathBuf)>,
}

/// Returns scripted outcomes and records every call.
///
/// Resolution order per call: the first rule whose pattern occurs in the
/// joined command line, then the next queued outcome, then the fallback.
/// With none of those the call fails with `"unscripted command"`.
///
/// Clones share the script, so a test can inspect calls after handing a
/// clone to a service.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInvoker {
    script: Arc<Mutex<Script>>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call succeeds with `output`.
    pub fn always(succeeded: bool, output: impl Into<String>) -> Self {
        Self::new().otherwise(Invocation {
            succeeded,
            output: output.into(),
        })
    }

    /// Calls whose command line contains `pattern` get `outcome`.
    pub fn when(self, pattern: impl Into<String>, outcome: Invocation) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.rules.push((pattern.into(), outcome));
        }
        self
    }

    /// Queue an outcome for the next unmatched call.
    pub fn then(self, outcome: Invocation) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.queue.push_back(outcome);
        }
        self
    }

    pub fn otherwise(self, outcome: Invocation) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.fallback = Some(outcome);
        }
        self
    }

    /// Recorded `(argv, cwd)` pairs, in call order.
    pub fn calls(&self) -> Vec<(Vec<String>, PathBuf)> {
        self.script
            .lock()
            .map(|s| s.calls.clone())
            .unwrap_or_default()
    }
}

impl BuildInvoker for ScriptedInvoker {
    fn invoke(&self, argv: &[String], cwd: &Path) -> Invocation {
        let Ok(mut script) = self.script.lock() else {
            return Invocation::failure("scripted invoker poisoned");
        };
        script.calls.push((argv.to_vec(), cwd.to_path_buf()));

        let line = argv.join(" ");
        if let Some((_, outcome)) = script.rules.iter().find(|(p, _)| line.contains(p.as_str())) {
            return outcome.clone();
        }
        if let Some(outcome) = script.queue.pop_front() {
            return outcome;
        }
        script
            .fallback
            .clone()
            .unwrap_or_else(|| Invocation::failure("unscripted command"))
    }
}

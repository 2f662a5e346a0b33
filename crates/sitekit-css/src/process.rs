//! Child-process plumbing shared by the command-line engines.

use std::{
    io::Write,
    process::{Command, Stdio},
    thread,
};

use tracing::{debug, trace};

use crate::backend::EngineFailure;

/// Run `program --version` and report whether it succeeded.
pub(crate) fn probe(program: &str) -> bool {
    let status = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) => status.success(),
        Err(e) => {
            debug!(program, error = %e, "engine probe failed");
            false
        }
    }
}

/// Run an engine to completion and return its stdout.
///
/// `input` is streamed to stdin from a helper thread so a chatty engine
/// cannot deadlock on a full pipe. A non-zero exit becomes
/// [`EngineFailure::Rejected`] carrying stderr (or stdout, for engines that
/// report there).
pub(crate) fn run(program: &str, args: &[&str], input: Option<&str>) -> Result<String, EngineFailure> {
    trace!(program, ?args, "spawning engine");

    let mut child = Command::new(program)
        .args(args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(EngineFailure::Spawn)?;

    let writer = match (input, child.stdin.take()) {
        (Some(input), Some(mut stdin)) => {
            let input = input.to_owned();
            Some(thread::spawn(move || stdin.write_all(input.as_bytes())))
        }
        _ => None,
    };

    let output = child.wait_with_output().map_err(EngineFailure::Spawn)?;

    // An engine that bails early closes its stdin; the exit status below
    // carries the real error in that case.
    let write_result = writer.map(|handle| handle.join());

    if !output.status.success() {
        let mut report = String::from_utf8_lossy(&output.stderr).into_owned();
        if report.trim().is_empty() {
            report = String::from_utf8_lossy(&output.stdout).into_owned();
        }
        if report.trim().is_empty() {
            report = format!("{program} exited with {}", output.status);
        }
        return Err(EngineFailure::Rejected(report));
    }

    if let Some(Ok(Err(e))) = write_result {
        return Err(EngineFailure::Spawn(e));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

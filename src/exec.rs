use std::ffi::OsString;
use std::path::Path;

/// Replace the current process image with the runtime.
///
/// Uses `exec()` so the runtime inherits the launcher's PID: no zombie,
/// correct signal delivery, and the shell observes the runtime's own exit
/// code. On success this never returns; `exec()` only comes back with the
/// `io::Error` that stopped the replacement.
///
/// Both Linux and macOS provide POSIX `execv` via
/// `std::os::unix::process::CommandExt::exec()`, so one `#[cfg(unix)]`
/// implementation covers them.
#[cfg(unix)]
pub fn run_target(target: &Path, args: &[OsString]) -> anyhow::Result<i32> {
    use std::os::unix::process::CommandExt;

    let err = std::process::Command::new(target).args(args).exec();
    Err(anyhow::anyhow!("failed to exec {}: {}", target.display(), err))
}

/// Spawn the runtime and block until it exits, then relay its exit status.
///
/// Windows has no in-place image replacement, so this is CreateProcess plus
/// an unbounded wait. `Command` performs the UTF-16 argument conversion
/// `CreateProcessW` requires, empty strings included, so arguments arrive
/// at the runtime uncorrupted.
#[cfg(windows)]
pub fn run_target(target: &Path, args: &[OsString]) -> anyhow::Result<i32> {
    use anyhow::Context;

    let status = std::process::Command::new(target)
        .args(args)
        .status()
        .with_context(|| format!("failed to launch {}", target.display()))?;
    Ok(status.code().unwrap_or(1))
}

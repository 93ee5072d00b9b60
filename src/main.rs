// main.rs: orchestration only.
// Path discovery, argument construction, and process hand-off live in the
// three modules below; main.rs is the only file that imports from them.
mod args;
mod exec;
mod locate;

use args::build_target_args;
use exec::run_target;
use locate::{derive_target_path, resolve_self_path, validate_target};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("[nomake] {err:#}");
            std::process::exit(1);
        }
    }
}

/// The whole program: find the runtime sitting beside this binary and hand
/// the process over to it. Returns only when the hand-off fails, or (on the
/// spawn-and-wait platform) with the child's exit code.
fn run() -> anyhow::Result<i32> {
    let self_path = resolve_self_path()?;
    let target = derive_target_path(&self_path)?;
    validate_target(&target)?;

    let argv = build_target_args(std::env::args_os().skip(1));
    run_target(&target, &argv)
}

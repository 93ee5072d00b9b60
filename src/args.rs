use std::ffi::OsString;

/// Invocation verb understood by the runtime.
const RUN_VERB: &str = "run";
/// Permission flag granting the build script full access.
const ALLOW_ALL: &str = "-A";
/// Entry script the runtime resolves relative to the invoking directory.
const ENTRY_SCRIPT: &str = "build.ts";

/// Build the argument tail passed to the runtime: the fixed
/// `run -A build.ts` prefix followed by the caller's arguments in their
/// original order. argv[0] (the runtime path itself) is supplied by the
/// spawn layer, not stored here.
///
/// Arguments stay `OsString` end to end so non-UTF-8 bytes, spaces, and
/// empty strings pass through untouched.
pub fn build_target_args<I>(user_args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let user_args = user_args.into_iter();
    let mut argv: Vec<OsString> = Vec::with_capacity(3 + user_args.size_hint().0);
    argv.push(RUN_VERB.into());
    argv.push(ALLOW_ALL.into());
    argv.push(ENTRY_SCRIPT.into());
    argv.extend(user_args);
    argv
}

//! Stamps the git commit and build time into `JUSTD_BUILD_*` env vars for
//! `justd --version`. Either value can be pinned from the environment, which
//! packagers use for reproducible builds.

use std::env;
use std::path::Path;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "JUSTD_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "JUSTD_BUILD_TIMESTAMP";

fn main() {
    watch_git_head(Path::new(".git"));
    stamp(GIT_HASH_VAR, || {
        command_output("git", &["rev-parse", "--short=12", "HEAD"])
            .unwrap_or_else(|| "unknown".to_string())
    });
    stamp(TIMESTAMP_VAR, || {
        command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(unix_seconds)
    });
}

/// Export `var` to rustc, preferring a value pinned in the build environment.
fn stamp(var: &str, compute: impl FnOnce() -> String) {
    println!("cargo:rerun-if-env-changed={var}");
    let value = env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(compute);
    println!("cargo:rustc-env={var}={value}");
}

/// Rebuild when HEAD moves, including commits on the checked-out branch.
fn watch_git_head(git_dir: &Path) {
    let head = git_dir.join("HEAD");
    println!("cargo:rerun-if-changed={}", head.display());
    let branch_ref = std::fs::read_to_string(&head)
        .ok()
        .and_then(|text| text.trim().strip_prefix("ref: ").map(str::to_string));
    if let Some(branch_ref) = branch_ref {
        println!("cargo:rerun-if-changed={}", git_dir.join(branch_ref).display());
    }
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string()).filter(|value| !value.is_empty())
}

fn unix_seconds() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("unix:{secs}")
}

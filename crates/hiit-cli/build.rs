//! Embeds the short commit hash shown by `hiit --version`.
//!
//! Packagers building from a tarball can pass `GIT_COMMIT_HASH` themselves.

use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn from_env() -> Option<String> {
    env::var("GIT_COMMIT_HASH")
        .ok()
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty() && hash != UNKNOWN)
}

fn from_git() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn main() {
    for path in ["../../.git/HEAD", "../../.git/refs/heads/"] {
        println!("cargo::rerun-if-changed={}", path);
    }
    println!("cargo::rerun-if-env-changed=GIT_COMMIT_HASH");

    let hash = from_env()
        .or_else(from_git)
        .unwrap_or_else(|| UNKNOWN.to_string());
    println!("cargo::rustc-env=GIT_COMMIT_HASH={}", hash);
}

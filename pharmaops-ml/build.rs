//! Build script for pharmaops-ml
//!
//! Exposes to the crate, via `env!`:
//! - `GIT_HASH`: `git describe` of the workspace, `-dirty` when modified
//! - `BUILD_TIMESTAMP`: UTC, RFC 3339
//! - `BUILD_PROFILE`: cargo profile name

use std::path::Path;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let describe = git(&["describe", "--always", "--dirty", "--abbrev=8"]);

    // Rebuild when HEAD moves; without a checkout cargo falls back to
    // rerunning on any package change
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        let head = Path::new(&git_dir).join("HEAD");
        println!("cargo:rerun-if-changed={}", head.display());
    }
    println!("cargo:rerun-if-changed=src");

    let env_vars = [
        ("GIT_HASH", describe.unwrap_or_else(|| UNKNOWN.to_string())),
        (
            "BUILD_TIMESTAMP",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        ),
        (
            "BUILD_PROFILE",
            std::env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.to_string()),
        ),
    ];

    for (key, value) in env_vars {
        println!("cargo:rustc-env={}={}", key, value);
    }
}

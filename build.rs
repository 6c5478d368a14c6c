use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    // Short commit hash for the version string; empty outside a checkout
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    println!("cargo:rustc-env=GIT_HASH={}", hash);
}

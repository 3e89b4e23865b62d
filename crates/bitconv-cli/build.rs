use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for var in ["BITCONV_COMMIT", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let commit_full = ["BITCONV_COMMIT", "GITHUB_SHA"]
        .iter()
        .find_map(|var| env::var(var).ok().filter(|v| !v.is_empty()))
        .or_else(|| git(&["rev-parse", "HEAD"]))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let commit_short = match commit_full.as_str() {
        UNKNOWN => UNKNOWN.to_string(),
        full => full.chars().take(7).collect(),
    };
    let build_date = git(&["log", "-1", "--format=%cs"]).unwrap_or_else(|| UNKNOWN.to_string());

    println!("cargo:rustc-env=BITCONV_BUILD_COMMIT={commit_short}");
    println!("cargo:rustc-env=BITCONV_BUILD_COMMIT_FULL={commit_full}");
    println!("cargo:rustc-env=BITCONV_BUILD_DATE={build_date}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

// build.rs
use std::env;
use std::process::Command;

// Captures toolchain and build facts at compile time so the runtime
// report never has to probe the toolchain at request time.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let verbose = Command::new(&rustc)
        .arg("-vV")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).into_owned())
        .unwrap_or_default();

    let release = verbose.lines().next().unwrap_or("unknown").to_string();
    let field = |key: &str| {
        verbose
            .lines()
            .find_map(|line| line.strip_prefix(key))
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    };

    println!("cargo:rustc-env=LOUPE_RUSTC_VERSION={}", release);
    println!("cargo:rustc-env=LOUPE_RUSTC_COMMIT={}", field("commit-hash:"));
    println!("cargo:rustc-env=LOUPE_RUSTC_HOST={}", field("host:"));

    let cargo_var = |key: &str| env::var(key).unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=LOUPE_TARGET={}", cargo_var("TARGET"));
    println!("cargo:rustc-env=LOUPE_PROFILE={}", cargo_var("PROFILE"));
    println!("cargo:rustc-env=LOUPE_OPT_LEVEL={}", cargo_var("OPT_LEVEL"));
}

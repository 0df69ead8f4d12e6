use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Version of the tool itself, as `git describe` sees it. We cannot use our own
/// resolver here, so this only does the bare minimum.
fn describe_self() -> Result<String, String> {
    let output = Command::new("git").args(["describe", "--tags", "--dirty"])
        .output().map_err(|err| format!("failed to execute `git` process: {err}"))?;
    if !output.status.success() {
        return Err("`git describe` found no tag".to_string());
    }
    let stdout = String::from_utf8(output.stdout)
        .map_err(|_err| "process returned non-utf8 output".to_string())?;
    Ok(stdout.trim().to_string())
}

fn main() {
    let cargo_version = env::var("CARGO_PKG_VERSION").unwrap();
    let version = describe_self().unwrap_or(cargo_version);

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("version"), version).unwrap();
}

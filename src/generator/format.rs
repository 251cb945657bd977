use std::path::Path;
use std::process::Command;
use tracing::info;

/// Run prettier over the generated files in `dir`.
///
/// # Errors
///
/// Returns an error if the formatter cannot be started or exits non-zero.
pub fn format_output(dir: &Path) -> anyhow::Result<()> {
    // Allow tests to override the prettier binary path without mutating PATH
    let prettier_bin =
        std::env::var("ASPECTGEN_PRETTIER_BIN").unwrap_or_else(|_| "prettier".to_string());

    let mut cmd = Command::new(&prettier_bin);
    cmd.arg("--write").arg(".").current_dir(dir);
    let status = cmd
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to run {prettier_bin}: {e}"))?;
    if !status.success() {
        anyhow::bail!("prettier failed");
    }
    info!(dir = %dir.display(), "formatted generated files");
    Ok(())
}

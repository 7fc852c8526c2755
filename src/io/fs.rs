use std::{fs, io::Write, path::Path};

use anyhow::{bail, Context, Result};

/// Error if `path` exists and `force` is not set, or if it names a directory.
pub fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.is_dir() {
        bail!("Path exists but is a directory: {}", path.display());
    }
    if path.exists() && !force {
        bail!("Refusing to overwrite {} (use --force)", path.display());
    }
    Ok(())
}

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, contents: &str, force: bool) -> Result<()> {
    match path {
        Some(path) => {
            ensure_writable(path, force)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') { stdout.write_all(b"\n")? }
        }
    }
    Ok(())
}

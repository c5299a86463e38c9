use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

/// Write generated text (sitemap, robots.txt) to a file atomically
///
/// The target is either fully replaced or left untouched.
pub fn save_text(path: &Path, contents: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    if !contents.ends_with('\n') {
        file.write_all(b"\n")
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Saved output file");
    Ok(())
}

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the daylist directory - checks for a local .daylist first, then falls
/// back to the global ~/.daylist
pub fn get_daylist_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_daylist(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".daylist"))
}

/// Find a local .daylist directory by walking up the directory tree
fn find_local_daylist(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let daylist_dir = current.join(".daylist");
        if daylist_dir.exists() && daylist_dir.is_dir() {
            return Some(daylist_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the daylist directory exists
pub fn ensure_daylist_dir() -> Result<PathBuf> {
    let dir = get_daylist_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .daylist directory in the current directory
pub fn init_local_daylist() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let daylist_dir = current_dir.join(".daylist");

    if daylist_dir.exists() {
        anyhow::bail!("Daylist directory already exists: {}", daylist_dir.display());
    }

    fs::create_dir_all(&daylist_dir)
        .with_context(|| format!("Failed to create directory: {}", daylist_dir.display()))?;

    Ok(daylist_dir)
}

/// Get path to meta.json (stores the active profile and known profiles)
pub fn meta_file() -> Result<PathBuf> {
    Ok(ensure_daylist_dir()?.join("meta.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return None if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        let content = "Hello, world!";
        atomic_write(&test_file, content).unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content.as_deref(), Some(content));
    }

    #[test]
    fn test_atomic_write_replaces_existing_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "first").unwrap();
        atomic_write(&test_file, "second").unwrap();

        assert_eq!(read_file(&test_file).unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.txt");

        assert_eq!(read_file(&test_file).unwrap(), None);
    }
}

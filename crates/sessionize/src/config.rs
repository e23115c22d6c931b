//! Inactivity-period configuration.
//!
//! The threshold arrives as a standalone text file holding a single
//! non-negative integer number of seconds. Every segmentation decision
//! depends on it, so any problem here is a hard error before the log is
//! touched.

use std::path::Path;

use anyhow::{bail, Context, Result};

/// Load the inactivity period in whole seconds.
pub fn read_inactivity_period(path: &Path) -> Result<i64> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read inactivity period file {}", path.display()))?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        bail!("Inactivity period file {} is empty", path.display());
    }

    let seconds: i64 = trimmed
        .parse()
        .with_context(|| format!("Inactivity period '{}' is not an integer", trimmed))?;

    if seconds < 0 {
        bail!("Inactivity period must be non-negative, got {}", seconds);
    }

    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_period(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("inactivity_period.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_plain_integer() {
        let dir = TempDir::new().unwrap();
        let path = write_period(&dir, "1800");
        assert_eq!(read_inactivity_period(&path).unwrap(), 1800);
    }

    #[test]
    fn test_trims_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = write_period(&dir, "  2\n");
        assert_eq!(read_inactivity_period(&path).unwrap(), 2);
    }

    #[test]
    fn test_zero_is_allowed() {
        let dir = TempDir::new().unwrap();
        let path = write_period(&dir, "0");
        assert_eq!(read_inactivity_period(&path).unwrap(), 0);
    }

    #[test]
    fn test_rejects_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_period(&dir, "\n");
        assert!(read_inactivity_period(&path).is_err());
    }

    #[test]
    fn test_rejects_non_numeric() {
        let dir = TempDir::new().unwrap();
        let path = write_period(&dir, "thirty minutes");
        assert!(read_inactivity_period(&path).is_err());
    }

    #[test]
    fn test_rejects_negative() {
        let dir = TempDir::new().unwrap();
        let path = write_period(&dir, "-5");
        assert!(read_inactivity_period(&path).is_err());
    }

    #[test]
    fn test_rejects_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(read_inactivity_period(&path).is_err());
    }
}

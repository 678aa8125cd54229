use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Input for a CLI argument: the contents of the file it names, or the
/// argument itself when it is not a readable file. File contents are trimmed
/// since nothing may follow a mosaic trailer.
pub fn data_source(arg: &str) -> Result<Cow<'_, str>> {
    let path = Path::new(arg);
    if path.is_file() {
        log::debug!("Reading input from file {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Cow::Owned(text.trim().to_string()))
    } else {
        Ok(Cow::Borrowed(arg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn literal_argument_passes_through() {
        let src = data_source("L@LPVRAG~~~D").unwrap();
        assert!(matches!(src, Cow::Borrowed("L@LPVRAG~~~D")));
    }

    #[test]
    fn file_contents_are_trimmed() {
        let tempdir = TempDir::with_prefix_in("test", "./").unwrap();
        let path = tempdir.path().join("cipher.txt");
        fs::write(&path, "L@LPVRAG~~~D\n").unwrap();

        let src = data_source(path.to_str().unwrap()).unwrap();
        assert_eq!(src, "L@LPVRAG~~~D");
        assert_eq!(crate::decode(src).unwrap(), b"AB");
    }

    #[test]
    fn directory_is_treated_as_literal() {
        let tempdir = TempDir::with_prefix_in("test", "./").unwrap();
        let dir = tempdir.path().to_str().unwrap();
        assert_eq!(data_source(dir).unwrap(), dir);
    }
}

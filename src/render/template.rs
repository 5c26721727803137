//! Battle screen template
//!
//! Plain text art shown above every battle result. Loaded once when the
//! renderer is built and never reloaded.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::RenderError;

/// Cached battle screen art
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleTemplate {
    text: String,
}

impl BattleTemplate {
    /// Read the template file.
    ///
    /// Reading stops at end of file or at the first empty line; everything
    /// after a blank line is ignored. A missing or unreadable file is an
    /// error and no partial template is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let text = read_until_blank(path).map_err(|source| RenderError::Template {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded battle template from {} ({} bytes)", path.display(), text.len());
        Ok(Self { text })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn read_until_blank(path: &Path) -> io::Result<String> {
    let reader = BufReader::new(File::open(path)?);
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("metalicana-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_stops_at_first_blank_line() {
        let path = scratch_file("template.txt", "/--\\\n|  |\n\nhidden\n");
        let template = BattleTemplate::load(&path).unwrap();
        assert_eq!(template.as_str(), "/--\\\n|  |\n");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join("metalicana-definitely-missing/battle.txt");
        let err = BattleTemplate::load(&path).unwrap_err();
        match err {
            RenderError::Template { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

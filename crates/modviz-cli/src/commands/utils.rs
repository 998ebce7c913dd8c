//! Shared input/output helpers for command implementations.

use crate::error::{Result, ResultExt};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::Path;

/// Open the dependency list to read.
///
/// `None` and `-` both mean stdin.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(path) if path == Path::new("-") => Ok(Box::new(io::stdin().lock())),
        Some(path) => {
            let file = File::open(path).with_path(path)?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Create (or truncate) the output file.
pub fn open_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).context(format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_open_input_missing_file() {
        let err = open_input(Some(Path::new("/definitely/not/here.txt"))).err().unwrap();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_open_input_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deps.txt");
        std::fs::write(&path, "a b\n").unwrap();

        let mut content = String::new();
        open_input(Some(&path)).unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "a b\n");
    }

    #[test]
    fn test_open_output_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.dot");

        let mut writer = open_output(&path).unwrap();
        writer.write_all(b"digraph {}\n").unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "digraph {}\n");
    }

    #[test]
    fn test_open_output_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("graph.dot");

        let err = open_output(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create"));
    }
}

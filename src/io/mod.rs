pub mod output;
pub mod writers;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::core::FormData;
use crate::errors::{Error, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read a form data JSON file. Missing sections are empty.
pub fn read_form(path: &Path) -> Result<FormData> {
    let content = fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    Ok(serde_json::from_str(&content)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    fs::write(path, content).map_err(|e| Error::io_with_path(e, path))
}

/// Buffered file when `path` is given, stdout otherwise.
pub fn output_target(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
            }
            let file = fs::File::create(path).map_err(|e| Error::io_with_path(e, path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn reads_partial_forms() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("form.json");
        write_file(
            &path,
            indoc! {r#"
                {
                  "financial": { "investment": "25000" }
                }
            "#},
        )
        .unwrap();

        let form = read_form(&path).unwrap();
        assert_eq!(form.financial.scalar("investment"), Some(25000.0));
        assert!(form.market.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_form(Path::new("/nonexistent/form.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/form.json"));
    }
}

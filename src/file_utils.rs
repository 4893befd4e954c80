use anyhow::{Result, Context, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a subtitle file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    // @generates: Output path for a translated subtitle
    // The output keeps the input's directory and extension, with the file name
    // prefixed (translated_<name> for pipeline output, edited_<name> after a
    // manual preview edit).
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P, prefix: &str) -> Result<PathBuf> {
        let input_file = input_file.as_ref();

        let file_name = input_file
            .file_name()
            .ok_or_else(|| anyhow!("Input path has no file name: {:?}", input_file))?;

        let output_filename = format!("{}{}", prefix, file_name.to_string_lossy());

        Ok(match input_file.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        })
    }
}

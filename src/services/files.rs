use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Stores uploaded images under a configured media root.
///
/// Files are renamed to a uuid so concurrent uploads with the same original
/// name cannot clobber each other; only the generated reference is recorded
/// on the product.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes the image bytes and returns the generated file reference.
    ///
    /// The extension is taken from the uploaded file name when present,
    /// falling back to `png`.
    pub fn save_image(&self, original_name: Option<&str>, bytes: &[u8]) -> io::Result<String> {
        fs::create_dir_all(&self.root)?;

        let extension = original_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .unwrap_or("png");

        let file_name = format!("{}.{extension}", Uuid::new_v4());
        fs::write(self.root.join(&file_name), bytes)?;

        Ok(file_name)
    }
}

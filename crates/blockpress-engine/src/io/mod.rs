use std::fs;
use std::path::{Path, PathBuf};

use relative_path::RelativePath;

use crate::editing::document::ContentDocument;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Record not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a record's stored content field.
pub fn read_content(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write a serialized document back to a record's content file.
pub fn write_content(
    relative_path: &RelativePath,
    content_root: &Path,
    serialized: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(content_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, serialized).map_err(IoError::Io)
}

/// Read and normalize a record's content in one step.
pub fn load_document(
    relative_path: &RelativePath,
    content_root: &Path,
) -> Result<ContentDocument, IoError> {
    let raw = read_content(relative_path, content_root)?;
    Ok(ContentDocument::from_stored(&raw))
}

/// Scan for record content files in the content directory.
pub fn scan_content_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

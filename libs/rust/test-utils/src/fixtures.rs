//! Test fixtures with sample data.
//!
//! This module provides on-disk token files that clean up after themselves.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Unsigned JWT with the given JSON payload (`alg: none`, empty signature).
///
/// Shaped like a projected service account token; nothing in the provider
/// parses it.
#[must_use]
pub fn sample_jwt(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.")
}

/// A token file inside its own temporary directory.
///
/// Living in a private directory lets tests delete and recreate the file,
/// or point at a sibling that does not exist.
#[derive(Debug)]
pub struct TokenFile {
    dir: TempDir,
    path: PathBuf,
}

impl TokenFile {
    /// File name used inside the temporary directory.
    pub const FILE_NAME: &'static str = "azure-identity-token";

    /// Create the file with `contents`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn with_contents(contents: &str) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(Self::FILE_NAME);
        fs::write(&path, contents)?;
        Ok(Self { dir, path })
    }

    /// Create the file holding [`sample_jwt`] of `{}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn sample() -> io::Result<Self> {
        Self::with_contents(&sample_jwt("{}"))
    }

    /// Path of the token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a file in the same directory that was never created.
    #[must_use]
    pub fn missing_sibling(&self) -> PathBuf {
        self.dir.path().join("doesNotExist.txt")
    }

    /// Replace the contents the way the kubelet does: write a new file, then
    /// rename it over the old one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write or rename fails.
    pub fn rotate(&self, contents: &str) -> io::Result<()> {
        let staged = self.dir.path().join(format!("{}.new", Self::FILE_NAME));
        fs::write(&staged, contents)?;
        fs::rename(&staged, &self.path)
    }

    /// Delete the token file, keeping the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    pub fn remove(&self) -> io::Result<()> {
        fs::remove_file(&self.path)
    }
}

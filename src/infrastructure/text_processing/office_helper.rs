use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tempfile::TempDir;
use tokio::process::Command;

use crate::application::ports::FileLoaderError;

/// A single-use headless office instance for converting legacy documents.
///
/// Each session gets its own user profile and output directory; the helper
/// application cannot be driven by two conversions at once, so sessions are
/// never shared or pooled. Dropping the session removes its directory, and a
/// conversion still running when its future is dropped is killed.
pub struct OfficeHelperSession {
    binary: PathBuf,
    workdir: TempDir,
}

impl OfficeHelperSession {
    pub fn acquire(binary: &Path) -> Result<Self, FileLoaderError> {
        let workdir = tempfile::Builder::new()
            .prefix("docguard-office-")
            .tempdir()?;
        tracing::debug!(workdir = %workdir.path().display(), "Office helper session acquired");

        Ok(Self {
            binary: binary.to_path_buf(),
            workdir,
        })
    }

    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    /// Converts `source` to docx inside the session directory and returns the
    /// converted file's path.
    pub async fn convert_to_docx(
        &self,
        source: &Path,
        timeout: Duration,
    ) -> Result<PathBuf, FileLoaderError> {
        let profile = self.workdir.path().join("profile");
        let outdir = self.workdir.path().join("out");
        tokio::fs::create_dir_all(&outdir).await?;

        let child = Command::new(&self.binary)
            .arg(format!("-env:UserInstallation=file://{}", profile.display()))
            .args(["--headless", "--norestore", "--nologo"])
            .args(["--convert-to", "docx", "--outdir"])
            .arg(&outdir)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                    FileLoaderError::HelperUnavailable(format!("{}: {e}", self.binary.display()))
                }
                _ => FileLoaderError::Io(e),
            })?;

        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| FileLoaderError::Timeout(timeout))??;

        if !output.status.success() {
            return Err(FileLoaderError::ExtractionFailed(format!(
                "office helper exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| FileLoaderError::ExtractionFailed("source has no file name".into()))?;
        let converted = outdir.join(format!("{stem}.docx"));

        if !tokio::fs::try_exists(&converted).await? {
            return Err(FileLoaderError::ExtractionFailed(
                "office helper produced no output".to_string(),
            ));
        }

        Ok(converted)
    }
}

impl Drop for OfficeHelperSession {
    fn drop(&mut self) {
        tracing::debug!(workdir = %self.workdir.path().display(), "Office helper session released");
    }
}

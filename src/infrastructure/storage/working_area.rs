use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use uuid::Uuid;

/// Private copy of a submitted file inside the working area. The copy is
/// removed when this value is dropped, on every exit path.
pub struct WorkingCopy {
    file: NamedTempFile,
}

impl WorkingCopy {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Directory where submitted files are copied before extraction, so that a
/// slow extractor never holds the shared source file open.
#[derive(Debug, Clone)]
pub struct WorkingArea {
    root: PathBuf,
}

impl WorkingArea {
    pub fn new(root: PathBuf) -> std::io::Result<Self> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Copies `source` into the working area under a collision-free name that
    /// still ends with `file_name`, so the extension survives.
    #[tracing::instrument(skip(self))]
    pub async fn copy_in(&self, source: &Path, file_name: &str) -> std::io::Result<WorkingCopy> {
        let root = self.root.clone();
        let source = source.to_path_buf();
        let file_name = file_name.to_string();

        let copy = tokio::task::spawn_blocking(move || -> std::io::Result<WorkingCopy> {
            let prefix = Uuid::new_v4().to_string();
            let mut file = tempfile::Builder::new()
                .prefix(&prefix)
                .suffix(&file_name)
                .rand_bytes(0)
                .tempfile_in(&root)?;
            let mut reader = std::fs::File::open(&source)?;
            std::io::copy(&mut reader, file.as_file_mut())?;
            Ok(WorkingCopy { file })
        })
        .await
        .map_err(std::io::Error::other)??;

        tracing::debug!(copy = %copy.path().display(), "Working copy created");
        Ok(copy)
    }
}

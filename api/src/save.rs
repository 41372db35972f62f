//! Where a finished clip ends up.
//!
//! The CLI stages the bytes in a temp file next to the destination and only
//! renames it into place once everything is written. The staged file is
//! removed on drop, so an early return or a failed write leaves nothing behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::constants::DOWNLOAD_FILENAME;
use crate::services::download::DownloadedVideo;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not move clip into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Receives a downloaded clip once both relay hops succeeded.
pub trait SaveSink {
    fn save(&mut self, video: DownloadedVideo) -> Result<(), SaveError>;
}

/// Temp file that is deleted unless [`StagedFile::commit`] is called.
pub struct StagedFile {
    file: NamedTempFile,
}

impl StagedFile {
    pub fn acquire(dir: &Path) -> Result<Self, SaveError> {
        let file = tempfile::Builder::new()
            .prefix(".clipx-")
            .suffix(".part")
            .tempfile_in(dir)?;
        debug!(path = ?file.path(), "staged download");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), SaveError> {
        self.file.write_all(bytes)?;
        self.file.flush()?;
        Ok(())
    }

    /// Moves the staged file to `dest`, replacing anything already there.
    pub fn commit(self, dest: &Path) -> Result<PathBuf, SaveError> {
        self.file.persist(dest)?;
        Ok(dest.to_path_buf())
    }
}

/// Writes clips into a directory under the fixed download filename.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    saved: Option<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            saved: None,
        }
    }

    /// Path of the last clip written, if any.
    pub fn saved(&self) -> Option<&Path> {
        self.saved.as_deref()
    }
}

impl SaveSink for FileSink {
    fn save(&mut self, video: DownloadedVideo) -> Result<(), SaveError> {
        let mut staged = StagedFile::acquire(&self.dir)?;
        staged.write_all(&video.bytes)?;
        let path = staged.commit(&self.dir.join(DOWNLOAD_FILENAME))?;
        info!(path = %path.display(), bytes = video.len(), "clip saved");
        self.saved = Some(path);
        Ok(())
    }
}

/// Keeps the clip in memory so a request handler can send it back as an attachment.
#[derive(Debug, Default)]
pub struct ResponseSink {
    video: Option<DownloadedVideo>,
}

impl ResponseSink {
    pub fn take(&mut self) -> Option<DownloadedVideo> {
        self.video.take()
    }
}

impl SaveSink for ResponseSink {
    fn save(&mut self, video: DownloadedVideo) -> Result<(), SaveError> {
        self.video = Some(video);
        Ok(())
    }
}

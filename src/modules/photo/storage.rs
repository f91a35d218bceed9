use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rand::Rng;
use tokio::io::AsyncWriteExt;

use crate::api::error;
use crate::constants::DEFAULT_MAX_PHOTO_SIZE;

const FILENAME_PREFIX: &str = "photo";
const RANDOM_SUFFIX_RANGE: u32 = 1_000_000_000;

/// Flat directory of uploaded photos, addressed by generated filenames.
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    root: PathBuf,
    max_size: usize,
}

impl PhotoStorage {
    /// Opens the storage root, creating it and any missing parents.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, error::SystemError> {
        let root = root.into();
        if !root.exists() {
            info!("Creating photo directory: {}", root.display());
            std::fs::create_dir_all(&root)?;
        }
        Ok(Self { root, max_size: DEFAULT_MAX_PHOTO_SIZE })
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// `photo-<millis>-<random><.ext>`, keeping the extension of the upload.
    fn generate_filename(original_filename: &str) -> String {
        let extension = Path::new(original_filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix = rand::thread_rng().gen_range(0..RANDOM_SUFFIX_RANGE);
        format!("{FILENAME_PREFIX}-{millis}-{suffix}{extension}")
    }

    /// Writes the bytes under a freshly generated name and returns that name.
    /// An existing file is never overwritten; a clash draws a new name.
    pub async fn save(
        &self,
        bytes: &[u8],
        original_filename: &str,
    ) -> Result<String, error::SystemError> {
        if bytes.len() > self.max_size {
            return Err(error::SystemError::bad_request("Photo is too large"));
        }
        loop {
            let filename = Self::generate_filename(original_filename);
            let open = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.path_of(&filename))
                .await;

            let mut file = match open {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("Photo filename {} already taken, retrying", filename);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if let Err(e) = write_all(&mut file, bytes).await {
                drop(file);
                tokio::fs::remove_file(self.path_of(&filename)).await.ok();
                return Err(e.into());
            }

            debug!("Stored photo {} ({} bytes)", filename, bytes.len());
            return Ok(filename);
        }
    }

    pub async fn exists(&self, filename: &str) -> bool {
        tokio::fs::try_exists(self.path_of(filename)).await.unwrap_or(false)
    }

    /// Opens the file for streaming. A file removed from disk behind our
    /// back is reported as not found.
    pub async fn read(&self, filename: &str) -> Result<tokio::fs::File, error::SystemError> {
        match tokio::fs::File::open(self.path_of(filename)).await {
            Ok(file) => Ok(file),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Photo {} is missing on disk", filename);
                Err(error::SystemError::not_found("Photo file not found"))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the file; a file that is already gone is not an error.
    pub async fn delete(&self, filename: &str) -> Result<(), error::SystemError> {
        match tokio::fs::remove_file(self.path_of(filename)).await {
            Ok(()) => {
                debug!("Removed photo {}", filename);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

async fn write_all(file: &mut tokio::fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}

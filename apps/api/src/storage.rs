//! Post Store — writes generated posts to the output directory.
//!
//! One file per generation, named
//! `<keyword with spaces as underscores>_<YYYYMMDD_HHMMSS>.html`.

use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::Local;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Filesystem store for generated posts.
pub struct PostStore {
    output_dir: PathBuf,
}

impl PostStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Creates the output directory if absent. Called once at startup.
    pub async fn init(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.output_dir).await
    }

    /// Writes `content` as UTF-8 and returns the path.
    ///
    /// Two saves for the same keyword in the same second get distinct
    /// `_<n>` suffixes instead of overwriting each other; `create_new`
    /// makes the collision probe race-free.
    pub async fn save_post(&self, keyword: &str, content: &str) -> std::io::Result<PathBuf> {
        let stem = format!(
            "{}_{}",
            keyword.replace(' ', "_"),
            Local::now().format("%Y%m%d_%H%M%S")
        );

        let mut suffix = 0u32;
        loop {
            let filename = if suffix == 0 {
                format!("{stem}.html")
            } else {
                format!("{stem}_{suffix}.html")
            };
            let path = self.output_dir.join(filename);

            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut file) => {
                    file.write_all(content.as_bytes()).await?;
                    file.flush().await?;
                    debug!("Saved post to {}", path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => suffix += 1,
                Err(e) => return Err(e),
            }
        }
    }
}

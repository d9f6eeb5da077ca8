use crate::artifacts::diff::html::{self, LEGEND_HIDE_MARKER};
use crate::errors::CompareError;
use anyhow::Context;
use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REPORT_DIR_PREFIX: &str = "dompare-";
const REPORT_FILE_NAME: &str = "report.html";
pub const NO_DIFF_PLACEHOLDER: &str = "No diff is found";

/// The HTML artifact a comparison run writes its fragments to.
///
/// The artifact lives alone in a fresh temporary directory, which is what the
/// viewer server exposes. Dropping the report removes the directory, so every
/// exit path cleans up after itself.
#[derive(Debug)]
pub struct Report {
    dir: Option<TempDir>,
    dir_path: PathBuf,
    path: PathBuf,
    file: Option<File>,
    caption: String,
    created_at: DateTime<Local>,
    fragments: usize,
    finalized: bool,
}

impl Report {
    pub fn create(caption: impl Into<String>) -> anyhow::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(REPORT_DIR_PREFIX)
            .tempdir()
            .context("Failed to create temporary report directory")?;
        let dir_path = dir.path().to_path_buf();
        let path = dir_path.join(REPORT_FILE_NAME);

        let file = OpenOptions::new()
            .create_new(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to create report file: {:?}", path))?;

        tracing::debug!("Created report {}", path.display());

        Ok(Report {
            dir: Some(dir),
            dir_path,
            path,
            file: Some(file),
            caption: caption.into(),
            created_at: Local::now(),
            fragments: 0,
            finalized: false,
        })
    }

    /// Directory holding the artifact and nothing else.
    pub fn dir(&self) -> &Path {
        &self.dir_path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        REPORT_FILE_NAME
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn append(&mut self, fragment: &str) -> anyhow::Result<()> {
        if self.finalized {
            return Err(CompareError::AlreadyFinalized(self.path.clone()).into());
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Report file is closed: {:?}", self.path))?;
        file.write_all(fragment.as_bytes())
            .with_context(|| format!("Failed to append to report: {:?}", self.path))?;
        self.fragments += 1;

        Ok(())
    }

    /// Rewrites the artifact once the walk is complete.
    ///
    /// With fragments present, the last hidden legend is revealed and the
    /// fragments are wrapped into a standalone document. Without any, the file
    /// holds the placeholder text instead.
    pub fn finalize(&mut self) -> anyhow::Result<()> {
        if self.finalized {
            return Err(CompareError::AlreadyFinalized(self.path.clone()).into());
        }

        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }

        let content = if self.fragments == 0 {
            NO_DIFF_PLACEHOLDER.to_string()
        } else {
            let body = std::fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read report: {:?}", self.path))?;
            html::document(&self.title(), &reveal_last_legend(&body))
        };

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write report: {:?}", self.path))?;
        self.finalized = true;

        tracing::debug!(
            "Finalized report {} with {} fragment(s)",
            self.path.display(),
            self.fragments
        );

        Ok(())
    }

    fn title(&self) -> String {
        format!(
            "{} (generated at {})",
            self.caption,
            self.created_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

impl Drop for Report {
    fn drop(&mut self) {
        // the handle must go before the directory on platforms that lock open files
        self.file.take();

        if let Some(dir) = self.dir.take() {
            match dir.close() {
                Ok(()) => tracing::debug!("Removed report directory {}", self.dir_path.display()),
                Err(err) => tracing::warn!(
                    "Failed to remove report directory {}: {}",
                    self.dir_path.display(),
                    err
                ),
            }
        }
    }
}

/// Removes the last legend hide marker so exactly one legend stays visible.
pub fn reveal_last_legend(content: &str) -> String {
    match content.rfind(LEGEND_HIDE_MARKER) {
        Some(pos) => {
            let mut revealed = String::with_capacity(content.len());
            revealed.push_str(&content[..pos]);
            revealed.push_str(&content[pos + LEGEND_HIDE_MARKER.len()..]);
            revealed
        }
        None => content.to_string(),
    }
}

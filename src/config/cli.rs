use crate::core::{Storage, Viewer};
use crate::utils::error::{MenuError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use url::Url;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, data).await?;
        Ok(full_path)
    }
}

/// Opens pages with the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewer;

impl BrowserViewer {
    pub fn file_url(path: &Path) -> Result<Url> {
        let absolute = path.canonicalize()?;
        Url::from_file_path(&absolute).map_err(|_| MenuError::Viewer {
            path: absolute.display().to_string(),
            message: "path cannot be expressed as a file:// URL".to_string(),
        })
    }

    fn opener_command(target: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(target);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", target]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(target);
            cmd
        }
    }
}

impl Viewer for BrowserViewer {
    fn open(&self, path: &Path) -> Result<()> {
        let url = Self::file_url(path)?;
        tracing::debug!("Opening {} in browser", url);

        // The opener hands off to the browser and exits on its own. The child is
        // not waited on; the run ends right after the last page is opened.
        Self::opener_command(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| MenuError::Viewer {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

/// Used when browser opening is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewer;

impl Viewer for NoopViewer {
    fn open(&self, path: &Path) -> Result<()> {
        tracing::debug!("Viewer disabled, not opening {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_storage_round_trip_creates_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let written = storage
            .write_file("nested/out/menu_1.html", b"<html></html>")
            .await
            .unwrap();
        assert!(written.ends_with("nested/out/menu_1.html"));
        assert!(written.exists());

        let data = storage.read_file("nested/out/menu_1.html").await.unwrap();
        assert_eq!(data, b"<html></html>");
    }

    #[tokio::test]
    async fn test_local_storage_missing_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let err = storage.read_file("nope.csv").await.unwrap_err();
        assert!(matches!(err, MenuError::Io(_)));
    }

    #[test]
    fn test_file_url_is_absolute() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("menu 1.html");
        std::fs::write(&page, "x").unwrap();

        let url = BrowserViewer::file_url(&page).unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.as_str().ends_with("menu%201.html"));
    }

    #[test]
    fn test_noop_viewer() {
        assert!(NoopViewer.open(Path::new("missing.html")).is_ok());
    }
}

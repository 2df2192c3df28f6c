use crate::domain::model::{MenuGroups, MenuRecord, PublishedMenu};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Writes the whole payload and returns the path it landed at.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

/// Displays a published page, typically by handing it to a browser.
pub trait Viewer: Send + Sync {
    fn open(&self, path: &Path) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn file_pattern(&self) -> &str;
    fn menu_indices(&self) -> &[u32];
    fn open_in_browser(&self) -> bool;

    fn output_file_name(&self, menu_index: u32) -> String {
        self.file_pattern().replace("{index}", &menu_index.to_string())
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<MenuRecord>>;
    async fn transform(&self, records: Vec<MenuRecord>) -> Result<MenuGroups>;
    async fn load(&self, groups: MenuGroups) -> Result<Vec<PublishedMenu>>;
}

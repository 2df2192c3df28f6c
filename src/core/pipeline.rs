use crate::core::loader::load_records;
use crate::core::partition::partition;
use crate::core::renderer::render;
use crate::core::sorter::sort_for_display;
use crate::core::{ConfigProvider, Pipeline, Storage, Viewer};
use crate::domain::model::{MenuGroups, MenuRecord, PublishedMenu};
use crate::utils::error::{MenuError, Result};
use std::path::Path;

pub struct MenuPipeline<S: Storage, V: Viewer, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) viewer: V,
    pub(crate) config: C,
}

impl<S: Storage, V: Viewer, C: ConfigProvider> MenuPipeline<S, V, C> {
    pub fn new(storage: S, viewer: V, config: C) -> Self {
        Self {
            storage,
            viewer,
            config,
        }
    }

    async fn read_template(&self) -> Result<String> {
        let path = self.config.template_path();
        let bytes = self.storage.read_file(path).await.map_err(|e| {
            MenuError::template(format!("cannot read template {}: {}", path, e))
        })?;
        String::from_utf8(bytes)
            .map_err(|e| MenuError::template(format!("template {} is not UTF-8: {}", path, e)))
    }
}

#[async_trait::async_trait]
impl<S: Storage, V: Viewer, C: ConfigProvider> Pipeline for MenuPipeline<S, V, C> {
    async fn extract(&self) -> Result<Vec<MenuRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Reading menu from: {}", path);

        let data = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| MenuError::malformed(path, format!("cannot open: {}", e)))?;

        load_records(data.as_slice())
    }

    async fn transform(&self, records: Vec<MenuRecord>) -> Result<MenuGroups> {
        let sorted = sort_for_display(records);
        Ok(partition(sorted, self.config.menu_indices()))
    }

    async fn load(&self, groups: MenuGroups) -> Result<Vec<PublishedMenu>> {
        let template = self.read_template().await?;
        let mut published = Vec::with_capacity(groups.groups.len());

        // Groups are written one at a time; a failure keeps the pages already on disk.
        for (menu_index, records) in &groups.groups {
            let document = render(records, &template)?;

            let relative = Path::new(self.config.output_dir())
                .join(self.config.output_file_name(*menu_index));
            let relative = relative.to_string_lossy();

            tracing::debug!(
                "Writing menu {} ({} items, {} bytes) to {}",
                menu_index,
                records.len(),
                document.len(),
                relative
            );
            let written = self
                .storage
                .write_file(&relative, document.as_bytes())
                .await?;

            if self.config.open_in_browser() {
                if let Err(e) = self.viewer.open(&written) {
                    tracing::warn!("⚠️ {}", e);
                }
            }

            published.push(PublishedMenu {
                menu_index: *menu_index,
                path: written.display().to_string(),
                items: records.len(),
            });
        }

        Ok(published)
    }
}

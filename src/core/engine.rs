use crate::core::Pipeline;
use crate::domain::model::RunSummary;
use crate::utils::error::Result;

pub struct MenuEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MenuEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Loading menu...");
        let records = self.pipeline.extract().await?;
        let records_loaded = records.len();
        tracing::info!("Loaded {} menu items", records_loaded);

        tracing::info!("Sorting and grouping...");
        let groups = self.pipeline.transform(records).await?;
        if groups.dropped > 0 {
            tracing::warn!(
                "⚠️ {} item(s) have a menu index outside {:?} and were left out",
                groups.dropped,
                groups.groups.keys().collect::<Vec<_>>()
            );
        }
        let records_dropped = groups.dropped;

        tracing::info!("Rendering {} menu page(s)...", groups.groups.len());
        let menus = self.pipeline.load(groups).await?;
        for menu in &menus {
            tracing::info!("📁 Menu {} ({} items) saved to: {}", menu.menu_index, menu.items, menu.path);
        }

        Ok(RunSummary {
            records_loaded,
            records_dropped,
            menus,
        })
    }
}

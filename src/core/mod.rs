pub mod engine;
pub mod loader;
pub mod markup;
pub mod partition;
pub mod pipeline;
pub mod renderer;
pub mod sorter;
pub mod template;

pub use crate::domain::model::{MenuGroups, MenuRecord, PublishedMenu, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, Viewer};
pub use crate::utils::error::Result;

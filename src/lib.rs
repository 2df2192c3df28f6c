pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::{BrowserViewer, LocalStorage, NoopViewer};
pub use config::toml_config::TomlConfig;
pub use config::CliConfig;

pub use crate::core::{engine::MenuEngine, pipeline::MenuPipeline};
pub use domain::model::{MenuGroups, MenuRecord, PublishedMenu, RunSummary};
pub use utils::error::{MenuError, Result};

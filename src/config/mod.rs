pub mod cli;
pub mod toml_config;

use crate::core::partition::DEFAULT_MENU_INDICES;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_run_settings, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "menu-render"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Sort a menu CSV and render one HTML page per menu")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "menu/menu.csv"))]
    pub input: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "template/index.html"))]
    pub template: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "output"))]
    pub output_dir: String,

    /// Output file name; `{index}` is replaced by the menu index
    #[cfg_attr(feature = "cli", arg(long, default_value = "menu_{index}.html"))]
    pub file_pattern: String,

    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ',', default_value = "1,2"))]
    pub menu_indices: Vec<u32>,

    #[cfg_attr(feature = "cli", arg(long, help = "Write the pages without opening a browser"))]
    pub no_open: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Print the run summary as JSON"))]
    pub json_summary: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: "menu/menu.csv".to_string(),
            template: "template/index.html".to_string(),
            output_dir: "output".to_string(),
            file_pattern: "menu_{index}.html".to_string(),
            menu_indices: DEFAULT_MENU_INDICES.to_vec(),
            no_open: false,
            json_summary: false,
            json_logs: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn template_path(&self) -> &str {
        &self.template
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn file_pattern(&self) -> &str {
        &self.file_pattern
    }

    fn menu_indices(&self) -> &[u32] {
        &self.menu_indices
    }

    fn open_in_browser(&self) -> bool {
        !self.no_open
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_run_settings(
            &self.input,
            &self.template,
            &self.output_dir,
            &self.file_pattern,
            &self.menu_indices,
        )
    }
}

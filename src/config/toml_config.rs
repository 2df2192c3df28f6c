use crate::core::partition::DEFAULT_MENU_INDICES;
use crate::core::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{validate_run_settings, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub template: TemplateConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub dir: String,
    pub file_pattern: Option<String>,
    pub open_in_browser: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub indices: Vec<u32>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            indices: DEFAULT_MENU_INDICES.to_vec(),
        }
    }
}

const DEFAULT_FILE_PATTERN: &str = "menu_{index}.html";

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MENU_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MenuError::ConfigValidation {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn template_path(&self) -> &str {
        &self.template.path
    }

    fn output_dir(&self) -> &str {
        &self.output.dir
    }

    fn file_pattern(&self) -> &str {
        self.output
            .file_pattern
            .as_deref()
            .unwrap_or(DEFAULT_FILE_PATTERN)
    }

    fn menu_indices(&self) -> &[u32] {
        &self.menu.indices
    }

    fn open_in_browser(&self) -> bool {
        self.output.open_in_browser.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_run_settings(
            self.input_path(),
            self.template_path(),
            self.output_dir(),
            self.file_pattern(),
            self.menu_indices(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[input]
path = "menu/menu.csv"

[template]
path = "template/index.html"

[output]
dir = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "menu/menu.csv");
        assert_eq!(config.file_pattern(), "menu_{index}.html");
        assert_eq!(config.menu_indices(), &[1, 2]);
        assert!(config.open_in_browser());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MENU_RENDER_TEST_DIR", "/srv/menus");

        let toml_content = r#"
[input]
path = "${MENU_RENDER_TEST_DIR}/menu.csv"

[template]
path = "template/index.html"

[output]
dir = "${MENU_RENDER_TEST_DIR}/out"
open_in_browser = false

[menu]
indices = [1, 2, 3]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.path, "/srv/menus/menu.csv");
        assert_eq!(config.output.dir, "/srv/menus/out");
        assert!(!config.open_in_browser());
        assert_eq!(config.menu_indices(), &[1, 2, 3]);

        std::env::remove_var("MENU_RENDER_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[input]
path = "menu.csv"

[template]
path = "index.html"

[output]
dir = "./output"
file_pattern = "menu.html"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let err = TomlConfig::from_toml_str("[input]\npath = \"menu.csv\"\n").unwrap_err();
        assert!(matches!(err, MenuError::ConfigValidation { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
path = "lunch.csv"

[template]
path = "board.htm"

[output]
dir = "boards"
file_pattern = "board_{index}.htm"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_file_name(1), "board_1.htm");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Malformed input ({location}): {message}")]
    MalformedInput { location: String, message: String },

    #[error("Template error: {message}")]
    Template { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Could not open viewer for {path}: {message}")]
    Viewer { path: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Template,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MenuError {
    pub fn malformed(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedInput { .. } => ErrorCategory::Input,
            Self::Template { .. } => ErrorCategory::Template,
            Self::ConfigValidation { .. }
            | Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. } => ErrorCategory::Configuration,
            Self::Io(_) | Self::Serialization(_) | Self::Viewer { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // The page is already on disk when the viewer fails.
            Self::Viewer { .. } => ErrorSeverity::Low,
            Self::ConfigValidation { .. }
            | Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. } => ErrorSeverity::Medium,
            Self::MalformedInput { .. } | Self::Template { .. } => ErrorSeverity::High,
            Self::Io(_) | Self::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MalformedInput { location, message } => {
                format!("The menu file could not be read ({}): {}", location, message)
            }
            Self::Template { message } => format!("The page template is unusable: {}", message),
            Self::Io(e) => format!("A file operation failed: {}", e),
            Self::Serialization(e) => format!("Could not produce the run summary: {}", e),
            Self::ConfigValidation { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValue { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            Self::MissingConfig { field } => format!("'{}' must be configured", field),
            Self::Viewer { path, .. } => {
                format!("The page was written to {} but could not be opened", path)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check that every row has Sandwich_Name, Ingredients, Menu_Index and a numeric Price"
            }
            ErrorCategory::Template => {
                "Make sure the template is HTML with at least one closed <div> to hold the menu items"
            }
            ErrorCategory::Configuration => "Review the command line flags or the TOML config file",
            ErrorCategory::System => "Check file permissions and that the paths exist",
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

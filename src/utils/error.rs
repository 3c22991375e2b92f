use thiserror::Error;

/// Reasons a single input line cannot become a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("File name not found")]
    NameNotFound,

    #[error("Invalid or missing date")]
    InvalidDate,

    #[error("Radius not found")]
    RadiusNotFound,

    #[error("Radius is not a number: {text}")]
    MalformedRadius { text: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SortError {
    #[error("Malformed date '{date}' on record '{name}'")]
    MalformedDate { date: String, name: String },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unable to open file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sort failed: {0}")]
    Sort(#[from] SortError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid radius range input: '{input}'")]
    InvalidRange { input: String },

    #[error("Pattern compile error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Processing,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Reported, but the run still counts as successful.
    Low,
    /// Bad user input or configuration.
    Medium,
    /// The input could not be read.
    High,
    /// Internal failure.
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::FileOpen { .. } | CatalogError::Io(_) => ErrorCategory::Input,
            CatalogError::InvalidRange { .. } => ErrorCategory::Input,
            CatalogError::Sort(_) | CatalogError::Pattern(_) => ErrorCategory::Processing,
            CatalogError::Config { .. }
            | CatalogError::InvalidConfigValue { .. }
            | CatalogError::MissingConfig { .. } => ErrorCategory::Configuration,
            CatalogError::Csv(_) | CatalogError::Serialization(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::Sort(_) => ErrorSeverity::Low,
            CatalogError::Config { .. }
            | CatalogError::InvalidConfigValue { .. }
            | CatalogError::MissingConfig { .. }
            | CatalogError::InvalidRange { .. } => ErrorSeverity::Medium,
            CatalogError::FileOpen { .. } | CatalogError::Io(_) => ErrorSeverity::High,
            CatalogError::Pattern(_) | CatalogError::Csv(_) | CatalogError::Serialization(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::FileOpen { path, .. } => {
                format!("Error: Unable to open file '{}'.", path)
            }
            CatalogError::Io(e) => format!("Error while reading input: {}", e),
            CatalogError::InvalidRange { input } => {
                format!("Expected two numbers (min max), got '{}'", input)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => match self {
                CatalogError::InvalidRange { .. } => {
                    "Enter two numbers separated by whitespace, e.g. '5000 13000'"
                }
                _ => "Check that the input file exists and is readable (see --input)",
            },
            ErrorCategory::Processing => "Fix the malformed dates or use --sort-policy lenient",
            ErrorCategory::Configuration => "Check the command line flags and the TOML config file",
            ErrorCategory::Output => "Try a different --format",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

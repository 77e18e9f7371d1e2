use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("Format error on line {line}: {message}")]
    FormatError { line: usize, message: String },

    #[error("Format error: the file has no `{section}::` section")]
    MissingSectionError { section: &'static str },

    #[error("Not enough seats: {people} people but only {seats} placeable positions")]
    CapacityError { people: usize, seats: usize },

    #[error("Invalid selection '{input}': {reason}")]
    SelectionError { input: String, reason: String },

    #[error("No roster files (*.txt) found in {}", .dir.display())]
    NoCandidatesError { dir: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Capacity,
    Selection,
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

impl SeatingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeatingError::FormatError { .. } | SeatingError::MissingSectionError { .. } => {
                ErrorCategory::Input
            }
            SeatingError::CapacityError { .. } => ErrorCategory::Capacity,
            SeatingError::SelectionError { .. } | SeatingError::NoCandidatesError { .. } => {
                ErrorCategory::Selection
            }
            SeatingError::ConfigError { .. } | SeatingError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SeatingError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // re-prompted by the session, never fatal on its own
            SeatingError::SelectionError { .. } => ErrorSeverity::Low,
            SeatingError::CapacityError { .. } => ErrorSeverity::Medium,
            SeatingError::FormatError { .. }
            | SeatingError::MissingSectionError { .. }
            | SeatingError::NoCandidatesError { .. }
            | SeatingError::ConfigError { .. }
            | SeatingError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SeatingError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Whether the session loop may ask again instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SeatingError::SelectionError { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SeatingError::FormatError { .. } => {
                "Check the roster file: names look like `Name` or `Name:M`, grid rows are digits of equal width"
            }
            SeatingError::MissingSectionError { .. } => {
                "Add both a `names::` and a `grid::` line to the roster file"
            }
            SeatingError::CapacityError { .. } => {
                "Mark more grid cells as placeable (nonzero digits) or remove people from the roster"
            }
            SeatingError::SelectionError { .. } => "Type one of the numbers shown in the menu",
            SeatingError::NoCandidatesError { .. } => {
                "Put a roster .txt file in the names directory or pass --file"
            }
            SeatingError::IoError(_) => "Check that the file exists and is readable",
            SeatingError::ConfigError { .. } | SeatingError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SeatingError::FormatError { line, message } => {
                format!("The roster file is malformed (line {}): {}", line, message)
            }
            SeatingError::MissingSectionError { section } => {
                format!("The roster file is missing its `{}::` section", section)
            }
            SeatingError::CapacityError { people, seats } => format!(
                "Cannot seat {} people in a room with {} seats",
                people, seats
            ),
            SeatingError::SelectionError { input, .. } => {
                format!("'{}' is not a valid choice", input)
            }
            SeatingError::NoCandidatesError { dir } => {
                format!("No roster files were found in {}", dir.display())
            }
            SeatingError::IoError(e) => format!("Could not read or write a file: {}", e),
            SeatingError::ConfigError { message } => format!("Configuration problem: {}", message),
            SeatingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting `{}` is invalid: {}", field, reason)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeatingError>;

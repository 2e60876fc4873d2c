use thiserror::Error;

/// Result type alias using LineDiffError
pub type Result<T> = std::result::Result<T, LineDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The diff computation itself never fails. These kinds classify failures
/// at the edges: reading input files, loading render configuration and
/// serializing edit scripts. Each kind maps to a stable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    NotFound,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and optional
/// context (operation, path) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for the fallible linediff front-ends
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineDiffError {
    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Input file exists but could not be read
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    /// Input file is not valid UTF-8 text
    #[error("File is not valid UTF-8: {path}")]
    NotUtf8 { path: String },

    /// Render configuration could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Edit script could not be serialized
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl LineDiffError {
    /// Classify a `std::io::Error` raised while reading `path`
    pub fn from_io(path: impl Into<String>, err: &std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => LineDiffError::FileNotFound { path },
            std::io::ErrorKind::InvalidData => LineDiffError::NotUtf8 { path },
            _ => LineDiffError::Io {
                path,
                reason: err.to_string(),
            },
        }
    }
}

impl From<LineDiffError> for ExError {
    fn from(err: LineDiffError) -> Self {
        let message = err.to_string();
        match err {
            LineDiffError::FileNotFound { path } => ExError::new(ExErrorKind::NotFound)
                .with_path(path)
                .with_message(message),

            LineDiffError::Io { path, .. } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),

            LineDiffError::NotUtf8 { path } => ExError::new(ExErrorKind::InvalidInput)
                .with_path(path)
                .with_message(message),

            LineDiffError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            LineDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

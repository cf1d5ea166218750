use std::fmt;

#[derive(Debug)]
pub enum FolioError {
    Network(reqwest::Error),
    Json(serde_json::Error),
    Firestore { status: u16, message: String },
    InvalidDocument(String),
    Config(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Network(e) => write!(f, "Network error: {}", e),
            FolioError::Json(e) => write!(f, "JSON parsing error: {}", e),
            FolioError::Firestore { status, message } => {
                write!(f, "Firestore error ({}): {}", status, message)
            }
            FolioError::InvalidDocument(e) => write!(f, "Invalid document: {}", e),
            FolioError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::Network(e) => Some(e),
            FolioError::Json(e) => Some(e),
            FolioError::Firestore { .. }
            | FolioError::InvalidDocument(_)
            | FolioError::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        FolioError::Network(err)
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Json(err)
    }
}

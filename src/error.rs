use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Tenant '{tenant}' not found at {}", path.display())]
    TenantNotFound { tenant: String, path: PathBuf },

    #[error("No microservices found for tenant '{tenant}'")]
    NoMicroservicesFound { tenant: String },

    #[error("Tenant directory not found: {}", path.display())]
    TenantBaseNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file {}: {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid progress bar template: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, CheckerError>;

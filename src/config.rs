use serde::Deserialize;
use std::path::{Path, PathBuf};
use crate::error::{CheckerError, Result};

/// Where tenants live and which files describe each microservice.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub repo_path: PathBuf,
    pub tenants_dir: PathBuf,
    pub excluded_services: Vec<String>,
    pub branches_dir: String,
    pub uat_file: String,
    pub prod_file: String,
    /// Top-level key whose mapping holds the `image` reference.
    pub image_section: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            tenants_dir: PathBuf::from("deploy/tenants"),
            excluded_services: vec!["api-gateway".to_string()],
            branches_dir: "branches".to_string(),
            uat_file: "uat-config.yaml".to_string(),
            prod_file: "prod-config.yaml".to_string(),
            image_section: "global".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CheckerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&contents).map_err(|source| CheckerError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    pub fn with_repo_path(mut self, repo_path: impl Into<PathBuf>) -> Self {
        self.repo_path = repo_path.into();
        self
    }

    pub fn tenant_base(&self) -> PathBuf {
        self.repo_path.join(&self.tenants_dir)
    }

    pub fn tenant_root(&self, tenant: &str) -> PathBuf {
        self.tenant_base().join(tenant)
    }

    pub fn is_excluded(&self, service_name: &str) -> bool {
        self.excluded_services.iter().any(|name| name == service_name)
    }

    pub fn uat_config_path(&self, service_dir: &Path) -> PathBuf {
        service_dir.join(&self.branches_dir).join(&self.uat_file)
    }

    pub fn prod_config_path(&self, service_dir: &Path) -> PathBuf {
        service_dir.join(&self.branches_dir).join(&self.prod_file)
    }
}

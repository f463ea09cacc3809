use crate::config::Config;
use crate::error::{CheckerError, Result};
use crate::reader::read_image_ref;
use crate::tag::{classify, extract_tag};
use crate::types::ServiceTagRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct TagChecker {
    config: Config,
}

impl TagChecker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans the named tenant under the configured repository.
    pub fn scan(&self, tenant: &str) -> Result<Vec<ServiceTagRecord>> {
        let tenant_root = self.config.tenant_root(tenant);
        if !tenant_root.is_dir() {
            return Err(CheckerError::TenantNotFound {
                tenant: tenant.to_string(),
                path: tenant_root,
            });
        }
        self.scan_root(&tenant_root)
    }

    /// Builds one record per microservice directory under `tenant_root`,
    /// sorted by service name. An empty result is not an error here.
    pub fn scan_root(&self, tenant_root: &Path) -> Result<Vec<ServiceTagRecord>> {
        if !tenant_root.is_dir() {
            return Err(CheckerError::TenantNotFound {
                tenant: dir_name(tenant_root).unwrap_or_default(),
                path: tenant_root.to_path_buf(),
            });
        }

        info!("Scanning {}", tenant_root.display());
        let services = self.service_dirs(tenant_root)?;

        let progress = ProgressBar::new(services.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} services {msg}")?
                .progress_chars("#>-"),
        );

        let mut records = Vec::with_capacity(services.len());
        for (service_name, service_dir) in services {
            progress.set_message(service_name.clone());
            records.push(self.check_service(service_name, &service_dir));
            progress.inc(1);
        }
        progress.finish_and_clear();

        records.sort();
        info!("Scanned {} microservices", records.len());
        Ok(records)
    }

    fn check_service(&self, service_name: String, service_dir: &Path) -> ServiceTagRecord {
        let section = &self.config.image_section;
        let uat_image = read_image_ref(&self.config.uat_config_path(service_dir), section);
        let prod_image = read_image_ref(&self.config.prod_config_path(service_dir), section);

        let uat_tag = extract_tag(&uat_image);
        let prod_tag = extract_tag(&prod_image);
        let status = classify(&uat_tag, &prod_tag);
        debug!(
            service = %service_name,
            uat = %uat_tag,
            prod = %prod_tag,
            status = %status,
            "Classified service"
        );

        ServiceTagRecord {
            service_name,
            uat_tag,
            prod_tag,
            status,
        }
    }

    fn service_dirs(&self, tenant_root: &Path) -> Result<Vec<(String, PathBuf)>> {
        let mut services = Vec::new();
        for path in list_dirs(tenant_root)? {
            let Some(name) = dir_name(&path) else {
                warn!("Skipping directory with non UTF-8 name: {}", path.display());
                continue;
            };
            if self.config.is_excluded(&name) {
                debug!("Skipping excluded directory {}", name);
                continue;
            }
            services.push((name, path));
        }
        Ok(services)
    }

    /// Tenant names under the tenant base directory, sorted, hidden entries skipped.
    pub fn list_tenants(&self) -> Result<Vec<String>> {
        let base = self.config.tenant_base();
        if !base.is_dir() {
            return Err(CheckerError::TenantBaseNotFound { path: base });
        }

        let mut tenants: Vec<String> = list_dirs(&base)?
            .iter()
            .filter_map(|path| dir_name(path))
            .filter(|name| !name.starts_with('.'))
            .collect();
        tenants.sort();
        Ok(tenants)
    }
}

fn list_dirs(parent: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(parent).map_err(|source| CheckerError::Io {
        path: parent.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) if entry.path().is_dir() => dirs.push(entry.path()),
            Ok(_) => {}
            Err(e) => warn!("Failed to read entry in {}: {}", parent.display(), e),
        }
    }
    Ok(dirs)
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_string)
}

use crate::{
    config::Config,
    error::CheckerError,
    runner::TagChecker,
    types::{ServiceTagRecord, Status},
};
use std::path::Path;

fn write_env_file(service_dir: &Path, file: &str, image: &str) {
    let branches = service_dir.join("branches");
    std::fs::create_dir_all(&branches).unwrap();
    std::fs::write(
        branches.join(file),
        format!("global:\n  image: {}\n  replicas: 1\n", image),
    )
    .unwrap();
}

fn add_service(tenant_root: &Path, name: &str, uat: Option<&str>, prod: Option<&str>) {
    let service_dir = tenant_root.join(name);
    std::fs::create_dir_all(&service_dir).unwrap();
    if let Some(image) = uat {
        write_env_file(&service_dir, "uat-config.yaml", image);
    }
    if let Some(image) = prod {
        write_env_file(&service_dir, "prod-config.yaml", image);
    }
}

fn checker_for(repo: &Path) -> TagChecker {
    TagChecker::new(Config::default().with_repo_path(repo))
}

#[test]
fn test_scan_excludes_gateway_and_sorts() {
    let repo = tempfile::tempdir().unwrap();
    let tenant_root = repo.path().join("deploy/tenants/acme");

    add_service(&tenant_root, "payments", Some("reg/payments:v1.3.0"), Some("reg/payments:v1.2.9"));
    add_service(&tenant_root, "auth", Some("reg/auth:v1.2.3"), Some("reg/auth:v1.2.3"));
    add_service(&tenant_root, "catalog", Some("reg/catalog:v1.2.3"), Some("reg/catalog:v1.2.4"));
    add_service(&tenant_root, "api-gateway", Some("reg/gw:v9.9.9"), Some("reg/gw:v1.0.0"));
    std::fs::write(tenant_root.join("README.md"), "not a service").unwrap();

    let records = checker_for(repo.path()).scan("acme").unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.service_name.as_str()).collect();
    assert_eq!(names, vec!["auth", "catalog", "payments"]);
    assert_eq!(records[0].status, Status::Aligned);
    assert_eq!(records[1].status, Status::ProdNewer);
    assert_eq!(records[2].status, Status::UatNewer);
    assert_eq!(records[2].uat_tag, "v1.3.0");
    assert_eq!(records[2].prod_tag, "v1.2.9");
}

#[test]
fn test_scan_absorbs_bad_service_configs() {
    let repo = tempfile::tempdir().unwrap();
    let tenant_root = repo.path().join("deploy/tenants/acme");

    add_service(&tenant_root, "no-prod", Some("reg/a:v1.0.0"), None);
    add_service(&tenant_root, "floating", Some("reg/b:latest"), Some("reg/b:v1.0.0"));
    add_service(&tenant_root, "empty-dir", None, None);
    let broken = tenant_root.join("broken");
    std::fs::create_dir_all(broken.join("branches")).unwrap();
    std::fs::write(broken.join("branches/uat-config.yaml"), "global: [oops").unwrap();
    write_env_file(&broken, "prod-config.yaml", "reg/c:v2.0.0");

    let records = checker_for(repo.path()).scan("acme").unwrap();
    let status_of = |name: &str| {
        records
            .iter()
            .find(|r| r.service_name == name)
            .map(|r| r.status)
            .unwrap()
    };

    assert_eq!(records.len(), 4);
    assert_eq!(status_of("no-prod"), Status::MissingConfig);
    assert_eq!(status_of("floating"), Status::NeedsReview);
    assert_eq!(status_of("broken"), Status::MissingConfig);
    // Neither environment configured: both tags are the sentinel.
    assert_eq!(status_of("empty-dir"), Status::Aligned);
}

#[test]
fn test_scan_missing_tenant() {
    let repo = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(repo.path().join("deploy/tenants")).unwrap();

    let err = checker_for(repo.path()).scan("ghost").unwrap_err();
    match err {
        CheckerError::TenantNotFound { tenant, path } => {
            assert_eq!(tenant, "ghost");
            assert_eq!(path, repo.path().join("deploy/tenants/ghost"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_scan_root_with_only_excluded_dir_is_empty() {
    let repo = tempfile::tempdir().unwrap();
    let tenant_root = repo.path().join("solo");
    add_service(&tenant_root, "api-gateway", Some("reg/gw:v1.0.0"), None);

    let records = checker_for(repo.path()).scan_root(&tenant_root).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_custom_layout() {
    let repo = tempfile::tempdir().unwrap();
    let envs_dir = repo.path().join("tenants/acme/orders/envs");
    std::fs::create_dir_all(&envs_dir).unwrap();
    std::fs::write(envs_dir.join("uat.yaml"), "app:\n  image: reg/orders:2.0.0\n").unwrap();
    std::fs::write(envs_dir.join("prod.yaml"), "app:\n  image: reg/orders:1.9.9\n").unwrap();

    let config = Config {
        repo_path: repo.path().to_path_buf(),
        tenants_dir: "tenants".into(),
        branches_dir: "envs".to_string(),
        uat_file: "uat.yaml".to_string(),
        prod_file: "prod.yaml".to_string(),
        image_section: "app".to_string(),
        ..Config::default()
    };

    let records = TagChecker::new(config).scan("acme").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, Status::UatNewer);
}

#[test]
fn test_list_tenants_skips_hidden_and_files() {
    let repo = tempfile::tempdir().unwrap();
    let base = repo.path().join("deploy/tenants");
    for name in ["zeta", "acme", ".git", "beta"] {
        std::fs::create_dir_all(base.join(name)).unwrap();
    }
    std::fs::write(base.join("notes.txt"), "").unwrap();

    let tenants = checker_for(repo.path()).list_tenants().unwrap();
    assert_eq!(tenants, vec!["acme", "beta", "zeta"]);

    let err = checker_for(&repo.path().join("elsewhere")).list_tenants().unwrap_err();
    assert!(matches!(err, CheckerError::TenantBaseNotFound { .. }));
}

#[test]
fn test_record_ordering() {
    let record = |name: &str| ServiceTagRecord {
        service_name: name.to_string(),
        uat_tag: "v1.0.0".to_string(),
        prod_tag: "v1.0.0".to_string(),
        status: Status::Aligned,
    };

    assert!(record("Zeta") < record("alpha"));
    assert!(record("alpha") < record("beta"));
}

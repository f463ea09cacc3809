use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tag_drift::{
    config::Config, error::CheckerError, logging, report, runner::TagChecker,
};

#[derive(Parser)]
#[command(name = "tag-drift")]
#[command(about = "Compare UAT and PROD image tags for the microservices of a tenant")]
struct Cli {
    /// Tenant to analyze; omit to list available tenants
    tenant: Option<String>,

    #[arg(hide = true)]
    extra: Vec<String>,

    /// YAML file overriding the default scan layout
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Root of the pipelines repository
    #[arg(short, long, value_name = "DIR", env = "REPO_PATH")]
    repo_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(repo_path) = cli.repo_path {
        config = config.with_repo_path(repo_path);
    }

    println!("Repository path: {}", config.repo_path.display());
    println!();

    let checker = TagChecker::new(config);

    let tenant = match cli.tenant {
        Some(tenant) if cli.extra.is_empty() => tenant,
        _ => {
            print_usage(&checker);
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("Analyzing microservices of tenant: {}", tenant);
    println!();

    let records = match checker.scan(&tenant) {
        Ok(records) => records,
        Err(e @ CheckerError::TenantNotFound { .. }) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if records.is_empty() {
        eprintln!("Error: {}", CheckerError::NoMicroservicesFound { tenant });
        if let Ok(tenants) = checker.list_tenants() {
            println!();
            print_tenants(&tenants);
        }
        return Ok(ExitCode::FAILURE);
    }

    report::print_report(&records, checker.config());
    Ok(ExitCode::SUCCESS)
}

fn print_usage(checker: &TagChecker) {
    println!("Usage: tag-drift <TENANT>");
    println!();

    match checker.list_tenants() {
        Ok(tenants) if !tenants.is_empty() => print_tenants(&tenants),
        Ok(_) => {
            println!("Available tenants:");
            println!("   No tenants found!");
        }
        Err(e) => {
            println!("Available tenants:");
            println!("   No tenants found! {}", e);
            println!("   Check the repository path configuration.");
        }
    }

    println!();
    println!("Example: tag-drift acme");
    println!();
    println!("To change the repository path:");
    println!("   export REPO_PATH='/path/to/your/pipelines-repo'");
    println!("   or pass --repo-path <DIR>");
}

fn print_tenants(tenants: &[String]) {
    println!("Available tenants:");
    for tenant in tenants {
        println!("  - {}", tenant);
    }
}

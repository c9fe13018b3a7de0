use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use attest::config::Config;
use attest::discovery::discover_suites;
use attest::yaml::{load_suite, run_suite, CheckResult, Subject};

#[derive(Parser)]
#[command(name = "attest")]
#[command(about = "Run YAML-defined contains checks with fluent-style reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a suite file (or discover and run every suite in a directory)
    Run {
        /// Path to suite YAML file or directory
        path: PathBuf,

        /// Suite file pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Root directory for suite discovery (overrides config)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Disable recursive directory scanning
        #[arg(long)]
        no_recursive: bool,

        /// Path to config file (default: auto-discover)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// List matched suite files without running them
        #[arg(long)]
        list_suites: bool,
    },

    /// Validate suite files without running their checks
    Check {
        /// Paths to suite YAML files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            path,
            pattern,
            root,
            no_recursive,
            config: config_path,
            list_suites,
        } => {
            if path.is_file() {
                // Single file mode - run directly
                let passed = run_single_suite(&path)?;
                if !passed {
                    std::process::exit(1);
                }
            } else {
                // Directory mode - use discovery
                let (config, config_dir) = load_or_discover_config(&path, config_path.as_deref());
                let config = config.with_overrides(pattern, root, no_recursive);
                let search_root = config.search_dir(&path, config_dir.as_deref());

                if list_suites {
                    list_discovered_suites(&search_root, &config)?;
                } else {
                    run_suites_in_directory(&search_root, &config)?;
                }
            }
        }
        Commands::Check { paths } => {
            check_suites(&paths);
        }
    }

    Ok(())
}

/// Load config from explicit path or discover from directory.
fn load_or_discover_config(
    start_dir: &Path,
    explicit_path: Option<&Path>,
) -> (Config, Option<PathBuf>) {
    match explicit_path {
        Some(path) => Config::load(path)
            .map(|(c, d)| (c, Some(d)))
            .unwrap_or_else(|_| (Config::default(), None)),
        None => Config::discover(start_dir)
            .map(|(c, d)| (c, Some(d)))
            .unwrap_or_else(|| (Config::default(), None)),
    }
}

/// List discovered suite files without running them.
fn list_discovered_suites(dir: &Path, config: &Config) -> Result<()> {
    let suites = discover_suites(dir, config)?;

    println!();
    println!("Discovered {} suite file(s):", suites.len());
    println!();

    for path in &suites {
        println!("  {}", path.display());
    }

    println!();
    Ok(())
}

/// Print check results and summary. Returns true if all passed.
fn print_results(results: &[(String, CheckResult)]) -> bool {
    let mut passed = 0;
    let mut failed = 0;

    for (description, result) in results {
        match result {
            CheckResult::Pass => {
                println!("  \x1b[32m✓\x1b[0m {}", description);
                passed += 1;
            }
            CheckResult::Fail { reason } => {
                println!("  \x1b[31m✗\x1b[0m {}", description);
                let mut lines = reason.lines();
                if let Some(first) = lines.next() {
                    println!("    └─ {}", first);
                }
                for line in lines {
                    println!("       {}", line);
                }
                failed += 1;
            }
        }
    }

    let all_passed = failed == 0;
    println!();
    if all_passed {
        println!("\x1b[32mResults: {}/{} passed\x1b[0m", passed, passed + failed);
    } else {
        println!("\x1b[31mResults: {}/{} passed\x1b[0m", passed, passed + failed);
    }
    all_passed
}

fn run_single_suite(suite_path: &Path) -> Result<bool> {
    let suite = load_suite(suite_path)
        .with_context(|| format!("Failed to load suite file: {:?}", suite_path))?;

    println!();
    println!("Running: \"{}\"", suite.name);
    println!("Subject: {}", describe_subject(&suite.subject));
    println!();

    let results = run_suite(&suite);
    Ok(print_results(&results))
}

fn describe_subject(subject: &Subject) -> String {
    match subject {
        Subject::Text(text) => format!("{:?}", text),
        Subject::Numbers(numbers) => format!("{:?}", numbers),
    }
}

fn run_suites_in_directory(dir: &Path, config: &Config) -> Result<()> {
    let suite_files = discover_suites(dir, config)?;

    if suite_files.is_empty() {
        println!();
        println!(
            "No suite files found matching pattern '{}' in {:?}",
            config.suite_pattern, dir
        );
        return Ok(());
    }

    println!();
    println!(
        "Found {} suite file(s) matching '{}'",
        suite_files.len(),
        config.suite_pattern
    );

    let mut total_passed = 0;
    let mut total_failed = 0;

    for path in suite_files {
        match run_single_suite(&path) {
            Ok(passed) => {
                if passed {
                    total_passed += 1;
                } else {
                    total_failed += 1;
                }
            }
            Err(e) => {
                println!("\x1b[31mError running {:?}: {}\x1b[0m", path, e);
                total_failed += 1;
            }
        }
        println!();
        println!("{}", "─".repeat(60));
    }

    println!();
    println!("Total: {} passed, {} failed", total_passed, total_failed);

    if total_failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Validate suite files without running their checks.
fn check_suites(paths: &[PathBuf]) {
    let mut invalid = 0;

    println!();
    for path in paths {
        match load_suite(path) {
            Ok(suite) => {
                println!(
                    "  \x1b[32m✓\x1b[0m {} ({} check(s))",
                    path.display(),
                    suite.checks.len()
                );
            }
            Err(error) => {
                println!("  \x1b[31m✗\x1b[0m {}", path.display());
                println!("    └─ {}", error);
                invalid += 1;
            }
        }
    }
    println!();

    if invalid > 0 {
        std::process::exit(1);
    }
}

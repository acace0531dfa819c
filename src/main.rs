use std::path::PathBuf;
use std::process::ExitCode;

use flipbook_capture::config;
use flipbook_capture::config::job::parse_batch_file;
use flipbook_capture::pipeline::job_runner::JobConfig;
use flipbook_capture::pipeline::orchestrator::run_all_jobs;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: flipbook_capture --url URL --iterations N --folder DIR");
    eprintln!("       flipbook_capture --batch FILE");
    eprintln!();
    eprintln!("Capture a Flipbook page by page into normalized JPEG images.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --url URL         Flipbook URL to capture");
    eprintln!("  --iterations N    Number of page-turn iterations (2 pages each)");
    eprintln!("  --folder DIR      Output directory (cleared before the job)");
    eprintln!("  --batch FILE      Batch file, one 'url;iterations;folder' row per line");
    eprintln!("  --config PATH     Settings YAML (default: ./config.yaml if present)");
}

/// Parsed command-line options.
#[derive(Default)]
struct CliArgs {
    url: Option<String>,
    iterations: Option<u32>,
    folder: Option<PathBuf>,
    batch: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("Missing value for {flag}"))
        };

        match arg.as_str() {
            "--url" => parsed.url = Some(value("--url")?),
            "--iterations" => {
                let v = value("--iterations")?;
                let n: u32 = v
                    .parse()
                    .map_err(|_| format!("Invalid iteration count: '{v}'"))?;
                parsed.iterations = Some(n);
            }
            "--folder" => parsed.folder = Some(PathBuf::from(value("--folder")?)),
            "--batch" => parsed.batch = Some(PathBuf::from(value("--batch")?)),
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            other => return Err(format!("Unknown argument: '{other}'")),
        }
    }

    Ok(parsed)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return if args.is_empty() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        eprintln!("flipbook_capture {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let cli = match parse_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: {e}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let settings = match config::load_settings(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR: Failed to load settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Assemble the job list: a batch file, or a single explicit triple.
    let job_configs: Vec<JobConfig> = if let Some(batch_path) = &cli.batch {
        match parse_batch_file(batch_path) {
            Ok(jobs) => jobs
                .into_iter()
                .map(|j| JobConfig {
                    source: j.source,
                    iterations: j.iterations,
                    output_dir: j.folder,
                })
                .collect(),
            Err(e) => {
                eprintln!("ERROR: Failed to read batch file {}: {e}", batch_path.display());
                return ExitCode::FAILURE;
            }
        }
    } else {
        match (cli.url, cli.iterations, cli.folder) {
            (Some(url), Some(iterations), Some(folder)) => vec![JobConfig {
                source: url,
                iterations,
                output_dir: folder,
            }],
            _ => {
                eprintln!(
                    "ERROR: Provide either --batch or all of --url, --iterations and --folder."
                );
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    };

    let results = run_all_jobs(&job_configs, &settings);

    let mut has_error = false;
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(job_result) => {
                eprintln!(
                    "OK: {} -> {} ({} pages)",
                    job_result.source,
                    job_result.output_dir.display(),
                    job_result.pages_written
                );
            }
            Err(e) => {
                eprintln!(
                    "ERROR: {} -> {}: {e}",
                    job_configs[i].source,
                    job_configs[i].output_dir.display()
                );
                has_error = true;
            }
        }
    }

    if has_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

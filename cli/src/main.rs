//! `radethix`: command-line client for the RAD-ETHIX triage backend.
//!
//! Drives the same workflow as the browser client (login, analyze, report)
//! with the session persisted in a JSON file under `--state-dir`.

mod backend;
mod output;
mod store;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;
use triage::auth::{validate_login, validate_signup};
use triage::doctors::featured_fee;
use triage::report::{download_body, download_filename};
use triage::selection::FindingsView;
use triage::session::{SessionStore, Theme};
use triage::upload::{SelectedFile, matches_accept};
use triage::workflow::{AnalysisResult, AnalysisWorkflow, AnalyzeStart};
use triage::{ApiConfig, ApiError, Operation, ReportRequest, User};

use backend::{Backend, DEFAULT_TIMEOUT_SECS};
use store::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `radethix login <patient-id>` first")]
    NotLoggedIn,
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("{message} ({source})")]
    Api { message: &'static str, source: ApiError },
    #[error("io error on {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("heatmap is not valid base64: {0}")]
    Heatmap(String),
    #[error("backend returned no heatmap")]
    NoHeatmap,
}

impl CliError {
    fn api(operation: Operation) -> impl FnOnce(ApiError) -> Self {
        move |source| Self::Api { message: source.user_message(operation), source }
    }

    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io { path: path.to_owned(), source }
    }
}

#[derive(Parser, Debug)]
#[command(name = "radethix", about = "RAD-ETHIX chest X-ray triage CLI")]
struct Cli {
    #[arg(long, env = "RADETHIX_API_BASE", default_value = triage::config::DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, env = "RADETHIX_STATE_DIR", default_value = ".radethix")]
    state_dir: PathBuf,

    #[arg(long, env = "RADETHIX_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with an existing patient ID.
    Login { patient_id: String },
    /// Create a patient account.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        gender: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the logged-in patient.
    Whoami,
    /// Analyze an X-ray image.
    Analyze {
        file: PathBuf,
        /// Show only the top non-critical findings plus pneumonia.
        #[arg(long)]
        legacy: bool,
        /// Write the decoded heatmap PNG here.
        #[arg(long)]
        heatmap_out: Option<PathBuf>,
    },
    /// Analyze an image, then generate and save the medical report.
    Report {
        file: PathBuf,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// List consultation doctors.
    Doctors,
    /// Show or set the theme preference.
    Theme { value: Option<String> },
}

struct Context {
    backend: Backend,
    session: SessionStore<FileStore>,
}

impl Context {
    fn user(&self) -> Result<User, CliError> {
        self.session.load().ok_or(CliError::NotLoggedIn)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let backend = Backend::new(ApiConfig::new(&cli.api_base), Duration::from_secs(cli.timeout_secs))
        .map_err(|e| CliError::Api { message: "could not build HTTP client", source: e })?;
    let ctx = Context { backend, session: SessionStore::new(FileStore::new(&cli.state_dir)) };

    match cli.command {
        Command::Login { patient_id } => run_login(&ctx, &patient_id).await,
        Command::Signup { name, age, gender } => run_signup(&ctx, &name, &age, &gender).await,
        Command::Logout => {
            ctx.session.clear();
            println!("Logged out.");
            Ok(())
        }
        Command::Whoami => {
            println!("{}", output::user(&ctx.user()?));
            Ok(())
        }
        Command::Analyze { file, legacy, heatmap_out } => {
            run_analyze_command(&ctx, &file, legacy, heatmap_out.as_deref()).await
        }
        Command::Report { file, out } => run_report(&ctx, &file, &out).await,
        Command::Doctors => {
            print!("{}", output::doctors(featured_fee(rand::random::<f64>())));
            Ok(())
        }
        Command::Theme { value } => run_theme(&ctx, value.as_deref()),
    }
}

async fn run_login(ctx: &Context, patient_id: &str) -> Result<(), CliError> {
    let request = validate_login(patient_id).map_err(CliError::InvalidInput)?;
    let user = ctx.backend.login(&request).await.map_err(CliError::api(Operation::Login))?;
    ctx.session.save(&user);
    tracing::info!(patient_id = %user.patient_id, "logged in");
    println!("Welcome, {}.", user.name);
    Ok(())
}

async fn run_signup(ctx: &Context, name: &str, age: &str, gender: &str) -> Result<(), CliError> {
    let request = validate_signup(name, age, gender).map_err(CliError::InvalidInput)?;
    let user = ctx.backend.signup(&request).await.map_err(CliError::api(Operation::Signup))?;
    ctx.session.save(&user);
    println!("Account created. Your patient ID is {}.", user.patient_id);
    Ok(())
}

fn read_selected(path: &Path) -> Result<SelectedFile, CliError> {
    let bytes = std::fs::read(path).map_err(CliError::io(path))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let file = SelectedFile::new(name, "", bytes);
    if !matches_accept(&file.name, &file.mime) {
        tracing::warn!(file = %file.name, mime = %file.mime, "file does not look like an X-ray image; sending anyway");
    }
    Ok(file)
}

/// Run one analyze cycle through the workflow state machine.
async fn analyze(ctx: &Context, path: &Path) -> Result<AnalysisWorkflow, CliError> {
    let mut workflow = AnalysisWorkflow::default();
    workflow.select(read_selected(path)?);
    let AnalyzeStart::Started { request, file } = workflow.begin_analyze() else {
        return Err(CliError::InvalidInput(triage::workflow::NO_FILE_MESSAGE));
    };
    tracing::info!(file = %file.name, bytes = file.len(), "uploading for analysis");

    let mut responded = false;
    let outcome = ctx.backend.predict(&file, || responded = true).await;
    if responded {
        workflow.mark_responded(request);
        tracing::debug!(progress = workflow.progress(), "response headers received");
    }
    match outcome {
        Ok(response) => {
            workflow.complete(request, &response);
            Ok(workflow)
        }
        Err(e) => {
            workflow.fail(request);
            Err(CliError::api(Operation::Analyze)(e))
        }
    }
}

fn analysis_result(workflow: &AnalysisWorkflow) -> Result<&AnalysisResult, CliError> {
    workflow
        .result()
        .ok_or_else(|| CliError::api(Operation::Analyze)(ApiError::Decode("no result".to_owned())))
}

async fn run_analyze_command(ctx: &Context, path: &Path, legacy: bool, heatmap_out: Option<&Path>) -> Result<(), CliError> {
    let workflow = analyze(ctx, path).await?;
    let view = if legacy { FindingsView::Legacy } else { FindingsView::Standard };
    print!("{}", output::analysis(analysis_result(&workflow)?, view));

    if let Some(out) = heatmap_out {
        let heatmap = workflow.heatmap().ok_or(CliError::NoHeatmap)?;
        let png = heatmap.decode_png().map_err(|e| CliError::Heatmap(e.to_string()))?;
        std::fs::write(out, png).map_err(CliError::io(out))?;
        println!("\nHeatmap written to {}", out.display());
    }
    println!("\n{}", triage::workflow::ANALYSIS_COMPLETE_MESSAGE);
    Ok(())
}

async fn run_report(ctx: &Context, path: &Path, out_dir: &Path) -> Result<(), CliError> {
    let user = ctx.user()?;
    let workflow = analyze(ctx, path).await?;
    let result = analysis_result(&workflow)?;

    println!("{}", triage::report::LOADING_MESSAGE);
    let request = ReportRequest::new(&user, &result.findings);
    let report = ctx
        .backend
        .generate_report(&request)
        .await
        .map_err(CliError::api(Operation::Report))?;

    std::fs::create_dir_all(out_dir).map_err(CliError::io(out_dir))?;
    let target = out_dir.join(download_filename(&user.patient_id, OffsetDateTime::now_utc().date()));
    std::fs::write(&target, download_body(&report.report_text, &report.citations)).map_err(CliError::io(&target))?;
    println!("Report saved to {}", target.display());
    Ok(())
}

fn run_theme(ctx: &Context, value: Option<&str>) -> Result<(), CliError> {
    if let Some(raw) = value {
        let theme: Theme = raw.parse().map_err(|_| CliError::InvalidInput("theme must be `dark` or `light`"))?;
        ctx.session.save_theme(theme);
    }
    println!("{}", ctx.session.load_theme());
    Ok(())
}

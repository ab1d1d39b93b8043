//! Question Paper CLI
//!
//! Usage:
//!   question-paper --topic <TOPIC> --difficulty <LEVEL> [OPTIONS]
//!
//! Options:
//!   -i, --input <FILE>      Generator response JSON instead of local templates
//!   -g, --geometry <FILE>   Page geometry (TOML format)
//!   -f, --format <FORMAT>   pdf, svg or text
//!   -o, --out-dir <DIR>     Directory for output files
//!   --seed <N>              Seed for template selection
//!   -v, --verbose           Debug logging
//!   -h, --help              Print help

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use question_paper::request::parse_response;
use question_paper::{
    handle_request, render_paper, Difficulty, OutputFormat, PageGeometry, PaperError,
    PaperRequest, PaperState, QuestionRecord, QuestionSource, RenderConfig, TemplateSource,
};

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Pdf,
    Svg,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pdf => OutputFormat::Pdf,
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Parser)]
#[command(name = "question-paper")]
#[command(about = "Generate a paginated question paper with an answer key")]
struct Cli {
    /// Topic of the paper
    #[arg(short, long, default_value = "")]
    topic: String,

    /// Difficulty: easy, medium or hard
    #[arg(short, long, default_value = "")]
    difficulty: String,

    /// Generator response JSON ({"questions": [...]}) to use instead of templates
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Page geometry file (TOML format)
    #[arg(short, long)]
    geometry: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pdf")]
    format: FormatArg,

    /// Directory for output files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Seed for template selection (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Questions read up front from a generator response
struct FixedSource(Option<Result<Vec<QuestionRecord>, PaperError>>);

impl QuestionSource for FixedSource {
    fn fetch(&mut self, _: &str, _: Difficulty) -> Result<Vec<QuestionRecord>, PaperError> {
        self.0
            .take()
            .unwrap_or_else(|| Err(PaperError::network("response already consumed")))
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let geometry = match &cli.geometry {
        Some(path) => match PageGeometry::from_file(path) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Error loading geometry '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => PageGeometry::default(),
    };

    let request = PaperRequest::new(cli.topic.clone(), cli.difficulty.clone());
    let now = Utc::now();

    let state = match &cli.input {
        Some(path) => {
            let fetched = fs::read_to_string(path)
                .map_err(|e| PaperError::network(format!("{}: {}", path.display(), e)))
                .and_then(|body| parse_response(&body));
            let mut source = FixedSource(Some(fetched));
            handle_request(&PaperState::Idle, &request, &mut source, now)
        }
        None => {
            let rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut source = TemplateSource::new(rng);
            handle_request(&PaperState::Idle, &request, &mut source, now)
        }
    };

    let paper = match state {
        PaperState::Success(paper) => paper,
        PaperState::Failed(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        PaperState::Idle | PaperState::Generating => {
            eprintln!("Error: no paper was generated");
            std::process::exit(1);
        }
    };

    let config = RenderConfig::new()
        .with_geometry(geometry)
        .with_format(cli.format.into());

    let files = match render_paper(&paper, &config, now.timestamp_millis()) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = fs::create_dir_all(&cli.out_dir) {
        eprintln!("Error creating '{}': {}", cli.out_dir.display(), e);
        std::process::exit(1);
    }
    for file in files {
        let path = cli.out_dir.join(&file.name);
        if let Err(e) = fs::write(&path, &file.bytes) {
            eprintln!("Error writing '{}': {}", path.display(), e);
            std::process::exit(1);
        }
        info!(path = %path.display(), bytes = file.bytes.len(), "wrote output");
        println!("{}", path.display());
    }
}

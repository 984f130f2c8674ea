use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use resmerge::config::{DEFAULT_DEDUP_THRESHOLD, DEFAULT_MAX_SKILLS};
use resmerge::extract::ResumeExtractor;
use resmerge::input::{check_merge_count, check_upload_count, load_document, load_resume};
use resmerge::merge::merge_resumes;
use resmerge::models::{ExperienceSort, MergeSettings, ParsedResume, ResumeSection};
use resmerge::stats::ExtractionStats;
use resmerge::taxonomy::SkillTaxonomy;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "resmerge")]
#[command(about = "Extract structured data from resumes and merge several into one profile")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract structured resumes from 2 to 5 plain-text documents
    Parse(ParseArgs),
    /// Merge 2 or more resumes (text documents or parsed JSON) into one
    Merge(MergeArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Plain-text resume documents (.txt, .text, .md)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON skill taxonomy replacing the built-in one
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct MergeArgs {
    /// Resumes to merge, in priority order (.txt/.text/.md documents or .json parsed resumes)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON merge settings; flags below override individual fields
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Keep at most this many skills after ranking [default: 30]
    #[arg(long)]
    max_skills: Option<usize>,

    /// Keep every skill
    #[arg(long, conflicts_with = "max_skills")]
    all_skills: bool,

    /// Fuzzy-match threshold for skills and projects, 0-100 [default: 85]
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// Experience ordering
    #[arg(long, value_enum)]
    sort_experience_by: Option<ExperienceSort>,

    /// Sections to keep in the output (repeatable); all by default
    #[arg(long = "include", value_enum)]
    include_sections: Vec<ResumeSection>,

    /// JSON skill taxonomy used for text documents
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ParsedDocument<'a> {
    filename: String,
    data: &'a ParsedResume,
}

#[derive(Serialize)]
struct MergeResponse {
    success: bool,
    merged_resume: ParsedResume,
}

fn build_extractor(taxonomy: Option<&Path>) -> Result<ResumeExtractor> {
    match taxonomy {
        Some(path) => {
            let taxonomy = SkillTaxonomy::from_json_file(path)?;
            info!(keywords = taxonomy.len(), "Loaded skill taxonomy");
            Ok(ResumeExtractor::with_taxonomy(taxonomy))
        }
        None => Ok(ResumeExtractor::new()),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, value)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn run_parse(args: ParseArgs) -> Result<()> {
    check_upload_count(args.files.len())?;
    let extractor = build_extractor(args.taxonomy.as_deref())?;

    let texts = args
        .files
        .iter()
        .map(|path| load_document(path))
        .collect::<Result<Vec<_>, _>>()?;

    let start = Instant::now();
    let stats = ExtractionStats::new();
    let resumes = extractor.extract_all(&texts, &stats);
    let elapsed = start.elapsed();

    let documents: Vec<_> = args
        .files
        .iter()
        .zip(&resumes)
        .map(|(path, data)| ParsedDocument {
            filename: file_name(path),
            data,
        })
        .collect();
    write_json(&documents, args.output.as_deref())?;

    eprintln!();
    eprintln!("=== Summary ===");
    eprintln!("Extraction time:    {:.3}s", elapsed.as_secs_f64());
    eprintln!("Documents:          {}", stats.documents());
    eprintln!("Empty documents:    {}", stats.empty());
    eprintln!("Skills found:       {}", stats.skills());
    eprintln!("Experience entries: {}", stats.experience());
    eprintln!("Education entries:  {}", stats.education());
    eprintln!("Project entries:    {}", stats.projects());

    Ok(())
}

fn load_settings(args: &MergeArgs) -> Result<MergeSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid settings JSON in: {}", path.display()))?
        }
        None => MergeSettings::default(),
    };

    if let Some(max) = args.max_skills {
        settings.max_skills = Some(max);
    }
    if args.all_skills {
        settings.max_skills = None;
    }
    if let Some(threshold) = args.threshold {
        settings.deduplicate_threshold = threshold;
    }
    if let Some(sort) = args.sort_experience_by {
        settings.sort_experience_by = sort;
    }
    if !args.include_sections.is_empty() {
        settings.include_sections = args.include_sections.clone();
    }

    info!(
        max_skills = ?settings.max_skills,
        threshold = settings.deduplicate_threshold,
        sort = ?settings.sort_experience_by,
        "Merge settings"
    );
    Ok(settings)
}

fn run_merge(args: MergeArgs) -> Result<()> {
    check_merge_count(args.files.len())?;
    let settings = load_settings(&args)?;
    let extractor = build_extractor(args.taxonomy.as_deref())?;

    let resumes = args
        .files
        .iter()
        .map(|path| load_resume(path, &extractor))
        .collect::<Result<Vec<_>, _>>()?;

    let start = Instant::now();
    let mut merged = merge_resumes(&resumes, &settings)?;
    merged.retain_sections(&settings.include_sections);
    let elapsed = start.elapsed();

    let skills = merged.skills.len();
    let experience = merged.experience.len();
    let education = merged.education.len();
    let projects = merged.projects.len();

    write_json(
        &MergeResponse {
            success: true,
            merged_resume: merged,
        },
        args.output.as_deref(),
    )?;

    eprintln!();
    eprintln!("=== Summary ===");
    eprintln!("Merge time:         {:.3}s", elapsed.as_secs_f64());
    eprintln!("Resumes merged:     {}", resumes.len());
    eprintln!("Skills kept:        {}", skills);
    eprintln!("Experience entries: {}", experience);
    eprintln!("Education entries:  {}", education);
    eprintln!("Project entries:    {}", projects);

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }

    info!(
        default_threshold = DEFAULT_DEDUP_THRESHOLD,
        default_max_skills = DEFAULT_MAX_SKILLS,
        "Starting resmerge v{}",
        env!("CARGO_PKG_VERSION")
    );

    let result = match cli.command {
        Commands::Parse(args) => run_parse(args),
        Commands::Merge(args) => run_merge(args),
    };

    match result {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

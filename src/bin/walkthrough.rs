use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "walkthrough", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List phases in walkthrough order.
    Phases,
    /// Activate a phase, run one dispatch pass, and print the scene output.
    Show(ShowArgs),
    /// Render a source file as a highlighted excerpt.
    Highlight(HighlightArgs),
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Phase name (see `walkthrough phases`).
    #[arg(long)]
    phase: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Emit text blocks verbatim instead of wrapping paragraphs.
    #[arg(long)]
    raw_text: bool,
}

#[derive(Parser, Debug)]
struct HighlightArgs {
    /// Source file to render.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Origin label shown in the header.
    #[arg(long)]
    label: Option<String>,

    /// Line number of the first line.
    #[arg(long)]
    start_line: Option<u32>,

    /// Render collapsed (labeled excerpts only).
    #[arg(long)]
    collapsed: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Html,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Phases => cmd_phases(),
        Command::Show(args) => cmd_show(args),
        Command::Highlight(args) => cmd_highlight(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_phases() -> anyhow::Result<()> {
    let registry = walkthrough::PhaseRegistry::standard();
    for phase in walkthrough::Phase::ALL {
        let marker = if registry.has_handler(phase) { "*" } else { " " };
        println!("{marker} {:>2} {phase}", phase.index());
    }
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let phase: walkthrough::Phase = args.phase.parse()?;
    let registry = walkthrough::PhaseRegistry::standard();
    let mut ctx = walkthrough::WalkthroughContext::new(walkthrough::SceneState::new());
    ctx.set_phase(phase);

    let ran = registry
        .dispatch(&mut ctx)
        .with_context(|| format!("dispatch phase '{phase}'"))?;
    if ran.is_none() {
        eprintln!("phase '{phase}' has no handler; nothing to show");
        return Ok(());
    }

    let scene = ctx.into_scene();
    match args.format {
        Format::Json => {
            println!("{}", scene.to_json()?);
        }
        Format::Html => {
            if let Some(pose) = scene.camera() {
                println!(
                    "<!-- camera eye=({:.3}, {:.3}, {:.3}) target=({:.3}, {:.3}, {:.3}) -->",
                    pose.eye.x, pose.eye.y, pose.eye.z, pose.target.x, pose.target.y, pose.target.z
                );
            }
            if let Some(c) = scene.commentary() {
                let opts = walkthrough::HtmlOpts {
                    paragraphs: !args.raw_text,
                    ..walkthrough::HtmlOpts::default()
                };
                print!("{}", walkthrough::commentary_html(c, opts));
            }
        }
    }
    Ok(())
}

fn cmd_highlight(args: HighlightArgs) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read source '{}'", args.in_path.display()))?;

    let mut excerpt = walkthrough::CodeExcerpt::new(source).collapsed(args.collapsed);
    if let Some(label) = args.label {
        excerpt = excerpt.origin(label);
    }
    if let Some(line) = args.start_line {
        excerpt = excerpt.starting_at(line)?;
    }

    let rendered = excerpt.mount().render();
    match args.format {
        Format::Json => println!("{}", rendered.to_json()?),
        Format::Html => print!("{}", walkthrough::excerpt_html(&rendered)),
    }
    Ok(())
}

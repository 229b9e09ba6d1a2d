use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use reelplan::{
    Fps, RenderPlan, ValidationLevel, ValidationResult, ValidationRules, VideoScript,
    resolve_style, validate_script,
};

#[derive(Parser, Debug)]
#[command(name = "reelplan", version)]
struct Cli {
    /// Log scheduling decisions to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a script and print the findings as JSON.
    Validate(ValidateArgs),
    /// Validate and schedule a script, writing the render plan as JSON.
    Plan(PlanArgs),
    /// Print the resolved parameters of a style as JSON.
    Style(StyleArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional ruleset JSON; defaults apply to omitted fields.
    #[arg(long)]
    rules: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target visible duration in seconds.
    #[arg(long)]
    seconds: f64,

    /// Frame rate numerator (denominator is 1).
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Optional ruleset JSON; defaults apply to omitted fields.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Output path; prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Schedule even when validation reports errors.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[derive(Parser, Debug)]
struct StyleArgs {
    /// Style name; unknown names resolve to `minimal`.
    name: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Style(args) => cmd_style(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_rules(path: Option<&Path>) -> anyhow::Result<ValidationRules> {
    match path {
        Some(p) => ValidationRules::from_path(p)
            .with_context(|| format!("load rules '{}'", p.display())),
        None => Ok(ValidationRules::default()),
    }
}

fn report(result: &ValidationResult) {
    for w in &result.warnings {
        let scene = w
            .scene_index
            .map(|i| format!(" (scene {i})"))
            .unwrap_or_default();
        match w.level {
            ValidationLevel::Error => tracing::error!("{}: {}{scene}", w.rule, w.message),
            ValidationLevel::Warning => tracing::warn!("{}: {}{scene}", w.rule, w.message),
            ValidationLevel::Info => tracing::info!("{}: {}{scene}", w.rule, w.message),
        }
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let script = VideoScript::from_path(&args.in_path)
        .with_context(|| format!("load script '{}'", args.in_path.display()))?;
    let rules = load_rules(args.rules.as_deref())?;

    let result = validate_script(&script, &rules);
    report(&result);
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.valid {
        anyhow::bail!(
            "script is not renderable ({} error(s), score {})",
            result.count(ValidationLevel::Error),
            result.score
        );
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let script = VideoScript::from_path(&args.in_path)
        .with_context(|| format!("load script '{}'", args.in_path.display()))?;
    let mut rules = load_rules(args.rules.as_deref())?;
    rules.fps = Fps::new(args.fps, 1)?;

    if !args.seconds.is_finite() || args.seconds <= 0.0 {
        anyhow::bail!("--seconds must be a positive number");
    }
    let target = rules.fps.secs_to_frames_floor(args.seconds);
    if target == 0 {
        anyhow::bail!("--seconds is shorter than one frame");
    }

    let result = validate_script(&script, &rules);
    report(&result);
    if !result.valid && !args.force {
        anyhow::bail!(
            "script is not renderable ({} error(s), score {}); pass --force to plan anyway",
            result.count(ValidationLevel::Error),
            result.score
        );
    }

    let plan = RenderPlan::build(&script, rules.fps, target);
    let json = serde_json::to_string_pretty(&plan)?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_style(args: StyleArgs) -> anyhow::Result<()> {
    let style = resolve_style(&args.name);
    println!("{}", serde_json::to_string_pretty(style)?);
    Ok(())
}

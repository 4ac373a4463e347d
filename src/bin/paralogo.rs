use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "paralogo", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as SVG.
    Frame(FrameArgs),
    /// Drive the animation clock and write one SVG per frame.
    Animate(AnimateArgs),
    /// List built-in presets or write one as composition JSON.
    Preset(PresetArgs),
    /// Convert a generated-composition JSON response into a composition.
    Adopt(AdoptArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Input composition JSON.
    #[arg(long = "in", conflicts_with = "preset")]
    in_path: Option<PathBuf>,

    /// Built-in preset name (default composition when neither is given).
    #[arg(long)]
    preset: Option<String>,

    /// Render options JSON (tuning constants and camera).
    #[arg(long)]
    options: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Clock value to evaluate at.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Render the exploded 3D view.
    #[arg(long = "3d")]
    three_d: bool,

    /// View tilt in radians (3D only).
    #[arg(long, requires = "three_d")]
    tilt: Option<f64>,

    /// View spin in radians (3D only).
    #[arg(long, requires = "three_d")]
    spin: Option<f64>,

    /// Output SVG path (defaults to a name derived from the composition).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Number of ticks to run.
    #[arg(long)]
    frames: u32,

    /// Clock speed multiplier, clamped to [0, 3].
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Render the exploded 3D view with idle auto-spin.
    #[arg(long = "3d")]
    three_d: bool,

    /// Write every Nth frame only.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    every: u32,

    /// Output directory for `frame_NNNNN.svg` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct PresetArgs {
    /// Preset to export; lists names when omitted.
    #[arg(long)]
    name: Option<String>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AdoptArgs {
    /// Generated-composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output composition JSON.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Preset(args) => cmd_preset(args),
        Command::Adopt(args) => cmd_adopt(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parse {what} JSON"))
}

fn open_session(source: &SourceArgs) -> anyhow::Result<paralogo::LogoSession> {
    let comp = match (&source.in_path, &source.preset) {
        (Some(path), _) => read_json::<paralogo::Composition>(path, "composition")?,
        (None, Some(name)) => {
            paralogo::preset(name).with_context(|| format!("unknown preset '{name}'"))?
        }
        (None, None) => paralogo::default_composition(),
    };
    let options = match &source.options {
        Some(path) => read_json::<paralogo::RenderOptions>(path, "render options")?,
        None => paralogo::RenderOptions::default(),
    };
    Ok(paralogo::LogoSession::new(comp, options)?)
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let session = open_session(&args.source)?;

    let view = args.three_d.then(|| {
        let reset = paralogo::ViewState::RESET_3D;
        paralogo::ViewState {
            tilt_x: args.tilt.unwrap_or(reset.tilt_x),
            spin_y: args.spin.unwrap_or(reset.spin_y),
        }
    });
    let frame = paralogo::render_frame(session.composition(), args.time, view, session.options());

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(session.export_file_name()));
    write_text(&out, &frame.to_svg())?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.source)?;
    session.apply(paralogo::ControlEvent::SetTimeScale(args.time_scale));
    session.apply(paralogo::ControlEvent::Set3d(args.three_d));

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0u32;
    for i in 0..args.frames {
        if i % args.every == 0 {
            let path = args.out_dir.join(format!("frame_{i:05}.svg"));
            write_text(&path, &session.export_svg())?;
            written += 1;
        }
        session.tick();
    }

    let (_, last) = session.teardown();
    eprintln!(
        "wrote {written} frames to {} (final time {:.2})",
        args.out_dir.display(),
        last.time
    );
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let Some(name) = args.name else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", paralogo::default_composition().name)?;
        for p in paralogo::presets() {
            writeln!(stdout, "{}", p.name)?;
        }
        return Ok(());
    };

    let comp = paralogo::preset(&name).with_context(|| format!("unknown preset '{name}'"))?;
    write_composition(&comp, args.out.as_deref())
}

fn cmd_adopt(args: AdoptArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read generated composition '{}'", args.in_path.display()))?;
    let comp = paralogo::GeneratedComposition::from_json(&text)
        .and_then(paralogo::GeneratedComposition::into_composition)
        .with_context(|| format!("adopt '{}'", args.in_path.display()))?;
    write_composition(&comp, Some(&args.out))?;

    eprintln!("wrote {} ({} layers)", args.out.display(), comp.layers.len());
    Ok(())
}

fn write_composition(comp: &paralogo::Composition, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            let json = serde_json::to_string_pretty(comp).context("serialize composition")?;
            write_text(path, &json)
        }
        None => {
            let mut w = BufWriter::new(std::io::stdout().lock());
            serde_json::to_writer_pretty(&mut w, comp).context("serialize composition")?;
            writeln!(w)?;
            Ok(())
        }
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};

use hero_sequencer::config::{Config, SequenceConfig};
use hero_sequencer::logging::init_tracing;
use hero_sequencer::sequence::{SequenceHandle, SequenceRuntime, Trigger};
use hero_sequencer::shutdown::ShutdownCoordinator;
use hero_sequencer::surface::{
    MemoryControl, MemoryResourceSurface, MemorySurface, SurfaceSet,
};

/// Drive the reveal sequence over in-memory surfaces from the terminal.
#[derive(Debug, Parser)]
#[command(name = "hero-sequencer", version)]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Loader duration in milliseconds.
    #[arg(long)]
    loader_ms: Option<u64>,

    /// Welcome overlay duration in milliseconds.
    #[arg(long)]
    welcome_ms: Option<u64>,

    /// Deferred source placed on the resource surface.
    #[arg(long)]
    source: Option<String>,

    /// Leave a surface out, to exercise degraded operation.
    #[arg(long = "without", value_enum)]
    without: Vec<SurfaceArg>,

    /// Log filter (overrides the config file; RUST_LOG overrides both).
    #[arg(long)]
    log: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SurfaceArg {
    Loader,
    Welcome,
    Hero,
    Resource,
    Explore,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Explore,
    Escape,
    Restart,
    Open,
    Close,
    Status,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    if let Some(ms) = cli.loader_ms {
        config.sequence.loader_duration_ms = ms;
    }
    if let Some(ms) = cli.welcome_ms {
        config.sequence.welcome_duration_ms = ms;
    }

    init_tracing(cli.log.as_deref().unwrap_or(&config.logging.filter));

    let surfaces = build_surfaces(&cli, &config.sequence);
    let coordinator = ShutdownCoordinator::new();
    let (handle, task) =
        SequenceRuntime::spawn(config.sequence.clone(), surfaces, coordinator.handle());

    eprintln!("commands: explore, escape, restart, open, close, status, quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Some(Command::Quit) => break,
                    Some(command) => run_command(&handle, command).await?,
                    None if line.trim().is_empty() => {}
                    None => eprintln!("unknown command: {}", line.trim()),
                }
            }
        }
    }

    coordinator.signal();
    task.await.context("sequence runtime panicked")?;
    Ok(())
}

fn build_surfaces(cli: &Cli, sequence: &SequenceConfig) -> SurfaceSet {
    let omitted = |arg: SurfaceArg| cli.without.contains(&arg);
    let mut surfaces = SurfaceSet::new();

    if !omitted(SurfaceArg::Loader) {
        surfaces = surfaces.with_loader(Arc::new(MemorySurface::new("loader")));
    }
    if !omitted(SurfaceArg::Welcome) {
        surfaces = surfaces.with_welcome(Arc::new(MemorySurface::new("welcome")));
    }
    if !omitted(SurfaceArg::Hero) {
        surfaces = surfaces.with_hero(Arc::new(MemorySurface::new("hero")));
    }
    if !omitted(SurfaceArg::Resource) {
        let mut frame = MemoryResourceSurface::new("frame");
        if let (Some(source), Some(attribute)) =
            (&cli.source, sequence.deferred_source_attributes.first())
        {
            frame = frame.with_attribute(attribute, source);
        }
        surfaces = surfaces.with_resource(Arc::new(frame));
    }
    if !omitted(SurfaceArg::Explore) {
        surfaces = surfaces.with_early_exit(Arc::new(MemoryControl::new("explore")));
    }
    if !omitted(SurfaceArg::Exit) {
        surfaces = surfaces.with_cancel(Arc::new(MemoryControl::new("exit")));
    }
    surfaces
}

async fn run_command(handle: &SequenceHandle, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Explore => handle.trigger(Trigger::EarlyExit)?,
        Command::Escape => handle.trigger(Trigger::Cancel)?,
        Command::Restart => handle.trigger(Trigger::Restart)?,
        Command::Open => handle.reveal_hero()?,
        Command::Close => handle.close()?,
        Command::Status => {
            let snapshot = handle.snapshot().await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Command::Quit => {}
    }
    Ok(())
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "explore" => Some(Command::Explore),
        "escape" | "esc" => Some(Command::Escape),
        "restart" => Some(Command::Restart),
        "open" => Some(Command::Open),
        "close" => Some(Command::Close),
        "status" => Some(Command::Status),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_sequencer::surface::SurfaceKind;

    #[test]
    fn parse_command_accepts_aliases() {
        assert_eq!(parse_command("esc"), Some(Command::Escape));
        assert_eq!(parse_command("  Explore \n"), Some(Command::Explore));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn without_flags_drop_surfaces() {
        let cli = Cli::parse_from([
            "hero-sequencer",
            "--without",
            "hero",
            "--without",
            "exit",
        ]);
        let surfaces = build_surfaces(&cli, &SequenceConfig::default());
        assert_eq!(
            surfaces.missing(),
            vec![SurfaceKind::Hero, SurfaceKind::CancelControl]
        );
    }

    #[test]
    fn duration_flags_parse() {
        let cli = Cli::parse_from(["hero-sequencer", "--loader-ms", "0", "--welcome-ms", "10"]);
        assert_eq!(cli.loader_ms, Some(0));
        assert_eq!(cli.welcome_ms, Some(10));
    }
}

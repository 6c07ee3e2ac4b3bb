//! Cueboard CLI
//!
//! Headless front end over `cueboard-core`: parse caption files, query the
//! active cue at a playback position, and normalize formatting.

mod cli;

use anyhow::Context;
use clap::Parser;
use cueboard_core::captions::{
    export_srt, format_timecode, load_srt, parse_timecode, ParsePolicy,
};
use cueboard_core::sync::CaptionSyncEngine;
use cueboard_core::TimeSec;
use tracing::debug;

use crate::cli::{Args, Command};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let policy = if args.strict {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Lenient
    };

    match args.command {
        Command::Inspect { input, json } => {
            let captions = load_srt(&input, policy)
                .with_context(|| format!("failed to parse {}", input.display()))?;
            debug!(count = captions.len(), "parsed caption file");

            if json {
                println!("{}", serde_json::to_string_pretty(&captions)?);
            } else {
                for caption in &captions {
                    println!(
                        "[{}] {} --> {}",
                        caption.id,
                        format_timecode(caption.start_sec),
                        format_timecode(caption.end_sec)
                    );
                    for line in caption.text.lines() {
                        println!("    {line}");
                    }
                }
            }
        }

        Command::At { input, time } => {
            let captions = load_srt(&input, policy)
                .with_context(|| format!("failed to parse {}", input.display()))?;
            let time_sec = parse_time_arg(&time)?;

            let mut engine = CaptionSyncEngine::new();
            engine.load(captions);
            engine.on_time_update(time_sec);

            println!("{}", engine.active_text());
        }

        Command::Normalize { input, output } => {
            let captions = load_srt(&input, policy)
                .with_context(|| format!("failed to parse {}", input.display()))?;
            let mut srt = export_srt(&captions);
            srt.push('\n');

            match output {
                Some(path) => std::fs::write(&path, srt)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{srt}"),
            }
        }
    }

    Ok(())
}

/// Accepts either plain seconds or an SRT timecode.
fn parse_time_arg(raw: &str) -> anyhow::Result<TimeSec> {
    if let Ok(seconds) = raw.trim().parse::<TimeSec>() {
        return Ok(seconds);
    }
    parse_timecode(raw).map_err(|err| anyhow::anyhow!("invalid time '{raw}': {err}"))
}

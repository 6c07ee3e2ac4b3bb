use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cueboard")]
#[command(about = "Inspect, query, and normalize SRT caption files.")]
pub struct Args {
    /// Abort on malformed cue blocks instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a caption file and list its cues
    Inspect {
        /// Input .srt file
        input: PathBuf,

        /// Emit cues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the caption active at a playback position
    At {
        /// Input .srt file
        input: PathBuf,

        /// Playback position, as seconds (62.5) or a timecode (00:01:02,500)
        time: String,
    },

    /// Parse and re-serialize a caption file
    Normalize {
        /// Input .srt file
        input: PathBuf,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::message::MediaKind;

#[derive(Debug, Parser)]
#[command(name = "nebula", about = "Nebula messaging core (CLI host)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List threads, most recently active first
    List,
    /// Show a thread's messages
    Show { thread_id: String },
    /// Send a text message
    Send {
        /// Existing thread to append to
        #[arg(long)]
        thread: Option<String>,
        /// Peer for a fresh direct chat (defaults to the configured peer)
        #[arg(long)]
        to: Option<String>,
        text: String,
    },
    /// Share a media placeholder message
    SendMedia {
        #[arg(long)]
        thread: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(value_enum)]
        media: MediaArg,
    },
    /// Start or reopen a direct chat with a user
    StartChat { peer_id: String },
    /// Create a named group thread
    CreateGroup {
        name: String,
        /// Member user ids besides the creator
        participants: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MediaArg {
    Image,
    Video,
    Audio,
}

impl From<MediaArg> for MediaKind {
    fn from(value: MediaArg) -> Self {
        match value {
            MediaArg::Image => MediaKind::Image,
            MediaArg::Video => MediaKind::Video,
            MediaArg::Audio => MediaKind::Audio,
        }
    }
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::List)
    }
}

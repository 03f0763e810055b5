//! Command-line interface definition using clap.

use clap::Parser;

/// Analyze a WhatsApp chat export: message counts, word and emoji
/// frequencies, conversation starts, media counts.
#[derive(Parser, Debug, Clone)]
#[command(name = "whatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    whatstat chats/holiday_group.txt
    whatstat chat.txt -n 10
    whatstat chat.txt --html report.html
    whatstat chat_en.txt --media-marker omitted")]
pub struct Args {
    /// Path to the exported chat file
    pub input: String,

    /// Entries per "most common" ranking
    #[arg(short = 'n', long, default_value_t = 5)]
    pub top: usize,

    /// Also write an HTML report to this path
    #[arg(long, value_name = "FILE")]
    pub html: Option<String>,

    /// Media placeholder word (repeatable); defaults to the German
    /// export markers
    #[arg(long = "media-marker", value_name = "WORD")]
    pub media_markers: Vec<String>,
}

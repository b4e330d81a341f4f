use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::Side;

#[derive(Parser, Debug)]
#[command(
    name = "snooker-tournament",
    author,
    version,
    about = "Round-robin snooker tournament scorekeeper"
)]
pub struct Cli {
    /// Players taking part, comma separated (defaults to the built-in roster)
    #[arg(long, global = true, value_delimiter = ',')]
    pub players: Option<Vec<String>>,

    /// SQLite file holding the saved tournament (defaults to $DATABASE_PATH)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Print the standings table
    Standings,
    /// Print every match with its frame scores
    Matches,
    /// Set or clear one player's score in a frame
    Score {
        /// Match number as listed by `matches`
        match_number: usize,
        /// Frame number (1-3)
        frame: usize,
        /// Which seat the score belongs to
        #[arg(value_enum)]
        side: Side,
        /// Score; omit to clear
        value: Option<u32>,
    },
    /// Record the high break of a match
    HighBreak {
        /// Match number as listed by `matches`
        match_number: usize,
        /// Break value; omit to clear
        #[arg(long)]
        value: Option<u32>,
        /// Player who made the break; omit to clear
        #[arg(long)]
        player: Option<String>,
    },
    /// Clear all scores and start the tournament again
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Write the match list to a JSON file
    Export {
        /// Output file (defaults to snooker-tournament-data.json)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Replace the match list with the contents of a JSON file
    Import {
        /// File previously written by `export`
        path: String,
    },
    /// Start the HTTP API for the browser front end
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

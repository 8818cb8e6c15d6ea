use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodtunes::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Spotify API
    Auth,

    /// Remove stored credentials
    Logout,

    /// Generate a mood playlist
    Generate(GenerateOptions),

    /// Show the authenticated user
    Profile,

    /// List accepted mood and intent labels
    Moods,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// Mood label (e.g. happy, sad, neutral); see `moodtunes moods`
    #[clap(long)]
    mood: String,

    /// Intent label (e.g. turn-it-up, stay-focused)
    #[clap(long, default_value = "go-with-flow")]
    intent: String,

    /// Number of tracks to generate (1-100)
    #[clap(long, default_value_t = 20)]
    limit: u8,

    /// Create the playlist on Spotify instead of only printing it
    #[clap(long)]
    create: bool,

    /// Override the generated playlist name
    #[clap(long)]
    name: Option<String>,

    /// Make the created playlist public
    #[clap(long)]
    public: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::login().await,
        Command::Logout => cli::logout().await,
        Command::Generate(opt) => {
            cli::generate(cli::GenerateArgs {
                mood: opt.mood,
                intent: opt.intent,
                limit: opt.limit,
                create: opt.create,
                name: opt.name,
                public: opt.public,
            })
            .await
        }
        Command::Profile => cli::profile().await,
        Command::Moods => cli::moods().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

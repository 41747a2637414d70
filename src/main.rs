use anyhow::Result;

use movie_popularity::cli::{Cli, Command};
use movie_popularity::{
    build_config, handle_genre, handle_genres, handle_interactive, handle_showcase, handle_top,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli);
    match &cli.command {
        Command::Top { count, output } => handle_top(config, *count, output),
        Command::Genre {
            genre,
            count,
            output,
        } => handle_genre(config, genre, *count, output),
        Command::Genres => handle_genres(config),
        Command::Interactive => handle_interactive(config),
        Command::Showcase => handle_showcase(config),
    }
}

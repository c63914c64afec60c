use clap::Parser;

/// Discord front end for the course question-answering backend.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Run in development mode.
    #[arg(long)]
    pub dev: bool,
}

use crate::preview::{run_fields, run_render, run_validate, RenderArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use folio::error::AppError;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "Folio Services",
    about = "Serve, render, and exercise the portfolio services page from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render the services page HTML to stdout or a file
    Render(RenderArgs),
    /// Inspect or exercise the inquiry form
    Inquiry {
        #[command(subcommand)]
        command: InquiryCommand,
    },
}

#[derive(Subcommand, Debug)]
enum InquiryCommand {
    /// Validate a set of field values against the inquiry schema
    Validate(ValidateArgs),
    /// List the inquiry form fields in display order
    Fields,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await.map(|()| ExitCode::SUCCESS),
        Command::Render(args) => run_render(args).map(|()| ExitCode::SUCCESS),
        Command::Inquiry {
            command: InquiryCommand::Validate(args),
        } => run_validate(args).map(|valid| {
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }),
        Command::Inquiry {
            command: InquiryCommand::Fields,
        } => run_fields().map(|()| ExitCode::SUCCESS),
    }
}

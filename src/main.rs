mod cli;
mod commands;
mod config;
mod constants;
mod download;
mod error;
mod platform;
mod sources;
mod ui;
mod version;

use clap::Parser;
use cli::{Cli, Commands, VersionInput};
use config::Settings;
use sources::Upstream;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;
use version::Precedence;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(cause) = e.downcast_ref::<error::Error>() {
                log::debug!("Failed with {:?} error", cause.kind());
            }
            ui::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn precedence(input: &VersionInput) -> Precedence {
    if input.prefer_version {
        Precedence::LiteralFirst
    } else {
        Precedence::FileFirst
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::from_env().with_timeout(cli.timeout.map(Duration::from_secs));
    log::debug!("Settings: {:?}", settings);

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cli.command {
        Commands::Check {
            input,
            platform,
            dest,
            yes,
        } => {
            let upstream = Upstream::from_settings(&settings)?;
            let args = commands::check::CheckArgs {
                precedence: precedence(&input),
                file: input.file,
                version: input.version,
                os: platform.os,
                arch: platform.arch,
                dest,
                yes,
            };
            let stdin = io::stdin();
            let outcome =
                commands::check::check(&upstream, &settings, &args, &mut stdin.lock(), &mut output)
                    .await?;
            if let commands::check::CheckOutcome::Downloaded(downloaded) = outcome {
                log::info!("Verified {} (sha256 {})", downloaded.filename, downloaded.digest);
            }
        }
        Commands::Latest => {
            let upstream = Upstream::from_settings(&settings)?;
            commands::latest::latest(&upstream, &mut output).await?;
        }
        Commands::Current { input } => {
            commands::current::current(
                input.file.as_deref(),
                input.version.as_deref(),
                precedence(&input),
                &mut output,
            )?;
        }
        Commands::Download {
            version,
            platform,
            dest,
        } => {
            let upstream = Upstream::from_settings(&settings)?;
            let downloaded = commands::download::download(
                &upstream,
                &settings,
                &version,
                platform.os.as_deref(),
                platform.arch.as_deref(),
                &dest,
            )
            .await?;
            writeln!(output, "{}", downloaded.path.display())?;
        }
        Commands::Digest { path } => {
            commands::digest::digest(&path, &mut output)?;
        }
    }

    output.flush()?;
    Ok(())
}

// Check command: compare current and latest versions and offer the download

use crate::commands::prompt;
use crate::config::Settings;
use crate::download::{DownloadConfig, Downloaded, download_and_verify};
use crate::sources::Upstream;
use crate::ui;
use crate::version::{self, Precedence};
use anyhow::Context;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    pub file: Option<PathBuf>,
    pub version: Option<String>,
    pub precedence: Precedence,
    pub os: Option<String>,
    pub arch: Option<String>,
    pub dest: Option<PathBuf>,
    /// Skip the confirmation prompt.
    pub yes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Declined,
    Cancelled,
    Downloaded(Downloaded),
}

pub async fn check(
    upstream: &Upstream,
    settings: &Settings,
    args: &CheckArgs,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<CheckOutcome> {
    let current = version::current_version(
        args.file.as_deref(),
        args.version.as_deref(),
        args.precedence,
    )
    .context("error getting current version")?;
    writeln!(output, "Current version: {}", current)?;

    let pb = ui::spinner("Checking latest version...");
    let latest = upstream.latest.latest_version().await;
    ui::clear_bar(&pb);
    let latest = latest.context("error checking latest version")?;
    writeln!(output, "Latest version: {}", latest)?;

    if !version::is_newer(&latest, &current) {
        writeln!(output, "You have the latest version")?;
        return Ok(CheckOutcome::UpToDate);
    }
    writeln!(output, "A newer version is available")?;

    if !args.yes && !prompt::confirm_download(input, output)? {
        writeln!(output, "Download aborted by user")?;
        return Ok(CheckOutcome::Declined);
    }

    let dest = match &args.dest {
        Some(dest) => dest.clone(),
        None => match prompt::prompt_download_dir(input, output)? {
            Some(dest) => dest,
            None => {
                writeln!(output, "Download cancelled by user")?;
                return Ok(CheckOutcome::Cancelled);
            }
        },
    };

    let downloaded = download_and_verify(DownloadConfig {
        version: &latest,
        os: args.os.as_deref(),
        arch: args.arch.as_deref(),
        dest_dir: &dest,
        settings,
        downloader: upstream.downloader.as_ref(),
        remover: upstream.remover.as_ref(),
        checksums: upstream.checksums.as_ref(),
    })
    .await
    .context("error downloading Go")?;

    writeln!(
        output,
        "{} has been downloaded to {}",
        latest,
        downloaded.path.display()
    )?;
    Ok(CheckOutcome::Downloaded(downloaded))
}

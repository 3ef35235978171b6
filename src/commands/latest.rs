// Latest command for printing the newest upstream release

use crate::sources::Upstream;
use crate::ui;
use anyhow::Context;
use std::io::Write;

pub async fn latest(upstream: &Upstream, output: &mut impl Write) -> anyhow::Result<String> {
    let pb = ui::spinner("Checking latest version...");
    let latest = upstream.latest.latest_version().await;
    ui::clear_bar(&pb);

    let latest = latest.context("error checking latest version")?;
    writeln!(output, "{}", latest)?;
    Ok(latest)
}

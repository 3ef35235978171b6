// Current command for printing the version a project pins

use crate::version::{self, Precedence};
use anyhow::Context;
use std::io::Write;
use std::path::Path;

pub fn current(
    file: Option<&Path>,
    literal: Option<&str>,
    precedence: Precedence,
    output: &mut impl Write,
) -> anyhow::Result<String> {
    let current = version::current_version(file, literal, precedence)
        .context("error getting current version")?;
    writeln!(output, "{}", current)?;
    Ok(current)
}

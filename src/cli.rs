//! Command line front end: read struct text, generate, write the result in one go.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::{Error, LongWidth, Options};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// File holding the struct definition (stdin when omitted or `-`)
  pub input: Option<PathBuf>,
  /// Output file (stdout when omitted)
  #[arg(long, short = 'o')]
  pub output: Option<PathBuf>,
  /// Mark generated functions `noexcept`
  #[arg(long)]
  pub no_throw: bool,
  /// Byte width assumed for `long` (4 or 8)
  #[arg(long, value_name = "BYTES", default_value = "4", value_parser = parse_long_width)]
  pub long_bytes: LongWidth,
  /// Struct name to use instead of the one found in the input
  #[arg(long)]
  pub name: Option<String>,
  /// Prepend a comment describing the group layout
  #[arg(long)]
  pub layout: bool,
}

fn parse_long_width(s: &str) -> Result<LongWidth, String> {
  s.parse()
}

impl Cli {
  pub fn options(&self) -> Options {
    Options { no_throw: self.no_throw, long_bytes: self.long_bytes, name: self.name.clone(), layout: self.layout }
  }

  fn read_input(&self, mut stdin: impl Read) -> Result<String, Error> {
    match self.input.as_deref() {
      Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
      _ => {
        let mut text = String::new();
        stdin.read_to_string(&mut text)?;
        Ok(text)
      }
    }
  }

  fn write_output(&self, lines: &[String], mut stdout: impl Write) -> Result<(), Error> {
    let mut text = lines.join("\n");
    if !text.is_empty() {
      text.push('\n');
    }
    match &self.output {
      Some(path) => fs::write(path, text)?,
      None => stdout.write_all(text.as_bytes())?,
    }
    Ok(())
  }
}

/// Runs the tool as if invoked from the command line.
pub fn run(cli: Cli) -> Result<(), Error> {
  run_with(cli, io::stdin().lock(), io::stdout().lock())
}

// `run` with the standard streams swapped out.
pub fn run_with(cli: Cli, stdin: impl Read, stdout: impl Write) -> Result<(), Error> {
  let text = cli.read_input(stdin)?;
  let lines = crate::generate_str(&text, &cli.options())?;
  info!("writing {} lines", lines.len());
  cli.write_output(&lines, stdout)
}

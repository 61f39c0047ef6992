use clap::Parser;

fn main() -> anyhow::Result<()> {
  pretty_env_logger::init();
  let cli = netswap::cli::Cli::parse_from(wild::args());
  netswap::cli::run(cli)?;
  Ok(())
}

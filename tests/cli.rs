use clap::Parser;
use netswap::cli::{Cli, run, run_with};
use netswap::{LongWidth, Options};

#[test]
fn defaults() {
  let cli = Cli::try_parse_from(["netswap"]).unwrap();
  assert_eq!(cli.options(), Options::default());
  assert!(cli.input.is_none());
  assert!(cli.output.is_none());
}

#[test]
fn flags_map_to_options() {
  let cli = Cli::try_parse_from(["netswap", "in.h", "-o", "out.h", "--no-throw", "--long-bytes", "8", "--name", "Pkt", "--layout"]).unwrap();
  let opts = cli.options();
  assert!(opts.no_throw);
  assert!(opts.layout);
  assert_eq!(opts.long_bytes, LongWidth::Eight);
  assert_eq!(opts.name.as_deref(), Some("Pkt"));
  assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("in.h")));
}

#[test]
fn rejects_bad_long_width() {
  assert!(Cli::try_parse_from(["netswap", "--long-bytes", "2"]).is_err());
}

#[test]
fn file_to_file() {
  let dir = std::env::temp_dir().join(format!("netswap-cli-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let input = dir.join("in.h");
  let output = dir.join("out.h");
  std::fs::write(&input, "struct T {\n  short s;\n};\n").unwrap();

  let cli = Cli::try_parse_from(["netswap".as_ref(), input.as_os_str(), "-o".as_ref(), output.as_os_str()]).unwrap();
  run(cli).unwrap();

  let text = std::fs::read_to_string(&output).unwrap();
  assert!(text.starts_with("void ReverseTToLittleEndian(T* p)\n{\n    p->s = ntohs(p->s);\n}\n\n"));
  assert!(text.ends_with("}\n"));
  std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn failure_writes_nothing() {
  let dir = std::env::temp_dir().join(format!("netswap-cli-fail-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let input = dir.join("in.h");
  let output = dir.join("out.h");
  std::fs::write(&input, "struct T { bool b : 1; };\n").unwrap();

  let cli = Cli::try_parse_from(["netswap".as_ref(), input.as_os_str(), "-o".as_ref(), output.as_os_str()]).unwrap();
  assert!(run(cli).is_err());
  assert!(!output.exists());
  std::fs::remove_dir_all(&dir).unwrap();
}

fn through_stdio(args: &[&str], input: &str) -> Result<String, netswap::Error> {
  let cli = Cli::try_parse_from(args).unwrap();
  let mut out = Vec::new();
  run_with(cli, input.as_bytes(), &mut out)?;
  Ok(String::from_utf8(out).unwrap())
}

#[test]
fn stdin_to_stdout() {
  let src = "struct U {\n  unsigned int id;\n};\n";
  for args in [&["netswap"][..], &["netswap", "-"][..]] {
    let text = through_stdio(args, src).unwrap();
    assert!(text.starts_with("void ReverseUToLittleEndian(U* p)\n{\n    p->id = ntohl(p->id);\n}\n\n"), "{args:?}");
    assert!(text.ends_with("    p->id = htonl(p->id);\n}\n"));
  }
}

#[test]
fn stdin_without_fields_prints_nothing() {
  assert_eq!(through_stdio(&["netswap"], "  \n").unwrap(), "");
}

#[test]
fn stdin_failure_prints_nothing() {
  let cli = Cli::try_parse_from(["netswap", "--no-throw"]).unwrap();
  let mut out = Vec::new();
  assert!(run_with(cli, "struct V { char c : 2; };".as_bytes(), &mut out).is_err());
  assert!(out.is_empty());
}

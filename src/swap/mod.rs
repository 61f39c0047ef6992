use log::debug;

use crate::Error;

mod args;
mod decl;
mod diagram;
mod generator;
mod layout;
mod source;
mod types;

pub use args::{Options, PLACEHOLDER_NAME};
pub use decl::{Slots, parse_line};
pub use generator::{Address, Emitter, Unit, units};
pub use layout::{Field, Grouper, group_fields};
pub use source::{strip_comment, struct_name};
pub use types::{BaseType, Direction, LongWidth, Primitive, Sign, TypeTable};

// ── driver ────────────────────────────────────────────────────────────────
pub(crate) fn expand<S: AsRef<str>>(lines: &[S], opts: &Options) -> Result<Vec<String>, Error> {
  let table = TypeTable::new(opts.long_bytes);

  let fields: Vec<Field> = lines.iter().flat_map(|line| parse_line(strip_comment(line.as_ref()))).collect();
  if fields.is_empty() {
    debug!("no field declarations in {} lines", lines.len());
    return Ok(Vec::new());
  }
  let fields = group_fields(fields, &table)?;

  let name = opts.resolve_name(struct_name(lines));
  let emitter = Emitter::new(&name, &fields, &table, opts.no_throw)?;

  let mut out = Vec::new();
  if opts.layout {
    out.extend(diagram::render(&name, emitter.units(), &table));
  }
  for (i, dir) in Direction::ALL.into_iter().enumerate() {
    if i > 0 {
      out.push(String::new());
    }
    out.extend(emitter.function(dir));
  }
  debug!("generated {} lines for `{name}`", out.len());
  Ok(out)
}

use core::fmt;

use log::trace;

use crate::Error;
use crate::swap::layout::Field;
use crate::swap::types::{Direction, TypeTable};

// Name of the struct pointer parameter in generated functions.
pub(super) const PARAM: &str = "p";
const INDENT: &str = "    ";
const NO_THROW: &str = " noexcept";

/// Where an unnamed bit-field storage unit lives: the end of the last ordinary member plus
/// the storage already emitted since it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
  pub anchor: Option<String>,
  pub offset: usize,
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.anchor {
      Some(a) => write!(f, "(char*)&{PARAM}->{a} + sizeof({PARAM}->{a})")?,
      // Bit-fields ahead of every ordinary member start at the struct itself.
      None => write!(f, "(char*){PARAM}")?,
    }
    if self.offset > 0 {
      write!(f, " + {}", self.offset)?;
    }
    Ok(())
  }
}

#[derive(Clone, Debug)]
pub enum Unit<'a> {
  Scalar(&'a Field),
  Array(&'a Field),
  Bits { members: Vec<&'a Field>, storage: usize, address: Address },
}

impl<'a> Unit<'a> {
  // The member whose type and sign decide the conversion.
  pub fn lead(&self) -> &'a Field {
    match self {
      Unit::Scalar(f) | Unit::Array(f) => *f,
      Unit::Bits { members, .. } => members[0],
    }
  }
}

// Anchor field and bytes of bit storage emitted since it.
#[derive(Default)]
struct Cursor<'a> {
  anchor: Option<&'a Field>,
  offset: usize,
}

// One unit per group, in order.
pub fn units<'a>(fields: &'a [Field], table: &TypeTable) -> Result<Vec<Unit<'a>>, Error> {
  let mut out: Vec<Unit<'a>> = Vec::new();
  let mut cursor = Cursor::default();
  let mut last_group = None;

  for f in fields {
    if last_group == Some(f.group) {
      if let Some(Unit::Bits { members, .. }) = out.last_mut() {
        members.push(f);
      }
      continue;
    }
    last_group = Some(f.group);

    if f.is_bit_field() {
      let Some(storage) = table.bit_storage(&f.ty) else {
        return Err(Error::UnsupportedBitField { decl: f.source.clone() });
      };
      let address = Address { anchor: cursor.anchor.map(|a| a.name.clone()), offset: cursor.offset };
      cursor.offset += storage;
      out.push(Unit::Bits { members: vec![f], storage, address });
    } else {
      cursor = Cursor { anchor: Some(f), offset: 0 };
      out.push(if f.is_array { Unit::Array(f) } else { Unit::Scalar(f) });
    }
  }
  Ok(out)
}

/// Renders the `Reverse<Name>To<Dir>Endian` functions.
pub struct Emitter<'a> {
  name: &'a str,
  units: Vec<Unit<'a>>,
  table: &'a TypeTable,
  no_throw: bool,
}

impl<'a> Emitter<'a> {
  pub fn new(name: &'a str, fields: &'a [Field], table: &'a TypeTable, no_throw: bool) -> Result<Self, Error> {
    Ok(Self { name, units: units(fields, table)?, table, no_throw })
  }

  pub fn units(&self) -> &[Unit<'a>] {
    &self.units
  }

  pub fn function_name(&self, dir: Direction) -> String {
    format!("Reverse{}To{}Endian", self.name, dir.suffix())
  }

  fn statements(&self, unit: &Unit<'_>, dir: Direction) -> Vec<String> {
    let lead = unit.lead();
    let Some(prim) = self.table.converter(&lead.ty, dir) else {
      trace!("`{}` copied as-is", lead.source);
      return Vec::new();
    };
    match unit {
      Unit::Scalar(f) => {
        let n = &f.name;
        vec![format!("{PARAM}->{n} = {prim}({PARAM}->{n});")]
      }
      Unit::Array(f) => {
        let n = &f.name;
        vec![
          format!("for (size_t n = 0; n < sizeof({PARAM}->{n}) / sizeof({PARAM}->{n}[0]); ++n)"),
          format!("{INDENT}{PARAM}->{n}[n] = {prim}({PARAM}->{n}[n]);"),
        ]
      }
      Unit::Bits { address, .. } => {
        let target = format!("*({}*)({address})", lead.storage_type());
        vec![format!("{target} = {prim}({target});")]
      }
    }
  }

  pub fn function(&self, dir: Direction) -> Vec<String> {
    let qualifier = if self.no_throw { NO_THROW } else { "" };
    let mut out = vec![format!("void {}({}* {PARAM}){qualifier}", self.function_name(dir), self.name), "{".to_string()];
    for unit in &self.units {
      out.extend(self.statements(unit, dir).into_iter().map(|s| format!("{INDENT}{s}")));
    }
    out.push("}".to_string());
    out
  }
}

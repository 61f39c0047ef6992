use log::debug;

use crate::Error;
use crate::swap::types::{BaseType, Sign, TypeTable};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
  pub sign: Sign,
  pub name: String,
  pub ty: BaseType,
  /// Conversion unit, assigned by [`group_fields`]. `0` until then.
  pub group: usize,
  /// Declared bit width, `0` for ordinary members.
  pub bits: u32,
  pub is_array: bool,
  pub source: String,
}

impl Field {
  pub fn is_bit_field(&self) -> bool {
    self.bits > 0
  }

  // `unsigned long long`, `long`, ...
  pub fn storage_type(&self) -> String {
    match self.sign {
      Sign::Default => self.ty.to_string(),
      sign => format!("{} {}", sign.keyword(), self.ty),
    }
  }
}

// Bit-field storage unit currently being filled.
#[derive(Debug)]
struct BitRun {
  ty: BaseType,
  sign: Sign,
  used: u32,
  max: u32,
}

impl BitRun {
  fn admits(&self, f: &Field) -> bool {
    f.ty == self.ty && f.sign == self.sign && self.used.checked_add(f.bits).is_some_and(|n| n <= self.max)
  }
}

#[derive(Debug)]
pub struct Grouper<'a> {
  table: &'a TypeTable,
  group: usize,
  run: Option<BitRun>,
}

impl<'a> Grouper<'a> {
  pub fn new(table: &'a TypeTable) -> Self {
    Self { table, group: 0, run: None }
  }

  pub fn assign(&mut self, field: &mut Field) -> Result<(), Error> {
    if !field.is_bit_field() {
      // An ordinary member closes any open storage unit.
      self.run = None;
      self.group += 1;
    } else if let Some(run) = self.run.as_mut().filter(|run| run.admits(field)) {
      run.used += field.bits;
    } else {
      let Some(bytes) = self.table.bit_storage(&field.ty) else {
        return Err(Error::UnsupportedBitField { decl: field.source.clone() });
      };
      self.group += 1;
      self.run = Some(BitRun { ty: field.ty.clone(), sign: field.sign, used: field.bits, max: bytes as u32 * 8 });
    }
    field.group = self.group;
    Ok(())
  }
}

pub fn group_fields(mut fields: Vec<Field>, table: &TypeTable) -> Result<Vec<Field>, Error> {
  let mut grouper = Grouper::new(table);
  for field in &mut fields {
    grouper.assign(field)?;
  }
  debug!("{} fields in {} groups", fields.len(), grouper.group);
  Ok(fields)
}

//! Group layout listing, printed as a C block comment ahead of the generated functions.
//!
//! One row per conversion unit: group number, member names, storage type, bits used out of
//! the storage unit and the address expression the generated code dereferences. Rows come
//! straight from the emitter's units, so the listing can't drift from the statements.

use core::fmt::Write;

use crate::swap::generator::{PARAM, Unit};
use crate::swap::types::TypeTable;

const HEADER: [&str; 5] = ["group", "members", "storage", "bits", "address"];
// Gap between columns.
const COLUMN_SEP: &str = "  ";
const NOT_APPLICABLE: &str = "-";

fn row(unit: &Unit<'_>) -> [String; 5] {
  let lead = unit.lead();
  let (members, bits, address) = match unit {
    Unit::Scalar(f) => (f.name.clone(), NOT_APPLICABLE.to_string(), format!("{PARAM}->{}", f.name)),
    Unit::Array(f) => (format!("{}[]", f.name), NOT_APPLICABLE.to_string(), format!("{PARAM}->{}", f.name)),
    Unit::Bits { members, storage, address } => {
      let used: u32 = members.iter().map(|f| f.bits).sum();
      let names = members.iter().map(|f| f.name.as_str()).collect::<Vec<_>>().join(", ");
      (names, format!("{used}/{}", storage * 8), address.to_string())
    }
  };
  [lead.group.to_string(), members, lead.storage_type(), bits, address]
}

pub fn render(name: &str, units: &[Unit<'_>], table: &TypeTable) -> Vec<String> {
  let rows: Vec<[String; 5]> = units.iter().map(row).collect();
  let mut widths = HEADER.map(str::len);
  for r in &rows {
    for (w, cell) in widths.iter_mut().zip(r) {
      *w = (*w).max(cell.len());
    }
  }

  let line = |cells: [&str; 5]| {
    let mut s = String::from(" *  ");
    for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
      if i > 0 {
        s.push_str(COLUMN_SEP);
      }
      let _ = write!(s, "{cell:<w$}");
    }
    s.trim_end().to_string()
  };

  let mut out = vec![
    "/*".to_string(),
    format!(" * {name} group layout, `long` = {} bytes", table.long_width().bytes()),
    " *".to_string(),
    line(HEADER),
  ];
  out.extend(rows.iter().map(|r| line([&r[0], &r[1], &r[2], &r[3], &r[4]])));
  out.push(" */".to_string());
  out
}

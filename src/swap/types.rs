//! Fixed lookup tables: base type byte widths and the `hton*`/`ntoh*` primitive for each.

use core::fmt;
use core::str::FromStr;

use byteorder::{BigEndian, ByteOrder, NativeEndian};

// Signedness keyword written in front of the base type.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Sign {
  #[default]
  Default,
  Signed,
  Unsigned,
}

impl Sign {
  // `unsigned` → Unsigned, any other non-empty keyword → Signed, nothing → Default.
  pub fn from_keyword(keyword: Option<&str>) -> Sign {
    match keyword {
      Some("unsigned") => Sign::Unsigned,
      Some(k) if !k.is_empty() => Sign::Signed,
      _ => Sign::Default,
    }
  }

  pub fn keyword(self) -> &'static str {
    match self {
      Sign::Default => "",
      Sign::Signed => "signed",
      Sign::Unsigned => "unsigned",
    }
  }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum BaseType {
  Char,
  Short,
  Int,
  Long,
  LongLong,
  Float,
  Double,
  LongDouble,
  Bool,
  Other(String),
}

impl BaseType {
  pub fn from_name(name: &str) -> BaseType {
    match name {
      "char" => BaseType::Char,
      "short" => BaseType::Short,
      "int" => BaseType::Int,
      "long" => BaseType::Long,
      "long long" => BaseType::LongLong,
      "float" => BaseType::Float,
      "double" => BaseType::Double,
      "long double" => BaseType::LongDouble,
      "bool" => BaseType::Bool,
      other => BaseType::Other(other.to_string()),
    }
  }

  pub fn name(&self) -> &str {
    match self {
      BaseType::Char => "char",
      BaseType::Short => "short",
      BaseType::Int => "int",
      BaseType::Long => "long",
      BaseType::LongLong => "long long",
      BaseType::Float => "float",
      BaseType::Double => "double",
      BaseType::LongDouble => "long double",
      BaseType::Bool => "bool",
      BaseType::Other(name) => name,
    }
  }
}

impl fmt::Display for BaseType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Assumed width of `long`. The real width is platform dependent (LP64 targets use 8);
/// the generator fixes it statically and defaults to 4.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum LongWidth {
  #[default]
  Four,
  Eight,
}

impl LongWidth {
  pub fn bytes(self) -> usize {
    match self {
      LongWidth::Four => 4,
      LongWidth::Eight => 8,
    }
  }
}

impl FromStr for LongWidth {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "4" => Ok(LongWidth::Four),
      "8" => Ok(LongWidth::Eight),
      other => Err(format!("`long` width must be 4 or 8 bytes, got `{other}`")),
    }
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
  /// Network → host, the `ntoh*` column.
  ToLittle,
  /// Host → network, the `hton*` column.
  ToBig,
}

impl Direction {
  // Emission order of the two generated functions.
  pub const ALL: [Direction; 2] = [Direction::ToLittle, Direction::ToBig];

  pub fn suffix(self) -> &'static str {
    match self {
      Direction::ToLittle => "Little",
      Direction::ToBig => "Big",
    }
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Primitive {
  Short,
  Long,
  LongLong,
  Float,
  Double,
}

impl Primitive {
  pub fn name(self, dir: Direction) -> &'static str {
    match (self, dir) {
      (Primitive::Short, Direction::ToBig) => "htons",
      (Primitive::Short, Direction::ToLittle) => "ntohs",
      (Primitive::Long, Direction::ToBig) => "htonl",
      (Primitive::Long, Direction::ToLittle) => "ntohl",
      (Primitive::LongLong, Direction::ToBig) => "htonll",
      (Primitive::LongLong, Direction::ToLittle) => "ntohll",
      (Primitive::Float, Direction::ToBig) => "htonf",
      (Primitive::Float, Direction::ToLittle) => "ntohf",
      (Primitive::Double, Direction::ToBig) => "htond",
      (Primitive::Double, Direction::ToLittle) => "ntohd",
    }
  }

  pub fn width(self) -> usize {
    match self {
      Primitive::Short => 2,
      Primitive::Long | Primitive::Float => 4,
      Primitive::LongLong | Primitive::Double => 8,
    }
  }

  /// Applies the primitive to the first `width()` bytes of a value held in memory.
  ///
  /// To-big stores the host-order value in network order, to-little reads it back, so the
  /// two are inverses on every host. Returns `false` and leaves `value` alone when it is
  /// shorter than `width()`.
  pub fn apply(self, dir: Direction, value: &mut [u8]) -> bool {
    let w = self.width();
    let Some(buf) = value.get_mut(..w) else {
      return false;
    };
    match dir {
      Direction::ToBig => {
        let v = NativeEndian::read_uint(buf, w);
        BigEndian::write_uint(buf, v, w);
      }
      Direction::ToLittle => {
        let v = BigEndian::read_uint(buf, w);
        NativeEndian::write_uint(buf, v, w);
      }
    }
    true
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct TypeTable {
  long: LongWidth,
}

impl TypeTable {
  pub fn new(long: LongWidth) -> Self {
    Self { long }
  }

  pub fn long_width(&self) -> LongWidth {
    self.long
  }

  pub fn byte_width(&self, ty: &BaseType) -> Option<usize> {
    match ty {
      BaseType::Char => Some(1),
      BaseType::Short => Some(2),
      BaseType::Int => Some(4),
      BaseType::Long => Some(self.long.bytes()),
      BaseType::LongLong => Some(8),
      _ => None,
    }
  }

  // A bit-field storage unit has to be a multi-byte integer, otherwise there is no byte
  // order to reverse.
  pub fn bit_storage(&self, ty: &BaseType) -> Option<usize> {
    self.byte_width(ty).filter(|&w| w > 1)
  }

  pub fn primitive(&self, ty: &BaseType) -> Option<Primitive> {
    match ty {
      BaseType::Short => Some(Primitive::Short),
      BaseType::Int => Some(Primitive::Long),
      BaseType::Long => match self.long {
        LongWidth::Four => Some(Primitive::Long),
        LongWidth::Eight => Some(Primitive::LongLong),
      },
      BaseType::LongLong => Some(Primitive::LongLong),
      BaseType::Float => Some(Primitive::Float),
      BaseType::Double => Some(Primitive::Double),
      BaseType::Char | BaseType::LongDouble | BaseType::Bool | BaseType::Other(_) => None,
    }
  }

  /// Name of the primitive converting `ty` in `dir`; `None` means copy as-is.
  pub fn converter(&self, ty: &BaseType, dir: Direction) -> Option<&'static str> {
    self.primitive(ty).map(|p| p.name(dir))
  }
}

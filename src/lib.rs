//! netswap — byte-swap functions for C/C++ structs, generated from the struct text
//!
//! Feed it a `struct` definition and it writes two functions that convert every multi-byte
//! member between host and network byte order with the usual `ntoh*`/`hton*` primitives:
//!
//! ```text
//! void Reverse<Name>ToLittleEndian(<Name>* p)   // ntoh*
//! void Reverse<Name>ToBigEndian(<Name>* p)      // hton*
//! ```
//!
//! How members are converted
//! - Scalars: `p->x = ntohl(p->x);`.
//! - Arrays: a loop over `sizeof(p->a) / sizeof(p->a[0])` elements.
//! - Bit-fields: consecutive bit-fields of the same type and sign share one storage unit
//!   until its bits run out. A unit has no name, so it is addressed through a pointer cast
//!   relative to the end of the last ordinary member: `*(long*)((char*)&p->a + sizeof(p->a) + 4)`.
//! - `char`, `bool`, `long double` and unknown types are copied as-is (no statement).
//!
//! Primitives
//! - `short` → `htons`/`ntohs`, `int` and `long` → `htonl`/`ntohl`, `long long` → `htonll`/`ntohll`,
//!   `float` → `htonf`/`ntohf`, `double` → `htond`/`ntohd`.
//!
//! Limitations
//! - Only `//` comments are stripped; block comments, preprocessor lines and declarations
//!   spanning several lines are not understood. Pointers are skipped.
//! - The platform ABI is not inferred. `long` is assumed to be 4 bytes unless
//!   [`Options::long_bytes`] says otherwise, and bit-fields are assumed to pack into units of
//!   their declared type in declaration order. Compilers are free to disagree.
//! - A bit-field must use `short`, `int`, `long` or `long long`; anything else is
//!   [`Error::UnsupportedBitField`].
//!
//! Example
//! ```
//! let lines = netswap::generate_str("struct Hdr { unsigned short len; int id; };", &Default::default()).unwrap();
//! assert_eq!(lines[0], "void ReverseHdrToLittleEndian(Hdr* p)");
//! assert_eq!(lines[2], "    p->len = ntohs(p->len);");
//! ```

pub mod cli;
mod error;
mod swap;

pub use error::Error;
pub use swap::*;

/// Runs the whole pipeline over an ordered sequence of lines.
///
/// Returns no lines when the input holds no usable field declaration.
pub fn generate<S: AsRef<str>>(lines: &[S], opts: &Options) -> Result<Vec<String>, Error> {
  swap::expand(lines, opts)
}

/// [`generate`] over raw text.
pub fn generate_str(text: &str, opts: &Options) -> Result<Vec<String>, Error> {
  let lines: Vec<&str> = text.lines().collect();
  generate(&lines, opts)
}

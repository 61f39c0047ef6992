//! Field tokenizer.
//!
//! A declaration is `sign? long? len? int? name [..]* (: N)? ;`. Each `;`-terminated piece of a
//! line is lexed into tokens and only the trailing run of identifiers in front of the optional
//! array/bit-width suffix can form the declaration. Anything before that run (pointer stars,
//! qualifiers split off by punctuation, the `struct Foo {` opener) is ignored, and a piece that
//! does not fit is skipped silently.

use log::trace;
use proc_macro2::{TokenStream, TokenTree};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, LitInt, Result as SynResult, Token, bracketed, token};

use crate::swap::layout::Field;
use crate::swap::types::{BaseType, Sign};

const LONG: &str = "long";
const INT: &str = "int";

// Tokens of one declaration, before the words are assigned to slots.
#[derive(Default, Debug)]
struct RawDecl {
  words: Vec<String>,
  dims: usize,
  bits: Option<u32>,
}

impl RawDecl {
  fn has_suffix(&self) -> bool {
    self.dims > 0 || self.bits.is_some()
  }

  fn clear(&mut self) {
    self.words.clear();
    self.dims = 0;
    self.bits = None;
  }
}

impl Parse for RawDecl {
  fn parse(input: ParseStream) -> SynResult<Self> {
    let mut decl = RawDecl::default();
    while !input.is_empty() {
      if input.peek(Ident::peek_any) {
        let word = input.call(Ident::parse_any)?;
        if decl.has_suffix() {
          decl.clear();
        }
        decl.words.push(word.to_string());
      } else if input.peek(token::Bracket) && !decl.words.is_empty() && decl.bits.is_none() {
        let content;
        bracketed!(content in input);
        let _: TokenStream = content.parse()?;
        decl.dims += 1;
      } else if input.peek(Token![:]) && input.peek2(LitInt) && !decl.words.is_empty() && !decl.has_suffix() {
        input.parse::<Token![:]>()?;
        let lit: LitInt = input.parse()?;
        decl.bits = Some(lit.base10_parse::<u32>()?);
      } else {
        let _: TokenTree = input.parse()?;
        decl.clear();
      }
    }
    Ok(decl)
  }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slots {
  pub sign: Option<String>,
  pub long: Option<String>,
  pub len: Option<String>,
  pub int: Option<String>,
  pub name: String,
}

impl Slots {
  // Fits `words` exactly, trying the optional slots greedily in declaration order.
  fn fit(words: &[String]) -> Option<Slots> {
    let (name, head) = words.split_last()?;
    (0..16u8).rev().find_map(|mask| {
      let take = [mask & 8 != 0, mask & 4 != 0, mask & 2 != 0, mask & 1 != 0];
      if take.iter().filter(|&&t| t).count() != head.len() {
        return None;
      }
      let mut it = head.iter();
      let mut slot = |taken: bool| if taken { it.next().cloned() } else { None };
      let slots = Slots { sign: slot(take[0]), long: slot(take[1]), len: slot(take[2]), int: slot(take[3]), name: name.clone() };
      let sign_ok = slots.sign.as_deref().is_none_or(|s| s == "signed" || s == "unsigned");
      let long_ok = slots.long.as_deref().is_none_or(|s| s == LONG);
      let int_ok = slots.int.as_deref().is_none_or(|s| s == INT);
      (sign_ok && long_ok && int_ok).then_some(slots)
    })
  }

  // Assigns the leftmost suffix of `words` that fits the declaration pattern.
  pub fn assign(words: &[String]) -> Option<Slots> {
    (0..words.len()).find_map(|start| Slots::fit(&words[start..]))
  }

  /// A lone `int` lands in the length slot; move it to the `int` slot so `long int` reads as `long`.
  pub fn fix_bare_int(mut self) -> Slots {
    if self.len.as_deref() == Some(INT) && self.int.is_none() {
      self.int = self.len.take();
    }
    self
  }

  // `"<long> <len>"` trimmed, falling back to the `int` keyword.
  pub fn base_type(&self) -> String {
    let combined = format!("{} {}", self.long.as_deref().unwrap_or(""), self.len.as_deref().unwrap_or(""));
    match combined.trim() {
      "" => self.int.clone().unwrap_or_default(),
      ty => ty.to_string(),
    }
  }
}

// Text of each `;`-terminated declaration in a line, with any `{`/`}` prefix removed.
fn pieces(line: &str) -> impl Iterator<Item = &str> {
  let mut parts: Vec<&str> = line.split(';').collect();
  parts.pop();
  parts.into_iter().filter_map(|part| {
    let body = part.rsplit(['{', '}']).next().unwrap_or(part).trim();
    (!body.is_empty()).then_some(body)
  })
}

fn parse_decl(text: &str) -> Option<Field> {
  let raw = match syn::parse_str::<RawDecl>(text) {
    Ok(raw) => raw,
    Err(err) => {
      trace!("skipping `{text}`: {err}");
      return None;
    }
  };
  let slots = Slots::assign(&raw.words)?.fix_bare_int();
  let ty = slots.base_type();
  if ty.is_empty() || slots.name.is_empty() {
    trace!("skipping `{text}`: no type");
    return None;
  }
  Some(Field {
    sign: Sign::from_keyword(slots.sign.as_deref()),
    name: slots.name,
    ty: BaseType::from_name(&ty),
    group: 0,
    bits: raw.bits.unwrap_or(0),
    is_array: raw.dims > 0,
    source: text.to_string(),
  })
}

/// Tokenizes every declaration in one comment-stripped line, left to right.
pub fn parse_line(line: &str) -> Vec<Field> {
  pieces(line).filter_map(parse_decl).collect()
}

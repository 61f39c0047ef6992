use crate::swap::types::LongWidth;

/// Placeholder used when no `struct <name>` is found in the input.
pub const PLACEHOLDER_NAME: &str = "Struct";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
  pub no_throw: bool,
  /// Assumed byte width of `long`.
  pub long_bytes: LongWidth,
  /// Struct name to use instead of the one found in the input.
  pub name: Option<String>,
  pub layout: bool,
}

impl Options {
  // Explicit name, then the extracted one, then the placeholder.
  pub(crate) fn resolve_name(&self, extracted: String) -> String {
    if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
      return name.to_string();
    }
    if extracted.is_empty() {
      log::warn!("no `struct <name>` found, using `{PLACEHOLDER_NAME}`");
      return PLACEHOLDER_NAME.to_string();
    }
    extracted
  }
}

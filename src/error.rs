use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A bit-field whose type can't be a byte-swappable storage unit.
  #[error("unsupported bit-field `{decl}`")]
  UnsupportedBitField { decl: String },
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

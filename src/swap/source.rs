// Line-level helpers that run before any declaration is tokenized.

const LINE_COMMENT: &str = "//";
const STRUCT_KEYWORD: &str = "struct";

/// Drops everything from the first `//` on and trims the rest.
///
/// Block comments and `//` inside string or char literals are not recognised.
pub fn strip_comment(line: &str) -> &str {
  line.split_once(LINE_COMMENT).map_or(line, |(code, _)| code).trim()
}

fn is_word_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}

// Maximal runs of word characters with their byte ranges.
fn words(line: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
  let mut rest = line.char_indices().peekable();
  core::iter::from_fn(move || {
    while rest.next_if(|&(_, c)| !is_word_char(c)).is_some() {}
    let (start, _) = rest.next()?;
    let mut end = line.len();
    while let Some(&(i, c)) = rest.peek() {
      if !is_word_char(c) {
        end = i;
        break;
      }
      rest.next();
    }
    Some((start, end))
  })
}

fn struct_name_in(line: &str) -> Option<&str> {
  let mut prev: Option<(usize, usize)> = None;
  for (start, end) in words(line) {
    if let Some((a, b)) = prev {
      let gap = &line[b..start];
      if &line[a..b] == STRUCT_KEYWORD && !gap.is_empty() && gap.chars().all(char::is_whitespace) {
        return Some(&line[start..end]);
      }
    }
    prev = Some((start, end));
  }
  None
}

/// Identifier following the first `struct` keyword across all lines, or `""` when there is none.
///
/// Lines are comment-stripped first, so a `struct` mentioned in a trailing comment is ignored.
pub fn struct_name<S: AsRef<str>>(lines: &[S]) -> String {
  lines
    .iter()
    .find_map(|line| struct_name_in(strip_comment(line.as_ref())))
    .unwrap_or_default()
    .to_string()
}

use serde::{
  Deserialize,
  Serialize,
};

use crate::Tendril;

/// How a single character is cased when it lands at a given position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterCase {
  #[default]
  Lower,
  Upper,
  Preserve,
}

impl LetterCase {
  /// Simple one-to-one case mapping. Characters whose mapping expands to
  /// several characters (`'ß'`, `'ǰ'`) are kept as they are.
  pub fn apply(self, ch: char) -> char {
    match self {
      // The only expanding lowercase mapping; its simple form is `i`.
      Self::Lower if ch == '\u{130}' => 'i',
      Self::Lower => single_char(ch.to_lowercase(), ch),
      Self::Upper => single_char(ch.to_uppercase(), ch),
      Self::Preserve => ch,
    }
  }

  #[inline]
  pub fn render(self, ch: char, buf: &mut Tendril) {
    buf.push(self.apply(ch));
  }
}

fn single_char(mut mapped: impl Iterator<Item = char>, ch: char) -> char {
  match (mapped.next(), mapped.next()) {
    (Some(single), None) => single,
    _ => ch,
  }
}

/// Case-insensitive key under which a character and every casing of it
/// compare equal (`'ſ'`, `'s'` and `'S'` all fold to `'s'`).
pub fn fold_case(ch: char) -> char {
  LetterCase::Lower.apply(LetterCase::Upper.apply(ch))
}

/// Per-position casing rules plus an optional word separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CaseTranslator {
  /// The very first character of the output.
  pub first_letter:         LetterCase,
  /// Non-initial characters inside a word.
  pub letter_in_word:       LetterCase,
  /// The first character of every word after the first.
  pub first_letter_of_word: LetterCase,
  /// Written before every word after the first.
  pub separator:            Option<char>,
}

impl Default for CaseTranslator {
  fn default() -> Self {
    Self::lower(None)
  }
}

impl CaseTranslator {
  pub const CAMEL: Self = Self::new(LetterCase::Lower, LetterCase::Lower, LetterCase::Upper);
  pub const PASCAL: Self = Self::new(LetterCase::Upper, LetterCase::Lower, LetterCase::Upper);
  pub const SNAKE: Self = Self::lower(Some('_'));
  pub const KEBAB: Self = Self::lower(Some('-'));

  pub const fn new(
    first_letter: LetterCase,
    letter_in_word: LetterCase,
    first_letter_of_word: LetterCase,
  ) -> Self {
    Self {
      first_letter,
      letter_in_word,
      first_letter_of_word,
      separator: None,
    }
  }

  /// Everything lowercased, words joined by `separator`.
  pub const fn lower(separator: Option<char>) -> Self {
    Self {
      first_letter: LetterCase::Lower,
      letter_in_word: LetterCase::Lower,
      first_letter_of_word: LetterCase::Lower,
      separator,
    }
  }

  pub const fn with_separator(mut self, separator: Option<char>) -> Self {
    self.separator = separator;
    self
  }

  #[inline]
  pub(crate) fn first_letter(&self, ch: char, buf: &mut Tendril) {
    self.first_letter.render(ch, buf);
  }

  #[inline]
  pub(crate) fn word_start(&self, ch: char, buf: &mut Tendril) {
    if let Some(separator) = self.separator {
      buf.push(separator);
    }
    self.first_letter_of_word.render(ch, buf);
  }

  #[inline]
  pub(crate) fn in_word(&self, ch: char, buf: &mut Tendril) {
    self.letter_in_word.render(ch, buf);
  }
}

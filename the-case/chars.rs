//! Character classification used to find word boundaries in identifiers.
//!
//! Classification is based on the Unicode general category of a character,
//! so it does not depend on the platform's locale.

use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
  /// Uppercase letter (`Lu`).
  Upper,
  /// Any other letter: lowercase, titlecase, modifier or other (`Ll`, `Lt`,
  /// `Lm`, `Lo`).
  Letter,
  /// Decimal, letter or other number (`Nd`, `Nl`, `No`).
  Number,
  /// Everything else. Never copied to the output.
  Separator,
}

impl CharClass {
  #[inline]
  pub fn is_word(self) -> bool {
    !matches!(self, Self::Separator)
  }
}

pub fn classify_char(ch: char) -> CharClass {
  match get_general_category(ch) {
    GeneralCategory::UppercaseLetter => CharClass::Upper,
    GeneralCategory::LowercaseLetter
    | GeneralCategory::TitlecaseLetter
    | GeneralCategory::ModifierLetter
    | GeneralCategory::OtherLetter => CharClass::Letter,
    GeneralCategory::DecimalNumber
    | GeneralCategory::LetterNumber
    | GeneralCategory::OtherNumber => CharClass::Number,
    _ => CharClass::Separator,
  }
}

#[inline]
pub fn char_is_word(ch: char) -> bool {
  classify_char(ch).is_word()
}

#[inline]
pub fn char_is_upper(ch: char) -> bool {
  classify_char(ch) == CharClass::Upper
}

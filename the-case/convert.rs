//! Word segmentation and re-rendering of identifiers.
//!
//! The converter walks the input once, left to right, and writes every
//! character in its final form. The only lookahead is a single pending
//! capital: inside a run of capitals it is not known whether the latest one
//! still belongs to the acronym (`HTTP` in `HTTP_server`) or starts the next
//! word (`S` in `HTTPServer`) until the following character is seen.
//!
//! | Mode | Word character | Separator |
//! |------|----------------|-----------|
//! | `Initial` | first letter, then `ExpectFollowingLower` (upper) or `InWord` | dropped |
//! | `ExpectFollowingLower` | upper: hold it, `InConsecutiveCaps`; else in-word | `SeekNextWord` |
//! | `InConsecutiveCaps` | upper/number: hold it; lower: held char starts a word | flush held, `SeekNextWord` |
//! | `InWord` | upper: word start; else in-word | `SeekNextWord` |
//! | `SeekNextWord` | word start | dropped |

use tracing::trace;

use crate::{
  Tendril,
  chars::{
    CharClass,
    classify_char,
  },
  translator::CaseTranslator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
  /// Nothing written yet.
  Initial,
  /// A lone capital started the current word.
  ExpectFollowingLower,
  /// Inside a run of two or more capitals, the latest one is pending.
  InConsecutiveCaps,
  InWord,
  /// After a separator run.
  SeekNextWord,
}

impl Mode {
  fn after_word_start(class: CharClass) -> Self {
    if class == CharClass::Upper {
      Self::ExpectFollowingLower
    } else {
      Self::InWord
    }
  }
}

struct Converter<'a> {
  translator: &'a CaseTranslator,
  buf:        &'a mut Tendril,
  mode:       Mode,
  pending:    Option<char>,
}

impl<'a> Converter<'a> {
  fn new(translator: &'a CaseTranslator, buf: &'a mut Tendril) -> Self {
    Self {
      translator,
      buf,
      mode: Mode::Initial,
      pending: None,
    }
  }

  /// Holds `ch`, writing out the previously held character as part of the
  /// current word.
  fn hold(&mut self, ch: char) {
    self.flush_pending();
    self.pending = Some(ch);
  }

  fn flush_pending(&mut self) {
    if let Some(ch) = self.pending.take() {
      self.translator.in_word(ch, self.buf);
    }
  }

  fn step(&mut self, ch: char) {
    let class = classify_char(ch);

    self.mode = match (self.mode, class) {
      (Mode::Initial, CharClass::Separator) => Mode::Initial,
      (Mode::Initial, _) => {
        self.translator.first_letter(ch, self.buf);
        Mode::after_word_start(class)
      },

      (Mode::ExpectFollowingLower, CharClass::Separator) => {
        self.flush_pending();
        Mode::SeekNextWord
      },
      (Mode::ExpectFollowingLower, CharClass::Upper) => {
        self.hold(ch);
        Mode::InConsecutiveCaps
      },
      (Mode::ExpectFollowingLower, _) => {
        self.flush_pending();
        self.translator.in_word(ch, self.buf);
        Mode::InWord
      },

      (Mode::InConsecutiveCaps, CharClass::Separator) => {
        self.flush_pending();
        Mode::SeekNextWord
      },
      (Mode::InConsecutiveCaps, CharClass::Upper | CharClass::Number) => {
        self.hold(ch);
        Mode::InConsecutiveCaps
      },
      (Mode::InConsecutiveCaps, CharClass::Letter) => {
        // The last capital of the run begins the word this letter continues.
        if let Some(start) = self.pending.take() {
          self.translator.word_start(start, self.buf);
        }
        self.translator.in_word(ch, self.buf);
        Mode::InWord
      },

      (Mode::InWord, CharClass::Separator) => Mode::SeekNextWord,
      (Mode::InWord, CharClass::Upper) => {
        self.translator.word_start(ch, self.buf);
        Mode::ExpectFollowingLower
      },
      (Mode::InWord, _) => {
        self.translator.in_word(ch, self.buf);
        Mode::InWord
      },

      (Mode::SeekNextWord, CharClass::Separator) => Mode::SeekNextWord,
      (Mode::SeekNextWord, _) => {
        self.translator.word_start(ch, self.buf);
        Mode::after_word_start(class)
      },
    };
  }

  fn finish(mut self) {
    self.flush_pending();
  }
}

/// Re-segments `text` into words and renders it with `translator`.
///
/// Never fails: input without letters or numbers produces an empty string.
pub fn convert(text: impl Iterator<Item = char>, translator: &CaseTranslator) -> Tendril {
  let mut res = Tendril::new();
  convert_with(text, translator, &mut res);
  res
}

/// Like [`convert`] but appends to `buf`. The first character written by this
/// call uses the first-letter rule regardless of what `buf` already holds.
pub fn convert_with(
  text: impl Iterator<Item = char>,
  translator: &CaseTranslator,
  buf: &mut Tendril,
) {
  let start = buf.len();
  let mut converter = Converter::new(translator, buf);
  for ch in text {
    converter.step(ch);
  }
  converter.finish();

  trace!(
    ?translator,
    converted = &buf.as_str()[start..],
    "converted identifier"
  );
}

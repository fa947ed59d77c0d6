//! Named identifier styles and the convenience wrappers built on them.

use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::{
  Tendril,
  convert::{
    convert,
    convert_with,
  },
  translator::CaseTranslator,
};

pub const DEFAULT_SNAKE_SEPARATOR: char = '_';
pub const DEFAULT_KEBAB_SEPARATOR: char = '-';

/// Style tag as written in configuration, without a separator.
///
/// Deserializes through [`FromStr`], so configuration accepts the same
/// spellings as parsing does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum StyleName {
  LowerCamel,
  Camel,
  Pascal,
  Snake,
  Kebab,
}

/// A fully specified output convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
  /// Everything lowercased, words joined by `separator` if there is one.
  LowerCamel { separator: Option<char> },
  Camel,
  Pascal,
  Snake { separator: char },
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StyleError {
  #[error("{style} style does not take a separator (got {separator:?})")]
  SeparatorNotAllowed { style: StyleName, separator: char },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseStyleError {
  #[error("empty style name")]
  Empty,
  #[error("unknown style '{0}', expected one of lower-camel, camel, pascal, snake, kebab")]
  UnknownStyle(String),
  #[error("separator must be a single character, got {0:?}")]
  InvalidSeparator(String),
  #[error(transparent)]
  Style(#[from] StyleError),
}

impl StyleName {
  pub const ALL: [StyleName; 5] = [
    StyleName::LowerCamel,
    StyleName::Camel,
    StyleName::Pascal,
    StyleName::Snake,
    StyleName::Kebab,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::LowerCamel => "lower-camel",
      Self::Camel => "camel",
      Self::Pascal => "pascal",
      Self::Snake => "snake",
      Self::Kebab => "kebab",
    }
  }

  /// Builds a [`Style`]. Snake and kebab fall back to their usual separator
  /// when none is given; camel and Pascal reject one.
  pub fn with_separator(self, separator: Option<char>) -> Result<Style, StyleError> {
    match (self, separator) {
      (Self::LowerCamel, separator) => Ok(Style::LowerCamel { separator }),
      (Self::Camel, None) => Ok(Style::Camel),
      (Self::Pascal, None) => Ok(Style::Pascal),
      (Self::Camel | Self::Pascal, Some(separator)) => {
        Err(StyleError::SeparatorNotAllowed {
          style: self,
          separator,
        })
      },
      (Self::Snake, separator) => {
        Ok(Style::Snake {
          separator: separator.unwrap_or(DEFAULT_SNAKE_SEPARATOR),
        })
      },
      (Self::Kebab, separator) => {
        Ok(Style::Snake {
          separator: separator.unwrap_or(DEFAULT_KEBAB_SEPARATOR),
        })
      },
    }
  }
}

impl fmt::Display for StyleName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for StyleName {
  type Err = ParseStyleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
      return Err(ParseStyleError::Empty);
    }

    match trimmed.to_ascii_lowercase().as_str() {
      "lower-camel" | "lower_camel" | "lowercamel" => Ok(Self::LowerCamel),
      "camel" => Ok(Self::Camel),
      "pascal" => Ok(Self::Pascal),
      "snake" => Ok(Self::Snake),
      "kebab" => Ok(Self::Kebab),
      _ => Err(ParseStyleError::UnknownStyle(trimmed.to_string())),
    }
  }
}

impl Style {
  pub const SNAKE: Self = Self::Snake {
    separator: DEFAULT_SNAKE_SEPARATOR,
  };
  pub const KEBAB: Self = Self::Snake {
    separator: DEFAULT_KEBAB_SEPARATOR,
  };

  pub const fn translator(self) -> CaseTranslator {
    match self {
      Self::LowerCamel { separator } => CaseTranslator::lower(separator),
      Self::Camel => CaseTranslator::CAMEL,
      Self::Pascal => CaseTranslator::PASCAL,
      Self::Snake { separator } => CaseTranslator::lower(Some(separator)),
    }
  }

  pub const fn name(self) -> StyleName {
    match self {
      Self::LowerCamel { .. } => StyleName::LowerCamel,
      Self::Camel => StyleName::Camel,
      Self::Pascal => StyleName::Pascal,
      Self::Snake {
        separator: DEFAULT_KEBAB_SEPARATOR,
      } => StyleName::Kebab,
      Self::Snake { .. } => StyleName::Snake,
    }
  }

  pub const fn separator(self) -> Option<char> {
    match self {
      Self::LowerCamel { separator } => separator,
      Self::Snake { separator } => Some(separator),
      Self::Camel | Self::Pascal => None,
    }
  }

  pub fn apply(self, text: impl Iterator<Item = char>) -> Tendril {
    convert(text, &self.translator())
  }

  pub fn apply_with(self, text: impl Iterator<Item = char>, buf: &mut Tendril) {
    convert_with(text, &self.translator(), buf);
  }

  /// Separator that differs from the one implied by the style name.
  fn explicit_separator(self) -> Option<char> {
    match self {
      Self::LowerCamel { separator } => separator,
      Self::Snake {
        separator: DEFAULT_SNAKE_SEPARATOR | DEFAULT_KEBAB_SEPARATOR,
      }
      | Self::Camel
      | Self::Pascal => None,
      Self::Snake { separator } => Some(separator),
    }
  }
}

impl From<StyleName> for Style {
  fn from(name: StyleName) -> Self {
    match name {
      StyleName::LowerCamel => Self::LowerCamel { separator: None },
      StyleName::Camel => Self::Camel,
      StyleName::Pascal => Self::Pascal,
      StyleName::Snake => Self::SNAKE,
      StyleName::Kebab => Self::KEBAB,
    }
  }
}

/// Renders as `name` or `name:<separator>`, the form [`FromStr`] accepts.
impl fmt::Display for Style {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())?;
    if let Some(separator) = self.explicit_separator() {
      write!(f, ":{separator}")?;
    }
    Ok(())
  }
}

impl TryFrom<String> for StyleName {
  type Error = ParseStyleError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl FromStr for Style {
  type Err = ParseStyleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let Some((name, separator)) = s.split_once(':') else {
      return Ok(s.parse::<StyleName>()?.into());
    };

    let name: StyleName = name.parse()?;
    let mut chars = separator.chars();
    let (Some(separator), None) = (chars.next(), chars.next()) else {
      return Err(ParseStyleError::InvalidSeparator(separator.to_string()));
    };
    Ok(name.with_separator(Some(separator))?)
  }
}

pub fn to_lower_camel_case(text: impl Iterator<Item = char>, separator: Option<char>) -> Tendril {
  Style::LowerCamel { separator }.apply(text)
}

pub fn to_lower_camel_case_with(
  text: impl Iterator<Item = char>,
  separator: Option<char>,
  buf: &mut Tendril,
) {
  Style::LowerCamel { separator }.apply_with(text, buf);
}

pub fn to_camel_case(text: impl Iterator<Item = char>) -> Tendril {
  Style::Camel.apply(text)
}

pub fn to_camel_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  Style::Camel.apply_with(text, buf);
}

pub fn to_pascal_case(text: impl Iterator<Item = char>) -> Tendril {
  Style::Pascal.apply(text)
}

pub fn to_pascal_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  Style::Pascal.apply_with(text, buf);
}

pub fn to_snake_case(text: impl Iterator<Item = char>) -> Tendril {
  Style::SNAKE.apply(text)
}

pub fn to_snake_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  Style::SNAKE.apply_with(text, buf);
}

pub fn to_kebab_case(text: impl Iterator<Item = char>) -> Tendril {
  Style::KEBAB.apply(text)
}

pub fn to_kebab_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  Style::KEBAB.apply_with(text, buf);
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_to_pascal_case() {
    assert_eq!(to_pascal_case("hello_world".chars()).as_str(), "HelloWorld");
    assert_eq!(to_pascal_case("HELLO_WORLD".chars()).as_str(), "HelloWorld");
    assert_eq!(to_pascal_case("hello-world".chars()).as_str(), "HelloWorld");
    assert_eq!(to_pascal_case("helloWorld".chars()).as_str(), "HelloWorld");
    assert_eq!(to_pascal_case("__leading__".chars()).as_str(), "Leading");
    assert_eq!(to_pascal_case("_user_".chars()).as_str(), "User");
    assert_eq!(to_pascal_case("".chars()).as_str(), "");
    assert_eq!(to_pascal_case("a".chars()).as_str(), "A");
  }

  #[test]
  fn test_to_camel_case() {
    assert_eq!(to_camel_case("hello_world".chars()).as_str(), "helloWorld");
    assert_eq!(to_camel_case("HELLO_WORLD".chars()).as_str(), "helloWorld");
    assert_eq!(to_camel_case("HelloWorld".chars()).as_str(), "helloWorld");
    assert_eq!(
      to_camel_case("user_id-value".chars()).as_str(),
      "userIdValue"
    );
    assert_eq!(to_camel_case("__leading__".chars()).as_str(), "leading");
    assert_eq!(to_camel_case("A".chars()).as_str(), "a");
  }

  #[test]
  fn test_to_lower_camel_case() {
    assert_eq!(
      to_lower_camel_case("HelloWorld".chars(), None).as_str(),
      "helloworld"
    );
    assert_eq!(
      to_lower_camel_case("HelloWorld".chars(), Some('.')).as_str(),
      "hello.world"
    );
  }

  #[test]
  fn test_to_snake_case() {
    // From various input formats
    assert_eq!(to_snake_case("helloWorld".chars()).as_str(), "hello_world");
    assert_eq!(to_snake_case("HelloWorld".chars()).as_str(), "hello_world");
    assert_eq!(to_snake_case("hello-world".chars()).as_str(), "hello_world");
    assert_eq!(to_snake_case("hello world".chars()).as_str(), "hello_world");
    assert_eq!(to_snake_case("HELLO_WORLD".chars()).as_str(), "hello_world");

    // Acronyms and consecutive uppercase
    assert_eq!(to_snake_case("HTTPServer".chars()).as_str(), "http_server");
    assert_eq!(
      to_snake_case("XMLHttpRequest".chars()).as_str(),
      "xml_http_request"
    );

    // Edge cases
    assert_eq!(to_snake_case("".chars()).as_str(), "");
    assert_eq!(to_snake_case("123".chars()).as_str(), "123");
    assert_eq!(
      to_snake_case("__leading__trailing__".chars()).as_str(),
      "leading_trailing"
    );
    assert_eq!(
      to_snake_case("already_snake".chars()).as_str(),
      "already_snake"
    );
  }

  #[test]
  fn test_to_kebab_case() {
    assert_eq!(to_kebab_case("helloWorld".chars()).as_str(), "hello-world");
    assert_eq!(to_kebab_case("HTTPServer".chars()).as_str(), "http-server");
    assert_eq!(
      to_kebab_case("--leading--trailing--".chars()).as_str(),
      "leading-trailing"
    );
  }

  #[test]
  fn with_helpers_append() {
    let mut buf = Tendril::from("PickFrom");
    to_pascal_case_with("user_profile".chars(), &mut buf);
    assert_eq!(buf.as_str(), "PickFromUserProfile");

    let mut buf = Tendril::from("x.");
    to_snake_case_with("UserID".chars(), &mut buf);
    assert_eq!(buf.as_str(), "x.user_id");
  }

  #[test]
  fn parse_style_names() {
    assert_eq!("snake".parse::<StyleName>(), Ok(StyleName::Snake));
    assert_eq!(" Pascal ".parse::<StyleName>(), Ok(StyleName::Pascal));
    assert_eq!("lowerCamel".parse::<StyleName>(), Ok(StyleName::LowerCamel));
    assert_eq!("lower-camel".parse::<StyleName>(), Ok(StyleName::LowerCamel));
    assert_eq!("".parse::<StyleName>(), Err(ParseStyleError::Empty));
    assert_eq!(
      "shouty".parse::<StyleName>(),
      Err(ParseStyleError::UnknownStyle("shouty".into()))
    );
    for name in StyleName::ALL {
      assert_eq!(name.to_string().parse::<StyleName>(), Ok(name));
    }
  }

  #[test]
  fn deserializes_every_parsed_spelling() {
    #[derive(Debug, Deserialize)]
    struct Wrapper {
      style: StyleName,
    }

    for (source, expected) in [
      ("Pascal", StyleName::Pascal),
      ("lower_camel", StyleName::LowerCamel),
      ("lowerCamel", StyleName::LowerCamel),
      ("lower-camel", StyleName::LowerCamel),
      ("KEBAB", StyleName::Kebab),
    ] {
      let wrapper: Wrapper = toml::from_str(&format!("style = {source:?}")).unwrap();
      assert_eq!(wrapper.style, expected, "{source}");
      assert_eq!(source.parse::<StyleName>(), Ok(expected));
    }
    assert!(toml::from_str::<Wrapper>("style = \"shouty\"").is_err());
  }

  #[test]
  fn serializes_kebab_names() {
    #[derive(Serialize)]
    struct Wrapper {
      style: StyleName,
    }

    let out = toml::to_string(&Wrapper {
      style: StyleName::LowerCamel,
    })
    .unwrap();
    assert_eq!(out.trim(), "style = \"lower-camel\"");
  }

  #[test]
  fn parse_styles_with_separators() {
    assert_eq!("snake".parse::<Style>(), Ok(Style::SNAKE));
    assert_eq!("kebab".parse::<Style>(), Ok(Style::KEBAB));
    assert_eq!("snake:.".parse::<Style>(), Ok(Style::Snake { separator: '.' }));
    assert_eq!("snake::".parse::<Style>(), Ok(Style::Snake { separator: ':' }));
    assert_eq!(
      "lower-camel:/".parse::<Style>(),
      Ok(Style::LowerCamel {
        separator: Some('/'),
      })
    );
    assert_eq!(
      "snake:".parse::<Style>(),
      Err(ParseStyleError::InvalidSeparator(String::new()))
    );
    assert_eq!(
      "snake:--".parse::<Style>(),
      Err(ParseStyleError::InvalidSeparator("--".into()))
    );
    assert_eq!(
      "camel:_".parse::<Style>(),
      Err(ParseStyleError::Style(StyleError::SeparatorNotAllowed {
        style:     StyleName::Camel,
        separator: '_',
      }))
    );
  }

  #[test]
  fn display_round_trips() {
    let styles = [
      Style::LowerCamel { separator: None },
      Style::LowerCamel {
        separator: Some('.'),
      },
      Style::Camel,
      Style::Pascal,
      Style::SNAKE,
      Style::KEBAB,
      Style::Snake { separator: '/' },
    ];
    for style in styles {
      assert_eq!(style.to_string().parse::<Style>(), Ok(style), "{style}");
    }
    assert_eq!(Style::SNAKE.to_string(), "snake");
    assert_eq!(Style::Snake { separator: '/' }.to_string(), "snake:/");
  }

  #[test]
  fn with_separator_defaults() {
    assert_eq!(StyleName::Snake.with_separator(None), Ok(Style::SNAKE));
    assert_eq!(StyleName::Kebab.with_separator(None), Ok(Style::KEBAB));
    assert_eq!(
      StyleName::Kebab.with_separator(Some('+')),
      Ok(Style::Snake { separator: '+' })
    );
    assert_eq!(
      StyleName::LowerCamel.with_separator(None),
      Ok(Style::LowerCamel { separator: None })
    );
    assert!(StyleName::Pascal.with_separator(Some('_')).is_err());
    assert_eq!(Style::KEBAB.name(), StyleName::Kebab);
    assert_eq!(Style::Pascal.separator(), None);
    assert_eq!(Style::SNAKE.separator(), Some('_'));
  }

  #[test]
  fn every_style_keeps_numbers() {
    for name in StyleName::ALL {
      assert_eq!(Style::from(name).apply("123".chars()).as_str(), "123");
    }
  }
}

//! Identifier case conversion.
//!
//! Splits an identifier into words at case changes, acronym edges and
//! separator runs, then renders it in a target style:
//!
//! ```
//! use the_case::{
//!   to_camel_case,
//!   to_pascal_case,
//!   to_snake_case,
//! };
//!
//! assert_eq!(to_snake_case("HTTPServer".chars()).as_str(), "http_server");
//! assert_eq!(to_pascal_case("user_id".chars()).as_str(), "UserId");
//! assert_eq!(to_camel_case("XMLHttpRequest".chars()).as_str(), "xmlHttpRequest");
//! ```

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod chars;
pub mod config;
pub mod convert;
pub mod style;
pub mod translator;

pub use convert::{
  convert,
  convert_with,
};
pub use style::{
  Style,
  StyleName,
  to_camel_case,
  to_camel_case_with,
  to_kebab_case,
  to_kebab_case_with,
  to_lower_camel_case,
  to_lower_camel_case_with,
  to_pascal_case,
  to_pascal_case_with,
  to_snake_case,
  to_snake_case_with,
};
pub use translator::{
  CaseTranslator,
  LetterCase,
};

pub type Tendril = SmartString<LazyCompact>;

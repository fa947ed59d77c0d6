//! Per-role naming configuration for code generators.
//!
//! A generator normalizes every identifier it emits according to the role
//! the identifier plays. Path parameters are snake case and accessors or
//! type names are Pascal case unless configured otherwise:
//!
//! ```
//! use the_case::config::{
//!   NamingConfig,
//!   Role,
//! };
//!
//! let config = NamingConfig::from_toml(
//!   r#"
//!     [path-param]
//!     style = "kebab"
//!   "#,
//! )
//! .unwrap();
//! assert_eq!(config.name(Role::PathParam, "UserID").unwrap().as_str(), "user-id");
//! assert_eq!(config.name(Role::Accessor, "user_id").unwrap().as_str(), "UserId");
//! ```

use std::fmt;

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;
use tracing::{
  debug,
  trace,
  warn,
};

use crate::{
  Tendril,
  style::{
    Style,
    StyleError,
    StyleName,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
  PathParam,
  Accessor,
  TypeName,
  DocName,
}

impl Role {
  pub const ALL: [Role; 4] = [
    Role::PathParam,
    Role::Accessor,
    Role::TypeName,
    Role::DocName,
  ];
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::PathParam => "path-param",
      Self::Accessor => "accessor",
      Self::TypeName => "type-name",
      Self::DocName => "doc-name",
    })
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(transparent)]
  Toml(#[from] toml::de::Error),
  #[error("invalid style for {role}: {source}")]
  Style {
    role:   Role,
    #[source]
    source: StyleError,
  },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct StyleConfig {
  pub style:     StyleName,
  pub separator: Option<char>,
}

impl Default for StyleConfig {
  fn default() -> Self {
    Self::new(StyleName::Snake)
  }
}

impl StyleConfig {
  pub const fn new(style: StyleName) -> Self {
    Self {
      style,
      separator: None,
    }
  }

  pub fn resolve(&self) -> std::result::Result<Style, StyleError> {
    self.style.with_separator(self.separator)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct NamingConfig {
  pub path_param: StyleConfig,
  pub accessor:   StyleConfig,
  pub type_name:  StyleConfig,
  pub doc_name:   StyleConfig,
}

impl Default for NamingConfig {
  fn default() -> Self {
    Self {
      path_param: StyleConfig::new(StyleName::Snake),
      accessor:   StyleConfig::new(StyleName::Pascal),
      type_name:  StyleConfig::new(StyleName::Pascal),
      doc_name:   StyleConfig::new(StyleName::Camel),
    }
  }
}

impl NamingConfig {
  /// Parses a naming config and checks that every role resolves to a style.
  pub fn from_toml(source: &str) -> Result<Self> {
    let config: Self = toml::from_str(source)?;
    config.validate()?;
    debug!(
      path_param = %config.path_param.style,
      accessor = %config.accessor.style,
      type_name = %config.type_name.style,
      doc_name = %config.doc_name.style,
      "loaded naming config"
    );
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    for role in Role::ALL {
      if let Err(source) = self.style(role) {
        warn!(%role, %source, "rejecting naming config");
        return Err(ConfigError::Style { role, source });
      }
    }
    Ok(())
  }

  pub fn get(&self, role: Role) -> &StyleConfig {
    match role {
      Role::PathParam => &self.path_param,
      Role::Accessor => &self.accessor,
      Role::TypeName => &self.type_name,
      Role::DocName => &self.doc_name,
    }
  }

  pub fn style(&self, role: Role) -> std::result::Result<Style, StyleError> {
    self.get(role).resolve()
  }

  /// Normalizes `ident` for use in the given role.
  pub fn name(&self, role: Role, ident: &str) -> std::result::Result<Tendril, StyleError> {
    let style = self.style(role)?;
    let name = style.apply(ident.chars());
    trace!(%role, %style, ident, name = name.as_str(), "normalized identifier");
    Ok(name)
  }
}

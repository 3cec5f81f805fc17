// SPDX-License-Identifier: MPL-2.0
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// An `#id` selector naming one element of the host document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    id: String,
}

impl Selector {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = s
            .trim()
            .strip_prefix('#')
            .filter(|id| !id.is_empty() && !id.chars().any(char::is_whitespace))
            .ok_or_else(|| Error::InvalidSelector(s.to_string()))?;
        Ok(Self { id: id.to_string() })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

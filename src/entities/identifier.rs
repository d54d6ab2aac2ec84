// SPDX-License-Identifier: GPL-3.0-only

use std::{convert::Infallible, fmt, str::FromStr};

/// A catalog key: either the numeric index or the catalog name.
///
/// No validation happens here; an identifier the catalog does not know about
/// only fails once it reaches the transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Id(i64),
    Name(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{id}"),
            Identifier::Name(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for Identifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only canonical numbers, so "025" or "+25" reach the catalog untouched
        Ok(match s.parse::<i64>() {
            Ok(id) if id.to_string() == s => Identifier::Id(id),
            _ => Identifier::Name(s.to_string()),
        })
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Id(id)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Name(name)
    }
}

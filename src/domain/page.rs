use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Post;

/// Opaque pagination token handed out by the listing API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cursor {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Cursor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One page of posts in source order. No `after` cursor means there is
/// nothing further to load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub posts: Vec<Post>,
    pub after: Option<Cursor>,
    pub before: Option<Cursor>,
}

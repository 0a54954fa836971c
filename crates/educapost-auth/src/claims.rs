//! Token claims and the principal they resolve to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two kinds of account that can sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    /// Exact, case-sensitive match on `"teacher"` / `"student"`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    /// Display name used in authorization messages ("Teacher role required").
    pub fn label(self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed payload: who the bearer is and when the token lapses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub role: Role,
    pub id: i32,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
}

impl Claims {
    pub fn principal(&self) -> Principal {
        Principal {
            role: self.role,
            id: self.id,
        }
    }
}

/// Authenticated identity attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub role: Role,
    pub id: i32,
}

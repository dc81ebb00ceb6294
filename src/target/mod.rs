//! Command-line target classification and validation.
//!
//! The argument is either an email address (contains `@`) or a bare domain.
//! Both are checked against loose shape patterns, not full RFC grammars:
//! - email: non-whitespace local part, `@`, non-whitespace domain with a `.`
//! - domain: one leading label, then one or more alphabetic labels of 2+
//!   characters, optional trailing dot
//!
//! Either way the result is a single domain used for every query.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error_handling::InputError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]?\.([a-zA-Z]{2,}\.?)+$")
        .expect("domain pattern is a valid regex")
});

/// A validated sweep target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// An email address and the domain after its `@`.
    Email {
        /// The address exactly as given
        address: String,
        /// Everything after the first `@`
        domain: String,
    },
    /// A bare domain, used verbatim.
    Domain {
        /// The domain exactly as given
        domain: String,
    },
}

impl Target {
    /// Classifies and validates a raw command-line argument.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidEmail` or `InputError::InvalidDomain` when
    /// the argument does not have the expected shape.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        match input.split_once('@') {
            Some((_, domain)) => {
                if !EMAIL_PATTERN.is_match(input) {
                    return Err(InputError::InvalidEmail(input.to_string()));
                }
                Ok(Target::Email {
                    address: input.to_string(),
                    domain: domain.to_string(),
                })
            }
            None => {
                if !DOMAIN_PATTERN.is_match(input) {
                    return Err(InputError::InvalidDomain(input.to_string()));
                }
                Ok(Target::Domain {
                    domain: input.to_string(),
                })
            }
        }
    }

    /// Parses an optional argument, treating `None` as a missing target.
    ///
    /// # Errors
    ///
    /// Returns `InputError::MissingTarget` for `None`, otherwise whatever
    /// [`Target::parse`] returns.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, InputError> {
        arg.ok_or(InputError::MissingTarget).and_then(Self::parse)
    }

    /// The domain every lookup runs against.
    pub fn domain(&self) -> &str {
        match self {
            Target::Email { domain, .. } | Target::Domain { domain } => domain,
        }
    }

    /// The argument as the user typed it.
    pub fn input(&self) -> &str {
        match self {
            Target::Email { address, .. } => address,
            Target::Domain { domain } => domain,
        }
    }

    /// Whether the target was given as an email address.
    pub fn is_email(&self) -> bool {
        matches!(self, Target::Email { .. })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input())
    }
}

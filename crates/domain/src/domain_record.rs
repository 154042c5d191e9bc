use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Classification state of a domain as seen by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Unknown,
    Blacklist,
    Whitelist,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "Unknown",
            Category::Blacklist => "Blacklist",
            Category::Whitelist => "Whitelist",
        }
    }

    /// Resolver action every record in this category must carry.
    pub fn implied_action(&self) -> ResolverAction {
        match self {
            Category::Unknown => ResolverAction::Forward,
            Category::Blacklist => ResolverAction::Block,
            Category::Whitelist => ResolverAction::Allow,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Category::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" => Ok(Category::Unknown),
            "blacklist" => Ok(Category::Blacklist),
            "whitelist" => Ok(Category::Whitelist),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolverAction {
    Forward,
    Block,
    Allow,
}

impl ResolverAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverAction::Forward => "Forward",
            ResolverAction::Block => "Block",
            ResolverAction::Allow => "Allow",
        }
    }
}

impl fmt::Display for ResolverAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolverAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(ResolverAction::Forward),
            "block" => Ok(ResolverAction::Block),
            "allow" => Ok(ResolverAction::Allow),
            _ => Err(DomainError::InvalidAction(s.to_string())),
        }
    }
}

/// Row of the resolver's record table, as far as classification cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub domain: String,
    pub category: Category,
    pub action: ResolverAction,
    pub updated_at: Option<String>,
}

impl DomainRecord {
    pub fn new(domain: impl Into<String>, category: Category) -> Self {
        Self {
            domain: to_fqdn(&domain.into()),
            category,
            action: category.implied_action(),
            updated_at: None,
        }
    }
}

/// Lowercased name without surrounding whitespace or trailing dot, the form
/// handed to the scraper.
pub fn to_bare_name(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_lowercase()
}

/// Fully-qualified form (single trailing dot) used as the store key.
pub fn to_fqdn(domain: &str) -> String {
    let trimmed = domain.trim();
    if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

pub fn validate_domain(domain: &str) -> Result<(), DomainError> {
    let bare = to_bare_name(domain);
    if bare.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "Domain cannot be empty".to_string(),
        ));
    }
    if bare.len() > 253 {
        return Err(DomainError::InvalidDomainName(format!(
            "Domain exceeds 253 characters: {}",
            bare
        )));
    }
    let valid = bare
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '.' || c == '_');
    if !valid {
        return Err(DomainError::InvalidDomainName(bare));
    }
    Ok(())
}

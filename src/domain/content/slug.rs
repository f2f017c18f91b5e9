// src/domain/content/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_SLUG_LEN: usize = 255;

/// URL-safe identifier used as the primary key of content records.
///
/// A slug is one or more `/`-separated segments; each segment must match
/// `^[a-z0-9]+(-[a-z0-9]+)*$`. Plain slugs (blog posts, portfolio items,
/// categories) are a single segment; page slugs may nest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Parse a single-segment slug.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !valid_segment(&value) {
            return Err(DomainError::Validation(format!("invalid slug '{value}'")));
        }
        Self::checked(value)
    }

    /// Parse a slug that may contain `/` separators for nested page paths.
    pub fn parse_path(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let mut segments = value.split('/');
        if !segments.all(valid_segment) {
            return Err(DomainError::Validation(format!(
                "invalid page slug '{value}'"
            )));
        }
        Self::checked(value)
    }

    fn checked(value: String) -> DomainResult<Self> {
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug exceeds {MAX_SLUG_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn valid_segment(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    // Hyphens must sit between alphanumeric runs.
    let mut boundary = true;
    for c in segment.chars() {
        match c {
            'a'..='z' | '0'..='9' => boundary = false,
            '-' if !boundary => boundary = true,
            _ => return false,
        }
    }
    !boundary
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

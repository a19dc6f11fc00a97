//! Route pattern parsing and matching.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use petal_core::PetalError;

/// Extracted route parameters (e.g., `:id` from `/product/:id`).
pub type RouteParams = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route pattern such as `/product/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. Must start with `/`; `:name` marks a parameter.
    pub fn parse(pattern: &str) -> Result<Self, PetalError> {
        let invalid = |reason: &str| PetalError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut segments = Vec::new();
        let mut names = HashSet::new();

        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter name is empty"));
                }
                if !names.insert(name.to_string()) {
                    return Err(invalid(&format!("parameter '{}' repeated", name)));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Static(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of literal segments, used to rank competing matches.
    pub fn static_segments(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Static(_)))
            .count()
    }

    /// Whether two patterns match exactly the same set of paths.
    pub fn overlaps_exactly(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Static(a), Segment::Static(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Match against already-split path segments.
    pub fn matches(&self, path: &[&str]) -> Option<RouteParams> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(path) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a request path into segments, dropping query, fragment and
/// empty segments (so `/a/` and `/a` are the same path).
pub fn split_path(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

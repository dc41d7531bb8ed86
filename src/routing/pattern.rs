//! Path patterns with `:name` single-segment parameters

use super::RouteError;
use std::collections::BTreeMap;
use std::fmt;

/// Parameters captured while matching, keyed by name
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern such as `/chat/:chatId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        if !raw.starts_with('/') {
            return Err(RouteError::InvalidPattern(
                raw.to_string(),
                "pattern must start with '/'".to_string(),
            ));
        }

        let mut segments = Vec::new();
        for part in split_segments(raw) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteError::InvalidPattern(
                        raw.to_string(),
                        "parameter name is empty".to_string(),
                    ));
                }
                if segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                {
                    return Err(RouteError::InvalidPattern(
                        raw.to_string(),
                        format!("parameter ':{}' appears twice", name),
                    ));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if part.contains('*') {
                return Err(RouteError::InvalidPattern(
                    raw.to_string(),
                    "wildcards are only allowed as the catch-all route".to_string(),
                ));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern matching only `/`
    pub fn root() -> Self {
        Self {
            raw: "/".to_string(),
            segments: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a normalized path, returning the captured parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split_segments(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    let value = urlencoding::decode(part)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| part.to_string());
                    params.insert(name.clone(), value);
                }
            }
        }
        Some(params)
    }

    /// Two patterns overlap when some concrete path would match both.
    pub fn overlaps(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    _ => true,
                })
    }

    /// Join a child pattern under this one (used for nested tables).
    ///
    /// Parameter names must stay unique across the joined pattern.
    pub fn join(&self, child: &PathPattern) -> Result<PathPattern, RouteError> {
        let mut segments = self.segments.clone();
        for segment in &child.segments {
            if let Segment::Param(name) = segment {
                if segments.contains(segment) {
                    return Err(RouteError::InvalidPattern(
                        format!("{}{}", self.raw.trim_end_matches('/'), child.raw),
                        format!("parameter ':{}' appears twice", name),
                    ));
                }
            }
            segments.push(segment.clone());
        }
        let raw = if segments.is_empty() {
            "/".to_string()
        } else {
            segments
                .iter()
                .map(|s| match s {
                    Segment::Literal(lit) => format!("/{}", lit),
                    Segment::Param(name) => format!("/:{}", name),
                })
                .collect()
        };
        Ok(PathPattern { raw, segments })
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Strip the query string and fragment, collapse repeated slashes and drop
/// any trailing slash.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let joined: Vec<&str> = split_segments(&path[..end]).collect();
    format!("/{}", joined.join("/"))
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

//! Path template matching.
//!
//! # Responsibilities
//! - Parse templates like `/vendors/{vendor_id}/materials`
//! - Match split request paths segment by segment
//! - Extract integer and text parameters
//!
//! # Design Decisions
//! - `{name}` is an integer parameter, `{name:text}` is free text
//! - Segment counts must match exactly; no trailing wildcards
//! - A literal mismatch is "no match"; a bad integer is reported separately
//!   so the router can answer 400 instead of 404

use std::fmt;

/// One segment of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Int(&'static str),
    Text(&'static str),
}

/// Value captured by a parameter segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

/// Parameters captured from a matched path, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(&'static str, ParamValue)>);

impl PathParams {
    pub fn int(&self, name: &str) -> Option<i64> {
        self.0.iter().find_map(|(n, v)| match v {
            ParamValue::Int(i) if *n == name => Some(*i),
            _ => None,
        })
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.0.iter().find_map(|(n, v)| match v {
            ParamValue::Text(s) if *n == name => Some(s.as_str()),
            _ => None,
        })
    }
}

/// Outcome of matching one template against a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(PathParams),
    /// Shape matched but the named integer parameter did not parse.
    InvalidParam(&'static str),
    NoMatch,
}

/// A compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    template: &'static str,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a template. Templates are static route-table literals.
    pub fn parse(template: &'static str) -> Self {
        let segments = split_path(template)
            .into_iter()
            .map(|raw| match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(param) => match param.strip_suffix(":text") {
                    Some(name) => Segment::Text(name),
                    None => Segment::Int(param),
                },
                None => Segment::Literal(raw),
            })
            .collect();

        Self { template, segments }
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn matches(&self, path: &[&str]) -> MatchOutcome {
        if path.len() != self.segments.len() {
            return MatchOutcome::NoMatch;
        }

        let mut params = Vec::new();
        let mut invalid = None;

        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != value {
                        return MatchOutcome::NoMatch;
                    }
                }
                Segment::Int(name) => match value.parse::<i64>() {
                    Ok(i) => params.push((*name, ParamValue::Int(i))),
                    Err(_) => {
                        // Keep scanning: a later literal mismatch still wins.
                        invalid.get_or_insert(*name);
                    }
                },
                Segment::Text(name) => {
                    if value.is_empty() {
                        return MatchOutcome::NoMatch;
                    }
                    params.push((*name, ParamValue::Text((*value).to_string())));
                }
            }
        }

        match invalid {
            Some(name) => MatchOutcome::InvalidParam(name),
            None => MatchOutcome::Matched(PathParams(params)),
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template)
    }
}

/// Split a path on `/` after trimming leading and trailing slashes.
/// The root path yields no segments.
pub fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

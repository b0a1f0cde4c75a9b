//! Path pattern matching.
//!
//! Patterns are absolute paths whose segments are either literal text or a
//! `:name` placeholder. A placeholder always spans exactly one whole,
//! non-empty segment:
//!
//! - `/verify` - static, matched by plain string equality
//! - `/certificate/:tokenId` - one parameter
//! - `/user/:userId/post/:postId` - several parameters, kept in pattern order
//!
//! Matches are anchored at both ends and trailing slashes are significant:
//! `/verify/` does not match `/verify`. Callers normalize paths first.

use crate::error::PatternError;
use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Maximum allowed length for a route pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a route pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// Parameters captured from a concrete path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathParams(IndexMap<String, String>);

impl PathParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the value captured for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Returns the value captured for `name`, or `""` when absent.
	///
	/// Convenient inside label generators, which only ever see the
	/// parameters of their own pattern.
	pub fn get_or_empty(&self, name: &str) -> &str {
		self.get(name).unwrap_or_default()
	}

	/// Returns the number of captured parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when nothing was captured (static routes).
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates `(name, value)` pairs in pattern order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the parameter names in pattern order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}
}

impl<K, V> FromIterator<(K, V)> for PathParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Param(String),
}

/// A compiled route pattern.
///
/// Static patterns carry no regex and compare by string equality.
/// Parameterized patterns compile to an anchored regex in which every
/// placeholder becomes a named `[^/]+` group, so a parameter can neither be
/// empty nor swallow a separator, and the segment count must agree.
#[derive(Debug, Clone)]
pub struct PathPattern {
	pattern: String,
	segments: Vec<Segment>,
	param_names: Vec<String>,
	regex: Option<Regex>,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns a [`PatternError`] when the pattern is empty, relative, too
	/// long, has too many segments, or contains a malformed or repeated
	/// placeholder.
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		if pattern.is_empty() {
			return Err(PatternError::Empty);
		}
		if !pattern.starts_with('/') {
			return Err(PatternError::NotAbsolute(pattern.to_string()));
		}
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(PatternError::TooLong {
				len: pattern.len(),
				max: MAX_PATTERN_LENGTH,
			});
		}

		// Segments after the leading '/', so "/" has one (empty) segment.
		let segment_count = pattern[1..].split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(PatternError::TooManySegments {
				count: segment_count,
				max: MAX_PATH_SEGMENTS,
			});
		}

		let segments = Self::parse_segments(pattern)?;
		let param_names: Vec<String> = segments
			.iter()
			.filter_map(|segment| match segment {
				Segment::Param(name) => Some(name.clone()),
				Segment::Literal(_) => None,
			})
			.collect();

		let regex = if param_names.is_empty() {
			None
		} else {
			let regex_str = Self::regex_source(&segments);
			let regex = RegexBuilder::new(&regex_str)
				.size_limit(MAX_REGEX_SIZE)
				.build()
				.map_err(|e| PatternError::Regex(e.to_string()))?;
			Some(regex)
		};

		Ok(Self {
			pattern: pattern.to_string(),
			segments,
			param_names,
			regex,
		})
	}

	fn parse_segments(pattern: &str) -> Result<Vec<Segment>, PatternError> {
		let mut segments = Vec::new();

		for (index, raw) in pattern.split('/').enumerate() {
			let Some(name) = raw.strip_prefix(':') else {
				segments.push(Segment::Literal(raw.to_string()));
				continue;
			};

			if name.is_empty() {
				return Err(PatternError::EmptyParamName {
					pattern: pattern.to_string(),
					segment: index,
				});
			}
			if !is_identifier(name) {
				return Err(PatternError::InvalidParamName {
					pattern: pattern.to_string(),
					name: name.to_string(),
				});
			}
			if segments
				.iter()
				.any(|s| matches!(s, Segment::Param(existing) if existing == name))
			{
				return Err(PatternError::DuplicateParam {
					pattern: pattern.to_string(),
					name: name.to_string(),
				});
			}

			segments.push(Segment::Param(name.to_string()));
		}

		Ok(segments)
	}

	fn regex_source(segments: &[Segment]) -> String {
		let body: Vec<String> = segments
			.iter()
			.map(|segment| match segment {
				Segment::Literal(text) => regex::escape(text),
				Segment::Param(name) => format!("(?P<{}>[^/]+)", name),
			})
			.collect();
		format!("^{}$", body.join("/"))
	}

	/// Returns the original pattern string.
	pub fn as_str(&self) -> &str {
		&self.pattern
	}

	/// Returns the placeholder names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether this pattern has no placeholders.
	pub fn is_exact(&self) -> bool {
		self.regex.is_none()
	}

	/// Checks whether `path` matches without extracting parameters.
	pub fn is_match(&self, path: &str) -> bool {
		match &self.regex {
			Some(regex) => regex.is_match(path),
			None => self.pattern == path,
		}
	}

	/// Matches `path` and returns the captured parameters.
	///
	/// Static patterns return an empty [`PathParams`] on equality.
	pub fn matches(&self, path: &str) -> Option<PathParams> {
		let Some(regex) = &self.regex else {
			return (self.pattern == path).then(PathParams::new);
		};

		let caps = regex.captures(path)?;
		Some(
			self.param_names
				.iter()
				.filter_map(|name| caps.name(name).map(|m| (name.clone(), m.as_str())))
				.collect(),
		)
	}

	/// Builds a concrete path by substituting `params` into the pattern.
	///
	/// Returns the name of the first placeholder that has no (or an empty)
	/// value. Extra parameters are ignored.
	pub fn reverse(&self, params: &PathParams) -> Result<String, &str> {
		let mut parts = Vec::with_capacity(self.segments.len());
		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => parts.push(text.as_str()),
				Segment::Param(name) => match params.get(name) {
					Some(value) if !value.is_empty() => parts.push(value),
					_ => return Err(name.as_str()),
				},
			}
		}
		Ok(parts.join("/"))
	}
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	chars
		.next()
		.is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

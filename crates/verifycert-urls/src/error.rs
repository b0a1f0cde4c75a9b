//! Error types for route table construction and URL generation.
//!
//! Resolution itself never fails: an unmatched path is `None`, and a
//! dangling parent reference is skipped. Only defects in the table
//! definition and reverse lookups surface as errors.

use thiserror::Error;

/// Result type for route table operations.
pub type RouterResult<T> = Result<T, RouterError>;

/// A route pattern that cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
	/// The pattern string is empty.
	#[error("route pattern is empty")]
	Empty,

	/// The pattern does not start with `/`.
	#[error("route pattern '{0}' must start with '/'")]
	NotAbsolute(String),

	/// A `:` placeholder segment has no name.
	#[error("route pattern '{pattern}' has an unnamed placeholder in segment {segment}")]
	EmptyParamName {
		/// The offending pattern.
		pattern: String,
		/// Zero-based segment index (the leading empty segment is 0).
		segment: usize,
	},

	/// A placeholder name is not an identifier.
	#[error("route pattern '{pattern}' has invalid placeholder name '{name}'")]
	InvalidParamName {
		/// The offending pattern.
		pattern: String,
		/// The rejected name.
		name: String,
	},

	/// The same placeholder name appears twice.
	#[error("route pattern '{pattern}' declares placeholder '{name}' more than once")]
	DuplicateParam {
		/// The offending pattern.
		pattern: String,
		/// The repeated name.
		name: String,
	},

	/// The pattern exceeds the maximum length.
	#[error("route pattern length {len} exceeds maximum allowed length of {max} bytes")]
	TooLong {
		/// Actual length in bytes.
		len: usize,
		/// Maximum length in bytes.
		max: usize,
	},

	/// The pattern has too many segments.
	#[error("route pattern has {count} path segments, exceeding maximum of {max}")]
	TooManySegments {
		/// Actual segment count.
		count: usize,
		/// Maximum segment count.
		max: usize,
	},

	/// The generated regex failed to compile.
	#[error("failed to compile route pattern regex: {0}")]
	Regex(String),
}

/// Errors raised while building a route table or reversing a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RouterError {
	/// A route's path is not a valid pattern.
	#[error("invalid route '{path}': {source}")]
	InvalidPattern {
		/// The route path as declared.
		path: String,
		/// Why the pattern was rejected.
		#[source]
		source: PatternError,
	},

	/// The label kind does not fit the path: parameterized paths need a
	/// generated label, static paths need a fixed one.
	#[error("route '{path}' has a label that does not match its parameters")]
	LabelMismatch {
		/// The route path as declared.
		path: String,
	},

	/// A parent reference names a parameterized route.
	#[error("route '{path}' names parameterized route '{parent}' as its parent")]
	DynamicParent {
		/// The child route path.
		path: String,
		/// The parent path it references.
		parent: String,
	},

	/// No route carries the requested name.
	#[error("invalid route name: {0}")]
	InvalidRouteName(String),

	/// A parameter required by the route pattern was not supplied.
	#[error("missing parameter '{param}' for route '{route}'")]
	MissingParameter {
		/// The route name.
		route: String,
		/// The parameter name.
		param: String,
	},
}

/// Errors raised while loading breadcrumb settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("failed to read settings file: {0}")]
	Io(#[from] std::io::Error),

	/// The settings text is not valid TOML for the settings schema.
	#[error("failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),

	/// The Home link is empty or not an absolute path.
	#[error("home_href must be an absolute path, got '{0}'")]
	InvalidHomeHref(String),
}

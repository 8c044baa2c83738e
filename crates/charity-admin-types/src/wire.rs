//! Wire-level helpers
//!
//! The backend serializes closed value sets as Arabic labels, booleans as either
//! `0/1` or `true/false`, and numeric text fields as either strings or numbers.
//! Decoding here is deliberately lenient: an unknown label is kept verbatim
//! instead of failing the whole payload.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use thiserror::Error;

/// Error returned when a wire value cannot be parsed from user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct WireParseError {
	/// Name of the value set (e.g. `ProjectStatus`)
	pub kind: &'static str,
	/// The rejected input
	pub value: String,
}

/// Defines an enum whose variants map to fixed wire labels.
///
/// Each variant carries its wire label (what the backend sends) and an ASCII
/// slug (what a terminal user types). An `Other(String)` variant keeps labels
/// this client does not know about.
macro_rules! wire_enum {
	(
		$(#[$meta:meta])*
		pub enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident => ($wire:literal, $slug:literal)
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, Hash)]
		pub enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
			/// A label this client does not know, kept verbatim
			Other(String),
		}

		impl $name {
			/// Every known value, in display order
			pub fn known() -> Vec<Self> {
				vec![$(Self::$variant),+]
			}

			/// The label the backend uses for this value
			pub fn as_wire(&self) -> &str {
				match self {
					$(Self::$variant => $wire,)+
					Self::Other(value) => value.as_str(),
				}
			}

			/// The ASCII slug accepted on the command line
			pub fn slug(&self) -> Option<&'static str> {
				match self {
					$(Self::$variant => Some($slug),)+
					Self::Other(_) => None,
				}
			}

			/// Decodes a backend label; never fails
			pub fn from_wire(value: &str) -> Self {
				match value {
					$($wire => Self::$variant,)+
					other => Self::Other(other.to_string()),
				}
			}

			/// Returns `false` for labels kept in `Other`
			pub fn is_known(&self) -> bool {
				!matches!(self, Self::Other(_))
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_wire())
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::wire::WireParseError;

			/// Accepts either the wire label or the slug (case-insensitive)
			fn from_str(s: &str) -> Result<Self, Self::Err> {
				let trimmed = s.trim();
				$(
					if trimmed == $wire || trimmed.eq_ignore_ascii_case($slug) {
						return Ok(Self::$variant);
					}
				)+
				Err($crate::wire::WireParseError {
					kind: stringify!($name),
					value: trimmed.to_string(),
				})
			}
		}

		impl ::serde::Serialize for $name {
			fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.serialize_str(self.as_wire())
			}
		}

		impl<'de> ::serde::Deserialize<'de> for $name {
			fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
				let label = <String as ::serde::Deserialize>::deserialize(deserializer)?;
				Ok(Self::from_wire(&label))
			}
		}
	};
}

pub(crate) use wire_enum;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
	Bool(bool),
	Int(i64),
	Text(String),
}

/// Decodes a boolean sent as `true/false`, `0/1` or `"0"/"1"`
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	match Option::<RawFlag>::deserialize(deserializer)? {
		None => Ok(false),
		Some(RawFlag::Bool(value)) => Ok(value),
		Some(RawFlag::Int(value)) => Ok(value != 0),
		Some(RawFlag::Text(value)) => match value.trim() {
			"1" | "true" => Ok(true),
			"0" | "false" | "" => Ok(false),
			other => Err(de::Error::custom(format!("invalid flag value: {other}"))),
		},
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
	Text(String),
	Int(i64),
	Float(f64),
}

impl RawText {
	fn into_string(self) -> String {
		match self {
			Self::Text(value) => value,
			Self::Int(value) => value.to_string(),
			Self::Float(value) => value.to_string(),
		}
	}
}

/// Decodes a free-text field that may arrive as a number or `null`
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<RawText>::deserialize(deserializer)?
		.map(RawText::into_string)
		.unwrap_or_default())
}

/// Optional variant of [`text`]; empty strings stay `Some("")`
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<RawText>::deserialize(deserializer)?.map(RawText::into_string))
}

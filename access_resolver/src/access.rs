use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// How the values of the persistent attributes of a class are read and written.
///
/// In json, this is `"field"`, `"property"` or `{ "custom": "<name>" }`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
	/// Directly through the fields.
	Field,
	/// Through the getters and setters.
	Property,
	/// Through a named custom accessor strategy.
	///
	/// Only ever set explicitly on a class, a hierarchy default is never custom.
	Custom(String),
}

impl AccessMode {
	pub fn is_field(&self) -> bool {
		matches!(self, AccessMode::Field)
	}

	pub fn is_property(&self) -> bool {
		matches!(self, AccessMode::Property)
	}
}

impl Display for AccessMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			AccessMode::Field => f.write_str("field"),
			AccessMode::Property => f.write_str("property"),
			AccessMode::Custom(name) => write!(f, "custom({name})"),
		}
	}
}

#[cfg(test)]
mod testing {
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use crate::access::AccessMode;

	#[test]
	fn json_form() -> Result<()> {
		assert_eq!(serde_json::from_str::<AccessMode>("\"field\"")?, AccessMode::Field);
		assert_eq!(serde_json::from_str::<AccessMode>("\"property\"")?, AccessMode::Property);
		assert_eq!(
			serde_json::from_str::<AccessMode>(r#"{ "custom": "org.example.MapAccessor" }"#)?,
			AccessMode::Custom("org.example.MapAccessor".to_owned())
		);
		assert!(serde_json::from_str::<AccessMode>("\"method\"").is_err());

		assert_eq!(AccessMode::Custom("embedded".to_owned()).to_string(), "custom(embedded)");
		Ok(())
	}
}

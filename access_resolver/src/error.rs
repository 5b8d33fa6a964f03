use std::fmt::{Display, Formatter};
use serde::Serialize;
use crate::access::AccessMode;
use crate::hierarchy::{MemberRef, Origin};

/// A member carrying an identifier annotation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct IdentifierMarker {
	pub class_name: String,
	pub member: MemberRef,
}

impl Display for IdentifierMarker {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}", self.class_name, self.member)
	}
}

/// The hierarchy has no identifier, or more than one, so no default access mode exists.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AmbiguousIdentifierError {
	pub origin: Origin,
	/// All the identifiers found, in hierarchy order.
	pub identifiers: Vec<IdentifierMarker>,
}

impl Display for AmbiguousIdentifierError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.identifiers.is_empty() {
			f.write_str("no identifier found in class hierarchy")?;
		} else {
			write!(f, "expected exactly one identifier in class hierarchy, found {}:", self.identifiers.len())?;
			for identifier in &self.identifiers {
				write!(f, " {identifier}")?;
			}
		}
		write!(f, " : origin({})", self.origin.name)
	}
}

impl std::error::Error for AmbiguousIdentifierError {}

/// Mapping metadata that is placed where it is ignored. Resolution still succeeds.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ConfigurationWarning {
	pub class_name: String,
	pub member: MemberRef,
	pub kind: WarningKind,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
	/// The class uses field or custom access, but a getter carries mapping annotations.
	GetterMetadataIgnored {
		attribute: String,
		access: AccessMode,
	},
	/// The class uses property access, but a field carries mapping annotations.
	FieldMetadataIgnored {
		attribute: String,
	},
	SetterMetadata {
		attribute: String,
	},
	/// A method that is neither getter nor setter carries mapping annotations.
	NonAccessorMetadata,
	/// Both `getX` and `isX` exist, `chosen` is the one used.
	DuplicateAccessor {
		attribute: String,
		chosen: MemberRef,
	},
}

impl Display for ConfigurationWarning {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let ConfigurationWarning { class_name, member, kind } = self;
		match kind {
			WarningKind::GetterMetadataIgnored { attribute, access } => write!(f,
				"{class_name}: mapping annotations on getter {member} are ignored, attribute {attribute:?} uses {access} access"
			),
			WarningKind::FieldMetadataIgnored { attribute } => write!(f,
				"{class_name}: mapping annotations on field {member} are ignored, attribute {attribute:?} uses property access"
			),
			WarningKind::SetterMetadata { attribute } => write!(f,
				"{class_name}: mapping annotations on setter {member} are never used, place them on the field or getter of attribute {attribute:?}"
			),
			WarningKind::NonAccessorMetadata => write!(f,
				"{class_name}: mapping annotations on method {member} are ignored, it is neither a getter nor a setter"
			),
			WarningKind::DuplicateAccessor { attribute, chosen } => write!(f,
				"{class_name}: getters {member} and {chosen} both define attribute {attribute:?}, using {chosen}"
			),
		}
	}
}

#[cfg(test)]
mod testing {
	use pretty_assertions::assert_eq;
	use crate::access::AccessMode;
	use crate::error::{AmbiguousIdentifierError, ConfigurationWarning, IdentifierMarker, WarningKind};
	use crate::hierarchy::{Member, Origin, OriginKind};

	#[test]
	fn message_ends_with_origin() {
		let origin = Origin::new(OriginKind::Annotations, "org.example.Document");

		let none = AmbiguousIdentifierError { origin: origin.clone(), identifiers: Vec::new() };
		assert_eq!(none.to_string(), "no identifier found in class hierarchy : origin(org.example.Document)");

		let two = AmbiguousIdentifierError {
			origin,
			identifiers: vec![
				IdentifierMarker { class_name: "org/example/Document".to_owned(), member: Member::field("id", "J").to_ref() },
				IdentifierMarker { class_name: "org/example/Book".to_owned(), member: Member::method("getIsbn", "()J").to_ref() },
			],
		};
		assert_eq!(
			two.to_string(),
			"expected exactly one identifier in class hierarchy, found 2: org/example/Document.id org/example/Book.getIsbn() : origin(org.example.Document)"
		);
	}

	#[test]
	fn warning_message() {
		let warning = ConfigurationWarning {
			class_name: "org/example/Document".to_owned(),
			member: Member::method("setTitle", "(Ljava/lang/String;)V").to_ref(),
			kind: WarningKind::SetterMetadata { attribute: "title".to_owned() },
		};
		assert_eq!(
			warning.to_string(),
			"org/example/Document: mapping annotations on setter setTitle() are never used, place them on the field or getter of attribute \"title\""
		);
	}

	#[test]
	fn getter_warning_names_the_access_mode() {
		let warning = |access| ConfigurationWarning {
			class_name: "org/example/Document".to_owned(),
			member: Member::method("getTitle", "()Ljava/lang/String;").to_ref(),
			kind: WarningKind::GetterMetadataIgnored { attribute: "title".to_owned(), access },
		};

		assert_eq!(
			warning(AccessMode::Field).to_string(),
			"org/example/Document: mapping annotations on getter getTitle() are ignored, attribute \"title\" uses field access"
		);
		assert_eq!(
			warning(AccessMode::Custom("map".to_owned())).to_string(),
			"org/example/Document: mapping annotations on getter getTitle() are ignored, attribute \"title\" uses custom(map) access"
		);
	}
}

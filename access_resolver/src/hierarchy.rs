//! The description of a persistent class hierarchy, as handed over by whatever loaded the
//! mapping metadata.
//!
//! Classes are kept in an ordered list, root first, and are referred to by [`ClassIndex`].

use std::fmt::{Display, Formatter};
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use log::trace;
use serde::{Deserialize, Serialize};
use crate::access::AccessMode;
use crate::descriptor::{MethodDescriptor, Type};
use crate::names::{getter_attribute, setter_attribute, GetterPrefix};

/// Where a hierarchy description came from. Used in error messages.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct Origin {
	pub kind: OriginKind,
	pub name: String,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginKind {
	Annotations,
	File,
	Unknown,
}

impl Origin {
	pub fn new(kind: OriginKind, name: impl Into<String>) -> Origin {
		Origin { kind, name: name.into() }
	}

	pub fn file(path: &Path) -> Origin {
		Origin::new(OriginKind::File, path.display().to_string())
	}
}

impl Default for Origin {
	fn default() -> Self {
		Origin::new(OriginKind::Unknown, "<unknown>")
	}
}

/// An inheritance chain of persistent classes, root first.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassHierarchy {
	#[serde(default)]
	pub origin: Origin,
	pub classes: Vec<ClassNode>,
}

/// The position of a class in its [`ClassHierarchy`], the root has index `0`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
pub struct ClassIndex(pub usize);

impl ClassHierarchy {
	pub fn new(origin: Origin, classes: Vec<ClassNode>) -> ClassHierarchy {
		ClassHierarchy { origin, classes }
	}

	/// Reads a hierarchy description from json.
	pub fn from_json(json: &str) -> Result<ClassHierarchy> {
		serde_json::from_str(json)
			.context("failed to parse class hierarchy description")
	}

	/// Reads a hierarchy description from a json file.
	///
	/// If the description doesn't state its origin, the file becomes the origin.
	pub fn load(path: &Path) -> Result<ClassHierarchy> {
		let json = std::fs::read_to_string(path)
			.with_context(|| anyhow!("failed to read {path:?}"))?;
		let mut hierarchy = ClassHierarchy::from_json(&json)
			.with_context(|| anyhow!("in file {path:?}"))?;

		if hierarchy.origin.kind == OriginKind::Unknown {
			hierarchy.origin = Origin::file(path);
		}

		Ok(hierarchy)
	}

	pub fn root(&self) -> Option<&ClassNode> {
		self.classes.first()
	}

	pub fn get(&self, index: ClassIndex) -> Option<&ClassNode> {
		self.classes.get(index.0)
	}

	pub fn index_of(&self, class_name: &str) -> Option<ClassIndex> {
		self.classes.iter()
			.position(|class| class.name == class_name)
			.map(ClassIndex)
	}

	/// Iterates from the root to the leaf.
	pub fn iter(&self) -> impl Iterator<Item=(ClassIndex, &ClassNode)> {
		self.classes.iter()
			.enumerate()
			.map(|(index, class)| (ClassIndex(index), class))
	}
}

/// One class of a hierarchy, with only the members declared directly on it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassNode {
	/// The internal name, like `org/example/Document`.
	pub name: String,
	/// An explicit access mode for the members of exactly this class.
	#[serde(default)]
	pub access: Option<AccessMode>,
	#[serde(default)]
	pub members: Vec<Member>,
}

impl ClassNode {
	pub fn new(name: impl Into<String>) -> ClassNode {
		ClassNode {
			name: name.into(),
			access: None,
			members: Vec::new(),
		}
	}

	pub fn with_access(mut self, access: AccessMode) -> ClassNode {
		self.access = Some(access);
		self
	}

	pub fn with_member(mut self, member: Member) -> ClassNode {
		self.members.push(member);
		self
	}
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
	Field,
	Method,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Member {
	pub kind: MemberKind,
	pub name: String,
	pub descriptor: String,
	/// The internal names of the annotation types, like `jakarta/persistence/Id`.
	#[serde(default)]
	pub annotations: Vec<String>,
	#[serde(default, rename = "static")]
	pub is_static: bool,
	/// The `transient` modifier. Only meaningful on fields.
	#[serde(default, rename = "transient")]
	pub is_transient: bool,
}

/// What role a member can play for attribute resolution.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MemberShape {
	Field,
	Getter {
		attribute: String,
		prefix: GetterPrefix,
	},
	Setter {
		attribute: String,
	},
	/// Anything that can't be an attribute, like a malformed descriptor or a static method.
	Other,
}

impl Member {
	fn new(kind: MemberKind, name: impl Into<String>, descriptor: impl Into<String>) -> Member {
		Member {
			kind,
			name: name.into(),
			descriptor: descriptor.into(),
			annotations: Vec::new(),
			is_static: false,
			is_transient: false,
		}
	}

	pub fn field(name: impl Into<String>, descriptor: impl Into<String>) -> Member {
		Member::new(MemberKind::Field, name, descriptor)
	}

	pub fn method(name: impl Into<String>, descriptor: impl Into<String>) -> Member {
		Member::new(MemberKind::Method, name, descriptor)
	}

	pub fn annotated(mut self, annotation: impl Into<String>) -> Member {
		self.annotations.push(annotation.into());
		self
	}

	pub fn with_static(mut self) -> Member {
		self.is_static = true;
		self
	}

	pub fn with_transient(mut self) -> Member {
		self.is_transient = true;
		self
	}

	pub fn to_ref(&self) -> MemberRef {
		MemberRef {
			kind: self.kind,
			name: self.name.clone(),
		}
	}

	pub fn shape(&self) -> MemberShape {
		match self.kind {
			MemberKind::Field => match Type::parse(&self.descriptor) {
				Ok(_) => MemberShape::Field,
				Err(e) => {
					trace!("field {:?} can't be an attribute: {e:#}", self.name);
					MemberShape::Other
				},
			},
			MemberKind::Method => {
				if self.is_static {
					return MemberShape::Other;
				}
				let descriptor = match MethodDescriptor::parse(&self.descriptor) {
					Ok(descriptor) => descriptor,
					Err(e) => {
						trace!("method {:?} can't be an accessor: {e:#}", self.name);
						return MemberShape::Other;
					},
				};

				if let Some((attribute, prefix)) = getter_attribute(&self.name, &descriptor) {
					MemberShape::Getter { attribute, prefix }
				} else if let Some(attribute) = setter_attribute(&self.name, &descriptor) {
					MemberShape::Setter { attribute }
				} else {
					MemberShape::Other
				}
			},
		}
	}
}

/// Names a member of some class, without its annotations.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct MemberRef {
	pub kind: MemberKind,
	pub name: String,
}

impl Display for MemberRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			MemberKind::Field => write!(f, "{}", self.name),
			MemberKind::Method => write!(f, "{}()", self.name),
		}
	}
}

#[cfg(test)]
mod testing {
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use crate::access::AccessMode;
	use crate::hierarchy::{ClassHierarchy, ClassIndex, Member, MemberKind, MemberShape, OriginKind};
	use crate::names::GetterPrefix;

	#[test]
	fn shapes() {
		assert_eq!(Member::field("id", "J").shape(), MemberShape::Field);
		assert_eq!(Member::field("id", "nonsense").shape(), MemberShape::Other);
		assert_eq!(
			Member::method("getTitle", "()Ljava/lang/String;").shape(),
			MemberShape::Getter { attribute: "title".to_owned(), prefix: GetterPrefix::Get }
		);
		assert_eq!(
			Member::method("isPublished", "()Z").shape(),
			MemberShape::Getter { attribute: "published".to_owned(), prefix: GetterPrefix::Is }
		);
		assert_eq!(
			Member::method("setTitle", "(Ljava/lang/String;)V").shape(),
			MemberShape::Setter { attribute: "title".to_owned() }
		);
		assert_eq!(Member::method("getInstance", "()Ljava/lang/Object;").with_static().shape(), MemberShape::Other);
		assert_eq!(Member::method("toString", "()Ljava/lang/String;").shape(), MemberShape::Other);
		assert_eq!(Member::method("getTitle", "()").shape(), MemberShape::Other);
	}

	#[test]
	fn member_display() {
		assert_eq!(Member::field("id", "J").to_ref().to_string(), "id");
		assert_eq!(Member::method("getId", "()J").to_ref().to_string(), "getId()");
	}

	#[test]
	fn from_json() -> Result<()> {
		let hierarchy = ClassHierarchy::from_json(r#"{
			"classes": [
				{
					"name": "org/example/Document",
					"members": [
						{ "kind": "field", "name": "id", "descriptor": "J", "annotations": ["jakarta/persistence/Id"] },
						{ "kind": "field", "name": "cache", "descriptor": "Ljava/util/Map;", "transient": true }
					]
				},
				{
					"name": "org/example/PublishedDocument",
					"access": "property"
				}
			]
		}"#)?;

		assert_eq!(hierarchy.origin.kind, OriginKind::Unknown);
		assert_eq!(hierarchy.classes.len(), 2);
		assert_eq!(hierarchy.root().map(|class| class.name.as_str()), Some("org/example/Document"));
		assert_eq!(hierarchy.index_of("org/example/PublishedDocument"), Some(ClassIndex(1)));
		assert_eq!(hierarchy.index_of("org/example/Missing"), None);

		let document = hierarchy.get(ClassIndex(0)).ok_or_else(|| anyhow::anyhow!("no root"))?;
		assert_eq!(document.access, None);
		assert_eq!(document.members[0].kind, MemberKind::Field);
		assert!(document.members[1].is_transient);
		assert!(!document.members[1].is_static);

		let published = hierarchy.get(ClassIndex(1)).ok_or_else(|| anyhow::anyhow!("no leaf"))?;
		assert_eq!(published.access, Some(AccessMode::Property));
		assert!(published.members.is_empty());

		Ok(())
	}

	#[test]
	fn from_json_rejects_missing_descriptor() {
		let json = r#"{ "classes": [ { "name": "A", "members": [ { "kind": "field", "name": "id" } ] } ] }"#;
		assert!(ClassHierarchy::from_json(json).is_err());
	}
}

//! Deciding field or property access, and where the mapping metadata of each attribute lives.
//!
//! The decision has two levels:
//! 1. The hierarchy default comes from the placement of the single identifier of the hierarchy:
//!    on a field it's [`AccessMode::Field`], on a getter it's [`AccessMode::Property`].
//! 2. Each class uses its own explicit access mode if it has one, otherwise the hierarchy default.
//!    An explicit access mode never carries over to super- or subclasses.
//!
//! Annotations on the kind of member the access mode doesn't select are ignored, and so are
//! annotations on setters. These produce [`ConfigurationWarning`]s, never errors.

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::{debug, trace, warn};
use serde::Serialize;
use crate::access::AccessMode;
use crate::config::ResolverConfig;
use crate::error::{AmbiguousIdentifierError, ConfigurationWarning, IdentifierMarker, WarningKind};
use crate::hierarchy::{ClassHierarchy, ClassIndex, ClassNode, Member, MemberKind, MemberRef, MemberShape, Origin};
use crate::names::GetterPrefix;

/// A persistent attribute of a class.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ResolvedAttribute {
	pub name: String,
	/// The name of the class declaring the attribute.
	pub owner: String,
	pub owner_index: ClassIndex,
	pub access: AccessMode,
	/// The field or getter whose annotations are the mapping metadata of this attribute.
	pub source: MemberRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedClass {
	pub index: ClassIndex,
	pub name: String,
	pub access: AccessMode,
	/// In declaration order.
	pub attributes: IndexMap<String, ResolvedAttribute>,
}

impl ResolvedClass {
	pub fn attribute(&self, name: &str) -> Option<&ResolvedAttribute> {
		self.attributes.get(name)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedHierarchy {
	pub origin: Origin,
	pub default_access: AccessMode,
	/// Root first, like in the [`ClassHierarchy`].
	pub classes: Vec<ResolvedClass>,
	pub warnings: Vec<ConfigurationWarning>,
}

impl ResolvedHierarchy {
	pub fn get(&self, index: ClassIndex) -> Option<&ResolvedClass> {
		self.classes.get(index.0)
	}

	pub fn class(&self, name: &str) -> Option<&ResolvedClass> {
		self.classes.iter().find(|class| class.name == name)
	}
}

/// The attributes of a single class, together with the warnings found on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeResolution {
	pub attributes: IndexMap<String, ResolvedAttribute>,
	pub warnings: Vec<ConfigurationWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct Resolver {
	config: ResolverConfig,
}

impl Resolver {
	pub fn new(config: ResolverConfig) -> Resolver {
		Resolver { config }
	}

	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	/// Resolves the access mode and the attributes of every class of the hierarchy.
	pub fn resolve_hierarchy(&self, hierarchy: &ClassHierarchy) -> Result<ResolvedHierarchy, AmbiguousIdentifierError> {
		let default_access = self.resolve_hierarchy_default(hierarchy)?;

		let mut classes = Vec::with_capacity(hierarchy.classes.len());
		let mut warnings = Vec::new();

		for (index, class) in hierarchy.iter() {
			let access = self.resolve_class_access(class, &default_access);
			let resolution = self.resolve_attributes(class, index, &access);

			warnings.extend(resolution.warnings);
			classes.push(ResolvedClass {
				index,
				name: class.name.clone(),
				access,
				attributes: resolution.attributes,
			});
		}

		Ok(ResolvedHierarchy {
			origin: hierarchy.origin.clone(),
			default_access,
			classes,
			warnings,
		})
	}

	/// Finds the access mode implied by the placement of the identifier.
	///
	/// Exactly one field or getter of the whole hierarchy must carry an identifier annotation.
	/// Identifier annotations on setters or other methods don't count.
	pub fn resolve_hierarchy_default(&self, hierarchy: &ClassHierarchy) -> Result<AccessMode, AmbiguousIdentifierError> {
		let mut markers = Vec::new();

		for class in &hierarchy.classes {
			for member in class.members.iter().filter(|member| self.is_identifier(member)) {
				let access = match member.shape() {
					MemberShape::Field => AccessMode::Field,
					MemberShape::Getter { .. } => AccessMode::Property,
					MemberShape::Setter { .. } | MemberShape::Other => {
						trace!("identifier annotation on {}.{} doesn't count", class.name, member.to_ref());
						continue;
					},
				};

				markers.push((IdentifierMarker { class_name: class.name.clone(), member: member.to_ref() }, access));
			}
		}

		match <[_; 1]>::try_from(markers) {
			Ok([(marker, access)]) => {
				debug!("identifier {marker} gives {access} access to {}", hierarchy.origin.name);
				Ok(access)
			},
			Err(markers) => Err(AmbiguousIdentifierError {
				origin: hierarchy.origin.clone(),
				identifiers: markers.into_iter().map(|(marker, _)| marker).collect(),
			}),
		}
	}

	/// The explicit access mode of the class, or the hierarchy default.
	pub fn resolve_class_access(&self, class: &ClassNode, hierarchy_default: &AccessMode) -> AccessMode {
		match &class.access {
			Some(access) => {
				debug!("{} overrides {hierarchy_default} access with {access} access", class.name);
				access.clone()
			},
			None => hierarchy_default.clone(),
		}
	}

	/// Selects the persistent attributes declared directly on the class.
	///
	/// With property access these are the getters, otherwise the fields, leaving out excluded
	/// members. Custom access strategies pick up the fields as well.
	///
	/// `index` is the position of the class in its hierarchy, recorded as the owner of each attribute.
	pub fn resolve_attributes(&self, class: &ClassNode, index: ClassIndex, class_access: &AccessMode) -> AttributeResolution {
		let by_property = class_access.is_property();

		let mut candidates: IndexMap<String, (&Member, Option<GetterPrefix>)> = IndexMap::new();
		let mut warnings = Vec::new();

		for member in &class.members {
			let annotated = self.has_mapping_annotations(member);

			match member.shape() {
				MemberShape::Field if by_property => {
					if annotated {
						let attribute = member.name.clone();
						warnings.push(warning(class, member.to_ref(), WarningKind::FieldMetadataIgnored { attribute }));
					}
				},
				MemberShape::Field => {
					if self.is_excluded(member) {
						trace!("field {}.{} is excluded", class.name, member.name);
					} else {
						candidates.insert(member.name.clone(), (member, None));
					}
				},
				MemberShape::Getter { attribute, .. } if !by_property => {
					if annotated {
						let kind = WarningKind::GetterMetadataIgnored { attribute, access: class_access.clone() };
						warnings.push(warning(class, member.to_ref(), kind));
					}
				},
				MemberShape::Getter { attribute, prefix } => {
					if self.is_excluded(member) {
						trace!("getter {}.{} is excluded", class.name, member.to_ref());
						continue;
					}

					match candidates.entry(attribute) {
						Entry::Vacant(entry) => {
							entry.insert((member, Some(prefix)));
						},
						Entry::Occupied(mut entry) => {
							let (existing, existing_prefix) = *entry.get();
							let attribute = entry.key().clone();

							// `isX` wins over `getX`
							if prefix == GetterPrefix::Is && existing_prefix != Some(GetterPrefix::Is) {
								entry.insert((member, Some(prefix)));
								let kind = WarningKind::DuplicateAccessor { attribute, chosen: member.to_ref() };
								warnings.push(warning(class, existing.to_ref(), kind));
							} else {
								let kind = WarningKind::DuplicateAccessor { attribute, chosen: existing.to_ref() };
								warnings.push(warning(class, member.to_ref(), kind));
							}
						},
					}
				},
				MemberShape::Setter { attribute } => {
					if annotated {
						warnings.push(warning(class, member.to_ref(), WarningKind::SetterMetadata { attribute }));
					}
				},
				MemberShape::Other => {
					if annotated && member.kind == MemberKind::Method {
						warnings.push(warning(class, member.to_ref(), WarningKind::NonAccessorMetadata));
					}
				},
			}
		}

		let attributes: IndexMap<_, _> = candidates.into_iter()
			.map(|(name, (member, _))| {
				let attribute = ResolvedAttribute {
					name: name.clone(),
					owner: class.name.clone(),
					owner_index: index,
					access: class_access.clone(),
					source: member.to_ref(),
				};
				(name, attribute)
			})
			.collect();

		debug!("{} has {} attributes using {class_access} access", class.name, attributes.len());

		AttributeResolution { attributes, warnings }
	}

	fn is_identifier(&self, member: &Member) -> bool {
		member.annotations.iter().any(|annotation| self.config.is_identifier_annotation(annotation))
	}

	fn has_mapping_annotations(&self, member: &Member) -> bool {
		member.annotations.iter().any(|annotation| self.config.is_mapping_annotation(annotation))
	}

	/// Static members, fields with the `transient` modifier and members with a transient annotation.
	fn is_excluded(&self, member: &Member) -> bool {
		member.is_static ||
			(member.kind == MemberKind::Field && member.is_transient) ||
			member.annotations.iter().any(|annotation| self.config.is_transient_annotation(annotation))
	}
}

fn warning(class: &ClassNode, member: MemberRef, kind: WarningKind) -> ConfigurationWarning {
	let warning = ConfigurationWarning {
		class_name: class.name.clone(),
		member,
		kind,
	};
	warn!("{warning}");
	warning
}

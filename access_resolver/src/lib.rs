//! Resolves, for each class of a persistent class hierarchy, whether its attributes are accessed
//! through fields or through getters, and which member carries the mapping metadata of each
//! attribute.
//!
//! ```
//! use access_resolver::{AccessMode, ClassHierarchy, ClassNode, Member, Origin, Resolver};
//!
//! let hierarchy = ClassHierarchy::new(Origin::default(), vec![
//!     ClassNode::new("org/example/Document")
//!         .with_member(Member::field("id", "J").annotated("jakarta/persistence/Id"))
//!         .with_member(Member::field("title", "Ljava/lang/String;")),
//!     ClassNode::new("org/example/PublishedDocument")
//!         .with_access(AccessMode::Property)
//!         .with_member(Member::method("getIsbn", "()Ljava/lang/String;")),
//! ]);
//!
//! let resolved = Resolver::default().resolve_hierarchy(&hierarchy).unwrap();
//!
//! assert_eq!(resolved.default_access, AccessMode::Field);
//! assert_eq!(resolved.classes[0].access, AccessMode::Field);
//! assert_eq!(resolved.classes[1].access, AccessMode::Property);
//! assert!(resolved.classes[1].attribute("isbn").is_some());
//! ```

pub mod access;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod hierarchy;
mod names;
pub mod resolver;

pub use access::AccessMode;
pub use config::ResolverConfig;
pub use error::{AmbiguousIdentifierError, ConfigurationWarning, IdentifierMarker, WarningKind};
pub use hierarchy::{ClassHierarchy, ClassIndex, ClassNode, Member, MemberKind, MemberRef, MemberShape, Origin, OriginKind};
pub use names::GetterPrefix;
pub use resolver::{AttributeResolution, ResolvedAttribute, ResolvedClass, ResolvedHierarchy, Resolver};

use std::path::Path;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

const PERSISTENCE_PACKAGES: [&str; 2] = ["javax/persistence", "jakarta/persistence"];

/// Which annotations the resolver looks for.
///
/// All annotation names are internal names, like `jakarta/persistence/Id`. Every field of the
/// json form is optional, missing fields take the [`Default`] value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
	/// Annotations marking the identifier of a hierarchy.
	pub identifier_annotations: Vec<String>,
	/// Annotations marking an embedded identifier. These count the same as [`ResolverConfig::identifier_annotations`].
	pub embedded_identifier_annotations: Vec<String>,
	/// Annotations excluding a member from being persistent.
	pub transient_annotations: Vec<String>,
	/// Packages whose annotations carry mapping metadata, like `jakarta/persistence`.
	pub mapping_packages: Vec<String>,
}

impl Default for ResolverConfig {
	fn default() -> Self {
		fn in_persistence_packages(simple_name: &str) -> Vec<String> {
			PERSISTENCE_PACKAGES.iter()
				.map(|package| format!("{package}/{simple_name}"))
				.collect()
		}

		ResolverConfig {
			identifier_annotations: in_persistence_packages("Id"),
			embedded_identifier_annotations: in_persistence_packages("EmbeddedId"),
			transient_annotations: in_persistence_packages("Transient"),
			mapping_packages: PERSISTENCE_PACKAGES.iter()
				.copied()
				.chain(["org/hibernate/annotations"])
				.map(str::to_owned)
				.collect(),
		}
	}
}

impl ResolverConfig {
	pub fn from_json(json: &str) -> Result<ResolverConfig> {
		serde_json::from_str(json)
			.context("failed to parse resolver config")
	}

	pub fn load(path: &Path) -> Result<ResolverConfig> {
		let json = std::fs::read_to_string(path)
			.with_context(|| anyhow!("failed to read config {path:?}"))?;
		ResolverConfig::from_json(&json)
			.with_context(|| anyhow!("in config file {path:?}"))
	}

	pub fn is_identifier_annotation(&self, annotation: &str) -> bool {
		self.identifier_annotations.iter()
			.chain(&self.embedded_identifier_annotations)
			.any(|x| x == annotation)
	}

	pub fn is_transient_annotation(&self, annotation: &str) -> bool {
		self.transient_annotations.iter().any(|x| x == annotation)
	}

	/// An annotation carries mapping metadata if it's directly in one of the mapping packages,
	/// or if it's one of the configured identifier or transient annotations.
	pub fn is_mapping_annotation(&self, annotation: &str) -> bool {
		let in_mapping_package = annotation.rsplit_once('/')
			.is_some_and(|(package, _)| self.mapping_packages.iter().any(|x| x == package));

		in_mapping_package || self.is_identifier_annotation(annotation) || self.is_transient_annotation(annotation)
	}
}

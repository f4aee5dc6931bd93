//! Naming conventions shared by generation, injection and documentation.
//!
//! Every literal that ties the generated PHP to the SFWP Studio plugin
//! (brand token, trait namespace, kind suffix, docs marker) lives here so
//! that the rest of the domain reads as generic text manipulation.

use serde::{Deserialize, Serialize};

/// Two-letter brand token prefixed to display names and widget slugs.
pub const BRAND_PREFIX: &str = "SF";

/// Suffix carried by every trait type name (`CardTrait`).
pub const TRAIT_SUFFIX: &str = "Trait";

/// PHP namespace that holds every trait.
pub const TRAIT_NAMESPACE: &str = r"SFWPStudio\Core\Helpers\Traits";

/// Marker replaced by the generated metadata block in widget docs.
pub const DOCS_PLACEHOLDER: &str = "<!-- SFWP_DOCS_PLACEHOLDER -->";

/// Icon used when the caller does not pick one.
pub const DEFAULT_ICON: &str = "eicon-star";

/// Project-level conventions, overridable from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conventions {
    pub brand_prefix: String,
    pub trait_namespace: String,
}

impl Conventions {
    /// `use \<namespace>\<type_name>;`
    pub fn trait_use_declaration(&self, type_name: &str) -> String {
        format!("use \\{}\\{};", self.trait_namespace, type_name)
    }

    /// Lower-cased brand token followed by `_`, prefixed to widget slugs.
    pub fn slug_prefix(&self) -> String {
        format!("{}_", self.brand_prefix.to_lowercase())
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            brand_prefix: BRAND_PREFIX.to_string(),
            trait_namespace: TRAIT_NAMESPACE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_declaration_is_fully_qualified() {
        let c = Conventions::default();
        assert_eq!(
            c.trait_use_declaration("CardTrait"),
            r"use \SFWPStudio\Core\Helpers\Traits\CardTrait;"
        );
    }

    #[test]
    fn slug_prefix_is_lowercase() {
        assert_eq!(Conventions::default().slug_prefix(), "sf_");
    }
}

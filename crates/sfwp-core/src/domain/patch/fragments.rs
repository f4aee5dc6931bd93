use serde::Serialize;

use crate::domain::conventions::Conventions;
use crate::domain::error::DomainError;
use crate::domain::identifiers::{DeriveOptions, IdentifierSet, derive};
use crate::domain::validation::DomainValidator;

/// A trait named by the user, normalized through the identifier deriver.
///
/// `"card"`, `"Card"` and `"CardTrait"` all refer to the same trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitReference {
    ids: IdentifierSet,
}

impl TraitReference {
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let ids = derive(name, &DeriveOptions::trait_kind());
        DomainValidator::validate_identifiers(name, &ids)?;
        Ok(Self { ids })
    }

    /// Parse a list of names that may themselves be comma-separated.
    ///
    /// Duplicates are dropped, first occurrence wins.
    pub fn parse_list<I, S>(items: I) -> Result<Vec<Self>, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<Self> = Vec::new();
        for item in items {
            for part in item.as_ref().split(',') {
                if part.trim().is_empty() {
                    continue;
                }
                let reference = Self::parse(part)?;
                if !out.contains(&reference) {
                    out.push(reference);
                }
            }
        }
        Ok(out)
    }

    pub fn identifiers(&self) -> &IdentifierSet {
        &self.ids
    }

    /// `CardTrait`
    pub fn type_name(&self) -> &str {
        &self.ids.type_name
    }

    /// `card`
    pub fn slug(&self) -> &str {
        &self.ids.symbol_slug
    }

    pub fn use_declaration(&self, conventions: &Conventions) -> String {
        conventions.trait_use_declaration(self.type_name())
    }

    pub fn controls_call(&self) -> String {
        format!("$this->register_{}_controls();", self.slug())
    }

    pub fn render_call(&self) -> String {
        format!("$this->render_{}();", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_follow_the_slug() {
        let t = TraitReference::parse("icon list").unwrap();
        assert_eq!(t.type_name(), "IconListTrait");
        assert_eq!(t.controls_call(), "$this->register_icon_list_controls();");
        assert_eq!(t.render_call(), "$this->render_icon_list();");
        assert_eq!(
            t.use_declaration(&Conventions::default()),
            r"use \SFWPStudio\Core\Helpers\Traits\IconListTrait;"
        );
    }

    #[test]
    fn spellings_collapse_to_one_reference() {
        let a = TraitReference::parse("card").unwrap();
        let b = TraitReference::parse("CardTrait").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn list_accepts_commas_and_drops_duplicates() {
        let list = TraitReference::parse_list(["card, icon", "CardTrait", " ,"]).unwrap();
        let names: Vec<_> = list.iter().map(|t| t.type_name()).collect();
        assert_eq!(names, ["CardTrait", "IconTrait"]);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            TraitReference::parse("   "),
            Err(DomainError::InvalidName { .. })
        ));
    }
}

//! The trait registry: a derived list of every trait type name.
//!
//! The registry is never edited by hand. It is rebuilt from the trait
//! directory listing whenever it is needed, so it has no lifecycle of its own.

use crate::domain::identifiers::{DeriveOptions, derive};
use crate::domain::layout::trait_file_stem;

/// Trait type names for the trait source files among `file_names`, sorted and
/// without duplicates. Names that are not trait sources are ignored.
pub fn registry_entries<I, S>(file_names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = DeriveOptions::trait_kind();
    let mut names: Vec<String> = file_names
        .into_iter()
        .filter_map(|f| trait_file_stem(f.as_ref()).map(|stem| derive(stem, &options)))
        .filter(|ids| !ids.is_empty())
        .map(|ids| ids.type_name)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Pretty JSON array, two-space indented, trailing newline.
pub fn render_registry(names: &[String]) -> Result<String, serde_json::Error> {
    Ok(format!("{}\n", serde_json::to_string_pretty(names)?))
}

/// Read a registry file's contents back.
pub fn parse_registry(text: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(text)
}

//! Identifier derivation: one free-form name, four consistent forms.
//!
//! Generated files, class names, hook slugs and injected calls must all agree
//! on how a widget or trait is called. Everything here derives from a single
//! word sequence, so regenerating any form later yields byte-identical output
//! (the patch engine relies on that for its presence checks).
//!
//! | Input            | type_name     | symbol_slug | file_slug  | display_name    |
//! |------------------|---------------|-------------|------------|-----------------|
//! | `"card box"`     | `CardBox`     | `card_box`  | `card-box` | `Card Box`      |
//! | `"CardBox"`      | `CardBox`     | `card_box`  | `card-box` | `Card Box`      |
//! | `"icon_list"` *  | `IconListTrait` | `icon_list` | `icon-list` | `Icon List`  |
//!
//! \* derived with [`DeriveOptions::trait_kind`].

use serde::Serialize;

use crate::domain::conventions::{BRAND_PREFIX, TRAIT_SUFFIX};

/// Optional decorations applied while deriving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeriveOptions {
    /// Appended to `type_name`; stripped from the input first.
    pub suffix: Option<String>,
    /// Prepended (with a space) to `display_name`; never doubled.
    pub prefix: Option<String>,
}

impl DeriveOptions {
    /// Options for widget names: brand-prefixed display name.
    pub fn widget() -> Self {
        Self {
            suffix: None,
            prefix: Some(BRAND_PREFIX.to_string()),
        }
    }

    /// Options for trait names: `Trait` kind suffix.
    pub fn trait_kind() -> Self {
        Self {
            suffix: Some(TRAIT_SUFFIX.to_string()),
            prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// The canonical forms of one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierSet {
    /// PascalCase, used for PHP class and trait names.
    pub type_name: String,
    /// snake_case, used inside generated method names.
    pub symbol_slug: String,
    /// kebab-case, used for file names.
    pub file_slug: String,
    /// Space-separated capitalized words, optionally brand-prefixed.
    pub display_name: String,
}

impl IdentifierSet {
    /// `true` when the input contained no words at all.
    pub fn is_empty(&self) -> bool {
        self.symbol_slug.is_empty()
    }
}

/// Derive every identifier form from `name`.
///
/// Callers must reject blank input beforehand; an all-whitespace name yields
/// a set of empty strings.
pub fn derive(name: &str, options: &DeriveOptions) -> IdentifierSet {
    let mut raw = name.trim();
    let suffix = options.suffix.as_deref().filter(|s| !s.is_empty());
    if let Some(suffix) = suffix {
        raw = raw.strip_suffix(suffix).unwrap_or(raw);
    }

    let words = split_words(raw);
    let prefix = options.prefix.as_deref().filter(|p| !p.is_empty());

    if words.is_empty() {
        return IdentifierSet {
            type_name: String::new(),
            symbol_slug: String::new(),
            file_slug: String::new(),
            display_name: String::new(),
        };
    }

    let mut type_name: String = words.iter().map(|w| capitalize(w)).collect();
    if let Some(suffix) = suffix {
        type_name.push_str(suffix);
    }

    // "SF Card Box" must not become "SF SF Card Box"; only the display
    // name drops the token, code identifiers keep every word.
    let display_words = match prefix {
        Some(prefix) if words.len() > 1 && words[0].eq_ignore_ascii_case(prefix) => &words[1..],
        _ => &words[..],
    };
    let display = display_words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ");
    let display_name = match prefix {
        Some(prefix) => format!("{prefix} {display}"),
        None => display,
    };

    IdentifierSet {
        type_name,
        symbol_slug: words.join("_"),
        file_slug: words.join("-"),
        display_name,
    }
}

/// Strip a leading brand token (and the whitespace after it) from a title.
///
/// The check is case-insensitive; titles not starting with the token are
/// returned unchanged.
pub fn strip_brand_prefix<'a>(title: &'a str, brand: &str) -> &'a str {
    let title = title.trim();
    match title.get(..brand.len()) {
        Some(head) if !brand.is_empty() && head.eq_ignore_ascii_case(brand) => {
            title[brand.len()..].trim()
        }
        _ => title,
    }
}

/// Split a name into lower-cased words.
///
/// ## Word Boundary Detection
///
/// 1. **Explicit separators:** `_`, `-`, whitespace → always split
/// 2. **Case transition:** a lower-case letter or digit followed by an
///    upper-case letter (`cardBox`, `heading2Box`) → split between them
///
/// Acronyms are not split: `HTTPRequest` is a single word.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            if (p.is_lowercase() || p.is_ascii_digit()) && c.is_uppercase() && !current.is_empty()
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Upper-case the first character of an already lower-cased word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

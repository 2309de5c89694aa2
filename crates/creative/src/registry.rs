//! Static registry mapping each ad variant to its allowed sub-kind set.
//!
//! The table is an explicit const list of descriptors, built once and never
//! mutated, so it is safe for unsynchronized concurrent reads.

use adboard_core::AdType;
use std::fmt::Write;

/// One descriptor per concrete creative variant.
const SUB_KINDS: &[(AdType, &[&str])] = &[
    (AdType::Video, &["Advertising", "Tutorial"]),
    (AdType::Display, &["Banner", "Sidebar"]),
    (AdType::Social, &["Post", "Story"]),
];

/// The allowed sub-kinds for a variant, in registry order.
pub fn allowed_sub_kinds(ad_type: AdType) -> &'static [&'static str] {
    SUB_KINDS
        .iter()
        .find(|(t, _)| *t == ad_type)
        .map(|(_, subs)| *subs)
        .unwrap_or(&[])
}

/// Whether `candidate` is a registered sub-kind of `ad_type`.
pub fn is_allowed(ad_type: AdType, candidate: &str) -> bool {
    allowed_sub_kinds(ad_type).contains(&candidate)
}

/// Render the registry as operator help text.
///
/// With `None`, every variant's entry is listed; with a variant name, only
/// that entry. An unregistered name yields the bare header. Sub-kinds are
/// quoted and joined with ` y `:
///
/// ```text
/// Subtipos:
/// De Video: 'Advertising' y 'Tutorial'
/// ```
pub fn describe_formats(type_name: Option<&str>) -> String {
    let mut out = String::from("Subtipos:\n");
    match type_name {
        Some(name) => {
            if let Some(ad_type) = AdType::from_name(name) {
                push_entry(&mut out, ad_type);
            }
        }
        None => {
            for (ad_type, _) in SUB_KINDS {
                push_entry(&mut out, *ad_type);
            }
        }
    }
    out
}

fn push_entry(out: &mut String, ad_type: AdType) {
    let subs = allowed_sub_kinds(ad_type);
    if subs.is_empty() {
        return;
    }
    let _ = write!(out, "De {}: ", ad_type);
    for (i, sub) in subs.iter().enumerate() {
        let _ = write!(out, "'{}'", sub);
        if i < subs.len() - 1 {
            out.push_str(" y ");
        } else {
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_sub_kinds() {
        assert_eq!(
            allowed_sub_kinds(AdType::Video),
            &["Advertising", "Tutorial"]
        );
        assert_eq!(allowed_sub_kinds(AdType::Display), &["Banner", "Sidebar"]);
        assert_eq!(allowed_sub_kinds(AdType::Social), &["Post", "Story"]);
    }

    #[test]
    fn test_is_allowed() {
        assert!(is_allowed(AdType::Video, "Tutorial"));
        assert!(!is_allowed(AdType::Video, "Banner"));
        assert!(!is_allowed(AdType::Social, "Advertising"));
    }

    #[test]
    fn test_describe_single_variant() {
        assert_eq!(
            describe_formats(Some("Video")),
            "Subtipos:\nDe Video: 'Advertising' y 'Tutorial'\n"
        );
    }

    #[test]
    fn test_describe_all_variants() {
        assert_eq!(
            describe_formats(None),
            "Subtipos:\n\
             De Video: 'Advertising' y 'Tutorial'\n\
             De Display: 'Banner' y 'Sidebar'\n\
             De Social: 'Post' y 'Story'\n"
        );
    }

    #[test]
    fn test_describe_unregistered_variant() {
        assert_eq!(describe_formats(Some("Audio")), "Subtipos:\n");
    }
}

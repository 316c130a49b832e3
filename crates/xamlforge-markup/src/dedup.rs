//! Name deduplication pass.
//!
//! XAML requires `x:Name` values to be unique within a namescope, while
//! design tools happily let many layers share a name. This pass walks the
//! finished tree in document order and suffixes repeats: the first `Rect`
//! stays `Rect`, later ones become `Rect_1`, `Rect_2`, ...

use std::collections::{HashMap, HashSet};

use crate::tag::Tag;

/// Identifying attribute used by the generated markup.
pub const NAME_ATTRIBUTE: &str = "x:Name";

// ── NameRegistry ──────────────────────────────────────────────────────────

/// Tracks which names are taken and the next suffix to try for each base.
///
/// One registry covers one document. Create a fresh one per conversion.
#[derive(Debug, Default)]
pub struct NameRegistry {
    used: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `name`, returning the replacement when it is already taken.
    ///
    /// Suffixes that collide with an existing name are skipped, so a source
    /// tree containing both `Rect` twice and a literal `Rect_1` still ends up
    /// unique.
    pub fn claim(&mut self, name: &str) -> Option<String> {
        if self.used.insert(name.to_owned()) {
            return None;
        }
        let next = self.next_suffix.entry(name.to_owned()).or_insert(1);
        loop {
            let candidate = format!("{name}_{next}");
            *next += 1;
            if self.used.insert(candidate.clone()) {
                return Some(candidate);
            }
        }
    }

    /// Rewrites `attribute` on `root` and every descendant, pre-order.
    ///
    /// Returns the number of tags that were renamed.
    pub fn apply(&mut self, root: &mut Tag, attribute: &str) -> usize {
        let mut renamed = 0;
        let unique = root.attribute(attribute).and_then(|name| self.claim(name));
        if let Some(unique) = unique {
            root.set_attribute(attribute, unique);
            renamed += 1;
        }
        for child in root.children_mut() {
            renamed += self.apply(child, attribute);
        }
        renamed
    }
}

/// Makes every [`NAME_ATTRIBUTE`] value under `root` unique.
pub fn deduplicate_names(root: &mut Tag) -> usize {
    NameRegistry::new().apply(root, NAME_ATTRIBUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Tag {
        Tag::with_attributes("Canvas", [(NAME_ATTRIBUTE, name)])
    }

    fn names(root: &Tag) -> Vec<String> {
        let mut out = Vec::new();
        root.walk(&mut |t| {
            if let Some(n) = t.attribute(NAME_ATTRIBUTE) {
                out.push(n.to_owned());
            }
        });
        out
    }

    // ── claim ─────────────────────────────────────────────────────────────

    #[test]
    fn first_claim_is_unchanged() {
        let mut reg = NameRegistry::new();
        assert_eq!(reg.claim("Rect"), None);
    }

    #[test]
    fn repeats_count_from_one() {
        let mut reg = NameRegistry::new();
        reg.claim("Rect");
        assert_eq!(reg.claim("Rect").as_deref(), Some("Rect_1"));
        assert_eq!(reg.claim("Rect").as_deref(), Some("Rect_2"));
    }

    #[test]
    fn suffix_skips_literal_collision() {
        let mut reg = NameRegistry::new();
        reg.claim("Rect");
        reg.claim("Rect_1");
        assert_eq!(reg.claim("Rect").as_deref(), Some("Rect_2"));
    }

    #[test]
    fn literal_after_generated_is_renamed() {
        let mut reg = NameRegistry::new();
        reg.claim("Rect");
        reg.claim("Rect"); // -> Rect_1
        assert_eq!(reg.claim("Rect_1").as_deref(), Some("Rect_1_1"));
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn apply_follows_document_order() {
        let mut group = named("Rect");
        group.add_child(named("Rect")).unwrap();
        let mut root = named("Root");
        root.add_child(group).unwrap();
        root.add_child(named("Rect")).unwrap();
        root.add_child(named("Label")).unwrap();

        assert_eq!(deduplicate_names(&mut root), 2);
        assert_eq!(names(&root), ["Root", "Rect", "Rect_1", "Rect_2", "Label"]);
    }

    #[test]
    fn tags_without_name_are_ignored() {
        let mut root = named("Root");
        root.add_child(Tag::comment([("Name", "Root")])).unwrap();
        root.add_child(named("Root")).unwrap();

        deduplicate_names(&mut root);
        assert_eq!(root.children()[0].attribute("Name"), Some("Root"));
        assert_eq!(root.children()[1].attribute(NAME_ATTRIBUTE), Some("Root_1"));
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let mut root = named("Root");
        for n in ["A", "A", "A_1", "B", "A"] {
            root.add_child(named(n)).unwrap();
        }
        deduplicate_names(&mut root);
        let once = root.clone();

        assert_eq!(deduplicate_names(&mut root), 0);
        assert_eq!(root, once);
    }
}

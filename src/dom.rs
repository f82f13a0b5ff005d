//! DOM Operations Adapter
//!
//! Thin wrappers over the `dom_query` crate, exposing the handful of
//! read-only operations extraction needs. Extraction never mutates the
//! tree, so no mutation helpers live here.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Querying ===

/// First element matching `selector` anywhere under the document, in
/// document order.
#[must_use]
pub fn first_match_in<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let matches = doc.select(selector);
    let node = matches.nodes().first().copied()?;
    Some(Selection::from(node))
}

/// First descendant of `sel` matching `selector`, in document order.
#[must_use]
pub fn first_match<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let matches = sel.select(selector);
    let node = matches.nodes().first().copied()?;
    Some(Selection::from(node))
}

/// Every descendant of `sel` matching `selector` as its own selection,
/// in document order.
#[must_use]
pub fn select_each<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .copied()
        .map(Selection::from)
        .collect()
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with each descendant text segment trimmed, blanks dropped,
/// and the remainder joined by single spaces.
///
/// `text_content` concatenates text nodes as-is, which glues words together
/// when markup nests (`<th>Model<span>Name</span></th>` reads "ModelName").
/// Header cells need the joined reading; body cells keep the plain one.
#[must_use]
pub fn joined_text(sel: &Selection) -> String {
    let mut parts: Vec<String> = Vec::new();
    for root in sel.nodes() {
        for node in root.descendants() {
            if node.is_text() {
                let text = node.text();
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            }
        }
    }
    parts.join(" ")
}

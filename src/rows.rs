//! Row and cell normalization.
//!
//! Body rows carry the provider as a logo image in their first cell, so that
//! cell reads through [`provider_name`]; the rest are plain trimmed text.

use crate::dom::{self, Selection};
use crate::patterns::{CELL_SELECTOR, LOGO_ALT_SUFFIX};

/// Normalized cell texts for one body row, in document order.
pub(crate) fn normalize_row(row: &Selection) -> Vec<String> {
    dom::select_each(row, CELL_SELECTOR)
        .iter()
        .enumerate()
        .map(|(position, cell)| {
            if position == 0 {
                provider_name(cell)
            } else {
                dom::text_content(cell).trim().to_string()
            }
        })
        .collect()
}

/// True when at least one normalized cell holds content.
pub(crate) fn is_meaningful(cells: &[String]) -> bool {
    cells.iter().any(|cell| !cell.is_empty())
}

/// Extract a provider name from a logo cell.
///
/// Read the first image's alt text, dropping a trailing " logo" suffix.
/// An image with no usable alt falls back to its `src` filename stem.
/// Cells without any image read as empty, even when they hold visible
/// text: the leaderboard renders rank badges there, not provider names.
pub(crate) fn provider_name(cell: &Selection) -> String {
    let Some(img) = dom::first_match(cell, "img") else {
        return String::new();
    };

    if let Some(alt) = dom::get_attribute(&img, "alt") {
        let alt = alt.trim();
        if !alt.is_empty() {
            if LOGO_ALT_SUFFIX.is_match(alt) {
                return LOGO_ALT_SUFFIX.replace(alt, "").trim().to_string();
            }
            return alt.to_string();
        }
    }

    match dom::get_attribute(&img, "src") {
        Some(src) => image_stem(&src),
        None => String::new(),
    }
}

/// Final path segment of an image URL with query parameters, fragment,
/// and file extension removed.
fn image_stem(src: &str) -> String {
    let src = src.trim();
    if src.is_empty() {
        return String::new();
    }

    // Strip query parameters and fragment identifiers
    let without_query = src.split('?').next().unwrap_or(src);
    let without_fragment = without_query.split('#').next().unwrap_or(without_query);

    // Last path segment, minus the file extension
    let segment = without_fragment.split('/').last().unwrap_or("").trim();
    let stem = match segment.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => segment,
    };

    if stem.is_empty() || stem == "." || stem == ".." {
        return String::new();
    }

    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn first_cell(html: &str) -> String {
        // Bare `<td>` fragments get dropped by HTML5 parsing; give the
        // cell a valid table scaffold so the selection is non-empty.
        let doc = parse(&format!("<table><tbody><tr>{html}</tr></tbody></table>"));
        let td = doc.select("td");
        provider_name(&td)
    }

    #[test]
    fn provider_from_alt_strips_logo_suffix() {
        assert_eq!(first_cell(r#"<td><img alt="Anthropic logo"></td>"#), "Anthropic");
        assert_eq!(first_cell(r#"<td><img alt="Mistral AI Logo"></td>"#), "Mistral AI");
    }

    #[test]
    fn provider_from_alt_without_suffix_kept_verbatim() {
        assert_eq!(first_cell(r#"<td><img alt="  DeepSeek "></td>"#), "DeepSeek");
        assert_eq!(first_cell(r#"<td><img alt="logo"></td>"#), "logo");
    }

    #[test]
    fn provider_falls_back_to_src_stem() {
        assert_eq!(
            first_cell(r#"<td><img alt="" src="/img/logos/fireworks.svg"></td>"#),
            "fireworks"
        );
        assert_eq!(
            first_cell(r#"<td><img src="https://cdn.example.com/google.png?w=32#top"></td>"#),
            "google"
        );
    }

    #[test]
    fn provider_src_without_extension_kept_whole() {
        assert_eq!(first_cell(r#"<td><img alt="" src="/logos/xai"></td>"#), "xai");
    }

    #[test]
    fn provider_empty_when_no_image_or_src() {
        assert_eq!(first_cell("<td>3rd</td>"), "");
        assert_eq!(first_cell(r#"<td><img alt="" src=""></td>"#), "");
        assert_eq!(first_cell(r#"<td><img></td>"#), "");
    }

    #[test]
    fn provider_uses_first_image_only() {
        let html = r#"<td><img alt="Cohere logo"><img alt="Badge logo"></td>"#;
        assert_eq!(first_cell(html), "Cohere");
    }

    #[test]
    fn normalize_row_reads_first_cell_as_provider() {
        let doc = parse(
            r#"<table><tbody><tr>
                <td><img alt="OpenAI logo">1</td>
                <td>GPT-4o</td>
                <td>  88  </td>
            </tr></tbody></table>"#,
        );
        let tr = doc.select("tr");

        let cells = normalize_row(&tr);
        assert_eq!(cells, vec!["OpenAI", "GPT-4o", "88"]);
    }

    #[test]
    fn normalize_row_keeps_internal_whitespace_of_body_cells() {
        let doc = parse("<table><tbody><tr><td><img alt=\"A logo\"></td><td> 1 234 ms </td></tr></tbody></table>");
        let tr = doc.select("tr");

        let cells = normalize_row(&tr);
        assert_eq!(cells[1], "1 234 ms");
    }

    #[test]
    fn meaningful_requires_any_content() {
        assert!(is_meaningful(&["".to_string(), "x".to_string()]));
        assert!(!is_meaningful(&["".to_string(), "".to_string()]));
        assert!(!is_meaningful(&[]));
    }

    #[test]
    fn image_stem_edge_cases() {
        assert_eq!(image_stem("a.b.svg"), "a.b");
        assert_eq!(image_stem(""), "");
        assert_eq!(image_stem("/"), "");
        assert_eq!(image_stem(".."), "");
    }
}

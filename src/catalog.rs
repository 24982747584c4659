// SPDX-License-Identifier: PMPL-1.0-or-later
//! Static issue catalog: title, suggested fix and corrected sample markup
//! for every issue category.

use crate::issues::IssueCategory;

/// Fix text for keys outside the catalog
pub const NO_SUGGESTED_FIX: &str = "No suggested fix available.";

/// Sample markup for keys outside the catalog
pub const NO_SAMPLE_HTML: &str = "<!-- No sample available -->";

/// Fixed text attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub suggested_fix: &'static str,
    pub sample_html: &'static str,
}

const MISSING_ALT: CatalogEntry = CatalogEntry {
    title: "Missing alt attribute for image",
    suggested_fix: "Add an alt attribute to the image.",
    sample_html: r#"<img src="image.jpg" alt="Description of image" />"#,
};

const SKIPPED_HEADINGS: CatalogEntry = CatalogEntry {
    title: "Skipped heading levels",
    suggested_fix: "Ensure headings follow a logical order (e.g., <h1>, <h2>, <h3>).",
    sample_html: "<h1>Main Heading</h1><h2>Sub Heading</h2>",
};

const LOW_COLOR_CONTRAST: CatalogEntry = CatalogEntry {
    title: "Low color contrast",
    suggested_fix: "Ensure sufficient contrast between text and background colors.",
    sample_html: r#"<p style="color: #000000; background-color: #ffffff;">Good contrast text</p>"#,
};

const MISSING_TABINDEX: CatalogEntry = CatalogEntry {
    title: "Missing tabindex for interactive elements",
    suggested_fix: "Ensure all interactive elements are accessible using keyboard navigation.",
    sample_html: r#"<button tabindex="0">Click Me</button>"#,
};

const MISSING_LABELS: CatalogEntry = CatalogEntry {
    title: "Form field missing label",
    suggested_fix: "Ensure all form fields have associated labels using the <label> tag or aria-labelledby attribute.",
    sample_html: r#"<input type="text" id="name" /><label for="name">Name</label>"#,
};

const MISSING_SKIP_LINK: CatalogEntry = CatalogEntry {
    title: "Missing skip navigation link",
    suggested_fix: r#"Add a "Skip to Content" link at the top of the page for easier navigation."#,
    sample_html: r##"<a href="#maincontent" class="skip-link">Skip to Content</a>"##,
};

const FONT_SIZE_TOO_SMALL: CatalogEntry = CatalogEntry {
    title: "Font size too small",
    suggested_fix: "Ensure text size is at least 16px or resizable.",
    sample_html: r#"<p style="font-size: 16px;">Text with appropriate size</p>"#,
};

const BROKEN_LINKS: CatalogEntry = CatalogEntry {
    title: "Broken link or missing href attribute",
    suggested_fix: "Ensure all links have a valid href attribute.",
    sample_html: r#"<a href="https://google.com">Valid Link</a>"#,
};

const MISSING_INPUT_LABELS: CatalogEntry = CatalogEntry {
    title: "Missing label for input element",
    suggested_fix: r#"Ensure all input elements have a corresponding label with a matching "for" attribute."#,
    sample_html: r#"<input type="text" id="email" /><label for="email">Email</label>"#,
};

/// Catalog entry for a known category
pub fn entry(category: IssueCategory) -> &'static CatalogEntry {
    match category {
        IssueCategory::MissingAlt => &MISSING_ALT,
        IssueCategory::SkippedHeadings => &SKIPPED_HEADINGS,
        IssueCategory::LowColorContrast => &LOW_COLOR_CONTRAST,
        IssueCategory::MissingTabindex => &MISSING_TABINDEX,
        IssueCategory::MissingLabels => &MISSING_LABELS,
        IssueCategory::MissingSkipLink => &MISSING_SKIP_LINK,
        IssueCategory::FontSizeTooSmall => &FONT_SIZE_TOO_SMALL,
        IssueCategory::BrokenLinks => &BROKEN_LINKS,
        IssueCategory::MissingInputLabels => &MISSING_INPUT_LABELS,
    }
}

/// Suggested fix for a wire key, falling back to a placeholder
pub fn suggested_fix(key: &str) -> &'static str {
    IssueCategory::from_key(key).map_or(NO_SUGGESTED_FIX, |c| entry(c).suggested_fix)
}

/// Sample markup for a wire key, falling back to a placeholder
pub fn sample_html(key: &str) -> &'static str {
    IssueCategory::from_key(key).map_or(NO_SAMPLE_HTML, |c| entry(c).sample_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_lookup() {
        assert_eq!(suggested_fix("missing_alt"), "Add an alt attribute to the image.");
        assert_eq!(
            sample_html("missing_tabindex"),
            r#"<button tabindex="0">Click Me</button>"#
        );
    }

    #[test]
    fn test_unknown_key_placeholders() {
        assert_eq!(suggested_fix("blink_tag"), NO_SUGGESTED_FIX);
        assert_eq!(sample_html("blink_tag"), NO_SAMPLE_HTML);
    }

    #[test]
    fn test_every_category_has_text() {
        for category in IssueCategory::ALL {
            let e = entry(category);
            assert!(!e.title.is_empty());
            assert!(!e.suggested_fix.is_empty());
            assert!(!e.sample_html.is_empty());
        }
    }
}

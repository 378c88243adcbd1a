use crate::app::domain::theme::SectionStyle;
use crate::app::infrastructure::dom::Element;

/// Tags that receive the section text color.
pub const TEXT_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "a", "li", "td", "th", "label", "small",
    "strong",
];

/// Elements with these classes, and everything inside them, keep their own color.
pub const PROTECTED_CLASSES: &[&str] = &["telefono-link", "whatsapp-link", "footer-telefono-link"];

pub fn is_protected(el: &Element) -> bool {
    PROTECTED_CLASSES.iter().any(|c| el.has_class(c))
}

/// Apply per-section overrides to a section element.
///
/// Background color and image are only ever set, never cleared here. The text
/// color is set on the section and every unprotected text descendant, or
/// cleared on all of them when absent.
pub fn apply_section_styles(section: &mut Element, styles: &SectionStyle) {
    if let Some(bg) = styles.background_color.as_deref().filter(|v| !v.is_empty()) {
        section.style.set("background-color", bg);
    }

    let text_color = styles.text_color.as_deref().unwrap_or("");
    section.style.set("color", text_color);
    let protected = is_protected(section);
    for child in section.child_elements_mut() {
        paint_text(child, text_color, protected);
    }

    if let Some(image) = styles.background_image.as_deref().filter(|v| !v.is_empty()) {
        section.style.set("background-image", &format!("url('{}')", image));
        section.style.set("background-size", "cover");
        section.style.set("background-position", "center");
    }
}

fn paint_text(el: &mut Element, color: &str, inside_protected: bool) {
    let protected = inside_protected || is_protected(el);
    if !protected && TEXT_TAGS.contains(&el.tag()) {
        // An empty color clears the inline value
        el.style.set("color", color);
    }
    for child in el.child_elements_mut() {
        paint_text(child, color, protected);
    }
}

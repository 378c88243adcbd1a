use crate::app::domain::theme::{DEFAULT_PRIMARY, DEFAULT_SECONDARY, HeroConfig, HeroType};
use crate::app::infrastructure::dom::Element;

/// Color behind a solid hero, and under an image hero while it loads.
pub const FALLBACK_HERO_COLOR: &str = DEFAULT_PRIMARY;

/// Apply the hero background to `hero`.
///
/// Works the same on the live page and on the preview page: everything it
/// needs comes in through the arguments. The color accessors are only called
/// for gradients; an empty result falls back to the default palette.
pub fn apply_hero_background(
    hero: &mut Element,
    config: &HeroConfig,
    primary: impl Fn() -> String,
    secondary: impl Fn() -> String,
) {
    hero.style.remove("background");
    hero.style.remove("background-image");
    hero.style.remove("background-color");

    match config.kind {
        HeroType::Solid => {
            hero.style
                .set("background-color", config.color().unwrap_or(FALLBACK_HERO_COLOR));
            hero.style.set("background-image", "none");
        }
        HeroType::Image => {
            if let Some(url) = config.image_url() {
                hero.style.set("background-image", &format!("url('{}')", url));
                hero.style.set("background-size", "cover");
                hero.style.set("background-position", "center");
                hero.style.set("background-color", FALLBACK_HERO_COLOR);
            }
        }
        HeroType::Gradient => {
            let primary = or_default(primary(), DEFAULT_PRIMARY);
            let secondary = or_default(secondary(), DEFAULT_SECONDARY);
            hero.style.set(
                "background",
                &format!("linear-gradient(135deg, {} 0%, {} 100%)", primary, secondary),
            );
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Element {
        Element::new("section").with_id("hero")
    }

    fn config(kind: HeroType, color: Option<&str>, image: Option<&str>) -> HeroConfig {
        HeroConfig {
            kind,
            background_color: color.map(str::to_string),
            background_image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_image_hero() {
        let mut el = hero();
        apply_hero_background(
            &mut el,
            &config(HeroType::Image, None, Some("hero.jpg")),
            String::new,
            String::new,
        );
        assert!(el.style.get("background-image").contains("hero.jpg"));
        assert_eq!(el.style.get("background-size"), "cover");
        assert_eq!(el.style.get("background-position"), "center");
        assert_eq!(el.style.get("background-color"), "rgb(37, 99, 235)");
    }

    #[test]
    fn test_image_hero_without_url_stays_cleared() {
        let mut el = hero().with_style("background-color", "#000000");
        apply_hero_background(&mut el, &config(HeroType::Image, None, Some("")), String::new, String::new);
        assert!(el.style.is_empty());
    }

    #[test]
    fn test_solid_hero() {
        let mut el = hero();
        apply_hero_background(
            &mut el,
            &config(HeroType::Solid, Some("#fafafa"), None),
            String::new,
            String::new,
        );
        assert_eq!(el.style.get("background-color"), "rgb(250, 250, 250)");
        assert_eq!(el.style.get("background-image"), "none");

        apply_hero_background(&mut el, &config(HeroType::Solid, None, None), String::new, String::new);
        assert_eq!(el.style.get("background-color"), "rgb(37, 99, 235)");
    }

    #[test]
    fn test_gradient_uses_accessors() {
        let mut el = hero();
        apply_hero_background(
            &mut el,
            &config(HeroType::Gradient, None, None),
            || "#111111".to_string(),
            || "#222222".to_string(),
        );
        assert_eq!(
            el.style.get("background"),
            "linear-gradient(135deg, #111111 0%, #222222 100%)"
        );
    }

    #[test]
    fn test_gradient_falls_back_to_defaults() {
        let mut el = hero();
        apply_hero_background(&mut el, &HeroConfig::default(), String::new, String::new);
        assert_eq!(
            el.style.get("background"),
            "linear-gradient(135deg, #2563eb 0%, #1e40af 100%)"
        );
    }

    #[test]
    fn test_switching_from_image_to_gradient_clears_image() {
        let mut el = hero();
        apply_hero_background(
            &mut el,
            &config(HeroType::Image, None, Some("hero.jpg")),
            String::new,
            String::new,
        );
        apply_hero_background(&mut el, &HeroConfig::default(), String::new, String::new);
        assert_eq!(el.style.get("background-image"), "");
        assert_eq!(el.style.get("background-size"), "");
        assert!(el.style.get("background").starts_with("linear-gradient"));
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PRIMARY: &str = "#2563eb";
pub const DEFAULT_SECONDARY: &str = "#1e40af";

/// Named theme colors and the CSS custom property each one drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorName {
    Primary,
    Secondary,
    Accent,
    Background,
    BackgroundLight,
    Border,
}

impl ColorName {
    pub const ALL: [ColorName; 6] = [
        ColorName::Primary,
        ColorName::Secondary,
        ColorName::Accent,
        ColorName::Background,
        ColorName::BackgroundLight,
        ColorName::Border,
    ];

    /// Key used in the persisted `colors` map
    pub fn key(self) -> &'static str {
        match self {
            ColorName::Primary => "primary",
            ColorName::Secondary => "secondary",
            ColorName::Accent => "accent",
            ColorName::Background => "background",
            ColorName::BackgroundLight => "backgroundLight",
            ColorName::Border => "border",
        }
    }

    pub fn css_variable(self) -> &'static str {
        match self {
            ColorName::Primary => "--color-primary",
            ColorName::Secondary => "--color-secondary",
            ColorName::Accent => "--color-accent",
            ColorName::Background => "--color-background",
            ColorName::BackgroundLight => "--color-background-light",
            ColorName::Border => "--color-border",
        }
    }

    pub fn from_key(key: &str) -> Option<ColorName> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    fn default_value(self) -> &'static str {
        match self {
            ColorName::Primary => DEFAULT_PRIMARY,
            ColorName::Secondary => DEFAULT_SECONDARY,
            ColorName::Accent => "#f59e0b",
            ColorName::Background => "#ffffff",
            ColorName::BackgroundLight => "#f9fafb",
            ColorName::Border => "#e5e7eb",
        }
    }
}

/// Background mode of the hero banner. Unknown values read as `Gradient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeroType {
    #[default]
    Gradient,
    Solid,
    Image,
}

impl HeroType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroType::Gradient => "gradient",
            HeroType::Solid => "solid",
            HeroType::Image => "image",
        }
    }

    pub fn parse(value: &str) -> HeroType {
        match value {
            "solid" => HeroType::Solid,
            "image" => HeroType::Image,
            _ => HeroType::Gradient,
        }
    }
}

impl From<String> for HeroType {
    fn from(value: String) -> Self {
        HeroType::parse(&value)
    }
}

impl From<HeroType> for String {
    fn from(value: HeroType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    #[serde(rename = "type", default)]
    pub kind: HeroType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl HeroConfig {
    /// Configured solid color, ignoring empty strings
    pub fn color(&self) -> Option<&str> {
        non_empty(self.background_color.as_deref())
    }

    /// Configured image URL, ignoring empty strings
    pub fn image_url(&self) -> Option<&str> {
        non_empty(self.background_image.as_deref())
    }
}

/// Per-section overrides. A missing value inherits the page default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

/// Editable property of a [`SectionStyle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    BackgroundColor,
    TextColor,
    BackgroundImage,
}

impl SectionStyle {
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        let value = match property {
            StyleProperty::BackgroundColor => &self.background_color,
            StyleProperty::TextColor => &self.text_color,
            StyleProperty::BackgroundImage => &self.background_image,
        };
        non_empty(value.as_deref())
    }

    /// Set a property; `None` or an empty string removes it.
    pub fn set(&mut self, property: StyleProperty, value: Option<&str>) {
        let slot = match property {
            StyleProperty::BackgroundColor => &mut self.background_color,
            StyleProperty::TextColor => &mut self.text_color,
            StyleProperty::BackgroundImage => &mut self.background_image,
        };
        *slot = non_empty(value).map(str::to_string);
    }

    pub fn is_empty(&self) -> bool {
        self.background_color.is_none() && self.text_color.is_none() && self.background_image.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub colors: BTreeMap<String, String>,

    #[serde(default)]
    pub hero: HeroConfig,

    #[serde(default)]
    pub sections: BTreeMap<String, SectionStyle>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let colors = ColorName::ALL
            .into_iter()
            .map(|c| (c.key().to_string(), c.default_value().to_string()))
            .collect();

        let sections = ["header", "hero", "servicios", "contacto", "footer"]
            .into_iter()
            .map(|id| (id.to_string(), SectionStyle::default()))
            .collect();

        Self {
            colors,
            hero: HeroConfig {
                kind: HeroType::Gradient,
                background_color: Some(DEFAULT_PRIMARY.to_string()),
                background_image: Some(String::new()),
            },
            sections,
        }
    }
}

impl ThemeConfig {
    /// Color by key, `""` when unset
    pub fn color(&self, name: &str) -> &str {
        self.colors.get(name).map(String::as_str).unwrap_or("")
    }

    /// Stored style for a section, empty when none
    pub fn section_style(&self, section_id: &str) -> SectionStyle {
        self.sections.get(section_id).cloned().unwrap_or_default()
    }
}

/// Entry of the fixed section registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub default_text_color: &'static str,
}

const SECTIONS: [SectionInfo; 6] = [
    SectionInfo { id: "header", display_name: "Header", default_text_color: "#1f2937" },
    SectionInfo { id: "hero", display_name: "Hero", default_text_color: "#ffffff" },
    SectionInfo { id: "presentacion", display_name: "Presentación", default_text_color: "#1f2937" },
    SectionInfo { id: "servicios", display_name: "Servicios", default_text_color: "#1f2937" },
    SectionInfo { id: "contacto", display_name: "Contacto", default_text_color: "#1f2937" },
    SectionInfo { id: "footer", display_name: "Footer", default_text_color: "#ffffff" },
];

pub fn all_sections() -> &'static [SectionInfo] {
    &SECTIONS
}

pub fn section(section_id: &str) -> Option<&'static SectionInfo> {
    SECTIONS.iter().find(|s| s.id == section_id)
}

pub fn default_text_color(section_id: &str) -> &'static str {
    section(section_id).map_or("#000000", |s| s.default_text_color)
}

pub fn section_display_name(section_id: &str) -> &str {
    section(section_id).map_or(section_id, |s| s.display_name)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

//! Page skeletons.
//!
//! These stand in for the static HTML the browser would load: every anchor
//! the renderers and controllers look up by id exists here, and nothing else.

use crate::app::domain::theme::{ColorName, HeroType};
use crate::app::infrastructure::dom::Element;

/// The public site.
pub fn site_page() -> Element {
    let hero = Element::new("section")
        .with_id("hero")
        .with_class("hero")
        .with_child(
            Element::new("div")
                .with_class("container")
                .with_child(Element::new("h1").with_id("hero-title"))
                .with_child(Element::new("p").with_id("hero-subtitle")),
        );

    let presentacion = Element::new("section")
        .with_id("presentacion")
        .with_class("presentacion")
        .with_child(
            Element::new("div")
                .with_class("container")
                .with_child(Element::new("h2").with_id("presentacion-titulo"))
                .with_child(Element::new("p").with_id("presentacion-lead").with_class("lead"))
                .with_child(Element::new("div").with_id("presentacion-texto"))
                .with_child(
                    Element::new("img")
                        .with_id("presentacion-imagen")
                        .with_attr("alt", ""),
                )
                .with_child(
                    Element::new("a")
                        .with_id("presentacion-cta")
                        .with_class("btn")
                        .with_attr("href", "#contacto"),
                ),
        );

    let servicios = Element::new("section")
        .with_id("servicios")
        .with_class("servicios")
        .with_child(
            Element::new("div")
                .with_class("container")
                .with_child(Element::new("h2").with_text("Nuestros Servicios"))
                .with_child(
                    Element::new("div")
                        .with_id("servicios-container")
                        .with_class("servicios-grid"),
                ),
        );

    let contacto = Element::new("section")
        .with_id("contacto")
        .with_class("contacto")
        .with_child(
            Element::new("div")
                .with_class("container")
                .with_child(Element::new("h2").with_text("Contacto"))
                .with_child(Element::new("div").with_id("contacto-container")),
        );

    Element::new("html").with_child(
        Element::new("body")
            .with_child(Element::new("header").with_id("header").with_class("header"))
            .with_child(
                Element::new("main")
                    .with_id("main")
                    .with_child(hero)
                    .with_child(presentacion)
                    .with_child(servicios)
                    .with_child(contacto),
            )
            .with_child(Element::new("footer").with_id("footer").with_class("footer")),
    )
}

fn input(id: &str, kind: &str) -> Element {
    Element::new("input")
        .with_id(id)
        .with_attr("type", kind)
        .with_attr("value", "")
}

fn text_input(id: &str) -> Element {
    input(id, "text").with_class("text-input")
}

fn color_pair(id: &str) -> Element {
    Element::new("div")
        .with_class("color-input-wrapper")
        .with_child(input(id, "color"))
        .with_child(input(&format!("{}-text", id), "text").with_class("color-text-input"))
}

fn control_group(label: &str, control: Element) -> Element {
    Element::new("div")
        .with_class("control-group")
        .with_child(Element::new("label").with_text(label))
        .with_child(control)
}

fn button(id: &str, label: &str) -> Element {
    Element::new("button")
        .with_id(id)
        .with_class("btn")
        .with_text(label)
}

/// The dashboard with its form controls.
pub fn dashboard_page() -> Element {
    let colors = Element::new("div")
        .with_id("colors-panel")
        .with_class("controls-grid")
        .with_children(
            ColorName::ALL
                .iter()
                .map(|name| control_group(name.key(), color_pair(&format!("color-{}", name.key())))),
        );

    let background_type = Element::new("select")
        .with_id("background-type")
        .with_attr("value", HeroType::default().as_str())
        .with_children([HeroType::Gradient, HeroType::Solid, HeroType::Image].map(|kind| {
            Element::new("option")
                .with_attr("value", kind.as_str())
                .with_text(kind.as_str())
        }));

    let hero = Element::new("div")
        .with_id("hero-panel")
        .with_child(control_group("Tipo de fondo", background_type))
        .with_child(
            control_group("Color de fondo", color_pair("hero-background-color"))
                .with_id("hero-background-color-group"),
        )
        .with_child(
            control_group("Imagen de fondo (URL)", text_input("hero-background-image"))
                .with_id("hero-background-image-group"),
        )
        .with_child(button("refresh-preview-btn", "Actualizar vista previa"))
        .with_child(button("reset-btn", "Restablecer"));

    let section_select = Element::new("select").with_id("section-select");
    let sections = Element::new("div")
        .with_id("sections-panel")
        .with_child(control_group("Sección", section_select))
        .with_child(Element::new("div").with_id("section-styles-container"));

    let servicio_form = Element::new("div")
        .with_id("servicio-form")
        .with_attr("hidden", "")
        .with_child(control_group("Título", text_input("servicio-titulo")))
        .with_child(control_group("Descripción", text_input("servicio-descripcion")))
        .with_child(control_group("Icono", text_input("servicio-icono")))
        .with_child(input("servicio-index", "hidden").with_attr("value", "-1"))
        .with_child(button("servicio-save-btn", "Guardar"))
        .with_child(button("servicio-cancel-btn", "Cancelar"));

    let servicios = Element::new("div")
        .with_id("servicios-panel")
        .with_child(Element::new("div").with_id("servicios-list"))
        .with_child(button("add-servicio-btn", "Agregar servicio"))
        .with_child(servicio_form);

    let presentacion = Element::new("div")
        .with_id("presentacion-panel")
        .with_children(
            [
                ("Título", "presentacion-titulo"),
                ("Lead", "presentacion-lead"),
                ("Texto", "presentacion-texto"),
                ("Imagen (URL)", "presentacion-imagen"),
                ("Texto del botón", "presentacion-cta-text"),
                ("Enlace del botón", "presentacion-cta-link"),
            ]
            .map(|(label, id)| control_group(label, text_input(id))),
        )
        .with_child(button("presentacion-save-btn", "Guardar presentación"));

    let contacto = Element::new("div")
        .with_id("contacto-panel")
        .with_child(Element::new("div").with_id("telefonos-list"))
        .with_child(Element::new("div").with_id("sucursales-list"));

    let notification = Element::new("div")
        .with_id("notification")
        .with_class("notification")
        .with_child(Element::new("span").with_id("notification-text"));

    Element::new("html").with_child(
        Element::new("body")
            .with_child(
                Element::new("main")
                    .with_id("dashboard")
                    .with_child(colors)
                    .with_child(hero)
                    .with_child(sections)
                    .with_child(servicios)
                    .with_child(presentacion)
                    .with_child(contacto),
            )
            .with_child(notification),
    )
}

/// Current `value` attribute of a form control, `""` when missing.
pub fn input_value<'a>(page: &'a Element, id: &str) -> &'a str {
    page.find_by_id(id)
        .and_then(|el| el.attr("value"))
        .unwrap_or("")
}

/// Set the `value` attribute of a form control if it exists.
pub fn set_input_value(page: &mut Element, id: &str, value: &str) {
    if let Some(el) = page.find_by_id_mut(id) {
        el.set_attr("value", value);
    }
}

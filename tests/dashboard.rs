//! Dashboard edits flowing through storage into the public site.

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use vitrina::app::domain::content::{EmpresaPatch, Presentacion, Telefono};
use vitrina::app::domain::messages::{NotificationKind, ServicioForm};
use vitrina::app::domain::theme::{HeroType, StyleProperty};
use vitrina::{AppSettings, DashboardState, MemoryStorage, Message, SiteApp};

fn text(page: &vitrina::app::infrastructure::dom::Element, id: &str) -> String {
    page.find_by_id(id).map(|el| el.text_content()).unwrap_or_default()
}

#[test]
fn adding_a_service_reaches_list_preview_and_site() {
    let storage = MemoryStorage::new();
    let mut dashboard = DashboardState::new(storage.clone(), AppSettings::default());

    dashboard.dispatch(Message::ShowServicioForm(-1));
    assert_eq!(dashboard.servicio_form().index, -1);
    dashboard.dispatch(Message::EditServicioForm(ServicioForm {
        titulo: "Nuevo servicio".to_string(),
        descripcion: "Impresión digital".to_string(),
        ..ServicioForm::default()
    }));
    let notes = dashboard.dispatch(Message::SaveServicio);

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].message, "Servicio agregado");
    assert_eq!(notes[0].kind, NotificationKind::Success);
    assert_eq!(dashboard.content_store().servicios().len(), 1);
    assert!(text(&dashboard.page, "servicios-list").contains("Nuevo servicio"));
    assert!(text(&dashboard.preview, "servicios-container").contains("Nuevo servicio"));

    let mut site = SiteApp::new(storage, AppSettings::default());
    site.init_with(Ok(Default::default()));
    assert!(text(site.page(), "servicios-container").contains("Impresión digital"));
}

#[test]
fn section_styles_apply_to_preview_and_site() {
    let storage = MemoryStorage::new();
    let mut dashboard = DashboardState::new(storage.clone(), AppSettings::default());
    dashboard.dispatch(Message::SelectSection("contacto".to_string()));
    dashboard.dispatch(Message::UpdateEmpresa(EmpresaPatch {
        nombre: Some("Imprenta Sur".to_string()),
        ..Default::default()
    }));
    dashboard.dispatch(Message::SaveTelefono {
        index: -1,
        telefono: Telefono {
            numero: "11 5555-1234".to_string(),
            etiqueta: None,
        },
    });

    let notes = dashboard.dispatch(Message::SectionColorPicked {
        section: "contacto".to_string(),
        property: StyleProperty::TextColor,
        value: "#123456".to_string(),
    });
    assert_eq!(notes[0].message, "Texto de Contacto actualizado");
    dashboard.dispatch(Message::SectionColorPicked {
        section: "contacto".to_string(),
        property: StyleProperty::BackgroundColor,
        value: "#fafafa".to_string(),
    });

    let contacto = dashboard.preview.find_by_id("contacto").unwrap();
    assert_eq!(contacto.style.get("background-color"), "rgb(250, 250, 250)");
    assert_eq!(contacto.find_by_tag("strong").unwrap().style.get("color"), "rgb(18, 52, 86)");
    let link = contacto.find_all_by_class("whatsapp-link")[0];
    assert_eq!(link.style.get("color"), "");

    let mut site = SiteApp::new(storage, AppSettings::default());
    site.init_with(Ok(Default::default()));
    let contacto = site.page().find_by_id("contacto").unwrap();
    assert_eq!(contacto.style.get("color"), "rgb(18, 52, 86)");

    dashboard.dispatch(Message::ClearSectionStyle {
        section: "contacto".to_string(),
        property: StyleProperty::TextColor,
    });
    let contacto = dashboard.preview.find_by_id("contacto").unwrap();
    assert_eq!(contacto.style.get("color"), "");
}

#[test]
fn theme_and_content_survive_restart_on_disk() {
    let dir = tempdir().unwrap();
    let settings = AppSettings {
        storage_dir: Some(dir.path().to_path_buf()),
        ..AppSettings::default()
    };

    {
        let mut dashboard = DashboardState::open(settings.clone());
        dashboard.dispatch(Message::HeroTypeChanged(HeroType::Image));
        dashboard.dispatch(Message::HeroImageChanged("hero.jpg".to_string()));
        dashboard.dispatch(Message::SavePresentacion(Presentacion {
            titulo: Some("X".to_string()),
            ..Default::default()
        }));
        dashboard.dispatch(Message::UpdateWelcome {
            titulo: "Hola".to_string(),
            subtitulo: "Imprimimos todo".to_string(),
        });
    }

    let mut site = SiteApp::open(settings.clone());
    site.init_with(Ok(Default::default()));
    let page = site.page();
    let hero = page.find_by_id("hero").unwrap();
    assert!(hero.style.get("background-image").contains("hero.jpg"));
    assert_eq!(hero.style.get("background-size"), "cover");
    assert_eq!(text(page, "presentacion-titulo"), "X");
    assert_eq!(text(page, "hero-title"), "Hola");

    let dashboard = DashboardState::open(settings);
    assert_eq!(dashboard.themes().config().hero.kind, HeroType::Image);
    assert!(dashboard.export_content().contains("\"titulo\": \"Hola\""));
}

#[test]
fn invalid_input_is_rejected_without_mutation() {
    let mut dashboard = DashboardState::new(MemoryStorage::new(), AppSettings::default());
    dashboard.dispatch(Message::ShowServicioForm(-1));
    let notes = dashboard.dispatch(Message::SaveServicio);
    assert_eq!(notes[0].message, "El título es requerido");
    assert_eq!(notes[0].kind, NotificationKind::Danger);
    assert!(dashboard.content_store().load().is_none());
    assert!(dashboard.page.find_by_id("notification").unwrap().has_class("notification-danger"));

    let notes = dashboard.dispatch(Message::HeroColorTyped("blue".to_string()));
    assert!(notes.is_empty());
    assert_eq!(dashboard.themes().config().hero.color(), Some("#2563eb"));
}

#[test]
fn deleting_the_last_phone_removes_it_from_footer_and_contact() {
    let mut dashboard = DashboardState::new(MemoryStorage::new(), AppSettings::default());
    dashboard.dispatch(Message::SaveTelefono {
        index: -1,
        telefono: Telefono {
            numero: "1111".to_string(),
            etiqueta: None,
        },
    });
    assert!(text(&dashboard.preview, "footer").contains("1111"));

    let notes = dashboard.dispatch(Message::DeleteTelefono(0));
    assert_eq!(notes[0].message, "Teléfono eliminado");
    assert!(!text(&dashboard.preview, "footer").contains("1111"));
    assert!(!text(&dashboard.preview, "contacto-container").contains("1111"));
}

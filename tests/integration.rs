// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};
use tempfile::tempdir;
use toast_shelf::config::{self, Config, GeneralConfig, ToastsConfig};
use toast_shelf::i18n::fluent::I18n;
use toast_shelf::session::Session;
use toast_shelf::toast::builder::{
    part, BODY_CLASS, CLOSE_CLASS, CONTAINER_CLASS, HEADER_CLASS, SHOWN_CLASS,
};
use toast_shelf::toast::{ToastParams, ToastParamsOverrides, ToastShelf, HIDDEN_EVENT};

#[test]
fn added_toast_renders_then_hides_after_its_delay() {
    let start = Instant::now();
    let mut shelf = ToastShelf::with_session(Session::starting_at(start));
    let toast = shelf.add(
        &ToastParamsOverrides::new()
            .header("H")
            .body("B")
            .color("#112233")
            .delay(Duration::from_millis(100)),
    );
    let element = toast.element();

    let doc = shelf.document();
    let header = part(doc, element, HEADER_CLASS).expect("header");
    let body = part(doc, element, BODY_CLASS).expect("body");
    assert_eq!(doc.text(header), Some("H"));
    assert_eq!(doc.text(body), Some("B"));
    assert_eq!(
        doc.attribute(element, "style"),
        Some("background-color: rgba(17,34,51,0.5)")
    );
    assert!(doc.has_class(element, SHOWN_CLASS));

    let dismissed = shelf.tick(start + Duration::from_millis(100));
    assert_eq!(dismissed.len(), 1);
    assert_eq!(dismissed[0].element, element);
    assert!(!shelf.document().has_class(element, SHOWN_CLASS));

    let events = shelf.document().events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].target, element);
    assert_eq!(events[0].name.to_string(), HIDDEN_EVENT);
}

#[test]
fn toasts_stack_in_one_container_and_hide_independently() {
    let start = Instant::now();
    let mut shelf = ToastShelf::with_session(Session::starting_at(start));

    let short = shelf.add(
        &ToastParamsOverrides::new()
            .header("Short")
            .delay(Duration::from_millis(500)),
    );
    let sticky = shelf.add(&ToastParamsOverrides::new().header("Sticky").autohide(false));
    let long = shelf.add(&ToastParamsOverrides::new().delay(Duration::from_secs(2)));

    let doc = shelf.document();
    assert_eq!(doc.query_class(CONTAINER_CLASS).len(), 1);
    let container = shelf.container().expect("container exists after add");
    assert_eq!(
        doc.children(container),
        &[short.element(), sticky.element(), long.element()]
    );
    assert_eq!(shelf.visible().count(), 3);

    shelf.tick(start + Duration::from_millis(600));
    assert!(!short.is_shown(shelf.document()));
    assert!(sticky.is_shown(shelf.document()));
    assert!(long.is_shown(shelf.document()));

    let close = part(shelf.document(), sticky.element(), HEADER_CLASS)
        .and_then(|header| part(shelf.document(), header, CLOSE_CLASS))
        .expect("close control");
    shelf.click(close);
    assert!(!sticky.is_shown(shelf.document()));
    assert!(long.is_shown(shelf.document()));

    shelf.tick(start + Duration::from_secs(3));
    assert_eq!(shelf.visible().count(), 0);
    assert!(!shelf.has_pending_timers());

    // Hidden toasts stay in the container.
    assert_eq!(shelf.document().children(container).len(), 3);

    let hidden: Vec<_> = shelf
        .document()
        .events()
        .iter()
        .filter(|e| e.name.to_string() == HIDDEN_EVENT)
        .map(|e| e.target)
        .collect();
    assert_eq!(hidden, vec![short.element(), sticky.element(), long.element()]);
}

#[test]
fn closing_early_cancels_the_pending_timer() {
    let start = Instant::now();
    let mut shelf = ToastShelf::with_session(Session::starting_at(start));
    let toast = shelf.add(&ToastParamsOverrides::new().delay(Duration::from_secs(1)));
    assert!(shelf.has_pending_timers());

    shelf.hide(&toast);
    assert!(!shelf.has_pending_timers());

    // Showing again restarts the countdown from the current clock.
    shelf.advance(start + Duration::from_millis(900));
    shelf.show(&toast);
    shelf.tick(start + Duration::from_millis(1500));
    assert!(toast.is_shown(shelf.document()));
    shelf.tick(start + Duration::from_millis(1900));
    assert!(!toast.is_shown(shelf.document()));
}

#[test]
fn saved_toast_settings_become_shelf_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        general: GeneralConfig {
            language: Some("ru".to_string()),
        },
        toasts: ToastsConfig {
            autohide: Some(false),
            delay_ms: Some(1200),
            color: Some("#336699".to_string()),
        },
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, saved);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ru");

    let defaults = loaded.toasts.apply_to(ToastParams {
        header: i18n.tr("toast-default-header"),
        body: i18n.tr("toast-default-body"),
        ..ToastParams::default()
    });
    assert_eq!(defaults.header, config::DEFAULT_HEADER);
    assert_eq!(defaults.delay, Duration::from_millis(1200));

    let mut shelf = ToastShelf::new().with_defaults(defaults);
    let toast = shelf.add(&ToastParamsOverrides::new());
    assert!(!toast.config().autohide);
    assert!(!shelf.has_pending_timers());
    assert_eq!(
        shelf.document().attribute(toast.element(), "style"),
        Some("background-color: rgba(51,102,153,0.5)")
    );
}

#[test]
fn cli_language_overrides_config() {
    let loaded = Config {
        general: GeneralConfig {
            language: Some("ru".to_string()),
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.tr("form-add-button"), "Add toast");
}

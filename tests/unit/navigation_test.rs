//! Unit tests for the navigation controller state machine: loading
//! transitions, title resolution, error display, and stale-completion
//! handling.

use emubrowser::managers::tab_registry::{TabRegistry, TabRegistryTrait};
use emubrowser::services::navigation::{
    NavigationController, ABOUT_INVALID, INVALID_URL_TITLE, LOADING_TITLE,
};
use emubrowser::services::scheduler::LoadScheduler;
use emubrowser::services::url_normalizer::UrlNormalizer;
use emubrowser::types::settings::{SessionSettings, UnparsablePolicy};
use emubrowser::types::tab::TabId;

const HOME: &str = "https://www.example.com";

fn controller() -> NavigationController {
    NavigationController::from_settings(&SessionSettings::default(), HOME)
}

fn error_page_controller() -> NavigationController {
    NavigationController::new(UrlNormalizer::new(UnparsablePolicy::ErrorPage), HOME, 800, 500)
}

fn fixture() -> (TabRegistry, LoadScheduler, NavigationController) {
    (TabRegistry::new(HOME), LoadScheduler::new(), controller())
}

fn drain(
    controller: &mut NavigationController,
    registry: &mut TabRegistry,
    scheduler: &mut LoadScheduler,
    ms: u64,
) {
    for completion in scheduler.advance(ms) {
        controller.complete_load(registry, completion);
    }
}

#[test]
fn test_navigate_enters_loading_with_placeholder_title() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "openai.com")
        .unwrap();

    let current = registry.get_tab(tab).unwrap();
    assert!(current.loading);
    assert_eq!(current.title, LOADING_TITLE);
    assert_eq!(current.url, "https://openai.com/");
    assert_eq!(current.history.index(), 1);
    assert_eq!(scheduler.pending_count(), 1);
}

#[test]
fn test_completion_resolves_hostname_title() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "openai.com")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 800);

    let current = registry.get_tab(tab).unwrap();
    assert!(!current.loading);
    assert_eq!(current.title, "openai.com");
}

#[test]
fn test_completion_does_not_fire_early() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "openai.com")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 799);
    assert!(registry.get_tab(tab).unwrap().loading);

    drain(&mut nav, &mut registry, &mut scheduler, 1);
    assert!(!registry.get_tab(tab).unwrap().loading);
}

#[test]
fn test_invalid_input_shows_error_page_without_history_mutation() {
    let mut registry = TabRegistry::new(HOME);
    let mut scheduler = LoadScheduler::new();
    let mut nav = error_page_controller();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "not a url")
        .unwrap();

    let current = registry.get_tab(tab).unwrap();
    assert_eq!(current.url, ABOUT_INVALID);
    assert_eq!(current.title, INVALID_URL_TITLE);
    assert!(!current.loading);
    // History records only successfully-normalized URLs.
    assert_eq!(current.history.entries(), &[HOME.to_string()]);
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn test_invalid_input_cancels_pending_load() {
    let mut registry = TabRegistry::new(HOME);
    let mut scheduler = LoadScheduler::new();
    let mut nav = error_page_controller();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "openai.com")
        .unwrap();
    nav.navigate(&mut registry, &mut scheduler, tab, "not a url")
        .unwrap();
    // The first navigation's timer fires into the error display and must
    // not resurrect its title.
    drain(&mut nav, &mut registry, &mut scheduler, 800);

    let current = registry.get_tab(tab).unwrap();
    assert_eq!(current.url, ABOUT_INVALID);
    assert_eq!(current.title, INVALID_URL_TITLE);
    assert!(!current.loading);
}

#[test]
fn test_search_fallback_navigation_is_recorded_in_history() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "not a url")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 800);

    let current = registry.get_tab(tab).unwrap();
    assert_eq!(current.url, "https://www.google.com/search?q=not+a+url");
    assert_eq!(current.title, "www.google.com");
    assert_eq!(current.history.len(), 2);
}

#[test]
fn test_back_is_legal_only_with_older_entries() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    assert!(!nav.back(&mut registry, &mut scheduler, tab).unwrap());

    nav.navigate(&mut registry, &mut scheduler, tab, "openai.com")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 800);

    assert!(nav.back(&mut registry, &mut scheduler, tab).unwrap());
    let current = registry.get_tab(tab).unwrap();
    assert_eq!(current.url, HOME);
    assert_eq!(current.history.index(), 0);
    assert!(current.loading);
}

#[test]
fn test_back_uses_short_delay() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "openai.com")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 800);
    nav.back(&mut registry, &mut scheduler, tab).unwrap();

    drain(&mut nav, &mut registry, &mut scheduler, 500);
    let current = registry.get_tab(tab).unwrap();
    assert!(!current.loading);
    assert_eq!(current.title, "www.example.com");
}

#[test]
fn test_forward_after_back_round_trips() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "openai.com")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 800);
    let before = registry.get_tab(tab).unwrap().url.clone();

    assert!(nav.back(&mut registry, &mut scheduler, tab).unwrap());
    assert!(nav.forward(&mut registry, &mut scheduler, tab).unwrap());
    assert_eq!(registry.get_tab(tab).unwrap().url, before);

    // At the newest entry, forward is illegal.
    assert!(!nav.forward(&mut registry, &mut scheduler, tab).unwrap());
}

#[test]
fn test_refresh_changes_nothing_but_loading() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "openai.com")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 800);

    let before = registry.get_tab(tab).unwrap().clone();
    nav.refresh(&mut registry, &mut scheduler, tab).unwrap();
    assert!(registry.get_tab(tab).unwrap().loading);

    drain(&mut nav, &mut registry, &mut scheduler, 500);
    let after = registry.get_tab(tab).unwrap();
    assert_eq!(after.url, before.url);
    assert_eq!(after.title, before.title);
    assert_eq!(after.history, before.history);
    assert!(!after.loading);
}

#[test]
fn test_home_navigates_to_configured_home() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "openai.com")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 800);
    nav.home(&mut registry, &mut scheduler, tab).unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 800);

    let current = registry.get_tab(tab).unwrap();
    assert_eq!(current.url, "https://www.example.com/");
    // Home is a real navigation: it extends history.
    assert_eq!(current.history.len(), 3);
}

#[test]
fn test_superseded_completion_is_discarded() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let tab = registry.active_tab_id();

    nav.navigate(&mut registry, &mut scheduler, tab, "first.com")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 400);
    nav.navigate(&mut registry, &mut scheduler, tab, "second.com")
        .unwrap();

    // The first navigation's timer comes due; the tab must stay loading
    // with the second navigation's target.
    drain(&mut nav, &mut registry, &mut scheduler, 400);
    let current = registry.get_tab(tab).unwrap();
    assert!(current.loading);
    assert_eq!(current.url, "https://second.com/");

    drain(&mut nav, &mut registry, &mut scheduler, 400);
    let current = registry.get_tab(tab).unwrap();
    assert!(!current.loading);
    assert_eq!(current.title, "second.com");
}

#[test]
fn test_completion_for_closed_tab_is_a_noop() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let first = registry.active_tab_id();
    let second = registry.create_tab(HOME);

    nav.navigate(&mut registry, &mut scheduler, second, "openai.com")
        .unwrap();
    registry.close_tab(second).unwrap();

    for completion in scheduler.advance(800) {
        assert!(!nav.complete_load(&mut registry, completion));
    }
    // The surviving tab is untouched.
    let tab = registry.get_tab(first).unwrap();
    assert!(!tab.loading);
    assert_eq!(tab.url, HOME);
}

#[test]
fn test_tabs_load_independently() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let first = registry.active_tab_id();
    let second = registry.create_tab(HOME);

    nav.navigate(&mut registry, &mut scheduler, first, "a.com")
        .unwrap();
    nav.navigate(&mut registry, &mut scheduler, second, "b.com")
        .unwrap();
    drain(&mut nav, &mut registry, &mut scheduler, 800);

    assert_eq!(registry.get_tab(first).unwrap().title, "a.com");
    assert_eq!(registry.get_tab(second).unwrap().title, "b.com");
}

#[test]
fn test_unknown_tab_is_reported_and_harmless() {
    let (mut registry, mut scheduler, mut nav) = fixture();
    let ghost = TabId(99);

    assert!(nav.navigate(&mut registry, &mut scheduler, ghost, "a.com").is_err());
    assert!(nav.refresh(&mut registry, &mut scheduler, ghost).is_err());
    assert!(nav.back(&mut registry, &mut scheduler, ghost).is_err());
    assert!(nav.forward(&mut registry, &mut scheduler, ghost).is_err());
    assert_eq!(registry.tab_count(), 1);
    assert_eq!(scheduler.pending_count(), 0);
}

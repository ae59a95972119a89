//! EmuBrowser — a simulated browser tab and navigation engine.
//!
//! Entry point: interactive console demo walking every component with a
//! scripted session. Time is virtual; the demo advances it explicitly.

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              EmuBrowser v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║     Simulated tabs, history, and navigation timing         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_url_normalizer();
    demo_history_stack();
    demo_tab_registry();
    demo_navigation();
    demo_supersede();
    demo_personalities();
    demo_settings();
    demo_renderer();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_url_normalizer() {
    use emubrowser::services::url_normalizer::UrlNormalizer;
    section("URL Normalizer");

    let normalizer = UrlNormalizer::default();
    for raw in ["example.com", "https://OpenAI.com/research", "not a url"] {
        match normalizer.normalize(raw) {
            Ok(url) => println!("  {:?} -> {}", raw, url),
            Err(e) => println!("  {:?} -> error: {}", raw, e),
        }
    }
    println!();
}

fn demo_history_stack() {
    use emubrowser::types::history::HistoryStack;
    section("History Stack");

    let mut history = HistoryStack::new("https://a.com");
    history.push("https://b.com");
    history.push("https://c.com");
    history.back();
    println!("  after back: current = {}", history.current());
    history.push("https://d.com");
    println!("  push from the middle discards forward entries:");
    println!("  entries = {:?}", history.entries());
    println!();
}

fn demo_tab_registry() {
    use emubrowser::managers::tab_registry::{TabRegistry, TabRegistryTrait};
    section("Tab Registry");

    let mut registry = TabRegistry::new("https://www.example.com");
    let second = registry.create_tab("https://www.example.com");
    println!("  opened tab {} (active)", second);
    registry.close_tab(second).expect("tab exists");
    println!(
        "  closed it; active falls back to tab {}",
        registry.active_tab_id()
    );
    let only = registry.active_tab_id();
    registry.close_tab(only).expect("tab exists");
    println!(
        "  closing the last tab resets the registry: {} tab(s), active = {}",
        registry.tab_count(),
        registry.active_tab_id()
    );
    println!();
}

fn demo_navigation() {
    use emubrowser::app::BrowserSession;
    section("Navigation + simulated load");

    let mut session = BrowserSession::with_initial_url("https://www.example.com");
    let tab = session.active_tab_id();
    session.navigate(tab, "openai.com").expect("tab exists");

    let snapshot = session.snapshot();
    let current = snapshot.active_tab().expect("active tab");
    println!("  navigating: url = {}, title = {:?}, loading = {}",
        current.url, current.title, current.loading);

    session.advance_time(800);
    let snapshot = session.snapshot();
    let current = snapshot.active_tab().expect("active tab");
    println!("  after 800ms: title = {:?}, loading = {}", current.title, current.loading);

    session.back(tab);
    session.advance_time(500);
    let snapshot = session.snapshot();
    let current = snapshot.active_tab().expect("active tab");
    println!("  back + 500ms: url = {}, forward legal = {}", current.url, current.can_go_forward);
    println!();
}

fn demo_supersede() {
    use emubrowser::app::BrowserSession;
    section("Rapid navigation (last write wins)");

    let mut session = BrowserSession::with_initial_url("https://www.example.com");
    let tab = session.active_tab_id();
    session.navigate(tab, "first.com").expect("tab exists");
    session.advance_time(400);
    session.navigate(tab, "second.com").expect("tab exists");
    session.advance_time(400); // first timer due, but superseded
    let snapshot = session.snapshot();
    let current = snapshot.active_tab().expect("active tab");
    println!("  400ms after the second navigate: still loading = {}", current.loading);
    session.advance_time(400);
    let snapshot = session.snapshot();
    let current = snapshot.active_tab().expect("active tab");
    println!("  settled: url = {}, title = {:?}", current.url, current.title);
    println!();
}

fn demo_personalities() {
    use emubrowser::types::personality::PERSONALITIES;
    section("Browser Personalities");

    for p in &PERSONALITIES {
        println!("  {:<9} home = {:<30} bg = {}", p.key, p.home_url, p.style.background);
    }
    println!();
}

fn demo_settings() {
    use emubrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(None);
    let settings = engine.load().unwrap_or_default();
    println!("  config path: {}", engine.config_path());
    println!(
        "  personality = {:?}, delays = {}ms/{}ms",
        settings.personality, settings.navigate_delay_ms, settings.revisit_delay_ms
    );
    println!();
}

fn demo_renderer() {
    use emubrowser::services::page_renderer::{ContentRenderer, PlaceholderRenderer};
    section("Presentation Adapter");

    let content = PlaceholderRenderer.render("https://openai.com/", false);
    println!("  {} — {}", content.heading, content.body);
    let content = PlaceholderRenderer.render("about:invalid", false);
    println!("  {} — {}", content.heading, content.body);
    println!();
}

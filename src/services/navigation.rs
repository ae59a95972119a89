//! Navigation controller: the per-tab `Idle → Loading → Idle` state
//! machine, driving URL normalization, history mutation, and simulated load
//! timing.
//!
//! Every operation is a single atomic transform of registry state. A new
//! navigation issued while a load is pending supersedes it: completions
//! carry a generation, and a fire whose generation no longer matches the
//! tab's pending load (or whose tab is gone) is discarded silently.

use url::Url;

use crate::managers::tab_registry::TabRegistry;
use crate::services::scheduler::{LoadCompletion, LoadScheduler};
use crate::services::url_normalizer::UrlNormalizer;
use crate::types::errors::{NavigationError, UrlError};
use crate::types::settings::SessionSettings;
use crate::types::tab::TabId;

/// Sentinel address shown when input cannot be normalized. Never recorded
/// in history.
pub const ABOUT_INVALID: &str = "about:invalid";
/// Title shown while a simulated load is in flight.
pub const LOADING_TITLE: &str = "Loading...";
/// Title shown for the `about:invalid` error display.
pub const INVALID_URL_TITLE: &str = "Invalid URL";
/// Fallback title when a settled URL has no extractable hostname.
pub const UNKNOWN_SITE_TITLE: &str = "Unknown site";

/// Resolves the display title for a settled URL: its hostname, the error
/// title for the invalid sentinel, or the fallback when re-parsing yields
/// no host.
pub fn resolve_title(url: &str) -> String {
    if url == ABOUT_INVALID {
        return INVALID_URL_TITLE.to_string();
    }
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_SITE_TITLE.to_string()),
        Err(_) => UNKNOWN_SITE_TITLE.to_string(),
    }
}

/// Orchestrates normalization, history mutation, and load scheduling.
///
/// Holds no tab state itself — the registry owns every tab record, the
/// scheduler owns time. The controller is personality-agnostic apart from
/// the resolved home URL it is constructed with.
pub struct NavigationController {
    normalizer: UrlNormalizer,
    home_url: String,
    navigate_delay_ms: u64,
    revisit_delay_ms: u64,
    next_generation: u64,
}

impl NavigationController {
    pub fn new(
        normalizer: UrlNormalizer,
        home_url: &str,
        navigate_delay_ms: u64,
        revisit_delay_ms: u64,
    ) -> Self {
        Self {
            normalizer,
            home_url: home_url.to_string(),
            navigate_delay_ms,
            revisit_delay_ms,
            next_generation: 0,
        }
    }

    /// Builds a controller from session settings and a resolved home URL.
    pub fn from_settings(settings: &SessionSettings, home_url: &str) -> Self {
        Self::new(
            UrlNormalizer::new(settings.unparsable_input),
            home_url,
            settings.navigate_delay_ms,
            settings.revisit_delay_ms,
        )
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    /// Navigates a tab to raw address-bar input.
    ///
    /// On successful normalization the URL is pushed into the tab's history
    /// (truncating forward entries) and a fresh-navigation load is
    /// scheduled. Input that fails under the error-page policy puts the tab
    /// into the `about:invalid` display without touching history or
    /// entering the loading state — and cancels any pending load, so a
    /// stale completion cannot resurrect the previous navigation's title.
    pub fn navigate(
        &mut self,
        registry: &mut TabRegistry,
        scheduler: &mut LoadScheduler,
        tab_id: TabId,
        raw: &str,
    ) -> Result<(), NavigationError> {
        let normalized = self.normalizer.normalize(raw);
        let delay = self.navigate_delay_ms;

        match normalized {
            Ok(url) => {
                let generation = self.next_generation();
                let tab = registry
                    .tab_mut(tab_id)
                    .ok_or(NavigationError::UnknownTab(tab_id))?;
                tab.history.push(&url);
                tab.url = url;
                tab.title = LOADING_TITLE.to_string();
                tab.loading = true;
                tab.pending_load = Some(generation);
                scheduler.schedule(delay, LoadCompletion { tab_id, generation });
            }
            Err(UrlError::Invalid(_)) => {
                let tab = registry
                    .tab_mut(tab_id)
                    .ok_or(NavigationError::UnknownTab(tab_id))?;
                tab.url = ABOUT_INVALID.to_string();
                tab.title = INVALID_URL_TITLE.to_string();
                tab.loading = false;
                tab.pending_load = None;
            }
        }
        Ok(())
    }

    /// Moves a tab one history entry back. Returns whether the move was
    /// legal; an illegal move leaves the tab untouched.
    pub fn back(
        &mut self,
        registry: &mut TabRegistry,
        scheduler: &mut LoadScheduler,
        tab_id: TabId,
    ) -> Result<bool, NavigationError> {
        let delay = self.revisit_delay_ms;
        let generation = self.next_generation();
        let tab = registry
            .tab_mut(tab_id)
            .ok_or(NavigationError::UnknownTab(tab_id))?;
        if tab.history.back().is_none() {
            return Ok(false);
        }
        tab.url = tab.history.current().to_string();
        tab.loading = true;
        tab.pending_load = Some(generation);
        scheduler.schedule(delay, LoadCompletion { tab_id, generation });
        Ok(true)
    }

    /// Moves a tab one history entry forward. Returns whether the move was
    /// legal.
    pub fn forward(
        &mut self,
        registry: &mut TabRegistry,
        scheduler: &mut LoadScheduler,
        tab_id: TabId,
    ) -> Result<bool, NavigationError> {
        let delay = self.revisit_delay_ms;
        let generation = self.next_generation();
        let tab = registry
            .tab_mut(tab_id)
            .ok_or(NavigationError::UnknownTab(tab_id))?;
        if tab.history.forward().is_none() {
            return Ok(false);
        }
        tab.url = tab.history.current().to_string();
        tab.loading = true;
        tab.pending_load = Some(generation);
        scheduler.schedule(delay, LoadCompletion { tab_id, generation });
        Ok(true)
    }

    /// Re-enters the loading state with the short delay. URL, history, and
    /// settled title are unchanged once the load completes.
    pub fn refresh(
        &mut self,
        registry: &mut TabRegistry,
        scheduler: &mut LoadScheduler,
        tab_id: TabId,
    ) -> Result<(), NavigationError> {
        let delay = self.revisit_delay_ms;
        let generation = self.next_generation();
        let tab = registry
            .tab_mut(tab_id)
            .ok_or(NavigationError::UnknownTab(tab_id))?;
        tab.loading = true;
        tab.pending_load = Some(generation);
        scheduler.schedule(delay, LoadCompletion { tab_id, generation });
        Ok(())
    }

    /// Navigates to the configured home URL.
    pub fn home(
        &mut self,
        registry: &mut TabRegistry,
        scheduler: &mut LoadScheduler,
        tab_id: TabId,
    ) -> Result<(), NavigationError> {
        let home = self.home_url.clone();
        self.navigate(registry, scheduler, tab_id, &home)
    }

    /// Applies a fired load completion.
    ///
    /// Returns whether the completion was applied. A completion whose tab
    /// is gone, or whose generation no longer matches the tab's pending
    /// load, is stale and discarded without touching anything.
    pub fn complete_load(&mut self, registry: &mut TabRegistry, completion: LoadCompletion) -> bool {
        let Some(tab) = registry.tab_mut(completion.tab_id) else {
            return false;
        };
        if tab.pending_load != Some(completion.generation) {
            return false;
        }
        tab.pending_load = None;
        tab.loading = false;
        tab.title = resolve_title(&tab.url);
        true
    }
}

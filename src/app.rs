//! Application state management
//!
//! The main application state, keyboard handling, data loading, and the
//! transitions between the list, detail, and favorites views.

use crossterm::event::{KeyCode, KeyEvent};
use std::collections::HashMap;

use crate::cli::StartupConfig;
use crate::data::{ApiClient, ApiError, BreakDetail, SurfBreak};
use crate::favorites::{FavoritesStore, JsonFileStore, KeyValueStore, MemoryStore};
use crate::filter::{self, BreakFilters};
use crate::forecast::{aggregate_daily, MAX_FORECAST_DAYS};

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while fetching the break list
    Loading,
    /// List view showing breaks grouped by state
    BreakList,
    /// Detail view for a specific break, keyed by break name
    BreakDetail(String),
    /// List of favorited breaks
    Favorites,
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show the help overlay
    pub show_help: bool,
    /// Set when the backend could not be reached; shown as a banner
    pub offline: bool,
    /// All breaks from the backend, in backend order
    pub breaks: Vec<SurfBreak>,
    /// All states from the backend, used by the state filter cycle
    pub states: Vec<String>,
    /// Active search/state/skill filters
    pub filters: BreakFilters,
    /// Whether keystrokes currently edit the search query
    pub search_editing: bool,
    /// Index of the selected break within the filtered list
    pub selected_index: usize,
    /// Index of the selected entry in the favorites view
    pub favorites_index: usize,
    /// Break details fetched this session, keyed by break name
    pub details: HashMap<String, BreakDetail>,
    /// Error from the most recent detail fetch, shown in the detail view
    pub detail_error: Option<String>,
    /// Scroll offset for the detail view
    pub detail_scroll_offset: u16,
    /// Selected forecast day in the detail charts; `None` until h/l is pressed
    pub chart_day_cursor: Option<usize>,
    /// Flag indicating a full reload has been requested
    pub refresh_requested: bool,
    /// Persistent favorites list
    pub favorites: FavoritesStore<Box<dyn KeyValueStore>>,
    /// Flag to open the favorites view after data loads (from --favorites)
    pending_favorites_view: bool,
    /// Backend REST client
    client: ApiClient,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self::with_startup_config(StartupConfig::default())
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// Falls back to an in-memory favorites store when no home directory can
    /// be determined, so the app still runs (without persistence).
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let store: Box<dyn KeyValueStore> = match JsonFileStore::new() {
            Some(store) => Box::new(store),
            None => Box::new(MemoryStore::default()),
        };
        Self::with_parts(config, store, None)
    }

    /// Creates an App with explicit storage and client, for tests and for
    /// wiring custom backends
    pub fn with_parts(
        config: StartupConfig,
        store: Box<dyn KeyValueStore>,
        client: Option<ApiClient>,
    ) -> Self {
        let client = client.unwrap_or_else(|| match &config.base_url {
            Some(url) => ApiClient::with_base_url(url.clone()),
            None => ApiClient::new(),
        });
        let mut filters = BreakFilters::default();
        if let Some(state) = &config.initial_state {
            filters.state = state.clone();
        }
        Self {
            state: AppState::Loading,
            should_quit: false,
            show_help: false,
            offline: false,
            breaks: Vec::new(),
            states: Vec::new(),
            filters,
            search_editing: false,
            selected_index: 0,
            favorites_index: 0,
            details: HashMap::new(),
            detail_error: None,
            detail_scroll_offset: 0,
            chart_day_cursor: None,
            refresh_requested: false,
            favorites: FavoritesStore::load(store),
            pending_favorites_view: config.start_in_favorites,
            client,
        }
    }

    /// Breaks passing the active filters, in backend order
    pub fn filtered_breaks(&self) -> Vec<&SurfBreak> {
        filter::filter_breaks(&self.breaks, &self.filters)
    }

    /// Breaks in display order: grouped by state alphabetically, then backend
    /// order within each group. `selected_index` indexes this list.
    pub fn visible_breaks(&self) -> Vec<&SurfBreak> {
        let filtered = filter::filter_breaks(&self.breaks, &self.filters);
        filter::group_by_state(&filtered)
            .into_iter()
            .flat_map(|(_, group)| group)
            .collect()
    }

    /// Name of the break selected in the list view, if any
    pub fn selected_break_name(&self) -> Option<String> {
        self.visible_breaks()
            .get(self.selected_index)
            .map(|b| b.name.clone())
    }

    /// Name of the favorite selected in the favorites view, if any
    pub fn selected_favorite_name(&self) -> Option<String> {
        self.favorites
            .list()
            .get(self.favorites_index)
            .cloned()
    }

    /// Whether the detail view for `name` has data or a recorded error
    pub fn detail_ready(&self, name: &str) -> bool {
        self.details.contains_key(name) || self.detail_error.is_some()
    }

    /// Number of forecast days available for the break currently shown
    pub fn detail_day_count(&self) -> usize {
        let AppState::BreakDetail(name) = &self.state else {
            return 0;
        };
        self.details
            .get(name)
            .and_then(|d| d.hourly())
            .map(|h| aggregate_daily(h).len())
            .unwrap_or(0)
            .min(MAX_FORECAST_DAYS)
    }

    /// Loads the break and state lists concurrently.
    ///
    /// On failure the previous data is kept and the offline banner is shown;
    /// the app stays usable against whatever was loaded last.
    pub async fn load_all_data(&mut self) {
        let (breaks, states) =
            futures::join!(self.client.fetch_breaks(), self.client.fetch_states());

        match breaks {
            Ok(breaks) => {
                self.offline = false;
                self.breaks = breaks;
            }
            Err(_) => {
                self.offline = true;
            }
        }
        match states {
            Ok(states) => self.states = states,
            // The filter cycle can still work from the loaded breaks.
            Err(_) => self.states = filter::states(&self.breaks),
        }

        self.clamp_selection();

        if self.pending_favorites_view {
            self.state = AppState::Favorites;
            self.pending_favorites_view = false;
        } else {
            self.state = AppState::BreakList;
        }
    }

    /// Fetches the detail for one break unless it is already cached.
    ///
    /// A backend-reported lookup failure is recorded in `detail_error`; a
    /// transport failure also raises the offline banner.
    pub async fn load_detail(&mut self, name: &str) {
        if self.details.contains_key(name) {
            return;
        }
        match self.client.fetch_break_detail(name).await {
            Ok(detail) => {
                self.detail_error = None;
                self.details.insert(name.to_string(), detail);
            }
            Err(e) => {
                if matches!(e, ApiError::RequestFailed(_)) {
                    self.offline = true;
                }
                self.detail_error = Some(e.to_string());
            }
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` (anywhere) or `Esc` (in BreakList): quit
    /// - `Up`/`k`, `Down`/`j`: move selection, wrapping
    /// - `Enter`: open detail for the selected break
    /// - `/`: edit the search query (Enter/Esc finishes)
    /// - `s`/`v`: cycle the state / skill filter
    /// - `f`: toggle favorite, `F`: open the favorites view
    /// - `h`/`Left`, `l`/`Right` (in detail): move the forecast day cursor
    /// - `j`/`k`, `g`/`G` (in detail): scroll
    /// - `r`: reload data, `?`: help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        if self.search_editing {
            self.handle_search_key(key_event);
            return;
        }

        match self.state.clone() {
            AppState::Loading => {
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::BreakList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Enter => {
                    if let Some(name) = self.selected_break_name() {
                        self.enter_detail(name);
                    }
                }
                KeyCode::Char('/') => {
                    self.search_editing = true;
                }
                KeyCode::Char('s') => {
                    self.cycle_state_filter();
                }
                KeyCode::Char('v') => {
                    self.cycle_skill_filter();
                }
                KeyCode::Char('f') => {
                    if let Some(name) = self.selected_break_name() {
                        self.favorites.toggle(&name).ok();
                    }
                }
                KeyCode::Char('F') => {
                    self.favorites_index = 0;
                    self.state = AppState::Favorites;
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::BreakDetail(name) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.reset_detail_view_state();
                    self.state = AppState::BreakList;
                }
                KeyCode::Char('h') | KeyCode::Left => {
                    self.move_day_cursor_left();
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    self.move_day_cursor_right();
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.scroll_down();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.scroll_up();
                }
                KeyCode::Char('g') => {
                    self.scroll_to_top();
                }
                KeyCode::Char('G') => {
                    self.scroll_to_bottom();
                }
                KeyCode::Char('f') => {
                    self.favorites.toggle(&name).ok();
                }
                KeyCode::Char('r') => {
                    // Drop the cached detail so the reload refetches it too.
                    self.details.remove(&name);
                    self.detail_error = None;
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::Favorites => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.state = AppState::BreakList;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_favorites_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_favorites_down();
                }
                KeyCode::Enter => {
                    if let Some(name) = self.selected_favorite_name() {
                        self.enter_detail(name);
                    }
                }
                KeyCode::Char('f') => {
                    if let Some(name) = self.selected_favorite_name() {
                        self.favorites.remove(&name).ok();
                        self.clamp_favorites_selection();
                    }
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    /// Handles keys while the search query is being edited
    fn handle_search_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.search_editing = false;
            }
            KeyCode::Backspace => {
                self.filters.search.pop();
                self.clamp_selection();
            }
            KeyCode::Char(c) => {
                self.filters.search.push(c);
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn enter_detail(&mut self, name: String) {
        self.reset_detail_view_state();
        self.state = AppState::BreakDetail(name);
    }

    /// Cycles the state filter through "all" and each known state
    fn cycle_state_filter(&mut self) {
        self.filters.state = next_in_cycle(&self.states, &self.filters.state);
        self.clamp_selection();
    }

    /// Cycles the skill filter through "all" and each level present in the data
    fn cycle_skill_filter(&mut self) {
        let levels = filter::skill_levels(&self.breaks);
        self.filters.skill = next_in_cycle(&levels, &self.filters.skill);
        self.clamp_selection();
    }

    /// Keeps the list selection inside the filtered list after it shrinks
    fn clamp_selection(&mut self) {
        let count = self.visible_breaks().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    fn clamp_favorites_selection(&mut self) {
        let count = self.favorites.list().len();
        if count == 0 {
            self.favorites_index = 0;
        } else if self.favorites_index >= count {
            self.favorites_index = count - 1;
        }
    }

    /// Moves the selection up in the list, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.visible_breaks().len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection down in the list, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.visible_breaks().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    fn move_favorites_up(&mut self) {
        let count = self.favorites.list().len();
        if count == 0 {
            return;
        }
        if self.favorites_index == 0 {
            self.favorites_index = count - 1;
        } else {
            self.favorites_index -= 1;
        }
    }

    fn move_favorites_down(&mut self) {
        let count = self.favorites.list().len();
        if count == 0 {
            return;
        }
        self.favorites_index = (self.favorites_index + 1) % count;
    }

    /// Moves the forecast day cursor left, wrapping; first press selects the
    /// last day
    fn move_day_cursor_left(&mut self) {
        let count = self.detail_day_count();
        if count == 0 {
            self.chart_day_cursor = None;
            return;
        }
        self.chart_day_cursor = Some(match self.chart_day_cursor {
            None | Some(0) => count - 1,
            Some(i) => i - 1,
        });
    }

    /// Moves the forecast day cursor right, wrapping; first press selects the
    /// first day
    fn move_day_cursor_right(&mut self) {
        let count = self.detail_day_count();
        if count == 0 {
            self.chart_day_cursor = None;
            return;
        }
        self.chart_day_cursor = Some(match self.chart_day_cursor {
            None => 0,
            Some(i) => (i + 1) % count,
        });
    }

    /// Scrolls up in the detail view, stopping at 0
    pub fn scroll_up(&mut self) {
        self.detail_scroll_offset = self.detail_scroll_offset.saturating_sub(1);
    }

    /// Scrolls down in the detail view, up to a bound the renderer clamps
    pub fn scroll_down(&mut self) {
        const MAX_SCROLL: u16 = 100;
        if self.detail_scroll_offset < MAX_SCROLL {
            self.detail_scroll_offset += 1;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.detail_scroll_offset = 0;
    }

    /// Jumps to a large offset that the renderer clamps to the actual bottom
    pub fn scroll_to_bottom(&mut self) {
        self.detail_scroll_offset = 100;
    }

    /// Resets scroll and day cursor when navigating between detail views
    fn reset_detail_view_state(&mut self) {
        self.detail_scroll_offset = 0;
        self.chart_day_cursor = None;
        self.detail_error = None;
    }
}

/// Advances `current` through `["", options...]`, wrapping back to "" (all)
fn next_in_cycle(options: &[String], current: &str) -> String {
    if options.is_empty() {
        return String::new();
    }
    match options.iter().position(|o| o == current) {
        None => options[0].clone(),
        Some(i) if i + 1 < options.len() => options[i + 1].clone(),
        Some(_) => String::new(),
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

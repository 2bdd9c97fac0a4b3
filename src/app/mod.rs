pub mod help;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Clear;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::geo::{GeoError, GeoJsonSource, MapGeometry, ShapeSource, TileGridSource};
use crate::keys::{KeyAction, map_key};
use crate::store::TrackingRecord;
use crate::tracker::Progress;
use crate::ui::overlay::{TextOverlay, centered_rect, corner_rect};
use crate::ui::{ChoroplethMap, Legend, MenuBar, StatsBox};

/// Application state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Default,
    Help,
}

/// One way of drawing the map, with a description of where it came from.
pub struct MapView {
    pub source: String,
    pub geometry: MapGeometry,
}

/// Load every available map view. Boundary files come first when
/// configured; the tile grid is always available.
pub fn load_views(config: &Config, record: &TrackingRecord) -> Result<Vec<MapView>, GeoError> {
    let mut sources: Vec<Box<dyn ShapeSource>> = Vec::new();
    if let Some(path) = &config.boundaries_file {
        sources.push(Box::new(GeoJsonSource::new(path)));
    }
    sources.push(Box::new(TileGridSource));

    sources
        .iter()
        .map(|source| -> Result<MapView, GeoError> {
            let geometry = source.load(&record.states)?;
            info!(
                source = %source.describe(),
                shapes = geometry.shapes.len(),
                "loaded map geometry"
            );
            Ok(MapView {
                source: source.describe(),
                geometry,
            })
        })
        .collect()
}

pub struct App {
    // State
    state: AppState,
    running: bool,

    // Data
    record: TrackingRecord,
    progress: Progress,
    views: Vec<MapView>,
    active_view: usize,
    title: String,

    // UI components
    legend: Legend,
    stats: StatsBox,
    menu: MenuBar,
    help_overlay: Option<TextOverlay>,
}

impl App {
    pub fn new(record: TrackingRecord, views: Vec<MapView>, title: impl Into<String>) -> Self {
        let progress = Progress::of(&record);
        let source = views.first().map(|v| v.source.clone()).unwrap_or_default();
        Self {
            state: AppState::Default,
            running: true,
            record,
            progress,
            views,
            active_view: 0,
            title: title.into(),
            legend: Legend::new(progress),
            stats: StatsBox::new(progress),
            menu: MenuBar::new(source),
            help_overlay: None,
        }
    }

    /// Run the main TUI event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        info!(summary = %self.progress.summary(), "showing map");
        while self.running {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle a raw key event by routing to the current state.
    fn handle_key(&mut self, key: KeyEvent) {
        match self.state {
            AppState::Help => self.handle_help_key(key.code),
            AppState::Default => {
                if let Some(action) = map_key(key) {
                    self.handle_key_action(action);
                }
            }
        }
    }

    /// Handle a mapped key action in Default state.
    fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.running = false;
            }
            KeyAction::Help => {
                self.state = AppState::Help;
                self.help_overlay = Some(TextOverlay::new("Help", help::help_text()));
            }
            KeyAction::SwitchView => self.switch_view(),
        }
    }

    /// Handle key events while the help overlay is active.
    fn handle_help_key(&mut self, key: KeyCode) {
        if let Some(ref mut overlay) = self.help_overlay {
            overlay.handle_key(key);

            if overlay.is_dismissed() {
                self.help_overlay = None;
                self.state = AppState::Default;
            }
        }
    }

    fn switch_view(&mut self) {
        if self.views.len() < 2 {
            return;
        }
        self.active_view = (self.active_view + 1) % self.views.len();
        let source = &self.views[self.active_view].source;
        debug!(%source, "switched map view");
        self.menu.set_source(source.as_str());
    }

    /// Draw all UI components.
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        if let Some(view) = self.views.get(self.active_view) {
            let map = ChoroplethMap::new(&view.geometry, &self.record, &self.title);
            frame.render_widget(&map, layout[0]);
        }

        // Annotations sit inside the map border.
        let inner = layout[0].inner(Margin::new(1, 1));
        if inner.width > 0 && inner.height > 0 {
            let (w, h) = self.stats.size();
            frame.render_widget(&self.stats, corner_rect(inner, w, h, false));
            let (w, h) = self.legend.size();
            frame.render_widget(&self.legend, corner_rect(inner, w, h, true));
        }

        frame.render_widget(&self.menu, layout[1]);

        if self.state == AppState::Help
            && let Some(ref overlay) = self.help_overlay
        {
            let popup_area = centered_rect(60, 70, area);
            frame.render_widget(Clear, popup_area);
            frame.render_widget(overlay, popup_area);
        }
    }
}

/// Set up terminal, run the TUI app, and restore terminal on exit.
pub fn run(config: &Config, record: TrackingRecord, views: Vec<MapView>) -> anyhow::Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(record, views, config.title.clone());
    let result = app.run(&mut terminal);

    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;

    result
}

// ── Test support ────────────────────────────────────────────────────

#[cfg(test)]
impl App {
    /// Create an App with the default record and tile grid only.
    fn new_for_test() -> Self {
        let record = TrackingRecord::default();
        let views = load_views(&Config::default(), &record).unwrap();
        Self::new(record, views, "Test Map")
    }

    fn active_source(&self) -> &str {
        &self.views[self.active_view].source
    }
}

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::control::{self, ControlAction};
use crate::core::telemetry::{
    evaluate_alerts, partition_leaks, Alert, LeakAlarm, LeakScanReport, SnapshotClient,
    SystemSnapshot, TelemetryHistory,
};
use crate::ui::notifications::NotificationFeed;

use super::event_handler::DashboardEvent;
use super::render::render_ui;

/// How often the loop redraws and polls for input.
const UI_TICK: Duration = Duration::from_millis(250);

/// Which unit panel currently holds the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Valves,
    Taps,
}

/// Dashboard application state.
///
/// This is the single controller owning the current snapshot, the
/// auto-refresh deadline and everything derived from the last poll; the
/// render layer only reads from it.
pub struct DashboardApp {
    pub client: SnapshotClient,
    pub snapshot: Option<SystemSnapshot>,
    pub last_update: Option<DateTime<Local>>,
    pub history: TelemetryHistory,
    pub alerts: Vec<Alert>,
    pub leak_alarm: LeakAlarm,
    pub notifications: NotificationFeed,
    pub last_scan: Option<LeakScanReport>,
    pub auto_refresh: bool,
    pub interval: Duration,
    pub should_quit: bool,
    pub show_help: bool,
    pub selected_panel: Panel,
    pub selected_index: usize,
    next_poll: Option<Instant>,
}

impl DashboardApp {
    pub fn new(config: DashboardAppConfig) -> Self {
        Self {
            client: SnapshotClient::new(config.endpoint),
            snapshot: None,
            last_update: None,
            history: TelemetryHistory::new(),
            alerts: Vec::new(),
            leak_alarm: LeakAlarm::new(),
            notifications: NotificationFeed::new(),
            last_scan: None,
            auto_refresh: config.auto_refresh,
            interval: Duration::from_secs(config.interval_secs),
            should_quit: false,
            show_help: false,
            selected_panel: Panel::Valves,
            selected_index: 0,
            next_poll: None,
        }
    }

    /// Poll the backend for a fresh snapshot.
    ///
    /// On success the snapshot replaces the previous one wholesale and all
    /// derived state is recomputed. On failure the previous snapshot stays
    /// untouched and exactly one failure notice is emitted; the next
    /// scheduled poll is the retry.
    pub fn refresh(&mut self) -> bool {
        match self.client.fetch_snapshot() {
            Ok(snapshot) => {
                self.history.record(&snapshot);
                self.alerts = evaluate_alerts(&snapshot);

                let active = partition_leaks(&snapshot.leaks).active_count();
                if self.leak_alarm.observe(active) {
                    log::warn!("New leak activity: {} active leak(s)", active);
                    self.notifications
                        .warning(format!("ACTIVE LEAKS DETECTED: {}", active));
                }

                self.snapshot = Some(snapshot);
                self.last_update = Some(Local::now());
                self.clamp_selection();
                true
            }
            Err(err) => {
                log::error!("Failed to refresh snapshot: {}", err);
                self.notifications.error("Failed to refresh data");
                false
            }
        }
    }

    /// Arm the auto-refresh timer, replacing any previous deadline.
    pub fn arm_timer(&mut self) {
        self.next_poll = Some(Instant::now() + self.interval);
    }

    pub fn disarm_timer(&mut self) {
        self.next_poll = None;
    }

    pub fn timer_due(&self) -> bool {
        self.next_poll.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Quit => self.should_quit = true,
            DashboardEvent::ToggleHelp => self.show_help = !self.show_help,
            DashboardEvent::Refresh => {
                if self.refresh() {
                    self.notifications.success("Dashboard data refreshed");
                }
            }
            DashboardEvent::ToggleAutoRefresh => {
                self.auto_refresh = !self.auto_refresh;
                if self.auto_refresh {
                    self.arm_timer();
                    self.notifications.success("Auto-refresh enabled");
                } else {
                    self.disarm_timer();
                    self.notifications.warning("Auto-refresh disabled");
                }
            }
            DashboardEvent::NextPanel => {
                self.selected_panel = match self.selected_panel {
                    Panel::Valves => Panel::Taps,
                    Panel::Taps => Panel::Valves,
                };
                self.selected_index = 0;
            }
            DashboardEvent::SelectionUp => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                }
            }
            DashboardEvent::SelectionDown => {
                let max_index = self.panel_len().saturating_sub(1);
                if self.selected_index < max_index {
                    self.selected_index += 1;
                }
            }
            DashboardEvent::ToggleSelected => {
                if let Some(name) = self.selected_unit_name() {
                    let action = match self.selected_panel {
                        Panel::Valves => ControlAction::ToggleValve(name),
                        Panel::Taps => ControlAction::ToggleTap(name),
                    };
                    self.execute_action(action);
                }
            }
            DashboardEvent::IsolateLeak => {
                let pipe = self
                    .snapshot
                    .as_ref()
                    .and_then(|s| partition_leaks(&s.leaks).active.into_iter().next());
                match pipe {
                    Some(pipe) => self.execute_action(ControlAction::IsolateLeak(pipe)),
                    None => self.notifications.info("No active leaks to isolate"),
                }
            }
            DashboardEvent::EmergencyShutdown => {
                self.execute_action(ControlAction::EmergencyShutdown);
            }
            DashboardEvent::NotifyMaintenance => {
                self.execute_action(ControlAction::NotifyMaintenance);
            }
            DashboardEvent::ScanLeaks => self.scan_leaks(),
            DashboardEvent::None => {}
        }
    }

    /// Run one control command with the notify-before / notify-after /
    /// refresh-after sequence.
    pub fn execute_action(&mut self, action: ControlAction) {
        self.notifications.info(action.describe());

        match control::execute(&self.client, &action) {
            Ok(outcome) => {
                if outcome.accepted {
                    self.notifications.success(outcome.message);
                } else {
                    self.notifications.error(outcome.message);
                }
                if outcome.refresh {
                    self.refresh();
                }
            }
            Err(err) => {
                log::error!("Control command {} failed: {}", action.name(), err);
                self.notifications
                    .error(format!("Command failed: {}", action.name()));
            }
        }
    }

    fn scan_leaks(&mut self) {
        match self.client.check_leaks() {
            Ok(report) => {
                let message = format!("Leak scan completed: {} leaks found", report.total_active);
                if report.total_active > 0 {
                    self.notifications.warning(message);
                } else {
                    self.notifications.success(message);
                }
                self.last_scan = Some(report);
            }
            Err(err) => {
                log::error!("Leak scan failed: {}", err);
                self.notifications.error("Failed to check for leaks");
            }
        }
    }

    pub fn panel_len(&self) -> usize {
        self.snapshot
            .as_ref()
            .map(|s| match self.selected_panel {
                Panel::Valves => s.valves.len(),
                Panel::Taps => s.taps.len(),
            })
            .unwrap_or(0)
    }

    /// Name of the unit under the selection cursor.
    pub fn selected_unit_name(&self) -> Option<String> {
        let snapshot = self.snapshot.as_ref()?;
        let keys: Vec<&String> = match self.selected_panel {
            Panel::Valves => snapshot.valves.keys().collect(),
            Panel::Taps => snapshot.taps.keys().collect(),
        };
        keys.get(self.selected_index).map(|name| (*name).clone())
    }

    fn clamp_selection(&mut self) {
        let max_index = self.panel_len().saturating_sub(1);
        if self.selected_index > max_index {
            self.selected_index = max_index;
        }
    }
}

/// Configuration for the dashboard app
#[derive(Debug, Clone)]
pub struct DashboardAppConfig {
    pub endpoint: String,
    pub interval_secs: u64,
    pub auto_refresh: bool,
}

impl Default for DashboardAppConfig {
    fn default() -> Self {
        Self {
            endpoint: crate::core::config::DEFAULT_ENDPOINT.to_string(),
            interval_secs: crate::core::config::DEFAULT_POLL_INTERVAL_SECS,
            auto_refresh: true,
        }
    }
}

/// Run the dashboard TUI application
pub fn run_dashboard_app(config: DashboardAppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create app and load initial data
    let mut app = DashboardApp::new(config);
    if app.refresh() {
        app.notifications.success("Dashboard data loaded successfully");
    }
    if app.auto_refresh {
        app.arm_timer();
    }

    // Main loop
    loop {
        app.notifications.prune();

        terminal.draw(|frame| render_ui(frame, &app))?;

        if event::poll(UI_TICK).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let dashboard_event = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => DashboardEvent::Quit,
                        KeyCode::Char('?') | KeyCode::Char('h') => DashboardEvent::ToggleHelp,
                        KeyCode::Char('r') => DashboardEvent::Refresh,
                        KeyCode::Char('a') => DashboardEvent::ToggleAutoRefresh,
                        KeyCode::Tab => DashboardEvent::NextPanel,
                        KeyCode::Up | KeyCode::Char('k') => DashboardEvent::SelectionUp,
                        KeyCode::Down | KeyCode::Char('j') => DashboardEvent::SelectionDown,
                        KeyCode::Enter | KeyCode::Char('t') => DashboardEvent::ToggleSelected,
                        KeyCode::Char('i') => DashboardEvent::IsolateLeak,
                        KeyCode::Char('S') => DashboardEvent::EmergencyShutdown,
                        KeyCode::Char('m') => DashboardEvent::NotifyMaintenance,
                        KeyCode::Char('l') => DashboardEvent::ScanLeaks,
                        _ => DashboardEvent::None,
                    };
                    app.handle_event(dashboard_event);
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }

        // Poll on the auto-refresh deadline; re-arming replaces the single
        // deadline, so there is never more than one timer.
        if app.timer_due() {
            app.refresh();
            app.arm_timer();
        }
    }

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

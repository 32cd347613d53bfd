/// Events that can occur in the dashboard TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Fetch a fresh snapshot immediately
    Refresh,
    /// Enable/disable the auto-refresh timer
    ToggleAutoRefresh,
    /// Switch selection between the valve and tap panels
    NextPanel,
    /// Move unit selection up
    SelectionUp,
    /// Move unit selection down
    SelectionDown,
    /// Toggle the selected valve or tap
    ToggleSelected,
    /// Isolate the first active leak
    IsolateLeak,
    /// Close all valves and shut the system down
    EmergencyShutdown,
    /// Notify the maintenance team
    NotifyMaintenance,
    /// Run a backend leak scan
    ScanLeaks,
    /// No action
    None,
}

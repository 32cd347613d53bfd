use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::core::telemetry::{
    classify_ph, classify_salinity, classify_turbidity, energy_efficiency, open_tap_count,
    open_valve_count, partition_leaks, quality_rating, quality_score, system_pressure, total_flow,
    AlertSeverity, SystemSnapshot, UnitState,
};
use crate::ui::formatters::{
    format_clock, format_flow, format_percent, format_ph, format_pressure, format_salinity,
    format_turbidity,
};

use super::app::{DashboardApp, Panel};
use super::widgets::{level_gauge, notification_color, quality_gauge, rating_color, status_color};

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    let has_alerts = !app.alerts.is_empty();
    let alert_height = if has_alerts {
        // 1 line per alert + 2 for borders
        (app.alerts.len().min(3) + 2) as u16
    } else {
        0
    };
    let notification_height = if app.notifications.is_empty() {
        0
    } else {
        (app.notifications.len() + 2) as u16
    };

    let mut constraints = vec![Constraint::Length(3)]; // Header
    if has_alerts {
        constraints.push(Constraint::Length(alert_height));
    }
    constraints.push(Constraint::Length(4)); // Sensor cards
    constraints.push(Constraint::Length(8)); // Water level + stats
    constraints.push(Constraint::Min(8)); // Valves + taps + leaks
    if notification_height > 0 {
        constraints.push(Constraint::Length(notification_height));
    }
    constraints.push(Constraint::Length(1)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut index = 0;
    render_header(frame, chunks[index], app);
    index += 1;
    if has_alerts {
        render_alerts_banner(frame, chunks[index], app);
        index += 1;
    }
    render_sensors(frame, chunks[index], app);
    index += 1;
    render_overview(frame, chunks[index], app);
    index += 1;
    render_units_and_leaks(frame, chunks[index], app);
    index += 1;
    if notification_height > 0 {
        render_notifications(frame, chunks[index], app);
        index += 1;
    }
    render_footer(frame, chunks[index]);

    // Render help overlay if active
    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let updated = app
        .last_update
        .map(format_clock)
        .unwrap_or_else(|| "never".to_string());
    let refresh = if app.auto_refresh {
        format!("ON ({}s)", app.interval.as_secs())
    } else {
        "OFF".to_string()
    };

    let line = Line::from(vec![
        Span::styled(
            " AquaFlow Water Monitoring ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("│ {} ", app.client.base_url())),
        Span::raw(format!("│ Updated: {} ", updated)),
        Span::raw(format!("│ Auto-refresh: {} ", refresh)),
    ]);

    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_alerts_banner(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let lines: Vec<Line> = app
        .alerts
        .iter()
        .take(3)
        .map(|alert| {
            let color = match alert.severity {
                AlertSeverity::Critical => Color::Red,
                AlertSeverity::Warning => Color::LightYellow,
                AlertSeverity::Info => Color::Cyan,
            };
            Line::from(Span::styled(
                format!("⚠ {}", alert.message),
                Style::default().fg(color),
            ))
        })
        .collect();

    let block = Block::default()
        .title(format!(" Alerts ({}) ", app.alerts.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_sensors(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let sensors = app.snapshot.as_ref().map(|s| s.sensors);

    render_sensor_card(
        frame,
        chunks[0],
        "pH",
        sensors.and_then(|s| s.ph),
        format_ph,
        classify_ph,
    );
    render_sensor_card(
        frame,
        chunks[1],
        "Turbidity",
        sensors.and_then(|s| s.turbidity),
        format_turbidity,
        classify_turbidity,
    );
    render_sensor_card(
        frame,
        chunks[2],
        "Salinity",
        sensors.and_then(|s| s.salinity),
        format_salinity,
        classify_salinity,
    );

    // Flow has no threshold classification, just the reading
    let flow_line = match sensors.and_then(|s| s.flow) {
        Some(flow) => Line::from(Span::styled(
            format_flow(flow),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled("offline", Style::default().fg(Color::DarkGray))),
    };
    let block = Block::default().title(" Flow ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(vec![flow_line]).block(block), chunks[3]);
}

fn render_sensor_card<F, C>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    reading: Option<f64>,
    format: F,
    classify: C,
) where
    F: Fn(f64) -> String,
    C: Fn(f64) -> crate::core::telemetry::SensorStatus,
{
    let lines = match reading {
        Some(value) => {
            let status = classify(value);
            let color = status_color(status);
            vec![
                Line::from(Span::styled(
                    format(value),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(format!("{:?}", status), Style::default().fg(color))),
            ]
        }
        None => vec![Line::from(Span::styled(
            "offline",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_overview(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let Some(snapshot) = app.snapshot.as_ref() else {
        let block = Block::default().title(" Overview ").borders(Borders::ALL);
        frame.render_widget(
            Paragraph::new("Waiting for data...").block(block),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(area);

    render_level_and_quality(frame, chunks[0], snapshot);
    render_stats(frame, chunks[1], snapshot);
    render_quality_history(frame, chunks[2], app);
}

fn render_level_and_quality(frame: &mut Frame, area: Rect, snapshot: &SystemSnapshot) {
    let block = Block::default().title(" Reservoir ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::raw("Water level")),
        rows[0],
    );
    frame.render_widget(
        level_gauge(
            snapshot.water_level,
            format_percent(snapshot.water_level),
        ),
        rows[1],
    );

    let score = quality_score(&snapshot.sensors);
    let rating = quality_rating(score);
    frame.render_widget(Paragraph::new(Span::raw("Water quality")), rows[2]);
    frame.render_widget(
        quality_gauge(score, format!("{:.0} ({})", score, rating.label())),
        rows[3],
    );
}

fn render_stats(frame: &mut Frame, area: Rect, snapshot: &SystemSnapshot) {
    let score = quality_score(&snapshot.sensors);
    let rating = quality_rating(score);

    let lines = vec![
        stat_line("Total flow", format_flow(total_flow(snapshot)), Color::Cyan),
        stat_line(
            "System pressure",
            format_pressure(system_pressure(snapshot)),
            Color::Cyan,
        ),
        stat_line(
            "Water quality",
            rating.label().to_string(),
            rating_color(rating),
        ),
        stat_line(
            "Energy efficiency",
            format!("{}%", energy_efficiency(snapshot)),
            Color::Cyan,
        ),
        stat_line(
            "Open taps",
            format!("{}/{}", open_tap_count(snapshot), snapshot.taps.len()),
            Color::Cyan,
        ),
        stat_line(
            "Open valves",
            format!("{}/{}", open_valve_count(snapshot), snapshot.valves.len()),
            Color::Cyan,
        ),
    ];

    let block = Block::default().title(" System Stats ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<18}", label)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn render_quality_history(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let history_data = app.history.quality_as_u64();
    if history_data.is_empty() || area.width <= 4 {
        let block = Block::default().title(" Quality History ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new("No history yet").block(block), area);
        return;
    }

    // Calculate how many bars can fit
    let inner_width = area.width.saturating_sub(2) as usize; // Subtract borders
    let bar_width: u16 = 1;
    let bar_gap: u16 = 1;
    let space_per_bar = bar_width as usize + bar_gap as usize;
    let max_bars = (inner_width / space_per_bar).min(history_data.len());

    // Take the most recent data points
    let start_idx = history_data.len().saturating_sub(max_bars);
    let data_to_show: Vec<(&str, u64)> = history_data[start_idx..]
        .iter()
        .map(|&val| ("", val))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Quality History ")
                .borders(Borders::ALL),
        )
        .direction(Direction::Vertical)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .data(&data_to_show)
        .max(1000); // Quality score is 0-100 scaled by 10 (0-1000)

    frame.render_widget(chart, area);
}

fn render_units_and_leaks(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    render_unit_table(frame, chunks[0], app, Panel::Valves);
    render_unit_table(frame, chunks[1], app, Panel::Taps);
    render_leaks(frame, chunks[2], app);
}

fn render_unit_table(frame: &mut Frame, area: Rect, app: &DashboardApp, panel: Panel) {
    let Some(snapshot) = app.snapshot.as_ref() else {
        let title = match panel {
            Panel::Valves => " Valves ",
            Panel::Taps => " Taps ",
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(Paragraph::new("Waiting for data...").block(block), area);
        return;
    };

    let (units, open_label, title) = match panel {
        Panel::Valves => (&snapshot.valves, "OPEN", "Valves"),
        Panel::Taps => (&snapshot.taps, "FLOWING", "Taps"),
    };

    let selected = app.selected_panel == panel;
    let open_count = units.values().filter(|s| s.is_open()).count();

    let rows: Vec<Row> = units
        .iter()
        .enumerate()
        .map(|(i, (name, state))| {
            let (state_text, state_color) = match state {
                UnitState::Open => (open_label, Color::Cyan),
                UnitState::Closed => ("CLOSED", Color::DarkGray),
            };

            let mut row = Row::new(vec![
                Cell::from(name.clone()),
                Cell::from(Span::styled(state_text, Style::default().fg(state_color))),
            ]);
            if selected && i == app.selected_index {
                row = row.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            row
        })
        .collect();

    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let table = Table::new(
        rows,
        [Constraint::Percentage(70), Constraint::Percentage(30)],
    )
    .block(
        Block::default()
            .title(format!(" {} ({} open) ", title, open_count))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(table, area);
}

fn render_leaks(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let Some(snapshot) = app.snapshot.as_ref() else {
        let block = Block::default().title(" Leaks ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new("Waiting for data...").block(block), area);
        return;
    };

    let summary = partition_leaks(&snapshot.leaks);

    let mut lines: Vec<Line> = Vec::new();
    let (title, border_color) = if summary.has_active() {
        lines.push(Line::from(Span::styled(
            "ACTIVE LEAKS DETECTED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        for pipe in &summary.active {
            lines.push(Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::Red)),
                Span::raw(pipe.clone()),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "i: Isolate │ S: Shutdown │ m: Maintenance",
            Style::default().fg(Color::DarkGray),
        )));
        (
            format!(" Leaks ({} active) ", summary.active_count()),
            Color::Red,
        )
    } else {
        lines.push(Line::from(Span::styled(
            "SYSTEM INTEGRITY VERIFIED",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::raw(
            "No active leaks detected in the water network",
        )));
        (" Leaks ".to_string(), Color::Reset)
    };

    if let Some(scan) = app.last_scan.as_ref() {
        let pipes = scan
            .total_pipes
            .map(|n| format!(" of {} pipes", n))
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("Last scan: {} active{}", scan.total_active, pipes),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_notifications(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let lines: Vec<Line> = app
        .notifications
        .iter()
        .map(|n| {
            Line::from(Span::styled(
                n.message.clone(),
                Style::default().fg(notification_color(n.level)),
            ))
        })
        .collect();

    let block = Block::default().title(" Notifications ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = " q: Quit │ ?: Help │ r: Refresh │ a: Auto-refresh │ Tab: Panel │ t: Toggle │ i: Isolate │ l: Scan │ S: Shutdown ";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    AquaFlow Dashboard - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc     Quit the application
    ? / h       Toggle this help screen
    r           Refresh now
    a           Toggle auto-refresh (30s)
    Tab         Switch valve/tap panel
    Up / Down   Move selection
    t / Enter   Toggle selected valve or tap
    i           Isolate first active leak
    l           Run a leak scan
    m           Notify maintenance team
    S           EMERGENCY SHUTDOWN

    Press ? to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    // Center the help popup
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

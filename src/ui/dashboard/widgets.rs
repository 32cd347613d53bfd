use ratatui::{prelude::*, widgets::Gauge};

use crate::core::telemetry::{
    quality_rating, water_level_class, QualityRating, SensorStatus, WaterLevelClass,
};
use crate::ui::notifications::NotificationLevel;

/// Color for a sensor classification
pub fn status_color(status: SensorStatus) -> Color {
    match status {
        SensorStatus::Good => Color::Cyan,
        SensorStatus::Warning => Color::LightYellow,
        SensorStatus::Critical => Color::Red,
    }
}

/// Color for a water-level band
pub fn level_color(class: WaterLevelClass) -> Color {
    match class {
        WaterLevelClass::High => Color::Cyan,
        WaterLevelClass::Medium => Color::LightYellow,
        WaterLevelClass::Low => Color::Red,
    }
}

/// Color for a quality rating
pub fn rating_color(rating: QualityRating) -> Color {
    match rating {
        QualityRating::Excellent => Color::Cyan,
        QualityRating::Good => Color::LightCyan,
        QualityRating::Fair => Color::LightYellow,
        QualityRating::Poor => Color::Red,
    }
}

/// Color for a notification level
pub fn notification_color(level: NotificationLevel) -> Color {
    match level {
        NotificationLevel::Info => Color::Cyan,
        NotificationLevel::Success => Color::Green,
        NotificationLevel::Warning => Color::Yellow,
        NotificationLevel::Error => Color::Red,
    }
}

/// Water-level gauge colored by band
pub fn level_gauge(percent: f64, label: String) -> Gauge<'static> {
    let color = level_color(water_level_class(percent));

    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(label)
}

/// Quality-score gauge colored by rating
pub fn quality_gauge(score: f64, label: String) -> Gauge<'static> {
    let color = rating_color(quality_rating(score));

    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio((score / 100.0).clamp(0.0, 1.0))
        .label(label)
}

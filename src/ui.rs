// src/ui.rs
use iced::widget::container;
use iced::{Background, Color, Theme};
use once_cell::sync::Lazy;

use freefuse_hub::ValueKind;

pub struct Styles {
    pub bg: Color,
    pub fg: Color,
    pub muted_fg: Color,
    pub card_bg: Color,
    pub card_border: Color,
    pub footer_bg: Color,
    pub footer_fg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub link_fg: Color,
    pub error_fg: Color,
}

pub static DARK_THEME: Lazy<Styles> = Lazy::new(|| Styles {
    bg: Color::from_rgb(0.0, 0.0, 0.0),
    fg: Color::from_rgb(1.0, 1.0, 1.0),
    muted_fg: Color::from_rgb(0.62, 0.62, 0.62),
    card_bg: Color::from_rgb(0.12, 0.12, 0.12),
    card_border: Color::from_rgb(0.25, 0.25, 0.25),
    footer_bg: Color::from_rgb(0.0078, 0.325, 0.6118), // #02539c
    footer_fg: Color::from_rgb(1.0, 1.0, 1.0),
    header_bg: Color::from_rgb(0.2, 0.2, 0.2),
    header_fg: Color::from_rgb(1.0, 1.0, 1.0),
    link_fg: Color::from_rgb(0.42, 0.68, 1.0),
    error_fg: Color::from_rgb(0.863, 0.208, 0.271), // #dc3545
});

pub static LIGHT_THEME: Lazy<Styles> = Lazy::new(|| Styles {
    bg: Color::from_rgb(1.0, 1.0, 1.0),
    fg: Color::from_rgb(0.0, 0.0, 0.0),
    muted_fg: Color::from_rgb(0.42, 0.46, 0.49), // #6c757d
    card_bg: Color::from_rgb(0.97, 0.97, 0.98),
    card_border: Color::from_rgb(0.87, 0.89, 0.9),
    footer_bg: Color::from_rgb(0.0078, 0.325, 0.6118), // #02539c
    footer_fg: Color::from_rgb(1.0, 1.0, 1.0),
    header_bg: Color::from_rgb(0.8784, 0.8784, 0.8784), // #e0e0e0
    header_fg: Color::from_rgb(0.0, 0.0, 0.0),
    link_fg: Color::from_rgb(0.0, 0.48, 1.0), // #007bff
    error_fg: Color::from_rgb(0.863, 0.208, 0.271),
});

impl Styles {
    /// Text color for a field; indicators are colored by their style key
    pub fn value_color(&self, kind: &ValueKind) -> Color {
        match kind {
            ValueKind::Status { key } => match key.as_str() {
                "done" | "published" => Color::from_rgb(0.157, 0.655, 0.271), // #28a745
                "in-progress" => Color::from_rgb(1.0, 0.757, 0.027),          // #ffc107
                "not-started" | "draft" => self.muted_fg,
                _ => self.fg,
            },
            ValueKind::Priority { key } => match key.as_str() {
                "high" => self.error_fg,
                "medium" => Color::from_rgb(0.992, 0.494, 0.078), // #fd7e14
                "low" => Color::from_rgb(0.09, 0.635, 0.722),     // #17a2b8
                _ => self.fg,
            },
            ValueKind::Link | ValueKind::Mailto => self.link_fg,
            ValueKind::Plain => self.fg,
        }
    }
}

// Custom styles for containers
pub struct ContainerStyle {
    pub bg: Color,
    pub border: Color,
    pub radius: f32,
}

impl ContainerStyle {
    pub fn flat(bg: Color) -> Self {
        ContainerStyle {
            bg,
            border: Color::TRANSPARENT,
            radius: 0.0,
        }
    }

    pub fn card(styles: &Styles) -> Self {
        ContainerStyle {
            bg: styles.card_bg,
            border: styles.card_border,
            radius: 6.0,
        }
    }
}

impl container::StyleSheet for ContainerStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(self.bg)),
            border_radius: self.radius.into(),
            border_width: if self.border == Color::TRANSPARENT { 0.0 } else { 1.0 },
            border_color: self.border,
            text_color: None,
        }
    }
}

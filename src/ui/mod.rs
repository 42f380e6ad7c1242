/// UI module
///
/// One file per view, plus the routing table and the small styling helpers
/// the views share. Views are plain functions from state to `Element`; all
/// mutation goes through `Message`.

pub mod analysis;
pub mod dashboard;
pub mod nav;
pub mod upload;
pub mod viewer;

use iced::widget::{button, column, container, text};
use iced::{border, Alignment, Border, Color, Element, Length, Theme};

use crate::state::samples::CheckStatus;
use crate::Message;

/// Navigable routes. `NotFound` is the catch-all for paths that match
/// nothing, e.g. a bad `start_page` in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Upload,
    Analysis,
    NotFound,
}

impl Route {
    /// Routes shown in the navigation sidebar, in order.
    pub const NAV: [Route; 3] = [Route::Dashboard, Route::Upload, Route::Analysis];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Upload => "/upload",
            Route::Analysis => "/analysis",
            Route::NotFound => "*",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Upload => "Document Upload",
            Route::Analysis => "Document Analysis",
            Route::NotFound => "Not Found",
        }
    }

    pub fn from_path(path: &str) -> Route {
        match path {
            "/" => Route::Dashboard,
            "/upload" => Route::Upload,
            "/analysis" => Route::Analysis,
            _ => Route::NotFound,
        }
    }
}

pub const SUCCESS: Color = Color {
    r: 0.13,
    g: 0.65,
    b: 0.37,
    a: 1.0,
};
pub const WARNING: Color = Color {
    r: 0.92,
    g: 0.60,
    b: 0.11,
    a: 1.0,
};
pub const DANGER: Color = Color {
    r: 0.84,
    g: 0.22,
    b: 0.25,
    a: 1.0,
};
pub const ACCENT: Color = Color {
    r: 0.12,
    g: 0.44,
    b: 0.82,
    a: 1.0,
};
pub const MUTED: Color = Color {
    r: 0.45,
    g: 0.47,
    b: 0.51,
    a: 1.0,
};

pub fn status_color(status: CheckStatus) -> Color {
    match status {
        CheckStatus::Passed => SUCCESS,
        CheckStatus::Failed => DANGER,
        CheckStatus::Warning => WARNING,
    }
}

/// Filled card background used for top-level sections.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: border::rounded(10.0),
        ..container::Style::default()
    }
}

/// Thin outline used for items nested inside a card.
pub fn outlined(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Page title plus a muted one-line description.
pub fn page_header<'a, M: 'a>(
    title: impl Into<String>,
    subtitle: impl Into<String>,
) -> Element<'a, M> {
    column![
        text(title.into()).size(30),
        text(subtitle.into()).size(14).color(MUTED),
    ]
    .spacing(4)
    .into()
}

/// A titled card wrapping arbitrary content.
pub fn section_card<'a>(
    title: impl Into<String>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    container(column![text(title.into()).size(16), content].spacing(14))
        .padding(18)
        .width(Length::Fill)
        .style(card)
        .into()
}

/// Small outlined status pill.
pub fn badge<'a, M: 'a>(label: impl Into<String>, color: Color) -> Element<'a, M> {
    container(text(label.into()).size(12).color(color))
        .padding(6)
        .style(move |_theme: &Theme| container::Style {
            border: Border {
                color,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

/// Colored dot used as a status icon.
pub fn status_dot<'a, M: 'a>(color: Color) -> Element<'a, M> {
    text("●").size(14).color(color).into()
}

/// Transient notification bar pinned below the active view.
pub fn toast_bar<'a>(message: &str) -> Element<'a, Message> {
    container(text(message.to_string()).size(14))
        .padding(12)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.primary.weak.color.into()),
                text_color: Some(palette.primary.weak.text),
                ..container::Style::default()
            }
        })
        .into()
}

/// Catch-all view for unknown routes.
pub fn not_found<'a>() -> Element<'a, Message> {
    container(
        column![
            text("404").size(56),
            text("Page not found").size(18).color(MUTED),
            button("Return to Dashboard")
                .on_press(Message::Navigate(Route::Dashboard))
                .padding(10),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    // Shrinks vertically so it stays valid inside the page scrollable.
    .center_x(Length::Fill)
    .padding(80)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_round_trip() {
        for route in Route::NAV {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::from_path("/reports"), Route::NotFound);
        assert_eq!(Route::from_path(""), Route::NotFound);
        assert_eq!(Route::from_path("/upload/"), Route::NotFound);
    }

    #[test]
    fn sidebar_lists_the_three_main_views() {
        let labels: Vec<&str> = Route::NAV.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["Dashboard", "Document Upload", "Document Analysis"]);
    }
}

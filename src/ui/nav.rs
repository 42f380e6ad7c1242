/// Navigation sidebar
///
/// Static route list with active-item highlighting. The active route is
/// whatever the application shell currently renders; there is no URL.
use iced::widget::{button, column, container, text, vertical_space};
use iced::{Element, Length, Theme};

use crate::ui::{Route, MUTED};
use crate::Message;

pub fn view(active: Route) -> Element<'static, Message> {
    let mut items = column![].spacing(6);
    for route in Route::NAV {
        let style: fn(&Theme, button::Status) -> button::Style = if route == active {
            button::primary
        } else {
            button::text
        };
        items = items.push(
            button(text(route.label()).size(15))
                .style(style)
                .width(Length::Fill)
                .padding(12)
                .on_press(Message::Navigate(route)),
        );
    }

    let content = column![
        column![
            text("FAIR Validator").size(20),
            text("Lam Research").size(13).color(MUTED),
        ]
        .spacing(2),
        items,
        vertical_space(),
        column![
            text("Version 0.1.0").size(11).color(MUTED),
            text("© 2024 Lam Research").size(11).color(MUTED),
        ]
        .spacing(2),
    ]
    .spacing(24)
    .padding(20);

    container(content)
        .width(Length::Fixed(250.0))
        .height(Length::Fill)
        .style(background)
        .into()
}

fn background(theme: &Theme) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        ..iced::widget::container::Style::default()
    }
}

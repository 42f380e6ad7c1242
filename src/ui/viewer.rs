/// Document viewer modal
///
/// Overlays the current view with an inline preview of the published
/// document. The preview itself is loaded asynchronously by the shell and
/// dropped again when the modal closes; clicking the backdrop dismisses it.
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, scrollable,
    stack, text,
};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::files::{hex_dump, DocumentPreview};
use crate::ui::{self, MUTED};
use crate::Message;

pub fn modal<'a>(
    base: Element<'a, Message>,
    document_name: String,
    has_document: bool,
    preview: Option<&'a DocumentPreview>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match preview {
        Some(preview) => preview_panel(preview),
        None if has_document => placeholder("Loading preview...", ""),
        None => placeholder(
            "No document available to view",
            "Please upload a document first",
        ),
    };

    let card = container(
        column![
            row![
                text(document_name).size(17),
                horizontal_space(),
                button(text("Close").size(13))
                    .style(button::text)
                    .on_press(Message::CloseViewer),
            ]
            .align_y(Alignment::Center),
            body,
        ]
        .spacing(16),
    )
    .padding(20)
    .width(Length::Fixed(760.0))
    .style(ui::card);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(card)).style(backdrop)).on_press(Message::CloseViewer)
        ),
    ]
    .into()
}

fn preview_panel(preview: &DocumentPreview) -> Element<'_, Message> {
    let modified = preview
        .modified
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let mut dump = column![];
    for line in hex_dump(&preview.head) {
        dump = dump.push(text(line).font(iced::Font::MONOSPACE).size(12));
    }

    column![
        row![
            text(format!("{} • modified {}", preview.size_label, modified))
                .size(12)
                .color(MUTED),
            horizontal_space(),
            button(text("Download").size(13))
                .padding(8)
                .on_press(Message::DownloadDocument),
        ]
        .align_y(Alignment::Center),
        container(scrollable(dump.padding(12)))
            .height(Length::Fixed(380.0))
            .width(Length::Fill)
            .style(ui::outlined),
    ]
    .spacing(12)
    .into()
}

fn placeholder<'a>(title: &'a str, hint: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(title).size(15),
            text(hint).size(12).color(MUTED),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(380.0))
    .into()
}

fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.7,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}

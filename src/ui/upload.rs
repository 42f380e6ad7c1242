/// Upload view
///
/// Drop zone, the live processing queue, and the validation-sources card.
/// Files also arrive through window file-drop events handled by the shell.
use iced::widget::{button, column, container, horizontal_space, progress_bar, row, text};
use iced::{Alignment, Color, Element, Length};

use crate::state::samples;
use crate::state::upload::{UploadQueue, UploadRecord, UploadStatus};
use crate::ui::{card, outlined, page_header, status_dot, ACCENT, DANGER, MUTED, SUCCESS, WARNING};
use crate::Message;

pub fn view(queue: &UploadQueue) -> Element<'_, Message> {
    let dropzone = container(
        column![
            text("Drop your FAIR documents here").size(18),
            text("or click to select files from your computer")
                .size(13)
                .color(MUTED),
            button("Select Files")
                .on_press(Message::BrowseFiles)
                .padding(10),
            // Advisory only; nothing rejects other formats or sizes.
            text("Supported formats: PDF • Max file size: 50MB")
                .size(11)
                .color(MUTED),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .padding(36)
    .center_x(Length::Fill)
    .style(card);

    let mut body = column![
        page_header(
            "Document Upload",
            "Upload FAIR documents for automated validation against trusted sources",
        ),
        crate::ui::section_card("Upload FAIR Documents", dropzone.into()),
    ]
    .spacing(20)
    .padding(24);

    if !queue.is_empty() {
        let mut records = column![].spacing(12);
        for record in queue.records() {
            records = records.push(record_row(record));
        }
        body = body.push(crate::ui::section_card("Processing Queue", records.into()));
    }

    let mut sources = row![].spacing(12);
    for source in samples::INTEGRATION_SOURCES {
        sources = sources.push(
            container(
                column![
                    row![status_dot(SUCCESS), text(source.name).size(14)]
                        .spacing(8)
                        .align_y(Alignment::Center),
                    text(source.description).size(11).color(MUTED),
                ]
                .spacing(6),
            )
            .padding(14)
            .width(Length::Fill)
            .style(outlined),
        );
    }
    body = body.push(crate::ui::section_card("Validation Sources", sources.into()));

    body.into()
}

fn record_row(record: &UploadRecord) -> Element<'_, Message> {
    let mut details = column![
        text(record.name.as_str()).size(14),
        text(record.size_label.as_str()).size(12).color(MUTED),
    ]
    .spacing(2);
    if let Some(commodity) = record.commodity {
        details = details.push(
            text(format!("Commodity: {commodity}"))
                .size(11)
                .color(ACCENT),
        );
    }

    let status = column![
        text(record.status.label())
            .size(13)
            .color(status_color(record.status)),
        text(format!("{:.0}%", record.progress)).size(11).color(MUTED),
    ]
    .spacing(2)
    .align_x(Alignment::End);

    container(
        column![
            row![details, horizontal_space(), status],
            progress_bar(0.0..=100.0, record.progress).height(Length::Fixed(8.0)),
        ]
        .spacing(10),
    )
    .padding(14)
    .width(Length::Fill)
    .style(outlined)
    .into()
}

fn status_color(status: UploadStatus) -> Color {
    match status {
        UploadStatus::Uploading => WARNING,
        UploadStatus::Validating => ACCENT,
        UploadStatus::Completed => SUCCESS,
        UploadStatus::Failed => DANGER,
    }
}

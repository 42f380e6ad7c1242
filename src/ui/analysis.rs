/// Analysis view
///
/// Document overview, summary counts, and the three-tab detail section.
/// Renders the fixed sample result tables; only the document name and upload
/// time come from the published document.
use iced::widget::{button, column, container, horizontal_space, progress_bar, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::state::document::DocumentInfo;
use crate::state::samples::{self, ImageAnalysisResult, ValidationResult};
use crate::ui::{
    badge, card, outlined, page_header, status_color, status_dot, DANGER, MUTED, SUCCESS, WARNING,
};
use crate::Message;

/// Mutually exclusive detail panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisTab {
    #[default]
    Specifications,
    Images,
    Electrical,
}

impl AnalysisTab {
    pub const ALL: [AnalysisTab; 3] = [
        AnalysisTab::Specifications,
        AnalysisTab::Images,
        AnalysisTab::Electrical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisTab::Specifications => "Specifications",
            AnalysisTab::Images => "Image Analysis",
            AnalysisTab::Electrical => "Electrical Tests",
        }
    }
}

pub fn view(tab: AnalysisTab, document: Option<&DocumentInfo>) -> Element<'static, Message> {
    let overview = samples::document_overview(document);

    let header = row![
        page_header(
            "Document Analysis",
            format!("Detailed validation results for {}", overview.name),
        ),
        horizontal_space(),
        button("View Document")
            .on_press(Message::OpenViewer)
            .padding(10),
        button("Export Report")
            .on_press(Message::ExportReport)
            .padding(10),
    ]
    .spacing(12)
    .align_y(Alignment::Start);

    let overview_card = crate::ui::section_card(
        "Document Overview",
        row![
            overview_field("Document ID", text(overview.id).size(15).into()),
            overview_field("Commodity", text(overview.commodity).size(15).into()),
            overview_field(
                "Overall Status",
                badge(
                    overview.overall_status.label(),
                    status_color(overview.overall_status),
                ),
            ),
            overview_field(
                "Confidence Score",
                row![
                    progress_bar(0.0..=100.0, f32::from(overview.confidence))
                        .height(Length::Fixed(8.0)),
                    text(format!("{}%", overview.confidence)).size(14),
                ]
                .spacing(8)
                .align_y(Alignment::Center)
                .into(),
            ),
        ]
        .spacing(20)
        .into(),
    );

    let summary = samples::summarize(samples::VALIDATION_RESULTS);
    let summary_row = row![
        summary_card(summary.passed, "Tests Passed", SUCCESS),
        summary_card(summary.warnings, "Warnings", WARNING),
        summary_card(summary.failed, "Failed Tests", DANGER),
    ]
    .spacing(20);

    let mut tabs = row![].spacing(8);
    for candidate in AnalysisTab::ALL {
        let style: fn(&Theme, button::Status) -> button::Style = if candidate == tab {
            button::primary
        } else {
            button::secondary
        };
        tabs = tabs.push(
            button(text(candidate.label()).size(13))
                .style(style)
                .padding(10)
                .on_press(Message::TabSelected(candidate)),
        );
    }

    let content: Element<'static, Message> = match tab {
        AnalysisTab::Specifications => {
            results_list(samples::VALIDATION_RESULTS.iter().collect())
        }
        AnalysisTab::Images => image_list(),
        AnalysisTab::Electrical => {
            results_list(samples::electrical_results(samples::VALIDATION_RESULTS))
        }
    };

    column![
        header,
        overview_card,
        summary_row,
        crate::ui::section_card("Detailed Analysis", column![tabs, content].spacing(16).into()),
    ]
    .spacing(20)
    .padding(24)
    .into()
}

fn overview_field(label: &'static str, value: Element<'static, Message>) -> Element<'static, Message> {
    column![text(label).size(12).color(MUTED), value]
        .spacing(4)
        .width(Length::Fill)
        .into()
}

fn summary_card(count: usize, label: &'static str, color: iced::Color) -> Element<'static, Message> {
    container(
        row![
            column![
                text(count.to_string()).size(28),
                text(label).size(12).color(MUTED),
            ]
            .spacing(2),
            horizontal_space(),
            text("●").size(26).color(color),
        ]
        .align_y(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(card)
    .into()
}

fn results_list(results: Vec<&'static ValidationResult>) -> Element<'static, Message> {
    let mut list = column![].spacing(12);
    for result in results {
        list = list.push(result_card(result));
    }
    list.into()
}

fn result_card(result: &'static ValidationResult) -> Element<'static, Message> {
    container(
        column![
            row![
                row![
                    status_dot(status_color(result.status)),
                    text(result.field).size(15),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
                horizontal_space(),
                badge(result.source, MUTED),
            ]
            .align_y(Alignment::Center),
            row![
                column![
                    text("Expected Value").size(12).color(MUTED),
                    text(result.expected).size(14),
                ]
                .spacing(2)
                .width(Length::Fill),
                column![
                    text("Actual Value").size(12).color(MUTED),
                    text(result.actual).size(14).color(status_color(result.status)),
                ]
                .spacing(2)
                .width(Length::Fill),
            ]
            .spacing(16),
        ]
        .spacing(12),
    )
    .padding(14)
    .width(Length::Fill)
    .style(outlined)
    .into()
}

fn image_list() -> Element<'static, Message> {
    let mut list = column![].spacing(12);
    for entry in samples::IMAGE_ANALYSIS {
        list = list.push(image_card(entry));
    }
    list.into()
}

fn image_card(entry: &'static ImageAnalysisResult) -> Element<'static, Message> {
    container(
        column![
            row![
                row![
                    status_dot(status_color(entry.status)),
                    text(entry.kind).size(15),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
                horizontal_space(),
                row![
                    text("Confidence:").size(12).color(MUTED),
                    text(format!("{}%", entry.confidence)).size(14),
                ]
                .spacing(6)
                .align_y(Alignment::Center),
            ]
            .align_y(Alignment::Center),
            text(entry.description).size(13).color(MUTED),
        ]
        .spacing(10),
    )
    .padding(14)
    .width(Length::Fill)
    .style(outlined)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specifications_is_the_default_tab() {
        assert_eq!(AnalysisTab::default(), AnalysisTab::Specifications);
    }

    #[test]
    fn tabs_are_mutually_exclusive_panels() {
        assert_eq!(AnalysisTab::ALL.len(), 3);
        let labels: Vec<&str> = AnalysisTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Specifications", "Image Analysis", "Electrical Tests"]);
    }
}

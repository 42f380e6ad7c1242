/// Dashboard view
///
/// KPI cards, the failure-reason breakdown, and the recent-documents list.
/// Everything here renders fixed sample data; see `state::samples`.
use iced::widget::{column, container, horizontal_space, progress_bar, row, text};
use iced::{Alignment, Element, Length};

use crate::state::samples::{self, Kpi, RecentDocument, RecentStatus};
use crate::ui::{badge, card, outlined, page_header, status_dot, DANGER, MUTED, SUCCESS, WARNING};
use crate::Message;

pub fn view() -> Element<'static, Message> {
    let mut kpis = row![].spacing(20);
    for kpi in samples::KPIS {
        kpis = kpis.push(kpi_card(kpi));
    }

    let mut systems = row![].spacing(12);
    for source in samples::INTEGRATION_SOURCES {
        systems = systems.push(
            container(
                row![status_dot(SUCCESS), text(source.name).size(13)]
                    .spacing(8)
                    .align_y(Alignment::Center),
            )
            .padding(12)
            .width(Length::Fill)
            .style(outlined),
        );
    }

    column![
        page_header(
            "Dashboard",
            "Real-time FAIR document validation metrics and insights",
        ),
        kpis,
        row![failure_reasons(), recent_documents()].spacing(20),
        crate::ui::section_card("System Integration Status", systems.into()),
    ]
    .spacing(20)
    .padding(24)
    .into()
}

fn kpi_card(kpi: &'static Kpi) -> Element<'static, Message> {
    let trend_color = if kpi.trend_is_positive { SUCCESS } else { DANGER };
    container(
        column![
            text(kpi.title).size(13).color(MUTED),
            text(kpi.value).size(30),
            text(kpi.subtitle).size(12).color(MUTED),
            text(format!("{:+}% vs last week", kpi.trend))
                .size(12)
                .color(trend_color),
        ]
        .spacing(6),
    )
    .padding(16)
    .width(Length::Fill)
    .style(card)
    .into()
}

fn failure_reasons() -> Element<'static, Message> {
    let mut reasons = column![].spacing(14);
    for item in samples::FAILURE_REASONS {
        reasons = reasons.push(
            column![
                row![
                    text(item.reason).size(14),
                    horizontal_space(),
                    text(format!("{} documents", item.count)).size(12).color(MUTED),
                ],
                progress_bar(0.0..=100.0, f32::from(item.percentage))
                    .height(Length::Fixed(8.0)),
            ]
            .spacing(6),
        );
    }
    crate::ui::section_card("Common Failure Reasons", reasons.into())
}

fn recent_documents() -> Element<'static, Message> {
    let mut list = column![].spacing(10);
    for doc in samples::RECENT_DOCUMENTS {
        list = list.push(recent_row(doc));
    }
    crate::ui::section_card("Recent Document Processing", list.into())
}

fn recent_row(doc: &'static RecentDocument) -> Element<'static, Message> {
    container(
        row![
            column![
                text(doc.id).size(13),
                text(doc.commodity).size(11).color(MUTED),
            ]
            .spacing(2),
            horizontal_space(),
            badge(doc.status.label(), recent_status_color(doc.status)),
            text(doc.time).size(11).color(MUTED),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(10)
    .width(Length::Fill)
    .style(outlined)
    .into()
}

fn recent_status_color(status: RecentStatus) -> iced::Color {
    match status {
        RecentStatus::Passed => SUCCESS,
        RecentStatus::Failed => DANGER,
        RecentStatus::Reviewing => WARNING,
    }
}

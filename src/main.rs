use iced::time::{self, Instant};
use iced::widget::{column, container, row, scrollable};
use iced::{Element, Length, Subscription, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

mod config;
mod error;
mod files;
mod logging;
mod report;
mod state;
mod ui;

use config::Settings;
use files::DocumentPreview;
use state::document::{display_name, DocumentStore};
use state::samples;
use state::upload::UploadQueue;
use ui::analysis::AnalysisTab;
use ui::Route;

/// How long the transient notification bar stays up.
const TOAST_DURATION: Duration = Duration::from_secs(4);
/// Polling cadence for expiring the toast; only active while one is shown.
const TOAST_POLL: Duration = Duration::from_millis(250);

/// Transient notification shown below the active view.
#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// Main application state
struct FairValidator {
    settings: Settings,
    route: Route,
    uploads: UploadQueue,
    rng: StdRng,
    document: DocumentStore,
    analysis_tab: AnalysisTab,
    viewer_open: bool,
    /// Present only while the viewer modal is open and the load finished.
    preview: Option<DocumentPreview>,
    toast: Option<Toast>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked a sidebar entry
    Navigate(Route),
    /// User clicked "Select Files" in the upload view
    BrowseFiles,
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// Periodic tick advancing every active upload record
    SimulationTick(Instant),
    /// Periodic tick checking whether the toast expired
    ToastTick(Instant),
    /// User selected an analysis tab
    TabSelected(AnalysisTab),
    OpenViewer,
    CloseViewer,
    /// Background preview load finished
    PreviewLoaded(Result<DocumentPreview, String>),
    /// User clicked "Download" in the viewer
    DownloadDocument,
    /// Background save-copy finished
    DownloadFinished(Result<PathBuf, String>),
    /// User clicked "Export Report" in the analysis view
    ExportReport,
    /// Background workbook write finished
    ExportFinished(Result<PathBuf, String>),
}

impl FairValidator {
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let route = settings
            .start_page
            .as_deref()
            .map(Route::from_path)
            .unwrap_or(Route::Dashboard);
        let uploads = UploadQueue::new(settings.simulation());

        info!(route = route.path(), "FAIR validator started");

        (
            FairValidator {
                settings,
                route,
                uploads,
                rng: StdRng::from_entropy(),
                document: DocumentStore::new(),
                analysis_tab: AnalysisTab::default(),
                viewer_open: false,
                preview: None,
                toast: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                self.route = route;
                Task::none()
            }
            Message::BrowseFiles => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select FAIR Documents")
                    .add_filter("PDF documents", &["pdf"])
                    .pick_files();

                if let Some(paths) = picked {
                    self.accept_files(paths);
                }
                Task::none()
            }
            Message::FileDropped(path) => {
                self.accept_files(vec![path]);
                Task::none()
            }
            Message::SimulationTick(_) => {
                for id in self.uploads.tick(&mut self.rng) {
                    if let Some(record) = self.uploads.record(id) {
                        info!(
                            name = %record.name,
                            outcome = record.status.label(),
                            "upload finished"
                        );
                    }
                }
                Task::none()
            }
            Message::ToastTick(now) => {
                if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
                    self.toast = None;
                }
                Task::none()
            }
            Message::TabSelected(tab) => {
                self.analysis_tab = tab;
                Task::none()
            }
            Message::OpenViewer => {
                self.viewer_open = true;
                self.preview = None;
                if let Some(doc) = self.document.current() {
                    return Task::perform(
                        files::load_preview(doc.path.clone(), doc.name.clone()),
                        Message::PreviewLoaded,
                    );
                }
                Task::none()
            }
            Message::CloseViewer => {
                self.viewer_open = false;
                // Drop the transient preview; it is reloaded on next open.
                self.preview = None;
                Task::none()
            }
            Message::PreviewLoaded(result) => {
                match result {
                    Ok(preview) if self.viewer_open => self.preview = Some(preview),
                    // The modal was closed before the load finished.
                    Ok(_) => {}
                    Err(err) => {
                        warn!(%err, "preview load failed");
                        self.show_toast(format!("Could not open document: {err}"));
                    }
                }
                Task::none()
            }
            Message::DownloadDocument => {
                if let (Some(doc), Some(_)) = (self.document.current(), self.preview.as_ref()) {
                    let picked = FileDialog::new()
                        .set_title("Save Document")
                        .set_file_name(doc.name.clone())
                        .save_file();
                    if let Some(dest) = picked {
                        return Task::perform(
                            files::save_copy(doc.path.clone(), dest),
                            Message::DownloadFinished,
                        );
                    }
                }
                Task::none()
            }
            Message::DownloadFinished(result) => {
                match result {
                    Ok(path) => {
                        info!(path = %path.display(), "document saved");
                        self.show_toast(format!("Saved to {}", path.display()));
                    }
                    Err(err) => {
                        warn!(%err, "document save failed");
                        self.show_toast(format!("Download failed: {err}"));
                    }
                }
                Task::none()
            }
            Message::ExportReport => {
                let overview = samples::document_overview(self.document.current());
                let rows = report::report_rows(
                    &overview,
                    samples::VALIDATION_RESULTS,
                    samples::IMAGE_ANALYSIS,
                );
                let suggested = report::export_file_name(&overview.name, Utc::now().date_naive());

                let picked = FileDialog::new()
                    .set_title("Export Analysis Report")
                    .set_file_name(suggested)
                    .save_file();
                if let Some(path) = picked {
                    return Task::perform(
                        report::write_report(path, rows),
                        Message::ExportFinished,
                    );
                }
                Task::none()
            }
            Message::ExportFinished(result) => {
                match result {
                    Ok(path) => {
                        info!(path = %path.display(), "report exported");
                        self.show_toast(format!("Report exported to {}", path.display()));
                    }
                    Err(err) => {
                        warn!(%err, "report export failed");
                        self.show_toast(format!("Export failed: {err}"));
                    }
                }
                Task::none()
            }
        }
    }

    /// Queue every file of an accepted batch and publish the first one as the
    /// current document.
    fn accept_files(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }

        for path in &paths {
            let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            self.uploads
                .accept(display_name(path), files::size_label(size));
        }
        self.document.publish_first(&paths, Utc::now());

        info!(count = paths.len(), "accepted upload batch");
        self.show_toast(format!("{} file(s) uploaded for validation", paths.len()));
    }

    fn show_toast(&mut self, message: String) {
        self.toast = Some(Toast {
            message,
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page: Element<Message> = match self.route {
            Route::Dashboard => ui::dashboard::view(),
            Route::Upload => ui::upload::view(&self.uploads),
            Route::Analysis => ui::analysis::view(self.analysis_tab, self.document.current()),
            Route::NotFound => ui::not_found(),
        };

        let mut main_area = column![scrollable(page).height(Length::Fill)];
        if let Some(toast) = &self.toast {
            main_area = main_area.push(ui::toast_bar(&toast.message));
        }

        let base: Element<Message> = row![
            ui::nav::view(self.route),
            container(main_area).width(Length::Fill).height(Length::Fill),
        ]
        .into();

        if self.viewer_open {
            let overview = samples::document_overview(self.document.current());
            ui::viewer::modal(
                base,
                overview.name,
                self.document.current().is_some(),
                self.preview.as_ref(),
            )
        } else {
            base
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![iced::event::listen_with(handle_window_event)];

        // Timers run only while something needs them; a queue full of
        // terminal records keeps no timer alive.
        if self.uploads.has_active() {
            subscriptions.push(time::every(self.settings.tick()).map(Message::SimulationTick));
        }
        if self.toast.is_some() {
            subscriptions.push(time::every(TOAST_POLL).map(Message::ToastTick));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn handle_window_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    }
}

fn main() -> iced::Result {
    logging::init();

    iced::application("FAIR Validator", FairValidator::update, FairValidator::view)
        .subscription(FairValidator::subscription)
        .theme(FairValidator::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(FairValidator::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> FairValidator {
        FairValidator {
            settings: Settings::default(),
            route: Route::Dashboard,
            uploads: UploadQueue::new(Settings::default().simulation()),
            rng: StdRng::seed_from_u64(42),
            document: DocumentStore::new(),
            analysis_tab: AnalysisTab::default(),
            viewer_open: false,
            preview: None,
            toast: None,
        }
    }

    #[test]
    fn batch_publishes_its_first_file() {
        let mut app = app();
        app.accept_files(vec![
            PathBuf::from("/tmp/alpha.pdf"),
            PathBuf::from("/tmp/beta.pdf"),
        ]);

        assert_eq!(app.document.current().unwrap().name, "alpha.pdf");
        assert_eq!(app.uploads.records().len(), 2);
        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "2 file(s) uploaded for validation"
        );
    }

    #[test]
    fn empty_batch_is_ignored() {
        let mut app = app();
        app.accept_files(Vec::new());

        assert!(app.document.current().is_none());
        assert!(app.uploads.is_empty());
        assert!(app.toast.is_none());
    }

    #[test]
    fn a_second_batch_replaces_the_document() {
        let mut app = app();
        app.accept_files(vec![PathBuf::from("/tmp/alpha.pdf")]);
        app.accept_files(vec![PathBuf::from("/tmp/gamma.pdf")]);

        assert_eq!(app.document.current().unwrap().name, "gamma.pdf");
        // Earlier records stay in the queue.
        assert_eq!(app.uploads.records().len(), 2);
    }

    #[test]
    fn closing_the_viewer_drops_the_preview() {
        let mut app = app();
        app.viewer_open = true;
        app.preview = Some(DocumentPreview {
            name: "alpha.pdf".to_string(),
            size_label: "1.0 MB".to_string(),
            total_size: 1,
            modified: None,
            head: vec![0x25],
        });

        let _ = app.update(Message::CloseViewer);
        assert!(!app.viewer_open);
        assert!(app.preview.is_none());
    }

    #[test]
    fn late_preview_for_a_closed_viewer_is_discarded() {
        let mut app = app();
        app.viewer_open = false;

        let _ = app.update(Message::PreviewLoaded(Ok(DocumentPreview {
            name: "alpha.pdf".to_string(),
            size_label: "1.0 MB".to_string(),
            total_size: 1,
            modified: None,
            head: vec![0x25],
        })));
        assert!(app.preview.is_none());
    }
}

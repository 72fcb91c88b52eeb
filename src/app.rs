//! Main application state and UI coordination

use std::path::Path;

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::error::SessionError;
use crate::core::file_ref::{FileReference, LocalFile};
use crate::core::markdown::{DEFAULT_FILE_NAME, FILTER_LABEL, MARKDOWN_EXTENSIONS};
use crate::core::session::DocumentSession;
use crate::ui::{
    editor::EditorPanel,
    notification::{Notice, NoticeResponse},
    preview::PreviewPanel,
};

/// Base window title; the session appends the file name
pub const WINDOW_TITLE: &str = "Markdown";

/// A file menu action, raised by the menu bar or a keyboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    New,
    Open,
    Save,
    SaveAs,
}

/// Main application state
pub struct MarkdownApp {
    /// The one open document
    pub session: DocumentSession,
    /// Application configuration
    pub config: AppConfig,
    /// Commonmark cache for preview
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
    /// Notice waiting for the user to dismiss it
    notice: Option<Notice>,
    /// Title last sent to the viewport
    applied_title: String,
}

impl MarkdownApp {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: DocumentSession::new(),
            config,
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
            notice: None,
            applied_title: WINDOW_TITLE.to_string(),
        }
    }

    /// Window title for the current session state
    pub fn window_title(&self) -> String {
        format!("{WINDOW_TITLE}{}", self.session.display_suffix())
    }

    /// Run a file action to completion
    pub fn handle(&mut self, action: FileAction) {
        match action {
            FileAction::New => self.new_document(),
            FileAction::Open => self.open_document(),
            FileAction::Save => self.save_document(),
            FileAction::SaveAs => self.save_document_as(),
        }
    }

    fn new_document(&mut self) {
        self.session.new_buffer();
        tracing::info!("Started a new document");
    }

    fn open_document(&mut self) {
        let Some(path) = self.file_dialog().pick_file() else {
            return;
        };

        match self.session.load(LocalFile::new(&path)) {
            Ok(text) => {
                tracing::info!("Opened {} ({} bytes)", path.display(), text.len());
                self.remember_directory(&path);
            }
            Err(e) => self.report("Open", e),
        }
    }

    fn save_document(&mut self) {
        match self.session.save() {
            Ok(()) => {
                if let Some(file) = self.session.backing_file() {
                    tracing::info!("Saved document: {}", file.path().display());
                }
            }
            Err(e) => self.report("Save", e),
        }
    }

    fn save_document_as(&mut self) {
        let Some(path) = self
            .file_dialog()
            .set_file_name(DEFAULT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        match self.session.save_as(LocalFile::new(&path)) {
            Ok(()) => {
                tracing::info!("Saved document as: {}", path.display());
                self.remember_directory(&path);
            }
            Err(e) => self.report("Save as", e),
        }
    }

    /// Open and save dialogs restricted to markdown files
    fn file_dialog(&self) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new().add_filter(FILTER_LABEL, MARKDOWN_EXTENSIONS);
        match &self.config.last_directory {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn remember_directory(&mut self, path: &Path) {
        self.config.remember_directory(path);
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {e:#}");
        }
    }

    fn report(&mut self, action: &str, error: SessionError) {
        match &error {
            SessionError::NoBackingFile => {
                tracing::error!("{action} invoked without a backing file");
                return;
            }
            SessionError::InvalidExtension { .. } => tracing::info!("{action}: {error}"),
            SessionError::Io { .. } => tracing::error!("{action} failed: {error}"),
        }
        self.notice = Some(Notice::from_error(action, &error));
    }

    /// Drop menu and shortcut actions while a notice is waiting
    fn accept(&self, action: Option<FileAction>) -> Option<FileAction> {
        if self.notice.is_some() {
            None
        } else {
            action
        }
    }

    /// Persist the current window size for the next launch
    fn remember_window_size(&mut self, ctx: &egui::Context) {
        let Some(rect) = ctx.input(|i| i.viewport().inner_rect) else {
            return;
        };
        if self.config.remember_window_size(rect.width(), rect.height()) {
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save config: {e:#}");
            }
        }
    }

    /// Push the title to the viewport when it changed
    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.window_title();
        if title != self.applied_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.applied_title = title;
        }
    }

    fn shortcut(&self, ctx: &egui::Context) -> Option<FileAction> {
        let save_enabled = self.session.save_enabled();
        ctx.input(|i| {
            if !i.modifiers.ctrl {
                return None;
            }
            if i.key_pressed(egui::Key::N) {
                Some(FileAction::New)
            } else if i.key_pressed(egui::Key::O) {
                Some(FileAction::Open)
            } else if i.key_pressed(egui::Key::S) && i.modifiers.shift {
                Some(FileAction::SaveAs)
            } else if i.key_pressed(egui::Key::S) && save_enabled {
                Some(FileAction::Save)
            } else {
                None
            }
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) -> Option<FileAction> {
        let mut action = None;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        action = Some(FileAction::New);
                        ui.close();
                    }
                    if ui.button("Open...").clicked() {
                        action = Some(FileAction::Open);
                        ui.close();
                    }
                    if ui
                        .add_enabled(self.session.save_enabled(), egui::Button::new("Save"))
                        .clicked()
                    {
                        action = Some(FileAction::Save);
                        ui.close();
                    }
                    if ui.button("Save as...").clicked() {
                        action = Some(FileAction::SaveAs);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.checkbox(&mut self.config.show_preview, "Preview").changed() {
                        if let Err(e) = self.config.save() {
                            tracing::warn!("Failed to save config: {e:#}");
                        }
                        ui.close();
                    }
                });
            });
        });

        action
    }
}

impl eframe::App for MarkdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = self.shortcut(ctx);
        if let Some(from_menu) = self.render_menu_bar(ctx) {
            action = Some(from_menu);
        }
        action = self.accept(action);

        match self.notice.as_ref().and_then(|notice| notice.show(ctx)) {
            Some(NoticeResponse::Dismissed) => self.notice = None,
            Some(NoticeResponse::RetrySaveAs) => {
                self.notice = None;
                action = Some(FileAction::SaveAs);
            }
            None => {}
        }

        if let Some(action) = action {
            self.handle(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.config.show_preview {
                let available_width = ui.available_width();
                ui.horizontal(|ui| {
                    ui.set_min_width(available_width);

                    ui.vertical(|ui| {
                        ui.set_width(available_width / 2.0 - 4.0);
                        EditorPanel::show(ui, &mut self.session);
                    });

                    ui.separator();

                    ui.vertical(|ui| {
                        ui.set_width(available_width / 2.0 - 4.0);
                        PreviewPanel::show(ui, &mut self.commonmark_cache, self.session.text());
                    });
                });
            } else {
                EditorPanel::show(ui, &mut self.session);
            }
        });

        self.sync_title(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.remember_window_size(ctx);
        }
    }
}

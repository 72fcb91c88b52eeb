//! Markdown preview panel using egui_commonmark

use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

/// Markdown preview panel
pub struct PreviewPanel;

impl PreviewPanel {
    /// Render `content` as rich text
    pub fn show(ui: &mut egui::Ui, cache: &mut CommonMarkCache, content: &str) {
        egui::ScrollArea::vertical()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                if content.is_empty() {
                    ui.weak("Nothing to preview yet");
                } else {
                    CommonMarkViewer::new().show(ui, cache, content);
                }
            });
    }
}

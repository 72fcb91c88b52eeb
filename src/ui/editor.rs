//! Markdown editor panel

use crate::core::session::DocumentSession;

/// Markdown editor panel
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor and push edits back into the session
    pub fn show(ui: &mut egui::Ui, session: &mut DocumentSession) {
        let mut text = session.text().to_owned();

        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .show(ui, |ui| {
                let response = egui::TextEdit::multiline(&mut text)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("Type markdown here")
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .show(ui);

                if response.response.changed() {
                    session.set_text(text);
                }
            });
    }
}

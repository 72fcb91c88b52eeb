//! Modal notices for failed or rejected file actions

use egui::{Context, Id, Modal};

use crate::core::error::SessionError;

/// How a notice is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// What the user chose in a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeResponse {
    Dismissed,
    RetrySaveAs,
}

/// A pending message for the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    /// Offer to reopen the save dialog
    pub offer_retry: bool,
}

impl Notice {
    /// Build the notice for a failed `action` ("Open", "Save", ...)
    pub fn from_error(action: &str, error: &SessionError) -> Self {
        if error.is_informational() {
            Self {
                kind: NoticeKind::Info,
                title: "Choose a markdown file name".to_string(),
                message: error.to_string(),
                offer_retry: true,
            }
        } else {
            Self {
                kind: NoticeKind::Error,
                title: format!("{action} failed"),
                message: error.to_string(),
                offer_retry: false,
            }
        }
    }

    /// Draw the notice in a modal that blocks the rest of the window
    pub fn show(&self, ctx: &Context) -> Option<NoticeResponse> {
        let modal = Modal::new(Id::new("file_notice")).show(ctx, |ui| {
            let mut response = None;

            ui.heading(&self.title);
            ui.add_space(4.0);
            match self.kind {
                NoticeKind::Info => {
                    ui.label(&self.message);
                }
                NoticeKind::Error => {
                    ui.colored_label(ui.visuals().error_fg_color, &self.message);
                }
            }
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if self.offer_retry && ui.button("Choose another name").clicked() {
                    response = Some(NoticeResponse::RetrySaveAs);
                }
                if ui.button("OK").clicked() {
                    response = Some(NoticeResponse::Dismissed);
                }
            });

            response
        });

        if modal.should_close() && modal.inner.is_none() {
            return Some(NoticeResponse::Dismissed);
        }
        modal.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_extension_is_informational_with_retry() {
        let error = SessionError::InvalidExtension {
            path: PathBuf::from("notes.txt"),
        };
        let notice = Notice::from_error("Save as", &error);
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.offer_retry);
        assert!(notice.message.contains("notes.txt"));
    }

    #[test]
    fn test_io_error_is_error_styled() {
        let error = SessionError::Io {
            path: PathBuf::from("locked.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let notice = Notice::from_error("Open", &error);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Open failed");
        assert!(!notice.offer_retry);
        assert!(notice.message.contains("locked.md"));
    }
}

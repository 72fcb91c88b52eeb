//! Hello world: a label, an entry and a button that copies one into the other

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Label text plus the entry being typed
struct Greeter {
    output: String,
    entry: String,
}

impl Default for Greeter {
    fn default() -> Self {
        Self {
            output: "Hello, egui!".to_string(),
            entry: String::new(),
        }
    }
}

impl Greeter {
    /// Show the entry's text in the label
    fn submit(&mut self) {
        self.output = self.entry.clone();
        tracing::debug!("Label set to {:?}", self.output);
    }
}

impl eframe::App for Greeter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(&self.output);
                ui.text_edit_singleline(&mut self.entry);

                let enter = egui::Button::new("Enter").fill(ui.visuals().selection.bg_fill);
                if ui.add(enter).clicked() {
                    self.submit();
                }
            });
        });
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 500.0])
            .with_title("Hello, World!"),
        ..Default::default()
    };

    eframe::run_native(
        "hello",
        native_options,
        Box::new(|_cc| Ok(Box::<Greeter>::default())),
    )
}

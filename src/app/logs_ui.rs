// Logs viewport (separate OS window), toggled with F12.

use eframe::egui::{self, Color32, RichText};
use log::{Level, LevelFilter};

use crate::logger::{self, LogEntry};
use crate::ui_constants::palette;

const LEVEL_CHOICES: [LevelFilter; 5] = [
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

pub struct LogsWindow {
    open: bool,
    follow: bool,
    min_level: LevelFilter,
}

impl Default for LogsWindow {
    fn default() -> Self {
        Self {
            open: false,
            follow: true,
            min_level: LevelFilter::Trace,
        }
    }
}

impl LogsWindow {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }
        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("valentine_logs"),
            egui::ViewportBuilder::default()
                .with_title("Valentine logs")
                .with_inner_size([640.0, 360.0]),
            |ctx, _class| {
                if ctx.input(|i| i.viewport().close_requested()) {
                    self.open = false;
                    return;
                }
                egui::CentralPanel::default()
                    .frame(egui::Frame::central_panel(&ctx.style()).fill(palette::GRAY_800))
                    .show(ctx, |ui| {
                        // Counts and rows are copied out so nothing logs while the lock is held.
                        let (shown, total) = logger::with_buffer(|buf| {
                            (buf.at_most(self.min_level).count(), buf.len())
                        })
                        .unwrap_or_default();
                        self.toolbar(ui, shown, total);
                        ui.separator();
                        self.lines(ui, shown);
                    });
            },
        );
    }

    fn toolbar(&mut self, ui: &mut egui::Ui, shown: usize, total: usize) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("log_level")
                .selected_text(self.min_level.as_str())
                .show_ui(ui, |ui| {
                    for level in LEVEL_CHOICES {
                        ui.selectable_value(&mut self.min_level, level, level.as_str());
                    }
                });
            ui.checkbox(&mut self.follow, "Follow");
            if ui.button("Clear").clicked() {
                logger::clear();
            }
            ui.label(format!("{shown} of {total} lines"));
        });
    }

    fn lines(&self, ui: &mut egui::Ui, shown: usize) {
        let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(self.follow)
            .show_rows(ui, row_height, shown, |ui, rows| {
                let page: Vec<LogEntry> = logger::with_buffer(|buf| {
                    buf.page(self.min_level, rows.start, rows.end)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
                for entry in page {
                    ui.label(
                        RichText::new(entry.to_string())
                            .monospace()
                            .color(level_color(entry.level)),
                    );
                }
            });
    }
}

fn level_color(level: Level) -> Color32 {
    match level {
        Level::Error => palette::RED_500,
        Level::Warn => palette::AMBER_400,
        Level::Info => palette::PINK_100,
        Level::Debug => palette::BLUE_300,
        Level::Trace => palette::GRAY_500,
    }
}

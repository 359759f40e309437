use crate::config::Config;
use crate::debounce::Debouncer;
use crate::diff::{ResolvedChange, Side};
use crate::loader::{LoaderMessage, LoaderResponse, spawn_loader};
use crate::session::DiffSession;
use crate::style::configure_style;
use crate::sync::{Pane, ScrollGroup};
use crate::ui::diff_view::{DiffView, ViewOptions};
use crate::ui::input_pane::InputPane;
use crate::ui::status_bar::StatusBar;
use crate::ui::toolbar::{Toolbar, ToolbarAction, ToolbarState};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

const SIDES: [Side; 2] = [Side::A, Side::B];
/// How often to check the loader while a file is on its way
const LOADER_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct PaperDiffApp {
    config: Config,
    session: DiffSession,
    /// Pending rediff, carrying the side edited last
    debouncer: Debouncer<Side>,
    display_scroll: ScrollGroup,
    input_scroll: [ScrollGroup; 2],
    loader_sender: Sender<LoaderMessage>,
    loader_receiver: Receiver<LoaderResponse>,
    /// Requests sent to the loader that have not answered yet
    loads_in_flight: usize,
}

impl PaperDiffApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_files: Vec<PathBuf>) -> Self {
        let config = Config::default();
        configure_style(&cc.egui_ctx, &config.settings.theme);

        let mut app = Self::with_config(config);
        for (side, path) in SIDES.into_iter().zip(initial_files) {
            app.request_load(LoaderMessage::Open(side, path));
        }
        app
    }

    pub fn with_config(config: Config) -> Self {
        let (loader_sender, loader_receiver) = spawn_loader();
        Self {
            session: DiffSession::new(config.settings.engine),
            debouncer: Debouncer::new(config.settings.debounce()),
            display_scroll: ScrollGroup::display(),
            input_scroll: [
                ScrollGroup::input(Pane::InputA, Pane::InputGutterA),
                ScrollGroup::input(Pane::InputB, Pane::InputGutterB),
            ],
            loader_sender,
            loader_receiver,
            loads_in_flight: 0,
            config,
        }
    }

    fn request_load(&mut self, message: LoaderMessage) {
        match self.loader_sender.send(message) {
            Ok(()) => self.loads_in_flight += 1,
            Err(e) => error!("Failed to send open message: {}", e),
        }
    }

    /// Rediff without waiting for the quiet period
    fn rediff_now(&mut self) {
        self.debouncer.cancel();
        let resolved = self.session.run_diff();
        self.follow(resolved);
    }

    /// Scroll both views so the resolved change is at the top
    fn follow(&mut self, resolved: Option<ResolvedChange>) {
        if let Some(change) = resolved {
            self.display_scroll.seek_to_line(
                change.position.line,
                self.config.settings.effective_line_height(),
            );
        }
    }

    fn handle_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::PreviousChange => {
                let resolved = self.session.previous_change();
                self.follow(resolved);
            }
            ToolbarAction::NextChange => {
                let resolved = self.session.next_change();
                self.follow(resolved);
            }
            ToolbarAction::Clear(side) => {
                self.debouncer.cancel();
                let resolved = self.session.clear(side);
                self.input_scroll[side as usize].seek(0.0);
                self.follow(resolved);
            }
            ToolbarAction::Open(side) => self.request_load(LoaderMessage::Pick(side)),
            ToolbarAction::SetEngine(engine) => {
                info!("Switching diff engine to {}", engine.label());
                self.session.set_engine(engine);
                self.config.settings.engine = engine;
                self.config.save_in_background();
                self.rediff_now();
            }
            ToolbarAction::ToggleWhitespace => {
                let settings = &mut self.config.settings;
                settings.visible_whitespace = !settings.visible_whitespace;
                self.config.save_in_background();
            }
        }
    }

    fn poll_loader(&mut self) {
        while let Ok(response) = self.loader_receiver.try_recv() {
            self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
            match response {
                LoaderResponse::Loaded(Ok(data)) => {
                    info!("Opened {:?} as {}", data.path, data.side.label());
                    self.session.set_text(data.side, data.content);
                    self.input_scroll[data.side as usize].seek(0.0);
                    self.rediff_now();
                }
                LoaderResponse::Loaded(Err(e)) => error!("Failed to open file: {}", e),
                LoaderResponse::Cancelled => debug!("Open dialog dismissed"),
            }
        }
    }
}

impl eframe::App for PaperDiffApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();

        let now = Instant::now();
        let session = &mut self.session;
        let fired = self.debouncer.fire(now, |side| {
            debug!("Rediff after edit in {}", side.label());
            session.run_diff()
        });
        if let Some(resolved) = fired {
            self.follow(resolved);
        }

        // Toolbar
        let mut action = None;
        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            action = Toolbar::show(
                ui,
                ToolbarState {
                    engine: self.session.engine(),
                    visible_whitespace: self.config.settings.visible_whitespace,
                    has_changes: self.session.diff().change_count() > 0,
                },
            );
        });
        if let Some(action) = action {
            self.handle_action(action);
        }

        // Status Bar
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            StatusBar::show(ui, self.session.status());
        });

        let settings = &self.config.settings;
        let options = ViewOptions {
            font_size: settings.font_size,
            line_height: settings.effective_line_height(),
            visible_whitespace: settings.visible_whitespace,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            let session = &mut self.session;
            let input_scroll = &mut self.input_scroll;
            let display_scroll = &mut self.display_scroll;
            let mut edited = [false; 2];

            egui::TopBottomPanel::top("input_panel")
                .resizable(true)
                .default_height(ui.available_height() * 0.4)
                .show_inside(ui, |ui| {
                    ui.columns(2, |columns| {
                        for (column, side) in columns.iter_mut().zip(SIDES) {
                            let lines = session.input_lines(side);
                            edited[side as usize] = InputPane::show(
                                column,
                                side,
                                session.text_mut(side),
                                lines,
                                options.font_size,
                                &mut input_scroll[side as usize],
                            );
                        }
                    });
                });

            ui.columns(2, |columns| {
                for (column, side) in columns.iter_mut().zip(SIDES) {
                    DiffView::show(
                        column,
                        side,
                        session.view(side),
                        session.active_span(side),
                        &options,
                        display_scroll,
                    );
                }
            });

            for side in SIDES {
                if edited[side as usize] {
                    session.touch_input(side);
                    self.debouncer.schedule(side, now);
                }
            }
        });

        if let Some(remaining) = self.debouncer.time_remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
        if self.loads_in_flight > 0 {
            ctx.request_repaint_after(LOADER_POLL_INTERVAL);
        }
    }
}

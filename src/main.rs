use paper_diff::app::PaperDiffApp;
use paper_diff::constant;
use paper_diff::ui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    init_logging();

    // paper-diff [FILE_A] [FILE_B]
    let initial_files: Vec<PathBuf> = std::env::args().skip(1).take(2).map(PathBuf::from).collect();
    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let fonts = ui::font::setup_fonts();
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(PaperDiffApp::new(cc, initial_files)))
        }),
    )
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Failed to install logger: {}", e);
    }
}

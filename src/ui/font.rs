//! Font setup for the application
//!
//! Both versions are drawn in the monospace family, so that family gets the
//! best system monospace font available.
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;

const SYSTEM_FONT_NAME: &str = "SystemMonospace";

/// Setup fonts with a system monospace font in front of egui's built-in one.
///
/// # Font Priority by OS:
/// - macOS: SF Mono, Menlo, Monaco
/// - Windows: Cascadia Mono, Consolas, Courier New
/// - Linux: JetBrains Mono, DejaVu Sans Mono, Noto Sans Mono
///
/// Falls back to the generic monospace match, then to egui's defaults.
pub fn setup_fonts() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    let source = SystemSource::new();

    for font_name in get_preferred_font_names() {
        if let Some(data) = load_family(&source, font_name) {
            tracing::info!("Using system font '{}' for diff views", font_name);
            install_monospace(&mut fonts, data);
            return fonts;
        }
    }

    match source.select_best_match(&[FamilyName::Monospace], &Properties::new()) {
        Ok(handle) => match read_handle(&handle) {
            Some(data) => {
                tracing::info!("Using generic system monospace font");
                install_monospace(&mut fonts, data);
            }
            None => tracing::warn!("Could not load system font data, using defaults"),
        },
        Err(_) => tracing::warn!("Could not find a monospace system font, using defaults"),
    }

    fonts
}

fn get_preferred_font_names() -> &'static [&'static str] {
    match std::env::consts::OS {
        "macos" => &["SF Mono", "Menlo", "Monaco"],
        "windows" => &["Cascadia Mono", "Consolas", "Courier New"],
        "linux" => &["JetBrains Mono", "DejaVu Sans Mono", "Noto Sans Mono"],
        _ => &[],
    }
}

fn load_family(source: &SystemSource, font_name: &str) -> Option<Vec<u8>> {
    let family = source.select_family_by_name(font_name).ok()?;
    let handle = family.fonts().first()?;
    read_handle(handle)
}

fn read_handle(handle: &Handle) -> Option<Vec<u8>> {
    match handle {
        Handle::Memory { bytes, .. } => Some(bytes.to_vec()),
        Handle::Path { path, .. } => std::fs::read(path).ok(),
    }
}

fn install_monospace(fonts: &mut FontDefinitions, data: Vec<u8>) {
    fonts.font_data.insert(
        SYSTEM_FONT_NAME.to_owned(),
        FontData::from_owned(data).into(),
    );
    fonts
        .families
        .entry(FontFamily::Monospace)
        .or_default()
        .insert(0, SYSTEM_FONT_NAME.to_owned());
}

pub mod diff_view;
pub mod font;
mod gutter;
pub mod input_pane;
pub mod status_bar;
pub mod toolbar;
pub mod viewport;

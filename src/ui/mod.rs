pub mod dialogs;
pub mod editor_surface;
pub mod main_window;
pub mod menu;
pub mod preview_pane;
pub mod status_bar;
pub mod theme;

pub mod canvas;
pub mod control_panel;
pub mod root;

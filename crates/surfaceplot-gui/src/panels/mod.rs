pub mod controls;
pub mod cross_section;
pub mod export_dialog;
pub(crate) mod helpers;
pub mod menu_bar;
pub mod status;
pub mod viewport;

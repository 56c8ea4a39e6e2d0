pub mod header;
pub mod settings_controls;
pub mod toast;

pub mod settings_menu;

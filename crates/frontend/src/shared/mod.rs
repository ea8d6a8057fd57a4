pub mod components;
pub mod i18n;
pub mod icons;
pub mod settings;
pub mod timer;

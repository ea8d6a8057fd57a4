pub mod about;
pub mod settings;
pub mod studio;

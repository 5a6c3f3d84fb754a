pub mod analysis;
pub mod layout;
pub mod plot;
pub mod portfolio;
pub mod settings;

pub mod front_desk;
pub mod menu;
pub mod render;

pub use front_desk::FrontDesk;
pub use menu::MenuChoice;

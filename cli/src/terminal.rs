pub mod colors;
pub mod format;
pub mod logging;
pub mod menu;
pub mod print;
pub mod spinner;

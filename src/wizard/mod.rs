//! Interactive collection of the values session

pub mod collect;
pub mod menu;
pub mod menus;
pub mod session;

pub use session::run;

pub mod check;
pub mod common;
pub mod init;
pub mod item;
pub mod list;
pub mod stage;
pub mod status;

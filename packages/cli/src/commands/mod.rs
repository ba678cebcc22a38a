pub mod blocks;
pub mod init;
pub mod serve;
pub mod templates;

pub use blocks::blocks;
pub use init::{init, InitArgs};
pub use serve::{serve, ServeArgs};
pub use templates::{templates, TemplatesArgs};

pub mod export;
pub mod html;
pub mod init;
pub mod outline;
pub mod sections;

pub use export::{export, ExportArgs};
pub use html::{html, HtmlArgs};
pub use init::{init, InitArgs};
pub use outline::{outline, OutlineArgs};
pub use sections::{sections, SectionsArgs};

mod handler;
mod subscription;

pub use handler::ws_handler;
pub use subscription::SymbolFilter;

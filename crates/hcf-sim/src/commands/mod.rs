pub mod flow;
pub mod sweep;
pub mod version;

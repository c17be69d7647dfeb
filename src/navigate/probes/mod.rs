pub mod fs;
pub mod http;

pub use fs::FsProbe;
pub use http::HttpProbe;

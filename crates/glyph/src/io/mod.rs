pub mod decode;
pub mod dataset;
pub mod export;

pub use decode::*;
pub use dataset::*;
pub use export::*;

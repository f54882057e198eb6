pub mod preprocessing;
pub mod extraction;
pub mod reduction;
pub mod cropping;
pub mod resampling;

pub use preprocessing::*;
pub use extraction::*;
pub use reduction::*;
pub use cropping::*;
pub use resampling::*;

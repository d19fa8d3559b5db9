pub mod encoder;
pub mod errors;
pub mod raster;

pub use encoder::*;
pub use errors::EncodeError;
pub use raster::*;

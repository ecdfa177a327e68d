pub mod error;
pub mod math;
pub mod raster;
pub mod region;
pub mod scan;
pub mod simplify;
pub mod topology;

pub use error::{MapError, RasterError, Result, ScanWarning};
pub use raster::{BufferRaster, Raster, Rgba8};
pub use scan::{scan, MapData, ScanOptions};

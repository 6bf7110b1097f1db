pub mod error;
pub mod options;
pub mod traits;

pub use error::{NurbsError, Result};
pub use options::{CurveOptions, EndpointPolicy};

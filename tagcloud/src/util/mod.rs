/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod error;

#[doc(inline)]
pub use config::LayoutConfig;
#[doc(inline)]
pub use error::LayoutError;
#[doc(inline)]
pub use error::Result;

pub mod config;
pub mod logging;

pub mod algorithm;
pub mod checker;
pub mod checksum;
pub mod digest;
pub mod error;
pub mod sink;

pub use algorithm::Algorithm;
pub use checker::{FixityChecker, FixityResult};
pub use digest::Digest;
pub use error::FixityError;

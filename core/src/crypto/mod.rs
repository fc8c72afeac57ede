pub mod types;
pub mod provider;
pub mod secp256k1;
#[cfg(any(test, feature = "test-utils"))]
pub mod fake;
pub mod digest;

pub use types::*;
pub use provider::*;
pub use secp256k1::*;
#[cfg(any(test, feature = "test-utils"))]
pub use fake::*;
pub use digest::*;

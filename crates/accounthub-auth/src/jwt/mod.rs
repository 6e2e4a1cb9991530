//! Bearer token creation and validation (HS256).

mod claims;
mod decoder;
mod encoder;

pub use claims::{Claims, TokenType};
pub use decoder::JwtDecoder;
pub use encoder::{JwtEncoder, TokenPair};

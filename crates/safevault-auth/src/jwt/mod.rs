//! JWT token encoding, decoding, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod service;

pub use claims::TokenClaims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder, TOKEN_TTL};
pub use error::TokenError;
pub use service::TokenService;

//! # booking-auth
//!
//! Bearer token handling for the hotel booking service.
//!
//! The booking endpoints only need to know *who* is calling. Tokens are
//! HS256 JWTs whose `sub` claim is the integer user id; they are issued
//! by the sign-in flow and verified on every request.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};

//! # Portal Schemas
//!
//! Data-transfer schemas for the user portal backend. This crate contains
//! the wire shapes exchanged by the authentication and user endpoints,
//! the persistence-record projection behind the user response, and the
//! decoding machinery that enforces the contract on inbound payloads.

pub mod decode;
pub mod domain;
pub mod dto;
pub mod errors;

// Re-export commonly used types at the crate root
pub use decode::{decode_str, decode_value, DeclaredFields, DecodeOptions, UnknownFields};
pub use domain::entities::UserRecord;
pub use dto::{Token, TokenData, User, UserBase, UserCreate, BEARER_TOKEN_TYPE};
pub use errors::{error_codes, ErrorResponse, ValidationError};

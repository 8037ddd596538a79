//! Issuer-specific layout parsers.

pub mod paytm;
pub mod phonepe;

//! Mirth message and error tracking

pub mod channel;
pub mod facility;
pub mod latest;
pub mod message;

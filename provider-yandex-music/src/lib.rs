//! # Yandex Music Provider
//!
//! Metadata source for Yandex Music, authorized by a long-lived OAuth access
//! token.

pub mod source;

pub use source::YandexMusicSource;

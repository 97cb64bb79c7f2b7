//! The text-encoded animation bundle: base85 over xz-compressed GIF bytes.

pub mod base85;
pub(crate) mod bundle;

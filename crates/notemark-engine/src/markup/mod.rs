//! # Markup
//!
//! The serialized side of the engine: escaping, writing a [`Document`] as
//! markup, and reading stored markup back.
//!
//! - **`escape`**: `escape` / `escape_attr` / `decode_entities`
//! - **`serialize`**: `Document` → compact markup
//! - **`read`**: stored markup → element census, plain text, `Document`
//!
//! [`Document`]: crate::models::Document

pub mod escape;
pub mod read;
pub mod serialize;

pub use escape::{decode_entities, escape, escape_attr};
pub use read::{Census, census, normalize_newlines, plain_text_of, read_markup};
pub use serialize::{serialize, serialize_inlines};

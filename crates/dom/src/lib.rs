pub mod debug;
pub mod traverse;

mod class_list;
mod document;
mod error;
mod types;

pub use crate::class_list::class_tokens;
pub use crate::document::Document;
pub use crate::error::DomError;
pub use crate::types::NodeKind;
pub use core_types::NodeId;

//! Pure data structures mirroring the persisted catalog document.

pub mod contact;
pub mod document;
pub mod order;
pub mod product;
pub mod production;

pub use contact::*;
pub use document::*;
pub use order::*;
pub use product::*;
pub use production::*;

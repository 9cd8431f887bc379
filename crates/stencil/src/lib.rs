//! The dynamic value model of the stencil template engine.
//!
//! Template expressions operate on [Value], a closed set of variants:
//! undefined, null, booleans, integers, floats, strings, lists and dicts.
//!
//! Native data is lifted into values either through `serde`, using
//! [to_value] or [lift], or through the [ToValue] trait which can be derived
//! for structs.
//!
//! ```rust
//! use serde::Serialize;
//! use stencil::Value;
//!
//! #[derive(Serialize)]
//! struct Page {
//!     title: String,
//!     tags: Vec<String>,
//!     draft: bool,
//! }
//!
//! let page = Page {
//!     title: String::from("Hello"),
//!     tags: vec![String::from("a"), String::from("b")],
//!     draft: false,
//! };
//!
//! let value = stencil::lift(&page);
//!
//! assert!(value.is_truthy());
//! assert!(!value.key("draft")?.is_truthy());
//! assert!(value.key("author")?.is_undefined());
//! assert_eq!("{draft: false, tags: [a, b], title: Hello}", value.render());
//! # Ok::<_, stencil::ValueError>(())
//! ```

#![deny(missing_docs)]

mod dict;
mod fmt;
mod list;
mod ser;
mod serde;
mod shared;
mod to_value;
mod type_info;
mod value;
mod value_error;

pub use crate::dict::Dict;
pub use crate::list::List;
pub use crate::ser::{lift, to_value};
pub use crate::shared::Shared;
pub use crate::to_value::{DictKey, ToValue};
pub use crate::type_info::TypeInfo;
pub use crate::value::Value;
pub use crate::value_error::{ValueError, ValueErrorKind};

#[cfg(feature = "derive")]
pub use stencil_macros::ToValue;

/// Collections used by the value model.
pub mod collections {
    pub use hashbrown::{hash_map, HashMap};
}

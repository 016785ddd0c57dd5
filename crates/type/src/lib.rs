// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! Leaf types shared across tablekit: the closed column-type enumeration and
//! its store-type mapping, identifier rules, and the diagnostic/error model
//! every crate reports failures through.

mod column_type;
mod default;
pub mod diagnostic;
mod error;
pub mod ident;

pub use column_type::{ColumnType, StoreType};
pub use default::DefaultValue;
pub use diagnostic::{Diagnostic, ErrorKind};
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

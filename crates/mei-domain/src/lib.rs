//! mei-domain
//!
//! Pure domain models (Transaction, CompanyInfo, expense categories, money parsing).
//! No I/O, no storage, no presentation. Only data types and their validation rules.

pub mod category;
pub mod common;
pub mod company;
pub mod money;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use company::*;
pub use money::*;
pub use transaction::*;

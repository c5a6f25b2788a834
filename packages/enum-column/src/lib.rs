//! Integer-backed enum columns for SeaORM.
//!
//! A closed enum declares its storage scalars through [`IntEnum`], and an
//! [`EnumColumn`] adapter converts between the two directions: encoding a
//! case into the integer that gets bound to the driver, and decoding a
//! stored integer back into a case. Decoding an integer no case claims is
//! a fatal type error, never a default.
//!
//! The [`int_enum!`] macro declares the enum and wires it into SeaORM's
//! value traits so it can sit directly in an entity model:
//!
//! ```
//! use enum_column::{int_enum, IntEnum};
//!
//! int_enum! {
//!     pub enum Color as "Color" {
//!         Red = 1,
//!         Green = 2,
//!     }
//! }
//!
//! assert_eq!(Color::Red.to_value(), 1);
//! assert_eq!(Color::column().decode(2), Ok(Color::Green));
//! assert!(Color::column().decode(7).is_err());
//! ```

pub mod adapter;
pub mod error;
mod macros;

pub use adapter::{ColumnSpec, EnumColumn, IntEnum};
pub use error::EnumColumnError;

// Re-exported for the `int_enum!` macro expansion.
#[doc(hidden)]
pub use once_cell;
#[doc(hidden)]
pub use sea_orm;

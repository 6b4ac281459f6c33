//! Command definitions, groups, the flattened registry, and validation.
//!
//! # Example
//!
//! ```
//! use global_commands::commands::{validate, CommandGroup, CommandSpec};
//!
//! let sales = CommandGroup::new(
//!     "sales",
//!     [
//!         ("open_palette", CommandSpec::new("Open command palette").key("f1")),
//!         ("open_drawer", CommandSpec::new("Open cash drawer").key("ctrl+g")),
//!     ],
//! );
//!
//! assert_eq!(sales.codes(), ["open_palette", "open_drawer"]);
//! assert!(validate(&sales).is_ok());
//! ```

mod command;
mod group;
mod registry;
mod validation;


#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;

pub use command::{Command, CommandSpec};
pub use group::CommandGroup;
pub use registry::CommandRegistry;
pub(crate) use registry::ensure_unique_codes;
pub use validation::{is_valid_code, validate};

//! Binds command-line options to the fields of a struct.
//!
//! A container describes its options with `#[opt(...)]` field attributes;
//! [`Group::new`] collects them into a registry indexed by short and long
//! name, and [`Opt::set`] writes an argument back into the field it came
//! from.
//!
//! ```
//! use optbind::{Group, Options};
//!
//! #[derive(Default, Options)]
//! struct Cli {
//!     /// Print more output
//!     #[opt(short = 'v', long)]
//!     verbose: bool,
//!     /// Files to include
//!     #[opt(short = 'I', long = "include")]
//!     include: Vec<String>,
//! }
//!
//! let mut cli = Cli::default();
//! let mut group = Group::try_new("Application Options", &mut cli).unwrap();
//! group.short_mut('v').unwrap().set(None).unwrap();
//! group.long_mut("include").unwrap().set(Some("a.h")).unwrap();
//! group.long_mut("include").unwrap().set(Some("b.h")).unwrap();
//! drop(group);
//!
//! assert!(cli.verbose);
//! assert_eq!(cli.include, ["a.h", "b.h"]);
//! ```

mod error;
mod group;
mod opt;
pub mod tag;
pub mod value;

use std::borrow::Cow;

#[doc(inline)]
pub use {
    error::*,
    group::{Group, Scanner},
    opt::Opt,
    tag::Tag,
    value::{Bind, Callback, Scalar, Target, Value},
};

#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use optbind_macros::Options;

pub type Name = Cow<'static, str>;

/// A container whose fields carry options.
///
/// Usually derived. A hand-written implementation reports each field to the
/// [`Scanner`] in declaration order:
///
/// ```
/// use optbind::{Group, Options, Result, Scanner, Tag};
///
/// struct Cli {
///     jobs: usize,
/// }
///
/// impl Options for Cli {
///     fn scan<'a>(&'a mut self, scanner: &mut Scanner<'_, 'a>) -> Result<()> {
///         scanner.field(Tag::new("jobs").short("j"), &mut self.jobs)
///     }
/// }
///
/// let mut cli = Cli { jobs: 1 };
/// let group = Group::new("build", &mut cli);
/// assert_eq!(group.short('j').unwrap().to_string(), "-j");
/// ```
pub trait Options {
    fn scan<'a>(&'a mut self, scanner: &mut Scanner<'_, 'a>) -> Result<()>;
}

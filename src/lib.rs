//! Turn slugs into human-readable titles.
//!
//! A slug is a `-`/`_` delimited token string such as a filename stem.
//! [`titleize_slug`] splits it on those delimiters, joins the pieces with
//! spaces and capitalizes the result:
//!
//! ```
//! use titleize::titleize_slug;
//!
//! assert_eq!(titleize_slug("getting-started"), "Getting started");
//! assert_eq!(titleize_slug("FOO_BAR"), "Foo bar");
//! assert_eq!(titleize_slug(""), "");
//! ```
//!
//! Every function here is total: any `&str` produces a value, nothing panics.

mod util;

pub use util::{capitalize, split_slug, titleize_slug};

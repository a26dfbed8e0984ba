//! A heterogeneous value and record data model.
//!
//! [`Value`] is the uniform representation of heterogeneous data: null,
//! booleans, numbers, text, sequences of values, and nested [`Record`]s.
//! [`Record`] is an ordered field map from name to [`Value`] preserving
//! insertion order.
//!
//! Both types implement `Eq`, `Hash`, and (for [`Number`]) a total order,
//! so values extracted from records can serve directly as grouping keys.
//! Floating-point totality follows the usual canonicalization: NaN equals
//! NaN and sorts last, and `-0.0` is identical to `0.0`.
//!
//! Records follow the persistent-structure idiom: [`Record::with`] and
//! [`Record::without`] consume the record and return a new one; a shared
//! record is never mutated in place.
//!
//! # Examples
//!
//! ```rust
//! use recollect::record;
//! use recollect::record::{Record, Value};
//!
//! let person = record! {
//!     "name" => "John",
//!     "age" => 30.0,
//!     "city" => "New York",
//! };
//!
//! assert_eq!(person.get("name").and_then(Value::as_str), Some("John"));
//! assert_eq!(person.keys().collect::<Vec<_>>(), vec!["name", "age", "city"]);
//!
//! // `with` returns a new record; the original is untouched.
//! let renamed = person.clone().with("name", "Jane");
//! assert_eq!(person.get("name").and_then(Value::as_str), Some("John"));
//! assert_eq!(renamed.get("name").and_then(Value::as_str), Some("Jane"));
//! ```

mod record;
mod value;

pub use record::Record;
pub use value::{Number, Value};

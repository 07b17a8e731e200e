//! SeaORM entities, grouped by the logical database they live in

use std::fmt;

pub mod empi;
pub mod errorsdb;
pub mod stats;
pub mod ukrdc;
pub mod xmlarchive;

/// Human-facing metadata attached to a column.
///
/// The description doubles as the SQL column comment on PostgreSQL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnInfo {
    pub label: &'static str,
    pub description: &'static str,
}

impl ColumnInfo {
    pub const fn new(label: &'static str, description: &'static str) -> Self {
        Self { label, description }
    }
}

/// Formats an optional value the way the registry tooling prints missing values.
pub(crate) struct Opt<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for Opt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("None"),
        }
    }
}

/// Generates read accessors on `Model` that expose a column under an
/// alternative, more readable name.
macro_rules! aliases {
    ($($alias:ident => $field:ident: $ty:ty),* $(,)?) => {
        impl Model {
            $(
                #[doc = concat!("Alias for [`Model::", stringify!($field), "`].")]
                pub fn $alias(&self) -> &$ty {
                    &self.$field
                }
            )*
        }
    };
}

pub(crate) use aliases;

//! Column-name helpers

use sea_orm::{ColumnTrait, IdenStatic};

/// Database name of a column, after any `column_name` remapping.
///
/// ```
/// use ukrdc_orm::empi::master_record;
/// use ukrdc_orm::utils::column_name;
///
/// assert_eq!(column_name(master_record::Column::LastUpdated), "lastupdated");
/// ```
pub fn column_name<C: ColumnTrait>(column: C) -> String {
    column.as_str().to_owned()
}

/// Database names of several columns, in order.
pub fn column_names<C, I>(columns: I) -> Vec<String>
where
    C: ColumnTrait,
    I: IntoIterator<Item = C>,
{
    columns.into_iter().map(column_name).collect()
}

use sea_orm::entity::prelude::*;

/// Last run times of the Mirth scheduled functions.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eventcontrol")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "eventtype")]
    pub event_type: String,
    #[sea_orm(column_name = "eventdate")]
    pub event_date: Option<DateTime>,
    #[sea_orm(column_name = "pendingeventdate")]
    pub pending_event_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

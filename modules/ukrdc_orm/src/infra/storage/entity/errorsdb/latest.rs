use sea_orm::entity::prelude::*;

/// Most recent message per (national id, facility).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "latests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ni: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub facility: String,
    pub message_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::message::Entity",
        from = "Column::MessageId",
        to = "super::message::Column::Id"
    )]
    Message,
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Message.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

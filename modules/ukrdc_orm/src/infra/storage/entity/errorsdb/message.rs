use sea_orm::entity::prelude::*;

/// One inbound message as processed by a Mirth channel.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub message_id: Option<i32>,
    pub channel_id: Option<String>,
    pub received: Option<DateTime>,
    pub msg_status: Option<String>,
    pub ni: Option<String>,
    pub filename: Option<String>,
    pub facility: Option<String>,
    pub error: Option<String>,
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::channel::Entity",
        from = "Column::ChannelId",
        to = "super::channel::Column::Id"
    )]
    Channel,
    #[sea_orm(has_many = "super::latest::Entity")]
    Latest,
}

impl Related<super::channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Channel.def()
    }
}

impl Related<super::latest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Latest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

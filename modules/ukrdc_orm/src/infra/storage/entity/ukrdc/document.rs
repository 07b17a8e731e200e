use sea_orm::entity::prelude::*;

use super::super::aliases;

/// Clinical document or letter. Binary payloads live in `stream`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    pub repositoryupdatedate: DateTime,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    pub documenttime: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notetext: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub documenttypecode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub documenttypecodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub documenttypedesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciandesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub documentname: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub statuscode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub statuscodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub statusdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredbycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredbycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredbydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub filetype: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub filename: Option<String>,
    pub stream: Option<Vec<u8>>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub documenturl: Option<String>,
    pub updatedon: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub actioncode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub externalid: Option<String>,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient_record::Entity",
        from = "Column::Pid",
        to = "super::patient_record::Column::Pid"
    )]
    PatientRecord,
}

impl Related<super::patient_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatientRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

aliases! {
    repository_update_date => repositoryupdatedate: DateTime,
}

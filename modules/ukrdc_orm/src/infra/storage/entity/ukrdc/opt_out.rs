use sea_orm::entity::prelude::*;

use super::super::aliases;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "optout")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub programname: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub programdescription: Option<String>,
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
    pub fromtime: Option<Date>,
    pub totime: Option<Date>,
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
    program_name => programname: Option<String>,
    program_description => programdescription: Option<String>,
    entered_by_code => enteredbycode: Option<String>,
    entered_by_code_std => enteredbycodestd: Option<String>,
    entered_by_desc => enteredbydesc: Option<String>,
    entered_at_code => enteredatcode: Option<String>,
    entered_at_code_std => enteredatcodestd: Option<String>,
    entered_at_desc => enteredatdesc: Option<String>,
    from_time => fromtime: Option<Date>,
    to_time => totime: Option<Date>,
    updated_on => updatedon: Option<DateTime>,
    action_code => actioncode: Option<String>,
    external_id => externalid: Option<String>,
}

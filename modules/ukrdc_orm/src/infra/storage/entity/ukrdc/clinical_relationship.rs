use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clinicalrelationship")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciandesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub facilitycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub facilitycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub facilitydesc: Option<String>,
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

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "allergy")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub allergycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub allergycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub allergydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub allergycategorycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub allergycategorycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub allergycategorydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub severitycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub severitycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub severitydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciandesc: Option<String>,
    pub discoverytime: Option<DateTime>,
    pub confirmedtime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub commenttext: Option<String>,
    pub inactivetime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub freetextallergy: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub qualifyingdetails: Option<String>,
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

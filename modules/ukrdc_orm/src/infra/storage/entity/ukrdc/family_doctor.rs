use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::Opt;
use super::gp_info;

/// GP registration for a patient. The primary key is the patient's pid.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "familydoctor")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub gpname: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub gpid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub gppracticeid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub addressuse: Option<String>,
    pub fromtime: Option<Date>,
    pub totime: Option<Date>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub street: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub town: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub county: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub postcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub countrycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub countrycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub countrydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub contactuse: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub contactvalue: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub email: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub commenttext: Option<String>,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::Id",
        to = "super::patient::Column::Pid"
    )]
    Patient,
    #[sea_orm(
        belongs_to = "super::gp_info::Entity",
        from = "Column::Gpid",
        to = "super::gp_info::Column::Code",
        fk_name = "fk-familydoctor-gpid"
    )]
    GpInfo,
    #[sea_orm(
        belongs_to = "super::gp_info::Entity",
        from = "Column::Gppracticeid",
        to = "super::gp_info::Column::Code",
        fk_name = "fk-familydoctor-gppracticeid"
    )]
    GpPracticeInfo,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// ODS entry for the individual GP.
    pub async fn gp_info<C: ConnectionTrait>(&self, db: &C) -> Result<Option<gp_info::Model>, DbErr> {
        match &self.gpid {
            Some(code) => gp_info::Entity::find_by_id(code.clone()).one(db).await,
            None => Ok(None),
        }
    }

    /// ODS entry for the GP practice.
    pub async fn gp_practice_info<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Option<gp_info::Model>, DbErr> {
        match &self.gppracticeid {
            Some(code) => gp_info::Entity::find_by_id(code.clone()).one(db).await,
            None => Ok(None),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FamilyDoctor({}) <{} {}>",
            self.id,
            Opt(&self.gpname),
            Opt(&self.gpid)
        )
    }
}

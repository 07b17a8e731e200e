use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::{aliases, Opt};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
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
    pub postcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub countrycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub countrycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub countrydesc: Option<String>,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::Pid",
        to = "super::patient::Column::Pid"
    )]
    Patient,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

aliases! {
    from_time => fromtime: Option<Date>,
    to_time => totime: Option<Date>,
    country_code => countrycode: Option<String>,
    country_code_std => countrycodestd: Option<String>,
    country_description => countrydesc: Option<String>,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Address({}) <{} {} {}>",
            Opt(&self.pid),
            Opt(&self.street),
            Opt(&self.town),
            Opt(&self.postcode)
        )
    }
}

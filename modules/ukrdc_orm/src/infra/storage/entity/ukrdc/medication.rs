use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::{aliases, Opt};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "medication")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    pub repositoryupdatedate: DateTime,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub prescriptionnumber: Option<String>,
    pub fromtime: Option<DateTime>,
    pub totime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub orderedbycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub orderedbycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub orderedbydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteringorganizationcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteringorganizationcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteringorganizationdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub routecode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub routecodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub routedesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub drugproductidcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub drugproductidcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub drugproductiddesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub drugproductgeneric: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub drugproductlabelname: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub drugproductformcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub drugproductformcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub drugproductformdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub drugproductstrengthunitscode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub drugproductstrengthunitscodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub drugproductstrengthunitsdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub frequency: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(1000))", nullable)]
    pub commenttext: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))", nullable)]
    pub dosequantity: Option<Decimal>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub doseuomcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub doseuomcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub doseuomdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub indication: Option<String>,
    pub updatedon: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub actioncode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub externalid: Option<String>,
    pub update_date: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub encounternumber: Option<String>,
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
    from_time => fromtime: Option<DateTime>,
    to_time => totime: Option<DateTime>,
    entering_organization_code => enteringorganizationcode: Option<String>,
    entering_organization_description => enteringorganizationdesc: Option<String>,
    route_code => routecode: Option<String>,
    route_code_std => routecodestd: Option<String>,
    route_desc => routedesc: Option<String>,
    drug_product_id_code => drugproductidcode: Option<String>,
    drug_product_id_description => drugproductiddesc: Option<String>,
    drug_product_generic => drugproductgeneric: Option<String>,
    comment => commenttext: Option<String>,
    dose_quantity => dosequantity: Option<Decimal>,
    dose_uom_code => doseuomcode: Option<String>,
    dose_uom_code_std => doseuomcodestd: Option<String>,
    dose_uom_description => doseuomdesc: Option<String>,
    updated_on => updatedon: Option<DateTime>,
    external_id => externalid: Option<String>,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Medication({})", Opt(&self.pid))
    }
}

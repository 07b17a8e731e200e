use sea_orm::entity::prelude::*;

use super::super::aliases;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "laborder")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()", indexed)]
    pub creation_date: DateTime,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub placerid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub fillerid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub receivinglocationcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub receivinglocationcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub receivinglocationdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub orderedbycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub orderedbycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub orderedbydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub orderitemcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub orderitemcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub orderitemdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub prioritycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub prioritycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub prioritydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub status: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub ordercategorycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub ordercategorycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub ordercategorydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub specimensource: Option<String>,
    pub specimenreceivedtime: Option<DateTime>,
    pub specimencollectedtime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub duration: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub patientclasscode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub patientclasscodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub patientclassdesc: Option<String>,
    pub enteredon: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteringorganizationcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteringorganizationcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteringorganizationdesc: Option<String>,
    pub updatedon: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub actioncode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub externalid: Option<String>,
    #[sea_orm(indexed)]
    pub update_date: Option<DateTime>,
    #[sea_orm(indexed)]
    pub repository_update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient_record::Entity",
        from = "Column::Pid",
        to = "super::patient_record::Column::Pid"
    )]
    PatientRecord,
    #[sea_orm(has_many = "super::result_item::Entity")]
    ResultItem,
}

impl Related<super::patient_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatientRecord.def()
    }
}

impl Related<super::result_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResultItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

aliases! {
    receiving_location => receivinglocationcode: Option<String>,
    receiving_location_description => receivinglocationdesc: Option<String>,
    receiving_location_code_std => receivinglocationcodestd: Option<String>,
    placer_id => placerid: Option<String>,
    filler_id => fillerid: Option<String>,
    ordered_by => orderedbycode: Option<String>,
    ordered_by_description => orderedbydesc: Option<String>,
    ordered_by_code_std => orderedbycodestd: Option<String>,
    order_item => orderitemcode: Option<String>,
    order_item_description => orderitemdesc: Option<String>,
    order_item_code_std => orderitemcodestd: Option<String>,
    order_category => ordercategorycode: Option<String>,
    order_category_description => ordercategorydesc: Option<String>,
    order_category_code_std => ordercategorycodestd: Option<String>,
    specimen_collected_time => specimencollectedtime: Option<DateTime>,
    specimen_received_time => specimenreceivedtime: Option<DateTime>,
    priority => prioritycode: Option<String>,
    priority_description => prioritydesc: Option<String>,
    priority_code_std => prioritycodestd: Option<String>,
    specimen_source => specimensource: Option<String>,
    patient_class => patientclasscode: Option<String>,
    patient_class_description => patientclassdesc: Option<String>,
    patient_class_code_std => patientclasscodestd: Option<String>,
    entered_on => enteredon: Option<DateTime>,
    entered_at => enteredatcode: Option<String>,
    entered_at_description => enteredatdesc: Option<String>,
    external_id => externalid: Option<String>,
    entering_organization_code => enteringorganizationcode: Option<String>,
    entering_organization_description => enteringorganizationdesc: Option<String>,
    entering_organization_code_std => enteringorganizationcodestd: Option<String>,
}

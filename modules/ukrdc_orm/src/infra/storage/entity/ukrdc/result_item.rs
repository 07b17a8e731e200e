//! Individual laboratory results, one row per test within an order

use sea_orm::entity::prelude::*;

use super::super::{aliases, ColumnInfo};
use super::lab_order;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resultitem")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub orderid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    #[sea_orm(column_type = "String(StringLen::N(2))", nullable)]
    pub resulttype: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub serviceidcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub serviceidcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub serviceiddesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub subid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub resultvalue: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub resultvalueunits: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub referencerange: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub interpretationcodes: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(5))", nullable)]
    pub status: Option<String>,
    pub observationtime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(1000))", nullable)]
    pub commenttext: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(1000))", nullable)]
    pub referencecomment: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(4))", nullable)]
    pub prepost: Option<String>,
    pub enteredon: Option<DateTime>,
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
        belongs_to = "super::lab_order::Entity",
        from = "Column::Orderid",
        to = "super::lab_order::Column::Id"
    )]
    LabOrder,
}

impl Related<super::lab_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Column {
    /// Label and description for this column.
    pub fn info(&self) -> ColumnInfo {
        match self {
            Self::Id => ColumnInfo::new(
                "Result Item ID",
                "Unique identifier for the result item.",
            ),
            Self::Orderid => ColumnInfo::new(
                "Order ID",
                "Identifier of the related laboratory order.",
            ),
            Self::CreationDate => ColumnInfo::new(
                "Creation Date",
                "Date and time when the result item was created.",
            ),
            Self::Resulttype => ColumnInfo::new("Result Type", "Type of result."),
            Self::Serviceidcode => ColumnInfo::new(
                "Service ID Code",
                "Test code identifying the laboratory service or test performed.",
            ),
            Self::Serviceidcodestd => ColumnInfo::new(
                "Service ID Code Standard",
                "Coding standard used for the service ID (SNOMED, LOINC, UKRR, PV, LOCAL).",
            ),
            Self::Serviceiddesc => ColumnInfo::new(
                "Service ID Description",
                "Text description of the laboratory service or test performed.",
            ),
            Self::Subid => ColumnInfo::new("Sub ID", "Sub-Test Id."),
            Self::Resultvalue => {
                ColumnInfo::new("Result Value", "The measured or observed value.")
            }
            Self::Resultvalueunits => ColumnInfo::new(
                "Result Value Units",
                "Units of measurement for the result value.",
            ),
            Self::Referencerange => ColumnInfo::new(
                "Reference Range",
                "Reference range for the test result.",
            ),
            Self::Interpretationcodes => ColumnInfo::new(
                "Interpretation Codes",
                "Code(s) indicating interpretation of the result (POS, NEG, UNK).",
            ),
            Self::Status => {
                ColumnInfo::new("Result Status", "Status of the result (F, P, D).")
            }
            Self::Observationtime => ColumnInfo::new(
                "Observation Time",
                "Date and time when the observation or measurement was made.",
            ),
            Self::Commenttext => ColumnInfo::new(
                "Comment Text",
                "Free-text comment associated with the result.",
            ),
            Self::Referencecomment => ColumnInfo::new(
                "Reference Comment",
                "Reference comment provided with the result.",
            ),
            Self::Prepost => ColumnInfo::new(
                "Pre/Post Indicator",
                "Indicates whether the sample was taken PRE or POST dialysis (PRE, POST, UNK, NA).",
            ),
            Self::Enteredon => ColumnInfo::new(
                "Entered On",
                "Date and time when the result was entered into the system.",
            ),
            Self::Updatedon => ColumnInfo::new("Updated On", "Last Modified Date"),
            Self::Actioncode => ColumnInfo::new(
                "Action Code",
                "Code representing the action performed on the result record.",
            ),
            Self::Externalid => ColumnInfo::new("External ID", "Unique Identifier"),
            Self::UpdateDate => ColumnInfo::new(
                "Update Date",
                "Date and time when the record was last updated.",
            ),
        }
    }
}

impl Model {
    /// Patient record id of the owning lab order.
    pub async fn pid<C: ConnectionTrait>(&self, db: &C) -> Result<Option<String>, DbErr> {
        let Some(order_id) = &self.orderid else {
            return Ok(None);
        };
        let order = lab_order::Entity::find_by_id(order_id.clone()).one(db).await?;
        Ok(order.and_then(|o| o.pid))
    }
}

aliases! {
    order_id => orderid: Option<String>,
    result_type => resulttype: Option<String>,
    entered_on => enteredon: Option<DateTime>,
    pre_post => prepost: Option<String>,
    service_id => serviceidcode: Option<String>,
    service_id_std => serviceidcodestd: Option<String>,
    service_id_description => serviceiddesc: Option<String>,
    sub_id => subid: Option<String>,
    value => resultvalue: Option<String>,
    value_units => resultvalueunits: Option<String>,
    reference_range => referencerange: Option<String>,
    interpretation_codes => interpretationcodes: Option<String>,
    observation_time => observationtime: Option<DateTime>,
    comments => commenttext: Option<String>,
    reference_comment => referencecomment: Option<String>,
}

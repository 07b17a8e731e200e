//! Sending facilities and their outbound feed flags

use sea_orm::entity::prelude::*;

use super::super::aliases;
use super::code;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "facility_new")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(100))")]
    pub facilitycode: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(100))")]
    pub facilitycodestd: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub facilitytype: String,
    #[sea_orm(default_value = false)]
    pub pkbout: bool,
    /// Message types withheld from the PKB feed. PostgreSQL `text[]`.
    pub pkbmsgexclusions: Option<Vec<String>>,
    #[sea_orm(default_value = false)]
    pub ukrdcoutpkb: bool,
    #[sea_orm(default_value = false)]
    pub pvoutpkb: bool,
    pub startdate: Option<DateTime>,
    pub enddate: Option<DateTime>,
    pub firstdataquarter: Option<i32>,
    pub pkboutstartdate: Option<DateTime>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub update_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::code::Entity",
        from = "(Column::Facilitycode, Column::Facilitycodestd)",
        to = "(super::code::Column::Code, super::code::Column::CodingStandard)",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Code,
}

impl Related<super::code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Code.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Facility name from the code list.
    pub async fn description<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Option<String>, DbErr> {
        code::describe(db, Some(&self.facilitycodestd), Some(&self.facilitycode)).await
    }

    /// Inbound PKB feeds are no longer run, so this is always false.
    pub fn pkb_in(&self) -> bool {
        false
    }
}

aliases! {
    code => facilitycode: String,
    coding_standard => facilitycodestd: String,
    pkb_out => pkbout: bool,
    pkb_msg_exclusions => pkbmsgexclusions: Option<Vec<String>>,
    rdastartdate => startdate: Option<DateTime>,
    rdaenddate => enddate: Option<DateTime>,
    rdafirstdataquarter => firstdataquarter: Option<i32>,
}

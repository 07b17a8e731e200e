use std::fmt;

use sea_orm::entity::prelude::*;

use super::code;

/// Coding standard holding renal replacement therapy statuses.
pub const RRT_STATUS_STANDARD: &str = "PV_RRTSTATUS";
/// Coding standard holding transplant statuses.
pub const TP_STATUS_STANDARD: &str = "PV_TPSTATUS";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pvdata")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub update_date: Option<DateTime>,
    pub diagnosisdate: Option<Date>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub bloodgroup: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub rrtstatus: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub tpstatus: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient_record::Entity",
        from = "Column::Id",
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

impl Model {
    /// Description of the RRT status from the `PV_RRTSTATUS` code list.
    pub async fn rrtstatus_desc<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Option<String>, DbErr> {
        code::describe(db, Some(RRT_STATUS_STANDARD), self.rrtstatus.as_deref()).await
    }

    /// Description of the transplant status from the `PV_TPSTATUS` code list.
    pub async fn tpstatus_desc<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Option<String>, DbErr> {
        code::describe(db, Some(TP_STATUS_STANDARD), self.tpstatus.as_deref()).await
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PVData({})", self.id)
    }
}

//! Archive of data removed from inbound XML files
//!
//! Children hang off `patient` (`patient_demog`) and are dropped with it by
//! the `ON DELETE CASCADE` foreign keys.

pub mod assessment;
pub mod cause_of_death;
pub mod diagnosis;
pub mod dialysis_prescription;
pub mod patient;
pub mod patient_number_substitute;
pub mod renal_diagnosis;
pub mod treatment;

/// Implements `ActiveModelBehavior` so that `update_date` is refreshed on
/// every update (but not on insert).
macro_rules! touch_update_date {
    () => {
        #[async_trait::async_trait]
        impl ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
            where
                C: ConnectionTrait,
            {
                if !insert {
                    self.update_date =
                        sea_orm::ActiveValue::Set(Some(chrono::Utc::now().naive_utc()));
                }
                Ok(self)
            }
        }
    };
}

pub(crate) use touch_update_date;

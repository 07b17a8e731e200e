//! Database migrations, one `Migrator` per logical database
//!
//! Table DDL, including column defaults, indexes and foreign keys, is derived
//! from the entities. Constraints an entity cannot express (composite unique
//! indexes, column comments, the `gp_type` enum) are added by hand.

use sea_orm::sea_query::extension::postgres::{Type, TypeCreateStatement, TypeDropStatement};
use sea_orm::sea_query::{ColumnType, ForeignKeyCreateStatement};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, EntityName, EntityTrait, IdenStatic,
    Iterable, RelationTrait, Schema,
};
use sea_orm_migration::prelude::*;
use tracing::info;

use super::entity::{empi, errorsdb, stats, ukrdc, xmlarchive, ColumnInfo};
use crate::config::LogicalDatabase;

/// DDL for one entity: its table plus the indexes declared on its columns.
struct EntityTable {
    name: String,
    table: TableCreateStatement,
    indexes: Vec<IndexCreateStatement>,
}

impl EntityTable {
    fn new<E: EntityTrait>(schema: &Schema, entity: E) -> Self {
        Self {
            name: entity.table_name().to_owned(),
            table: schema.create_table_from_entity(entity).if_not_exists().to_owned(),
            indexes: schema
                .create_index_from_entity(entity)
                .into_iter()
                .map(|mut index| index.if_not_exists().to_owned())
                .collect(),
        }
    }

    /// Like [`EntityTable::new`], but on SQLite numeric precision is capped at
    /// the 16 digits sea-query can declare there.
    fn with_decimals<E: EntityTrait>(schema: &Schema, backend: DbBackend, entity: E) -> Self {
        let mut entity_table = Self::new(schema, entity);
        if backend == DbBackend::Sqlite {
            entity_table.table = capped_decimal_table(schema, entity, SQLITE_MAX_DECIMAL_PRECISION);
        }
        entity_table
    }
}

const SQLITE_MAX_DECIMAL_PRECISION: u32 = 16;

/// Rebuilds the entity's `CREATE TABLE` column by column, narrowing any
/// `decimal(p, s)` with `p > max_precision`. Keys and foreign keys are
/// emitted the same way `Schema::create_table_from_entity` does.
fn capped_decimal_table<E: EntityTrait>(
    schema: &Schema,
    entity: E,
    max_precision: u32,
) -> TableCreateStatement {
    let mut table = Table::create();
    table.table(entity.table_ref()).if_not_exists();

    for column in E::Column::iter() {
        let mut def = schema.get_column_def::<E>(column);
        if let Some(ColumnType::Decimal(Some((precision, scale)))) = def.get_column_type().cloned()
        {
            if precision > max_precision {
                def.decimal_len(max_precision, scale);
            }
        }
        table.col(def);
    }

    if E::PrimaryKey::iter().count() > 1 {
        let mut primary_key = Index::create();
        for key in E::PrimaryKey::iter() {
            primary_key.col(key);
        }
        table.primary_key(primary_key.name(format!("pk-{}", entity.table_name())).primary());
    }

    for relation in E::Relation::iter() {
        let relation = relation.def();
        if relation.is_owner {
            continue;
        }
        table.foreign_key(&mut <ForeignKeyCreateStatement as From<_>>::from(relation));
    }

    table
}

/// Creates tables in order; parents must precede children.
async fn create_tables(
    manager: &SchemaManager<'_>,
    tables: Vec<EntityTable>,
) -> Result<(), DbErr> {
    for entity_table in tables {
        manager.create_table(entity_table.table).await?;
        for index in entity_table.indexes {
            manager.create_index(index).await?;
        }
    }
    Ok(())
}

/// Drops tables in reverse creation order.
async fn drop_tables(
    manager: &SchemaManager<'_>,
    tables: Vec<EntityTable>,
) -> Result<(), DbErr> {
    for entity_table in tables.into_iter().rev() {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new(entity_table.name))
                    .if_exists()
                    .to_owned(),
            )
            .await?;
    }
    Ok(())
}

fn comment_sql(table: &str, column: &str, info: ColumnInfo) -> String {
    format!(
        "COMMENT ON COLUMN \"{table}\".\"{column}\" IS '{}'",
        info.description.replace('\'', "''")
    )
}

// ===== ukrdc =====

pub struct UkrdcMigrator;

#[async_trait::async_trait]
impl MigratorTrait for UkrdcMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_ukrdc::Migration)]
    }
}

mod m20250101_000001_create_ukrdc {
    use super::*;
    use ukrdc::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    fn tables(backend: DbBackend) -> Vec<EntityTable> {
        let schema = Schema::new(backend);
        let mut tables = vec![
            EntityTable::new(&schema, gp_info::Entity),
            EntityTable::new(&schema, code::Entity),
            EntityTable::new(&schema, code_exclusion::Entity),
            EntityTable::new(&schema, code_map::Entity),
        ];
        // facility_new carries a text[] column, which only PostgreSQL has.
        if backend == DbBackend::Postgres {
            tables.push(EntityTable::new(&schema, facility::Entity));
        }
        tables.extend([
            EntityTable::new(&schema, rr_codes::Entity),
            EntityTable::new(&schema, locations::Entity),
            EntityTable::with_decimals(&schema, backend, rr_data_definition::Entity),
            EntityTable::new(&schema, modality_codes::Entity),
            EntityTable::new(&schema, satellite_map::Entity),
            EntityTable::new(&schema, facility_relationship::Entity),
            EntityTable::new(&schema, value_exclusion::Entity),
            EntityTable::new(&schema, file::Entity),
            EntityTable::new(&schema, event_control::Entity),
            EntityTable::new(&schema, validation_error::Entity),
            EntityTable::new(&schema, pkb_link::Entity),
            EntityTable::new(&schema, patient_record::Entity),
            EntityTable::new(&schema, patient::Entity),
            EntityTable::new(&schema, name::Entity),
            EntityTable::new(&schema, patient_number::Entity),
            EntityTable::new(&schema, address::Entity),
            EntityTable::new(&schema, contact_detail::Entity),
            EntityTable::new(&schema, family_doctor::Entity),
            EntityTable::new(&schema, cause_of_death::Entity),
            EntityTable::new(&schema, social_history::Entity),
            EntityTable::new(&schema, family_history::Entity),
            EntityTable::new(&schema, observation::Entity),
            EntityTable::new(&schema, opt_out::Entity),
            EntityTable::new(&schema, allergy::Entity),
            EntityTable::new(&schema, diagnosis::Entity),
            EntityTable::new(&schema, renal_diagnosis::Entity),
            EntityTable::new(&schema, dialysis_session::Entity),
            EntityTable::new(&schema, transplant::Entity),
            EntityTable::new(&schema, vascular_access::Entity),
            EntityTable::new(&schema, procedure::Entity),
            EntityTable::new(&schema, encounter::Entity),
            EntityTable::new(&schema, program_membership::Entity),
            EntityTable::new(&schema, clinical_relationship::Entity),
            EntityTable::with_decimals(&schema, backend, medication::Entity),
            EntityTable::new(&schema, survey::Entity),
            EntityTable::new(&schema, question::Entity),
            EntityTable::new(&schema, score::Entity),
            EntityTable::new(&schema, level::Entity),
            EntityTable::new(&schema, document::Entity),
            EntityTable::new(&schema, lab_order::Entity),
            EntityTable::new(&schema, result_item::Entity),
            EntityTable::new(&schema, pv_data::Entity),
            EntityTable::new(&schema, pv_delete::Entity),
            EntityTable::new(&schema, treatment::Entity),
            EntityTable::new(&schema, transplant_list::Entity),
        ]);
        tables
    }

    fn column_comments() -> Vec<String> {
        let mut statements = Vec::new();
        for col in patient::Column::iter() {
            statements.push(comment_sql(patient::Entity.table_name(), col.as_str(), col.info()));
        }
        for col in observation::Column::iter() {
            statements.push(comment_sql(
                observation::Entity.table_name(),
                col.as_str(),
                col.info(),
            ));
        }
        for col in result_item::Column::iter() {
            statements.push(comment_sql(
                result_item::Entity.table_name(),
                col.as_str(),
                col.info(),
            ));
        }
        statements
    }

    /// PostgreSQL only; SQLite stores the enum as text.
    fn create_gp_type() -> TypeCreateStatement {
        Schema::new(DbBackend::Postgres).create_enum_from_active_enum::<gp_info::GpType>()
    }

    fn drop_gp_type() -> TypeDropStatement {
        Type::drop().if_exists().name(Alias::new("gp_type")).to_owned()
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let backend = manager.get_database_backend();
            if backend == DbBackend::Postgres {
                manager.create_type(create_gp_type()).await?;
            }

            create_tables(manager, tables(backend)).await?;

            if backend == DbBackend::Postgres {
                let conn = manager.get_connection();
                for statement in column_comments() {
                    conn.execute_unprepared(&statement).await?;
                }
            }
            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let backend = manager.get_database_backend();
            drop_tables(manager, tables(backend)).await?;
            if backend == DbBackend::Postgres {
                manager.drop_type(drop_gp_type()).await?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use sea_orm::sea_query::{PostgresQueryBuilder, SqliteQueryBuilder};

        fn table_sql(backend: DbBackend, name: &str) -> Option<String> {
            let table = tables(backend).into_iter().find(|t| t.name == name)?;
            Some(match backend {
                DbBackend::Postgres => table.table.to_string(PostgresQueryBuilder),
                _ => table.table.to_string(SqliteQueryBuilder),
            })
        }

        #[test]
        fn wide_decimals_keep_precision_on_postgres() {
            let medication = table_sql(DbBackend::Postgres, "medication").unwrap_or_default();
            assert!(medication.contains(r#""dosequantity" decimal(19, 2)"#), "{medication}");

            let definition =
                table_sql(DbBackend::Postgres, "rr_data_definition").unwrap_or_default();
            assert!(definition.contains(r#""load_min" decimal(38, 4)"#), "{definition}");
        }

        #[test]
        fn wide_decimals_are_narrowed_on_sqlite() {
            let medication = table_sql(DbBackend::Sqlite, "medication").unwrap_or_default();
            assert!(medication.contains(r#""dosequantity" real(16, 2)"#), "{medication}");
            assert!(
                medication.contains(r#"FOREIGN KEY ("pid") REFERENCES "patientrecord" ("pid")"#),
                "{medication}"
            );
            assert!(medication.contains(r#""id" varchar"#), "{medication}");
            assert!(medication.contains("PRIMARY KEY"), "{medication}");

            let definition = table_sql(DbBackend::Sqlite, "rr_data_definition").unwrap_or_default();
            for column in ["load_min", "load_max", "remove_min", "remove_max"] {
                assert!(
                    definition.contains(&format!(r#""{column}" real(16, 4)"#)),
                    "{definition}"
                );
            }
            assert!(definition.contains(r#""mandatory" real(1, 0)"#), "{definition}");
        }

        #[test]
        fn facility_table_exists_only_on_postgres() {
            assert_eq!(table_sql(DbBackend::Sqlite, "facility_new"), None);

            let facility = table_sql(DbBackend::Postgres, "facility_new").unwrap_or_default();
            assert!(facility.contains(r#""pkbmsgexclusions" text[]"#), "{facility}");
            assert!(
                facility.contains(
                    r#"FOREIGN KEY ("facilitycode", "facilitycodestd") REFERENCES "code_list" ("code", "coding_standard") ON DELETE RESTRICT ON UPDATE CASCADE"#
                ),
                "{facility}"
            );
            assert!(
                facility.contains(r#"PRIMARY KEY ("facilitycode", "facilitycodestd")"#),
                "{facility}"
            );
        }

        #[test]
        fn gp_type_enum_ddl() {
            assert_eq!(
                create_gp_type().to_string(PostgresQueryBuilder),
                r#"CREATE TYPE "gp_type" AS ENUM ('GP', 'PRACTICE')"#
            );
            assert_eq!(
                drop_gp_type().to_string(PostgresQueryBuilder),
                r#"DROP TYPE IF EXISTS "gp_type""#
            );
        }

        #[test]
        fn column_comments_cover_labelled_tables() {
            let comments = column_comments();
            let expected = patient::Column::iter().count()
                + observation::Column::iter().count()
                + result_item::Column::iter().count();
            assert_eq!(comments.len(), expected);
            assert!(comments
                .iter()
                .any(|c| c.starts_with(r#"COMMENT ON COLUMN "patient"."pid" IS '"#)));
            assert!(comments
                .iter()
                .any(|c| c.starts_with(r#"COMMENT ON COLUMN "resultitem"."orderid" IS '"#)));
        }
    }
}

// ===== empi =====

pub struct EmpiMigrator;

#[async_trait::async_trait]
impl MigratorTrait for EmpiMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_empi::Migration)]
    }
}

mod m20250101_000001_create_empi {
    use super::*;
    use empi::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    fn tables(backend: DbBackend) -> Vec<EntityTable> {
        let schema = Schema::new(backend);
        vec![
            EntityTable::new(&schema, master_record::Entity),
            EntityTable::new(&schema, person::Entity),
            EntityTable::new(&schema, link_record::Entity),
            EntityTable::new(&schema, work_item::Entity),
            EntityTable::new(&schema, audit::Entity),
            EntityTable::new(&schema, pid_xref::Entity),
        ]
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            create_tables(manager, tables(manager.get_database_backend())).await?;

            manager
                .create_index(
                    Index::create()
                        .name("ix_person_mrn")
                        .table(person::Entity)
                        .col(person::Column::Originator)
                        .col(person::Column::Localid)
                        .col(person::Column::LocalidType)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("person_id_key")
                        .table(person::Entity)
                        .col(person::Column::Id)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("pidxref_compound")
                        .table(pid_xref::Entity)
                        .col(pid_xref::Column::SendingFacility)
                        .col(pid_xref::Column::SendingExtract)
                        .col(pid_xref::Column::Localid)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            drop_tables(manager, tables(manager.get_database_backend())).await
        }
    }
}

// ===== errorsdb =====

pub struct ErrorsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ErrorsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_errorsdb::Migration)]
    }
}

mod m20250101_000001_create_errorsdb {
    use super::*;
    use errorsdb::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    fn tables(backend: DbBackend) -> Vec<EntityTable> {
        let schema = Schema::new(backend);
        vec![
            EntityTable::new(&schema, channel::Entity),
            EntityTable::new(&schema, message::Entity),
            EntityTable::new(&schema, facility::Entity),
            EntityTable::new(&schema, latest::Entity),
        ]
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            create_tables(manager, tables(manager.get_database_backend())).await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            drop_tables(manager, tables(manager.get_database_backend())).await
        }
    }
}

// ===== stats =====

pub struct StatsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for StatsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_stats::Migration)]
    }
}

mod m20250101_000001_create_stats {
    use super::*;
    use stats::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    fn tables(backend: DbBackend) -> Vec<EntityTable> {
        let schema = Schema::new(backend);
        vec![
            EntityTable::new(&schema, error_history::Entity),
            EntityTable::new(&schema, multiple_ukrdcid::Entity),
            EntityTable::new(&schema, last_run_times::Entity),
        ]
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            create_tables(manager, tables(manager.get_database_backend())).await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            drop_tables(manager, tables(manager.get_database_backend())).await
        }
    }
}

// ===== xmlarchive =====

pub struct XmlArchiveMigrator;

#[async_trait::async_trait]
impl MigratorTrait for XmlArchiveMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_xmlarchive::Migration)]
    }
}

mod m20250101_000001_create_xmlarchive {
    use super::*;
    use xmlarchive::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    fn tables(backend: DbBackend) -> Vec<EntityTable> {
        let schema = Schema::new(backend);
        vec![
            EntityTable::new(&schema, patient::Entity),
            EntityTable::new(&schema, treatment::Entity),
            EntityTable::new(&schema, assessment::Entity),
            EntityTable::new(&schema, dialysis_prescription::Entity),
            EntityTable::new(&schema, diagnosis::Entity),
            EntityTable::new(&schema, cause_of_death::Entity),
            EntityTable::new(&schema, renal_diagnosis::Entity),
            EntityTable::new(&schema, patient_number_substitute::Entity),
        ]
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            create_tables(manager, tables(manager.get_database_backend())).await?;

            manager
                .create_index(
                    Index::create()
                        .name("patient_demog_sendingfacility_nationalid_numbertype_organiz_key")
                        .table(patient::Entity)
                        .col(patient::Column::Sendingfacility)
                        .col(patient::Column::Nationalid)
                        .col(patient::Column::Numbertype)
                        .col(patient::Column::Organization)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            drop_tables(manager, tables(manager.get_database_backend())).await
        }
    }
}

// ===== dispatch =====

/// Migration commands understood by [`run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MigrationCommand {
    /// Apply all pending migrations.
    Up,
    /// Roll back the most recent migration.
    Down,
    /// Log applied and pending migrations.
    Status,
    /// Drop everything and re-apply from scratch.
    Fresh,
}

macro_rules! dispatch {
    ($migrator:ty, $db:expr, $command:expr) => {
        match $command {
            MigrationCommand::Up => <$migrator>::up($db, None).await,
            MigrationCommand::Down => <$migrator>::down($db, Some(1)).await,
            MigrationCommand::Status => <$migrator>::status($db).await,
            MigrationCommand::Fresh => <$migrator>::fresh($db).await,
        }
    };
}

/// Runs `command` against `database` using the migrator for that database.
pub async fn run(
    db: &DatabaseConnection,
    database: LogicalDatabase,
    command: MigrationCommand,
) -> Result<(), DbErr> {
    info!(database = %database, ?command, "running migrations");
    match database {
        LogicalDatabase::Ukrdc => dispatch!(UkrdcMigrator, db, command),
        LogicalDatabase::Empi => dispatch!(EmpiMigrator, db, command),
        LogicalDatabase::Errors => dispatch!(ErrorsMigrator, db, command),
        LogicalDatabase::Stats => dispatch!(StatsMigrator, db, command),
        LogicalDatabase::XmlArchive => dispatch!(XmlArchiveMigrator, db, command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_sql_escapes_quotes() {
        let info = ColumnInfo::new("Name", "Patient's name as sent");
        assert_eq!(
            comment_sql("patient", "name", info),
            r#"COMMENT ON COLUMN "patient"."name" IS 'Patient''s name as sent'"#
        );
    }
}

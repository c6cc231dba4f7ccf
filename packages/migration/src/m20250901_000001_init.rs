use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Query, Table};

use crate::SEED_CATEGORIES;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Type,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Question,
    Answer,
    Category,
    Difficulty,
}

#[derive(Iden)]
enum Drinks {
    Table,
    Id,
    Title,
    Recipe,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // categories
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Categories::Type).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_categories_type")
                    .table(Categories::Table)
                    .col(Categories::Type)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // questions
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Questions::Question).text().not_null())
                    .col(ColumnDef::new(Questions::Answer).text().not_null())
                    .col(ColumnDef::new(Questions::Category).big_integer().not_null())
                    .col(ColumnDef::new(Questions::Difficulty).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_category")
                            .from(Questions::Table, Questions::Category)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_questions_category")
                    .table(Questions::Table)
                    .col(Questions::Category)
                    .to_owned(),
            )
            .await?;

        // drinks
        manager
            .create_table(
                Table::create()
                    .table(Drinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Drinks::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Drinks::Title).string_len(80).not_null())
                    .col(ColumnDef::new(Drinks::Recipe).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_drinks_title")
                    .table(Drinks::Table)
                    .col(Drinks::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // seed the fixed category set; ids follow insertion order
        let mut seed = Query::insert();
        seed.into_table(Categories::Table).columns([Categories::Type]);
        for label in SEED_CATEGORIES {
            seed.values_panic([label.into()]);
        }
        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drinks::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

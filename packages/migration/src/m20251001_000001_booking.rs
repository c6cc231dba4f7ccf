use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Venues {
    Table,
    Id,
    Name,
    City,
    State,
    Address,
    Phone,
    Genres,
    ImageLink,
    FacebookLink,
    Website,
    SeekingTalent,
}

#[derive(Iden)]
enum Artists {
    Table,
    Id,
    Name,
    City,
    State,
    Phone,
    Genres,
    ImageLink,
    FacebookLink,
    Website,
    SeekingVenue,
}

#[derive(Iden)]
enum Shows {
    Table,
    Id,
    StartTime,
}

#[derive(Iden)]
enum ShowArtists {
    Table,
    ShowId,
    ArtistId,
}

#[derive(Iden)]
enum ShowVenues {
    Table,
    ShowId,
    VenueId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // venues
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venues::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Venues::Name).string().not_null())
                    .col(ColumnDef::new(Venues::City).string_len(120).not_null())
                    .col(ColumnDef::new(Venues::State).string_len(120).not_null())
                    .col(ColumnDef::new(Venues::Address).string_len(120).not_null())
                    .col(ColumnDef::new(Venues::Phone).string_len(120).null())
                    .col(ColumnDef::new(Venues::Genres).text().not_null())
                    .col(ColumnDef::new(Venues::ImageLink).string_len(500).null())
                    .col(ColumnDef::new(Venues::FacebookLink).string_len(500).null())
                    .col(ColumnDef::new(Venues::Website).string_len(500).null())
                    .col(
                        ColumnDef::new(Venues::SeekingTalent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // artists
        manager
            .create_table(
                Table::create()
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artists::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Artists::Name).string().not_null())
                    .col(ColumnDef::new(Artists::City).string_len(120).not_null())
                    .col(ColumnDef::new(Artists::State).string_len(120).not_null())
                    .col(ColumnDef::new(Artists::Phone).string_len(120).null())
                    .col(ColumnDef::new(Artists::Genres).text().not_null())
                    .col(ColumnDef::new(Artists::ImageLink).string_len(500).null())
                    .col(ColumnDef::new(Artists::FacebookLink).string_len(500).null())
                    .col(ColumnDef::new(Artists::Website).string_len(500).null())
                    .col(
                        ColumnDef::new(Artists::SeekingVenue)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // shows
        manager
            .create_table(
                Table::create()
                    .table(Shows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shows::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Shows::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // show <-> artist
        manager
            .create_table(
                Table::create()
                    .table(ShowArtists::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ShowArtists::ShowId).big_integer().not_null())
                    .col(ColumnDef::new(ShowArtists::ArtistId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ShowArtists::ShowId)
                            .col(ShowArtists::ArtistId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_artists_show")
                            .from(ShowArtists::Table, ShowArtists::ShowId)
                            .to(Shows::Table, Shows::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_artists_artist")
                            .from(ShowArtists::Table, ShowArtists::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_show_artists_show")
                    .table(ShowArtists::Table)
                    .col(ShowArtists::ShowId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_show_artists_artist")
                    .table(ShowArtists::Table)
                    .col(ShowArtists::ArtistId)
                    .to_owned(),
            )
            .await?;

        // show <-> venue
        manager
            .create_table(
                Table::create()
                    .table(ShowVenues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ShowVenues::ShowId).big_integer().not_null())
                    .col(ColumnDef::new(ShowVenues::VenueId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ShowVenues::ShowId)
                            .col(ShowVenues::VenueId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_venues_show")
                            .from(ShowVenues::Table, ShowVenues::ShowId)
                            .to(Shows::Table, Shows::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_venues_venue")
                            .from(ShowVenues::Table, ShowVenues::VenueId)
                            .to(Venues::Table, Venues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_show_venues_show")
                    .table(ShowVenues::Table)
                    .col(ShowVenues::ShowId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_show_venues_venue")
                    .table(ShowVenues::Table)
                    .col(ShowVenues::VenueId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShowVenues::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShowArtists::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Shows::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artists::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venues::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

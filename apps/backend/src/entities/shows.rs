use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub start_time: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::show_artists::Entity")]
    ShowArtist,
    #[sea_orm(has_one = "super::show_venues::Entity")]
    ShowVenue,
}

impl Related<super::show_artists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowArtist.def()
    }
}

impl Related<super::show_venues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowVenue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

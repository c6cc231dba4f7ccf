use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    /// Comma-joined genre labels
    #[sea_orm(column_type = "Text")]
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show_artists::Entity")]
    ShowArtists,
}

impl Related<super::show_artists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowArtists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row of the `record` table; serializes as `{"id","name","email"}`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Name/email pair accepted by `/create`; the strings are stored as given.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRecord {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RecordFilter {
    Id(i64),
    Name(String),
    Email(String),
}

impl RecordFilter {
    pub fn field(&self) -> &'static str {
        match self {
            RecordFilter::Id(_) => "id",
            RecordFilter::Name(_) => "name",
            RecordFilter::Email(_) => "email",
        }
    }

    pub fn matches(&self, rec: &Model) -> bool {
        match self {
            RecordFilter::Id(id) => i64::from(rec.id) == *id,
            RecordFilter::Name(n) => rec.name == *n,
            RecordFilter::Email(e) => rec.email == *e,
        }
    }
}

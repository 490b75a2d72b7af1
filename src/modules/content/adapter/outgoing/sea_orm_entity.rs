use crate::content::application::ports::outgoing::{Document, FieldMap};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

// One table holds every collection; records are flat JSON objects and
// the collection name is a plain discriminator column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub collection: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub fields: JsonValue,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Document {
        let fields = match &self.fields {
            JsonValue::Object(map) => map.clone(),
            _ => FieldMap::new(),
        };

        Document {
            id: self.id,
            created_at: self.created_at.to_utc(),
            fields,
        }
    }

    pub fn from_fields(collection: &str, fields: FieldMap) -> Self {
        Self {
            id: Uuid::new_v4(),
            collection: collection.to_string(),
            fields: JsonValue::Object(fields),
            created_at: chrono::Utc::now().into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use models::record::{self, NewRecord, RecordFilter};
use crate::errors::ServiceError;

/// Insert a record; ids come from the table's autoincrement, so with no
/// deletes they equal the row count at insertion plus one.
pub async fn create_record(db: &DatabaseConnection, new: NewRecord) -> Result<record::Model, ServiceError> {
    let am = record::ActiveModel {
        id: NotSet,
        name: Set(new.name),
        email: Set(new.email),
    };
    am.insert(db).await.map_err(ServiceError::db)
}

pub async fn find_records(db: &DatabaseConnection, filter: RecordFilter) -> Result<Vec<record::Model>, ServiceError> {
    let cond = match filter {
        RecordFilter::Id(id) => record::Column::Id.eq(id),
        RecordFilter::Name(name) => record::Column::Name.eq(name),
        RecordFilter::Email(email) => record::Column::Email.eq(email),
    };
    record::Entity::find()
        .filter(cond)
        .order_by_asc(record::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

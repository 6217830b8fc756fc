use crate::db::connect_memory;
use crate::number::Number;
use crate::{record, sum};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use anyhow::Result;
use migration::MigratorTrait;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn sum_row(new: sum::NewSum) -> sum::ActiveModel {
    let (num1, num1_int) = new.num1.to_stored();
    let (num2, num2_int) = new.num2.to_stored();
    let (result, result_int) = new.result.to_stored();
    sum::ActiveModel {
        id: NotSet,
        num1: Set(num1),
        num1_int: Set(num1_int),
        num2: Set(num2),
        num2_int: Set(num2_int),
        result: Set(result),
        result_int: Set(result_int),
    }
}

/// Ids are assigned by the database and increase with each insert
#[tokio::test]
async fn test_sum_insert_assigns_ids() -> Result<()> {
    let db = setup_test_db().await?;

    let a = sum_row(sum::NewSum::from_operands(Number::Int(2), Number::Int(2))).insert(&db).await?;
    let b = sum_row(sum::NewSum::from_operands(Number::Int(3), Number::Int(1))).insert(&db).await?;
    assert!(b.id > a.id);
    assert_eq!(a.result, 4.0);
    assert_eq!(a.result_int, Some(4));
    Ok(())
}

/// Filtering on the result column returns exactly the matching rows
#[tokio::test]
async fn test_sum_filter_by_result() -> Result<()> {
    let db = setup_test_db().await?;

    for (x, y) in [(2, 2), (3, 1), (1, 2)] {
        sum_row(sum::NewSum::from_operands(Number::Int(x), Number::Int(y))).insert(&db).await?;
    }

    let rows = sum::Entity::find()
        .filter(sum::Column::Result.eq(4.0))
        .order_by_asc(sum::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(rows.len(), 2);
    let recs: Vec<sum::SumRecord> = rows.into_iter().map(Into::into).collect();
    assert!(recs.iter().all(|r| r.result == Number::Int(4) && r.result.is_int()));

    let none = sum::Entity::find().filter(sum::Column::Result.eq(999.0)).all(&db).await?;
    assert!(none.is_empty());
    Ok(())
}

/// Each field keeps its own kind after a round trip through the table
#[tokio::test]
async fn test_sum_mixed_round_trip() -> Result<()> {
    let db = setup_test_db().await?;
    let saved = sum_row(sum::NewSum::from_operands(Number::Float(1.5), Number::Int(2))).insert(&db).await?;
    let found = sum::Entity::find_by_id(saved.id).one(&db).await?.expect("row");
    let rec = sum::SumRecord::from(found);
    assert_eq!(rec.result, Number::Float(3.5));
    assert!(!rec.num1.is_int());
    assert!(rec.num2.is_int());
    assert!(!rec.result.is_int());
    assert_eq!(
        serde_json::to_value(rec)?,
        serde_json::json!({"id": saved.id, "num1": 1.5, "num2": 2, "result": 3.5})
    );
    Ok(())
}

/// Integers past 2^53 come back unchanged
#[tokio::test]
async fn test_sum_large_integer_round_trip() -> Result<()> {
    let db = setup_test_db().await?;
    let big = 9_007_199_254_740_993_i64;
    let saved = sum_row(sum::NewSum::from_operands(Number::Int(big), Number::Int(0))).insert(&db).await?;
    let found = sum::Entity::find_by_id(saved.id).one(&db).await?.expect("row");
    let rec = sum::SumRecord::from(found);
    assert_eq!(serde_json::to_value(rec.result)?, serde_json::json!(big));
    assert_eq!(rec.num1.to_string(), big.to_string());
    Ok(())
}

/// Records table stores name/email verbatim
#[tokio::test]
async fn test_record_insert_and_find() -> Result<()> {
    let db = setup_test_db().await?;
    let am = record::ActiveModel {
        id: NotSet,
        name: Set("John Doe".into()),
        email: Set("johndoe@example.com".into()),
    };
    let saved = am.insert(&db).await?;
    assert_eq!(saved.id, 1);

    let found = record::Entity::find()
        .filter(record::Column::Email.eq("johndoe@example.com"))
        .all(&db)
        .await?;
    assert_eq!(found, vec![saved]);
    Ok(())
}

use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use models::number::Number;
use models::sum::{self, NewSum, SumFilter};
use crate::errors::ServiceError;

/// Insert a computed sum; the database assigns the id.
pub async fn create_sum(db: &DatabaseConnection, new: NewSum) -> Result<sum::Model, ServiceError> {
    let (num1, num1_int) = new.num1.to_stored();
    let (num2, num2_int) = new.num2.to_stored();
    let (result, result_int) = new.result.to_stored();
    let am = sum::ActiveModel {
        id: NotSet,
        num1: Set(num1),
        num1_int: Set(num1_int),
        num2: Set(num2),
        num2_int: Set(num2_int),
        result: Set(result),
        result_int: Set(result_int),
    };
    am.insert(db).await.map_err(ServiceError::db)
}

/// Exact equality against a (double, bigint) column pair.
///
/// Integer rows compare on the bigint column only; float rows (NULL bigint)
/// compare on the double, and only when the value has an exact twin there.
fn number_eq(float_col: sum::Column, int_col: sum::Column, v: Number) -> Condition {
    let float_row = |f: f64| Condition::all().add(int_col.is_null()).add(float_col.eq(f));
    match v {
        Number::Int(i) => {
            let cond = Condition::any().add(int_col.eq(i));
            match Number::exact_f64(i) {
                Some(f) => cond.add(float_row(f)),
                None => cond,
            }
        }
        Number::Float(f) => {
            let cond = Condition::any().add(float_row(f));
            match Number::exact_i64(f) {
                Some(i) => cond.add(int_col.eq(i)),
                None => cond,
            }
        }
    }
}

/// All sums whose field equals the filter value, oldest first.
pub async fn find_sums(db: &DatabaseConnection, filter: SumFilter) -> Result<Vec<sum::Model>, ServiceError> {
    let cond = match filter {
        SumFilter::Id(id) => Condition::all().add(sum::Column::Id.eq(id)),
        SumFilter::Num1(v) => number_eq(sum::Column::Num1, sum::Column::Num1Int, v),
        SumFilter::Num2(v) => number_eq(sum::Column::Num2, sum::Column::Num2Int, v),
        SumFilter::Result(v) => number_eq(sum::Column::Result, sum::Column::ResultInt, v),
    };
    sum::Entity::find()
        .filter(cond)
        .order_by_asc(sum::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::number::Number;

/// Row of the `sum` table. Every number has a double column and a nullable
/// `*_int` column that holds the exact value when it is an integer; see
/// [`SumRecord`] for the shape served over HTTP.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sum")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub num1: f64,
    pub num1_int: Option<i64>,
    pub num2: f64,
    pub num2_int: Option<i64>,
    pub result: f64,
    pub result_int: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Operands plus their derived result, before an id is assigned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewSum {
    pub num1: Number,
    pub num2: Number,
    pub result: Number,
}

impl NewSum {
    /// Builds the record from its operands; `result` is fixed here and never recomputed.
    pub fn from_operands(num1: Number, num2: Number) -> Self {
        Self { num1, num2, result: num1.add(num2) }
    }
}

/// A stored sum as returned to clients: `{"id","num1","num2","result"}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SumRecord {
    pub id: i64,
    pub num1: Number,
    pub num2: Number,
    pub result: Number,
}

impl SumRecord {
    pub fn new(id: i64, sum: NewSum) -> Self {
        Self { id, num1: sum.num1, num2: sum.num2, result: sum.result }
    }
}

impl From<Model> for SumRecord {
    fn from(m: Model) -> Self {
        Self {
            id: i64::from(m.id),
            num1: Number::from_stored(m.num1, m.num1_int),
            num2: Number::from_stored(m.num2, m.num2_int),
            result: Number::from_stored(m.result, m.result_int),
        }
    }
}

/// Field/value pair for equality lookups over stored sums.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SumFilter {
    Id(i64),
    Num1(Number),
    Num2(Number),
    Result(Number),
}

impl SumFilter {
    pub fn field(&self) -> &'static str {
        match self {
            SumFilter::Id(_) => "id",
            SumFilter::Num1(_) => "num1",
            SumFilter::Num2(_) => "num2",
            SumFilter::Result(_) => "result",
        }
    }

    pub fn matches(&self, rec: &SumRecord) -> bool {
        match *self {
            SumFilter::Id(id) => rec.id == id,
            SumFilter::Num1(v) => rec.num1 == v,
            SumFilter::Num2(v) => rec.num2 == v,
            SumFilter::Result(v) => rec.result == v,
        }
    }
}

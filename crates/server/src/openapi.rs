use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

/// Integer or decimal; integer inputs give an integer result.
#[derive(ToSchema)]
pub struct SumRequestDoc { pub num1: f64, pub num2: f64 }

#[derive(ToSchema)]
pub struct SumRecordDoc { pub id: i64, pub num1: f64, pub num2: f64, pub result: f64 }

#[derive(ToSchema)]
pub struct RecordRequestDoc { pub name: String, pub email: String }

#[derive(ToSchema)]
pub struct RecordDoc { pub id: i64, pub name: String, pub email: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::sums::create_sum,
        crate::routes::sums::sums_by_result,
        crate::routes::records::create_record,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            SumRequestDoc,
            SumRecordDoc,
            RecordRequestDoc,
            RecordDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "sum"),
        (name = "record")
    )
)]
pub struct ApiDoc;

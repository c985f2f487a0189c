use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Town {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Teheran")]
    pub name: String,
    #[schema(example = 123000)]
    pub population: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTownRequest {
    #[schema(example = "Damascus")]
    pub name: String,
    #[schema(example = 344453)]
    pub population: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTownRequest {
    #[schema(example = 1300)]
    pub population: i64,
}

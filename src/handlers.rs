pub mod branch;
pub mod franchise;
pub mod product;

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

// Query `?newName=` compartilhada pelas rotas de renomear.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RenameParams {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub new_name: String,
}

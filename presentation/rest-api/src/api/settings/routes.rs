use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::settings::use_cases::get::GetSettingsUseCase;
use business::domain::settings::use_cases::update::UpdateSettingsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::settings::dto::{ShopSettingsResponse, UpdateSettingsRequest};
use crate::api::tags::ApiTags;

pub struct SettingsApi {
    get_use_case: Arc<dyn GetSettingsUseCase>,
    update_use_case: Arc<dyn UpdateSettingsUseCase>,
}

impl SettingsApi {
    pub fn new(
        get_use_case: Arc<dyn GetSettingsUseCase>,
        update_use_case: Arc<dyn UpdateSettingsUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            update_use_case,
        }
    }
}

/// Shop settings API
///
/// Storefront presentation and ordering configuration.
#[OpenApi]
impl SettingsApi {
    /// Get shop settings
    ///
    /// Returns the stored settings, falling back to defaults when none have
    /// been saved yet.
    #[oai(path = "/settings", method = "get", tag = "ApiTags::Settings")]
    async fn get_settings(&self) -> GetSettingsResponse {
        match self.get_use_case.execute().await {
            Ok(settings) => GetSettingsResponse::Ok(Json(settings.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSettingsResponse::InternalError(json)
            }
        }
    }

    /// Update shop settings
    ///
    /// Applies a partial update and returns the resulting settings. The
    /// order handle is normalized (leading @ stripped) and may never end up
    /// empty.
    #[oai(path = "/settings", method = "put", tag = "ApiTags::Settings")]
    async fn update_settings(&self, body: Json<UpdateSettingsRequest>) -> UpdateSettingsResponse {
        match self.update_use_case.execute(body.0.into()).await {
            Ok(settings) => UpdateSettingsResponse::Ok(Json(settings.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateSettingsResponse::BadRequest(json),
                    _ => UpdateSettingsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<ShopSettingsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<ShopSettingsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

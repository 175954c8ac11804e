use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::address::{Address, NewAddress, UpdateAddress};
use crate::dto::sanitize_inline_text;
use crate::services::{ServiceError, ServiceResult};

/// Transport representation of an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub address_id: i32,
    pub street: String,
    pub building_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

impl From<Address> for AddressDto {
    fn from(value: Address) -> Self {
        Self {
            address_id: value.id,
            street: value.street,
            building_name: value.building_name,
            city: value.city,
            state: value.state,
            country: value.country,
            pincode: value.pincode,
        }
    }
}

/// Request body for creating or updating an address.
///
/// Minimum lengths mirror the published API contract for each field.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    #[validate(length(min = 5, message = "street name must be at least 5 characters"))]
    pub street: String,
    #[validate(length(min = 5, message = "building name must be at least 5 characters"))]
    pub building_name: String,
    #[validate(length(min = 4, message = "city name must be at least 4 characters"))]
    pub city: String,
    #[validate(length(min = 2, message = "state name must be at least 2 characters"))]
    pub state: String,
    #[validate(length(min = 2, message = "country name must be at least 2 characters"))]
    pub country: String,
    #[validate(length(min = 5, message = "pincode must be at least 5 characters"))]
    pub pincode: String,
}

impl AddressPayload {
    fn sanitized(self) -> ServiceResult<Self> {
        let sanitized = Self {
            street: sanitize_inline_text(&self.street),
            building_name: sanitize_inline_text(&self.building_name),
            city: sanitize_inline_text(&self.city),
            state: sanitize_inline_text(&self.state),
            country: sanitize_inline_text(&self.country),
            pincode: sanitize_inline_text(&self.pincode),
        };
        sanitized.validate().map_err(ServiceError::from)?;
        Ok(sanitized)
    }

    pub fn into_new_address(self, user_id: i32) -> ServiceResult<NewAddress> {
        let payload = self.sanitized()?;
        Ok(NewAddress::new(
            user_id,
            payload.street,
            payload.building_name,
            payload.city,
            payload.state,
            payload.country,
            payload.pincode,
        ))
    }

    pub fn into_update_address(self) -> ServiceResult<UpdateAddress> {
        let payload = self.sanitized()?;
        Ok(UpdateAddress::new(
            payload.street,
            payload.building_name,
            payload.city,
            payload.state,
            payload.country,
            payload.pincode,
        ))
    }
}

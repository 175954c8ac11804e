use crate::auth::AuthenticatedUser;
use crate::dto::address::{AddressDto, AddressPayload};
use crate::repository::{AddressReader, AddressWriter, RepositoryError, UserReader};
use crate::services::{ServiceError, ServiceResult};

/// Creates an address owned by the logged-in user.
pub fn create_address<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payload: AddressPayload,
) -> ServiceResult<AddressDto>
where
    R: UserReader + AddressWriter + ?Sized,
{
    // The session only carries an id; the user row must still exist.
    let owner = repo
        .get_user_by_id(user.user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)?;

    let new_address = payload.into_new_address(owner.id)?;

    let created = repo
        .create_address(&new_address)
        .map_err(ServiceError::from)?;

    Ok(created.into())
}

/// Returns every stored address (admin listing).
pub fn list_addresses<R>(repo: &R) -> ServiceResult<Vec<AddressDto>>
where
    R: AddressReader + ?Sized,
{
    let addresses = repo.list_addresses().map_err(ServiceError::from)?;
    Ok(addresses.into_iter().map(AddressDto::from).collect())
}

/// Returns one address by id.
pub fn get_address<R>(repo: &R, address_id: i32) -> ServiceResult<AddressDto>
where
    R: AddressReader + ?Sized,
{
    let address = repo
        .get_address_by_id(address_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("address {address_id} not found")))?;

    Ok(address.into())
}

/// Returns the logged-in user's addresses; none is an empty list, not a
/// failure.
pub fn list_user_addresses<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<Vec<AddressDto>>
where
    R: AddressReader + ?Sized,
{
    let addresses = repo
        .list_addresses_by_user(user.user_id)
        .map_err(ServiceError::from)?;

    Ok(addresses.into_iter().map(AddressDto::from).collect())
}

/// Overwrites all six fields of an existing address.
pub fn update_address<R>(
    repo: &R,
    address_id: i32,
    payload: AddressPayload,
) -> ServiceResult<AddressDto>
where
    R: AddressWriter + ?Sized,
{
    let update = payload.into_update_address()?;

    let updated = repo
        .update_address(address_id, &update)
        .map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("address {address_id} not found"))
            }
            other => ServiceError::from(other),
        })?;

    Ok(updated.into())
}

/// Deletes an address, returning its prior state.
///
/// Ownership is one-directional, so removing the row is the whole job;
/// there is no user-side collection to fix up.
pub fn delete_address<R>(repo: &R, address_id: i32) -> ServiceResult<AddressDto>
where
    R: AddressReader + AddressWriter + ?Sized,
{
    let address = repo
        .get_address_by_id(address_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("address {address_id} not found")))?;

    repo.delete_address(address_id).map_err(ServiceError::from)?;

    Ok(address.into())
}

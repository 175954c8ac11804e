use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::address::{
    Address as DomainAddress, NewAddress as DomainNewAddress, UpdateAddress as DomainUpdateAddress,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::addresses)]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    pub street: String,
    pub building_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::addresses)]
pub struct NewAddress<'a> {
    pub user_id: i32,
    pub street: &'a str,
    pub building_name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub pincode: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::addresses)]
pub struct UpdateAddress<'a> {
    pub street: &'a str,
    pub building_name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub pincode: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Address> for DomainAddress {
    fn from(value: Address) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            street: value.street,
            building_name: value.building_name,
            city: value.city,
            state: value.state,
            country: value.country,
            pincode: value.pincode,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewAddress> for NewAddress<'a> {
    fn from(value: &'a DomainNewAddress) -> Self {
        Self {
            user_id: value.user_id,
            street: value.street.as_str(),
            building_name: value.building_name.as_str(),
            city: value.city.as_str(),
            state: value.state.as_str(),
            country: value.country.as_str(),
            pincode: value.pincode.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateAddress> for UpdateAddress<'a> {
    fn from(value: &'a DomainUpdateAddress) -> Self {
        Self {
            street: value.street.as_str(),
            building_name: value.building_name.as_str(),
            city: value.city.as_str(),
            state: value.state.as_str(),
            country: value.country.as_str(),
            pincode: value.pincode.as_str(),
            updated_at: value.updated_at,
        }
    }
}

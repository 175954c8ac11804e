use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub category_id: i32,
    pub seller_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub quantity: i32,
    pub price: f64,
    pub discount: f64,
    pub special_price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub category_id: i32,
    pub seller_id: Option<i32>,
    pub name: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    pub quantity: i32,
    pub price: f64,
    pub discount: f64,
    pub special_price: f64,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub quantity: i32,
    pub price: f64,
    pub discount: f64,
    pub special_price: f64,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            category_id: value.category_id,
            seller_id: value.seller_id,
            name: value.name,
            description: value.description,
            image_url: value.image_url,
            quantity: value.quantity,
            price: value.price,
            discount: value.discount,
            special_price: value.special_price,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            category_id: value.category_id,
            seller_id: value.seller_id,
            name: value.name.as_str(),
            description: value.description.as_str(),
            image_url: value.image_url.as_str(),
            quantity: value.quantity,
            price: value.price,
            discount: value.discount,
            special_price: value.special_price,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_str(),
            quantity: value.quantity,
            price: value.price,
            discount: value.discount,
            special_price: value.special_price,
            updated_at: value.updated_at,
        }
    }
}

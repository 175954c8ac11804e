use diesel::prelude::*;

use crate::domain::address::{
    Address as DomainAddress, NewAddress as DomainNewAddress, UpdateAddress as DomainUpdateAddress,
};
use crate::models::address::{
    Address as DbAddress, NewAddress as DbNewAddress, UpdateAddress as DbUpdateAddress,
};
use crate::repository::{
    AddressReader, AddressWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl AddressReader for DieselRepository {
    fn get_address_by_id(&self, address_id: i32) -> RepositoryResult<Option<DomainAddress>> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;

        let address = addresses::table
            .filter(addresses::id.eq(address_id))
            .first::<DbAddress>(&mut conn)
            .optional()?;

        Ok(address.map(DomainAddress::from))
    }

    fn list_addresses(&self) -> RepositoryResult<Vec<DomainAddress>> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;

        let addresses = addresses::table
            .order(addresses::id.asc())
            .load::<DbAddress>(&mut conn)?;

        Ok(addresses.into_iter().map(DomainAddress::from).collect())
    }

    fn list_addresses_by_user(&self, user_id: i32) -> RepositoryResult<Vec<DomainAddress>> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;

        let addresses = addresses::table
            .filter(addresses::user_id.eq(user_id))
            .order(addresses::id.asc())
            .load::<DbAddress>(&mut conn)?;

        Ok(addresses.into_iter().map(DomainAddress::from).collect())
    }
}

impl AddressWriter for DieselRepository {
    fn create_address(&self, new_address: &DomainNewAddress) -> RepositoryResult<DomainAddress> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;

        let insertable = DbNewAddress::from(new_address);

        let created = diesel::insert_into(addresses::table)
            .values(&insertable)
            .get_result::<DbAddress>(&mut conn)?;

        Ok(created.into())
    }

    fn update_address(
        &self,
        address_id: i32,
        updates: &DomainUpdateAddress,
    ) -> RepositoryResult<DomainAddress> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateAddress::from(updates);

        let updated = diesel::update(addresses::table.filter(addresses::id.eq(address_id)))
            .set(&db_updates)
            .get_result::<DbAddress>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.into())
    }

    fn delete_address(&self, address_id: i32) -> RepositoryResult<()> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(addresses::table.filter(addresses::id.eq(address_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

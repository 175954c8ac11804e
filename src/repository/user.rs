use diesel::prelude::*;

use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};
use crate::models::user::{NewUser as DbNewUser, User as DbUser};
use crate::repository::{DieselRepository, RepositoryResult, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, user_id: i32) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user = users::table
            .filter(users::id.eq(user_id))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(DomainUser::from))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(DomainUser::from))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let insertable = DbNewUser::from(new_user);

        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }
}

use crate::domain::user::User;
use crate::repository::UserReader;
use crate::services::{ServiceError, ServiceResult};

/// Resolves a login attempt to a known account.
///
/// Provisioning happens elsewhere, so an unknown email is a failed login
/// rather than an invitation to create a row.
pub fn resolve_login<R>(repo: &R, email: &str) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    let email = email.trim();
    if email.is_empty() {
        return Err(ServiceError::Validation("email must not be empty".to_string()));
    }

    repo.get_user_by_email(email)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::repository::mock::MockUserReader;

    fn sample_user(id: i32) -> User {
        User {
            id,
            username: "buyer".to_string(),
            email: "buyer@example.com".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .unwrap_or_default(),
        }
    }

    #[test]
    fn known_email_resolves() {
        let mut repo = MockUserReader::new();
        repo.expect_get_user_by_email()
            .times(1)
            .withf(|email| email == "buyer@example.com")
            .returning(|_| Ok(Some(sample_user(3))));

        let user = resolve_login(&repo, " buyer@example.com ").expect("expected success");
        assert_eq!(user.id, 3);
    }

    #[test]
    fn unknown_email_is_unauthorized() {
        let mut repo = MockUserReader::new();
        repo.expect_get_user_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let result = resolve_login(&repo, "nobody@example.com");
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn empty_email_is_a_validation_failure() {
        let repo = MockUserReader::new();
        let result = resolve_login(&repo, "   ");
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}

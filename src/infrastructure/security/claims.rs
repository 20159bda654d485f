// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuild the admin identity from the facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let missing = |what: &str| ApplicationError::unauthorized(format!("missing {what}"));
    let (user_id, email, name) = ctx.user.ok_or_else(|| missing("user"))?;
    let issued_at = ctx.issued_at.ok_or_else(|| missing("issued_at"))?;
    let expires_at = ctx.expires_at.ok_or_else(|| missing("expires_at"))?;

    let id = UserId::parse(&user_id)
        .map_err(|_| ApplicationError::unauthorized("malformed user id"))?;

    Ok(AuthenticatedUser {
        id,
        email,
        name,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user: Option<(String, String, String)>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(&fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(predicate),
            "issued_at" => self.issued_at = first_date(predicate),
            "expires_at" => self.expires_at = first_date(predicate),
            _ => {}
        }
    }

    fn handle_user(&mut self, predicate: &Predicate) {
        if let [Term::Str(id), Term::Str(email), Term::Str(name)] = predicate.terms.as_slice() {
            self.user = Some((id.clone(), email.clone(), name.clone()));
        }
    }
}

fn first_date(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(name: &str, terms: Vec<Term>) -> Fact {
        Fact::new(name.to_string(), terms)
    }

    #[test]
    fn complete_fact_set_yields_user() {
        let id = UserId::generate();
        let user = parse_claims(vec![
            fact(
                "user",
                vec![
                    Term::Str(id.to_string()),
                    Term::Str("admin@clinic.example".into()),
                    Term::Str("Admin".into()),
                ],
            ),
            fact("issued_at", vec![Term::Date(1_700_000_000)]),
            fact("expires_at", vec![Term::Date(1_700_003_600)]),
        ])
        .unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.email, "admin@clinic.example");
        assert_eq!((user.expires_at - user.issued_at).num_seconds(), 3600);
    }

    #[test]
    fn missing_user_fact_is_unauthorized() {
        let err = parse_claims(vec![fact("issued_at", vec![Term::Date(1)])]).unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}

//! Fakes shared by the use case tests.

use crate::auth::oauth::{OAuthClient, OAuthError};
use crate::auth::signed_payload::{SignedPayloadError, SignedPayloadVerifier};
use crate::auth::{AuthSession, ClaimsOwner, ClaimsUser, SessionUser, SignedPayloadClaims};
use crate::error::BoxError;
use crate::store::{Store, StoreHash, StoreRepository, UserRepository};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Ordered record of collaborator calls, shared between fakes.
#[derive(Clone, Debug, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub fn session(context: &str) -> AuthSession {
    AuthSession {
        access_token: "access-token".to_string(),
        scope: "store_v2_products store_v2_orders_read_only".to_string(),
        user: SessionUser {
            id: 101,
            username: "installer".to_string(),
            email: "installer@store.com".to_string(),
        },
        owner: SessionUser {
            id: 202,
            username: "owner".to_string(),
            email: "owner@store.com".to_string(),
        },
        context: context.to_string(),
        ajs_anonymous_id: None,
        account_uuid: Some("6c4f0a3e-4b1f-4d43-9f55-0d0a3b1a1f00".to_string()),
    }
}

pub fn claims(sub: &str) -> SignedPayloadClaims {
    SignedPayloadClaims {
        aud: "client-id".to_string(),
        iss: "bc".to_string(),
        iat: 1_700_000_000,
        nbf: 1_700_000_000,
        exp: 1_700_086_400,
        jti: "jti-1".to_string(),
        sub: sub.to_string(),
        url: None,
        channel_id: None,
        user: ClaimsUser {
            id: 303,
            email: "staff@store.com".to_string(),
            locale: "en-US".to_string(),
        },
        owner: ClaimsOwner {
            id: 202,
            email: "owner@store.com".to_string(),
        },
    }
}

/// Returns a fixed session, or a 401 exchange failure when `session` is `None`.
pub struct FakeOAuthClient {
    pub session: Option<AuthSession>,
    pub log: EventLog,
    pub calls: Mutex<Vec<(String, String, String, String)>>,
}

impl FakeOAuthClient {
    pub fn new(session: Option<AuthSession>, log: EventLog) -> Self {
        Self {
            session,
            log,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl OAuthClient for FakeOAuthClient {
    async fn exchange(
        &self,
        code: &str,
        context: &str,
        scope: &str,
        redirect_uri: &str,
    ) -> Result<AuthSession, OAuthError> {
        self.log.push("exchange");
        self.calls.lock().unwrap().push((
            code.to_string(),
            context.to_string(),
            scope.to_string(),
            redirect_uri.to_string(),
        ));
        self.session
            .clone()
            .ok_or_else(|| OAuthError::TokenExchangeFailed {
                status: 401,
                status_text: "Unauthorized".to_string(),
            })
    }
}

/// Returns fixed claims, or an invalid signature error when `claims` is `None`.
pub struct FakeVerifier {
    pub claims: Option<SignedPayloadClaims>,
    pub log: EventLog,
    pub tokens: Mutex<Vec<String>>,
}

impl FakeVerifier {
    pub fn new(claims: Option<SignedPayloadClaims>, log: EventLog) -> Self {
        Self {
            claims,
            log,
            tokens: Mutex::new(Vec::new()),
        }
    }
}

impl SignedPayloadVerifier for FakeVerifier {
    fn verify(&self, token: &str) -> Result<SignedPayloadClaims, SignedPayloadError> {
        self.log.push("verify");
        self.tokens.lock().unwrap().push(token.to_string());
        self.claims
            .clone()
            .ok_or(SignedPayloadError::InvalidSignature)
    }
}

#[derive(Default)]
pub struct RecordingStores {
    pub log: EventLog,
    pub fail: bool,
    pub upserted: Mutex<Vec<Store>>,
    pub deactivated: Mutex<Vec<StoreHash>>,
}

#[async_trait]
impl StoreRepository for RecordingStores {
    async fn upsert_store(&self, store: &Store) -> Result<(), BoxError> {
        self.log.push("upsert_store");
        if self.fail {
            return Err("store write failed".into());
        }
        self.upserted.lock().unwrap().push(store.clone());
        Ok(())
    }

    async fn deactivate_store(&self, hash: &StoreHash) -> Result<(), BoxError> {
        self.log.push("deactivate_store");
        if self.fail {
            return Err("store write failed".into());
        }
        self.deactivated.lock().unwrap().push(hash.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingUsers {
    pub log: EventLog,
    pub fail: bool,
    pub removed: Mutex<Vec<(u64, StoreHash)>>,
}

#[async_trait]
impl UserRepository for RecordingUsers {
    async fn remove_user(&self, user_id: u64, hash: &StoreHash) -> Result<(), BoxError> {
        self.log.push("remove_user");
        if self.fail {
            return Err("user delete failed".into());
        }
        self.removed.lock().unwrap().push((user_id, hash.clone()));
        Ok(())
    }
}

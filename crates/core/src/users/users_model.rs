//! User domain models.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

/// A registered user and their profile preferences.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub preferred_currency: String,
    pub theme_mode: String,
    pub family_mode: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Input model for creating a new user. The password arrives already hashed;
/// hashing lives with the credential layer, not the store.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub preferred_currency: String,
    pub theme_mode: String,
    pub family_mode: bool,
}

/// Enumerated settings patch. Every mutable field is listed by name and
/// unknown fields are rejected at deserialization.
#[derive(AsChangeset, Serialize, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserSettingsUpdate {
    pub name: Option<String>,
    pub preferred_currency: Option<String>,
    pub theme_mode: Option<String>,
    pub family_mode: Option<bool>,
}

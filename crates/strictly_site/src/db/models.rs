//! Database models.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// Stored key-value pair.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::kv_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct KvEntry {
    key: String,
    value: String,
    updated_at: NaiveDateTime,
}

/// Insertable (or replacing) key-value pair.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::kv_entries)]
pub struct NewKvEntry {
    key: String,
    value: String,
    updated_at: NaiveDateTime,
}

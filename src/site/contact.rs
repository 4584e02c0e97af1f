//! Contact form record shaping
//!
//! Turns a raw form submission into the row that would be written to the
//! Supabase contact table. Nothing is persisted here and no route calls it
//! yet.

#![allow(dead_code)]

use crate::config::SupabaseConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub submitted_at: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PreparedContact {
    pub table: String,
    pub record: ContactRecord,
    pub enabled: bool,
}

pub fn prepare_contact_record(
    form: &HashMap<String, String>,
    supabase: &SupabaseConfig,
) -> PreparedContact {
    prepare_contact_record_at(form, supabase, Utc::now())
}

pub fn prepare_contact_record_at(
    form: &HashMap<String, String>,
    supabase: &SupabaseConfig,
    now: DateTime<Utc>,
) -> PreparedContact {
    let field = |name: &str| {
        form.get(name)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };

    PreparedContact {
        table: supabase.contact_table.clone(),
        record: ContactRecord {
            name: field("name"),
            phone: field("phone"),
            email: field("email"),
            message: field("message"),
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        },
        enabled: supabase.is_configured(),
    }
}

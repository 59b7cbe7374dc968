//! Static JSON documents served to the consumer
//!
//! The descriptor, synchronizer config and schema never change at runtime.
//! They are embedded at compile time and parsed once at startup.

use serde_json::Value;

use crate::error::StartupError;

const APP_DESCRIPTOR: &str = include_str!("../resources/app.json");
const SYNC_CONFIG: &str = include_str!("../resources/sync.json");
const SCHEMA: &str = include_str!("../resources/schema.json");

/// Parsed static documents
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDocuments {
    pub app: Value,
    pub sync_config: Value,
    pub schema: Value,
}

impl StaticDocuments {
    pub fn load() -> Result<Self, StartupError> {
        Ok(Self {
            app: parse("app.json", APP_DESCRIPTOR)?,
            sync_config: parse("sync.json", SYNC_CONFIG)?,
            schema: parse("schema.json", SCHEMA)?,
        })
    }
}

fn parse(name: &'static str, source: &str) -> Result<Value, StartupError> {
    serde_json::from_str(source).map_err(|source| StartupError::Document { name, source })
}

//! The `status` table - singleton key-value operational flags.

use serde::{Deserialize, Serialize};

use super::{Table, UpsertTable};

/// Marker type for the `status` table.
pub struct Status;

impl Table for Status {
    const NAME: &'static str = "status";
    const ORDER_COLUMN: &'static str = "key";
    type Row = StatusFlag;
}

impl UpsertTable for Status {
    const CONFLICT_COLUMN: &'static str = "key";
}

impl Status {
    /// The only key currently in use: the shopkeeper's leave flag.
    pub const LEAVE_KEY: &'static str = "leave";

    /// Sentinel returned when the flag has never been set.
    pub const NONE_VALUE: &'static str = "none";
}

/// One key-value flag row. Upserted whole, last write wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusFlag {
    pub key: String,
    pub value: String,
}

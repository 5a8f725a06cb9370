use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub guests: i64,
    pub price: f64,
    /// Free-form on the wire; `BookingStatus` names the values the server itself sets.
    pub status: String,
}

/// Body of a create or full replace. Missing fields decode as zero values and
/// are caught by validation instead of by the decoder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BookingInput {
    pub check_in_date: String,
    pub check_out_date: String,
    pub guests: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookingPatch {
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub guests: Option<i64>,
    pub price: Option<f64>,
    pub status: Option<String>,
}

impl BookingPatch {
    pub fn is_empty(&self) -> bool {
        self.check_in_date.is_none()
            && self.check_out_date.is_none()
            && self.guests.is_none()
            && self.price.is_none()
            && self.status.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

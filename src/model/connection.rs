use serde::{Deserialize, Serialize};

/// Transport mode, derived from the distance band between the two endpoints.
/// `NetLink` is used for edges into virtual locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    Metro,
    Maglev,
    Suborbital,
    NetLink,
}

impl TransportType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransportType::Metro => "metro",
            TransportType::Maglev => "maglev",
            TransportType::Suborbital => "suborbital",
            TransportType::NetLink => "net_link",
        }
    }
}

/// Directed transport edge. Bidirectional links are two symmetric rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub source_id: u64,
    pub destination_id: u64,
    pub transport: TransportType,
    /// Minutes.
    pub travel_time: u32,
    /// Credits.
    pub travel_cost: u32,
    pub requires_hacking: bool,
    pub requires_special_access: bool,
}

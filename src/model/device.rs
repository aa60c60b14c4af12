use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Terminal,
    Server,
    SecurityCamera,
    DoorController,
    Drone,
    PersonalDeck,
    MedicalScanner,
    VendingUnit,
}

impl DeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Terminal => "terminal",
            DeviceType::Server => "server",
            DeviceType::SecurityCamera => "security_camera",
            DeviceType::DoorController => "door_controller",
            DeviceType::Drone => "drone",
            DeviceType::PersonalDeck => "personal_deck",
            DeviceType::MedicalScanner => "medical_scanner",
            DeviceType::VendingUnit => "vending_unit",
        }
    }
}

/// Electronic device, installed in a building or carried by a character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    pub id: u64,
    pub location_id: u64,
    pub building_id: Option<u64>,
    /// Owning character, when carried rather than installed.
    pub owner_id: Option<u64>,
    pub device_type: DeviceType,
    pub os: String,
    pub security_level: u8,
    pub ip_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    PublicWifi,
    IotMesh,
    CorporateLan,
    SecurityGrid,
    DarknetNode,
}

impl NetworkType {
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::PublicWifi => "public_wifi",
            NetworkType::IotMesh => "iot_mesh",
            NetworkType::CorporateLan => "corporate_lan",
            NetworkType::SecurityGrid => "security_grid",
            NetworkType::DarknetNode => "darknet_node",
        }
    }
}

/// Encryption grade. Paired one-to-one with network security level so a
/// stronger tier never carries weaker encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptionType {
    Plaintext,
    Basic,
    Standard,
    Hardened,
    Quantum,
}

impl EncryptionType {
    pub fn as_str(self) -> &'static str {
        match self {
            EncryptionType::Plaintext => "plaintext",
            EncryptionType::Basic => "basic",
            EncryptionType::Standard => "standard",
            EncryptionType::Hardened => "hardened",
            EncryptionType::Quantum => "quantum",
        }
    }

    /// The encryption grade that ships with a given security level (1–5).
    pub fn for_security(level: u8) -> EncryptionType {
        match level {
            0 | 1 => EncryptionType::Plaintext,
            2 => EncryptionType::Basic,
            3 => EncryptionType::Standard,
            4 => EncryptionType::Hardened,
            _ => EncryptionType::Quantum,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Network {
    pub id: u64,
    pub building_id: u64,
    pub network_type: NetworkType,
    pub security_level: u8,
    pub encryption: EncryptionType,
    pub is_hidden: bool,
    pub requires_hacking: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleTarget {
    Device(u64),
    Network(u64),
}

impl PuzzleTarget {
    pub fn kind_str(self) -> &'static str {
        match self {
            PuzzleTarget::Device(_) => "device",
            PuzzleTarget::Network(_) => "network",
        }
    }

    pub fn target_id(self) -> u64 {
        match self {
            PuzzleTarget::Device(id) | PuzzleTarget::Network(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleType {
    PasswordCrack,
    FirewallBypass,
    IceBreak,
    ProtocolSpoof,
    TraceEvasion,
}

impl PuzzleType {
    pub const ALL: [PuzzleType; 5] = [
        PuzzleType::PasswordCrack,
        PuzzleType::FirewallBypass,
        PuzzleType::IceBreak,
        PuzzleType::ProtocolSpoof,
        PuzzleType::TraceEvasion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PuzzleType::PasswordCrack => "password_crack",
            PuzzleType::FirewallBypass => "firewall_bypass",
            PuzzleType::IceBreak => "ice_break",
            PuzzleType::ProtocolSpoof => "protocol_spoof",
            PuzzleType::TraceEvasion => "trace_evasion",
        }
    }
}

/// Hacking challenge attached to a device or network. Difficulty follows the
/// target's security posture, clamped to [1, 5].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HackingPuzzle {
    pub id: u64,
    pub target: PuzzleTarget,
    pub puzzle_type: PuzzleType,
    pub difficulty: u8,
    pub reward_credits: u32,
    pub reward_data: bool,
}

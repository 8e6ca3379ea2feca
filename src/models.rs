//! Wire types mirrored from the admin REST backend. The backend's drafts
//! disagreed on several field spellings and status encodings, so every
//! status-like field is a canonical enum here and the deserializers accept
//! the known legacy forms.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The `{content, page, totalPages}` shape every paginated list endpoint
/// returns.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub content: Vec<T>,
    #[serde(default = "one")]
    pub page: u32,
    #[serde(default = "one")]
    pub total_pages: u32,
}

fn one() -> u32 {
    1
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionStatus {
    Success,
    Refunded,
    Pending,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "Success",
            TransactionStatus::Refunded => "Refunded",
            TransactionStatus::Pending => "Pending",
        }
    }
}

impl Serialize for TransactionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            TransactionStatus::Success => "S",
            TransactionStatus::Refunded => "R",
            TransactionStatus::Pending => "P",
        })
    }
}

impl<'de> Deserialize<'de> for TransactionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // One backend draft sent "S"/"R" strings, another sent 1-is-success
        // integers.
        let raw = Value::deserialize(deserializer)?;
        match &raw {
            Value::String(s) => match s.trim().to_ascii_uppercase().as_str() {
                "S" | "SUCCESS" => Ok(TransactionStatus::Success),
                "R" | "REFUND" | "REFUNDED" | "CANCELLED" => Ok(TransactionStatus::Refunded),
                "P" | "PENDING" => Ok(TransactionStatus::Pending),
                other => Err(serde::de::Error::custom(format!(
                    "unknown transaction status {other:?}"
                ))),
            },
            Value::Number(n) => Ok(if n.as_i64() == Some(1) {
                TransactionStatus::Success
            } else {
                TransactionStatus::Refunded
            }),
            _ => Err(serde::de::Error::custom(
                "transaction status must be a string or number",
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContractStatus {
    #[default]
    Active,
    Terminated,
}

impl ContractStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ContractStatus::Active => "Active",
            ContractStatus::Terminated => "Terminated",
        }
    }
}

impl Serialize for ContractStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            ContractStatus::Active => "Y",
            ContractStatus::Terminated => "N",
        })
    }
}

impl<'de> Deserialize<'de> for ContractStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_uppercase().as_str() {
            "Y" | "ACTIVE" => Ok(ContractStatus::Active),
            "N" | "TERMINATED" => Ok(ContractStatus::Terminated),
            other => Err(serde::de::Error::custom(format!(
                "unknown contract status {other:?}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserType {
    Admin,
    User,
}

impl UserType {
    pub fn label(&self) -> &'static str {
        match self {
            UserType::Admin => "Admin",
            UserType::User => "User",
        }
    }
}

impl Serialize for UserType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            UserType::Admin => "A",
            UserType::User => "U",
        })
    }
}

impl<'de> Deserialize<'de> for UserType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.trim().to_ascii_uppercase().as_str() {
            "A" | "ADMIN" => UserType::Admin,
            _ => UserType::User,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationStatus {
    On,
    Off,
}

impl NotificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationStatus::On => "ON",
            NotificationStatus::Off => "OFF",
        }
    }
}

impl Serialize for NotificationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            NotificationStatus::On => "Y",
            NotificationStatus::Off => "N",
        })
    }
}

impl<'de> Deserialize<'de> for NotificationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.trim().to_ascii_uppercase().as_str() {
            "Y" | "ON" => NotificationStatus::On,
            _ => NotificationStatus::Off,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    // one backend build shipped with this typo
    #[serde(alias = "transationNum")]
    pub transaction_num: String,
    pub member_code: String,
    pub merchant_code: String,
    #[serde(default)]
    pub amount_used: i64,
    pub payment_date: String,
    pub status: TransactionStatus,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_transaction_num: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub merchant_code: String,
    pub merchant_name: String,
    pub business_id: String,
    #[serde(default)]
    pub brand_code: String,
    pub category_name: String,
    pub registration_date: String,
    pub termination_date: String,
    pub contract_status: ContractStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub member_code: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone_num: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    pub user_type: UserType,
    pub notification_status: NotificationStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsRow {
    #[serde(alias = "merchant_code")]
    pub merchant_code: String,
    #[serde(default, alias = "merchant_name")]
    pub merchant_name: String,
    #[serde(alias = "payment_date")]
    pub payment_date: String,
    #[serde(default, alias = "transaction_count")]
    pub transaction_count: i64,
    #[serde(default, alias = "total_amount")]
    pub total_amount: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub brand_code: String,
    pub brand_name: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub health_path: Option<String>,
}

impl ServerInfo {
    /// Full probe URL, or `None` when connection details are incomplete.
    /// Such entries stay Unknown and are never probed.
    pub fn health_url(&self) -> Option<String> {
        let base = self.base_url.as_deref().filter(|b| !b.is_empty())?;
        let port = self.port?;
        let path = self.health_path.as_deref().filter(|p| !p.is_empty())?;
        Some(format!("{base}:{port}{path}"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthState {
    Up,
    Down,
    Unknown,
}

impl HealthState {
    pub fn label(&self) -> &'static str {
        match self {
            HealthState::Up => "UP",
            HealthState::Down => "DOWN",
            HealthState::Unknown => "UNKNOWN",
        }
    }
}

impl Serialize for HealthState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Per-poll view of one downstream server. Never persisted; replaced
/// wholesale every cycle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServerStatus {
    #[serde(flatten)]
    pub info: ServerInfo,
    pub state: HealthState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u32>,
}

impl ServerStatus {
    pub fn unknown(info: ServerInfo) -> Self {
        ServerStatus {
            info,
            state: HealthState::Unknown,
            response_time_ms: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedAmount {
    pub date: String,
    #[serde(default)]
    pub amount: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthAmount {
    pub month: String,
    #[serde(default)]
    pub amount: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub name: String,
    #[serde(default)]
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub total_members: i64,
    #[serde(default)]
    pub total_merchants: i64,
    #[serde(default)]
    pub total_api_requests: i64,
    #[serde(default)]
    pub total_transactions: i64,
    #[serde(default)]
    pub daily_transactions: Vec<DatedAmount>,
    #[serde(default)]
    pub monthly_transactions: Vec<MonthAmount>,
    #[serde(default)]
    pub category_ratio: Vec<CategoryShare>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_status_accepts_both_wire_schemes() {
        let short: TransactionStatus = serde_json::from_str(r#""S""#).unwrap();
        assert_eq!(short, TransactionStatus::Success);
        let long: TransactionStatus = serde_json::from_str(r#""Refunded""#).unwrap();
        assert_eq!(long, TransactionStatus::Refunded);
        let numeric_ok: TransactionStatus = serde_json::from_str("1").unwrap();
        assert_eq!(numeric_ok, TransactionStatus::Success);
        let numeric_other: TransactionStatus = serde_json::from_str("0").unwrap();
        assert_eq!(numeric_other, TransactionStatus::Refunded);
        assert!(serde_json::from_str::<TransactionStatus>(r#""X""#).is_err());
    }

    #[test]
    fn transaction_accepts_legacy_field_typo() {
        let json = r#"{
            "transationNum": "T0001",
            "memberCode": "C100",
            "merchantCode": "M200",
            "amountUsed": 12500,
            "paymentDate": "2024-05-01",
            "status": "S"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.transaction_num, "T0001");
        assert_eq!(tx.amount_used, 12500);
        assert_eq!(tx.original_transaction_num, None);
    }

    #[test]
    fn contract_status_round_trips_as_flag() {
        let merchant = Merchant {
            merchant_code: "M0001".into(),
            merchant_name: "Cinema One".into(),
            business_id: "123-45-67890".into(),
            brand_code: "BR01".into(),
            category_name: "Movie".into(),
            registration_date: "2024-01-01".into(),
            termination_date: "2026-01-01".into(),
            contract_status: ContractStatus::Active,
        };
        let json = serde_json::to_value(&merchant).unwrap();
        assert_eq!(json["contractStatus"], "Y");

        let back: Merchant = serde_json::from_value(json).unwrap();
        assert_eq!(back.contract_status, ContractStatus::Active);

        let terminated: ContractStatus = serde_json::from_str(r#""Terminated""#).unwrap();
        assert_eq!(terminated, ContractStatus::Terminated);
    }

    #[test]
    fn member_flags_decode_from_letters() {
        let json = r#"{
            "memberCode": "C100",
            "id": "alice01",
            "name": "Alice",
            "userType": "A",
            "notificationStatus": "N"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.user_type, UserType::Admin);
        assert_eq!(member.notification_status, NotificationStatus::Off);
        assert_eq!(member.phone_num, "");
    }

    #[test]
    fn statistics_row_accepts_snake_case_aliases() {
        let json = r#"{
            "merchant_code": "M200",
            "merchant_name": "Bike Shop",
            "payment_date": "2024-05-01",
            "transaction_count": 7,
            "total_amount": 91000
        }"#;
        let row: StatisticsRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.merchant_code, "M200");
        assert_eq!(row.transaction_count, 7);
        assert_eq!(row.total_amount, 91000);
    }

    #[test]
    fn page_envelope_decodes_with_defaults() {
        let json = r#"{"content": []}"#;
        let page: PageEnvelope<Merchant> = serde_json::from_str(json).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn health_url_requires_all_connection_details() {
        let full = ServerInfo {
            brand_code: "BR01".into(),
            brand_name: "Cinema".into(),
            category_name: "Movie".into(),
            base_url: Some("http://10.0.0.5".into()),
            port: Some(8081),
            health_path: Some("/actuator/health".into()),
        };
        assert_eq!(
            full.health_url().as_deref(),
            Some("http://10.0.0.5:8081/actuator/health")
        );

        let missing_port = ServerInfo {
            port: None,
            ..full.clone()
        };
        assert_eq!(missing_port.health_url(), None);

        let blank_path = ServerInfo {
            health_path: Some(String::new()),
            ..full
        };
        assert_eq!(blank_path.health_url(), None);
    }
}

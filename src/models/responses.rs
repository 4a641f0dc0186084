//! Provider response records
//!
//! Field names follow the provider's JSON schema. Missing or `null`
//! members decode to the field's zero value.

use serde::{Deserialize, Serialize};

/// Body of an HTTP 400 response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProviderErrorBody {
    pub message: String,
    pub sp_result_code: i64,
}

/// Site card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Site {
    /// Position in a listing (only set for list output)
    pub row_number: i64,
    pub id: String,
    /// Account number, usually the one programmed into the panel
    pub account_number: i64,
    #[serde(rename = "CloudObjectID")]
    pub cloud_object_id: i64,
    pub name: String,
    pub object_password: String,
    pub address: String,
    pub phone1: String,
    pub phone2: String,
    pub type_name: String,
    pub is_fire: bool,
    pub is_arm: bool,
    pub is_panic: bool,
    pub device_type_name: String,
    pub event_template_name: String,
    pub contract_number: String,
    /// Monthly fee, shown in MyAlarm
    pub contract_price: f64,
    /// Account balance, shown in MyAlarm
    pub money_balance: f64,
    pub payment_date: String,
    pub debt_inform_level: i64,
    pub disabled: bool,
    pub disable_reason: i64,
    pub disable_date: String,
    pub auto_enable: bool,
    /// Only meaningful when `auto_enable` is set
    pub auto_enable_date: String,
    pub customers_comment: String,
    pub comment_for_operator: String,
    pub comment_for_guard: String,
    pub map_file_name: String,
    pub web_link: String,
    /// Control time in minutes
    pub control_time: i64,
    #[serde(rename = "CTIgnoreSystemEvent")]
    pub ct_ignore_system_event: bool,
    pub is_contract_price_force_update: bool,
    pub is_money_balance_force_update: bool,
    pub is_payment_date_force_update: bool,
    pub is_state_arm: bool,
    pub is_state_alarm: bool,
    pub is_state_part_arm: bool,
    pub state_arm_dis_arm_date_time: String,
}

/// Responsible person of a site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Customer {
    pub id: String,
    pub order_number: i64,
    /// User number on the control panel
    pub user_number: i64,
    pub obj_cust_name: String,
    pub obj_cust_title: String,
    /// Mobile phone, unique per site
    pub obj_cust_phone1: String,
    pub obj_cust_phone2: String,
    pub obj_cust_phone3: String,
    pub obj_cust_phone4: String,
    pub obj_cust_phone5: String,
    pub obj_cust_address: String,
    pub is_visible_in_cabinet: bool,
    pub reclosing_request: bool,
    pub reclosing_failure: bool,
    #[serde(rename = "PINCode")]
    pub pin_code: String,
}

/// Answer to a panic check start
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckPanicStarted {
    pub status: i64,
    pub description: String,
    pub check_panic_id: String,
}

/// Panic check outcome
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckPanicResult {
    pub status: i64,
    pub description: String,
}

/// MyAlarm user attached to a site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MyAlarmUser {
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    pub mobile_phone: String,
    pub my_alarm_phone: String,
    pub role: String,
    pub is_panic: bool,
}

/// Site linked to a MyAlarm phone number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserObject {
    #[serde(rename = "ObjectGUID")]
    pub object_guid: String,
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    pub role: String,
    pub is_panic: bool,
}

/// Free-form acknowledgement returned by MyAlarm updates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessageResponse {
    pub message: String,
}

/// Partition of a site's alarm panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Partition {
    pub id: String,
    pub part_number: i64,
    /// Per-partition account number, for panels that support it
    pub object_number: i64,
    pub part_desc: String,
    pub part_equip: String,
    pub is_state_arm: bool,
    pub is_state_alarm: bool,
    pub state_arm_dis_arm_date_time: String,
}

/// Zone (sensor loop) of a site's alarm panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Zone {
    pub id: String,
    pub zone_number: i64,
    pub zone_desc: String,
    pub zone_equip: String,
}

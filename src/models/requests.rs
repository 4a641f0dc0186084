//! Operation input records
//!
//! Every input embeds [`Credentials`] and an optional acting username.

use super::Credentials;
use std::fmt;
use std::str::FromStr;

/// Access shared by every operation input
pub trait CallerInput {
    fn credentials(&self) -> &Credentials;

    /// Acting username; `None` when absent or empty
    fn user_name(&self) -> Option<&str>;
}

/// Site lookup by identifier or account number
#[derive(Debug, Clone, Default)]
pub struct GetSitesInput {
    /// Site number or identifier
    pub id: String,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Legacy site lookup by numeric account number
#[derive(Debug, Clone, Default)]
pub struct GetSiteByNumberInput {
    /// Account number, must be at least 1
    pub account_number: i64,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Responsible persons of a site
#[derive(Debug, Clone, Default)]
pub struct GetCustomersInput {
    /// Site identifier (the `Id` field of the site card)
    pub site_id: String,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Single responsible person
#[derive(Debug, Clone, Default)]
pub struct GetCustomerInput {
    pub id: String,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Start a panic-button (KTS) check
#[derive(Debug, Clone, Default)]
pub struct StartPanicCheckInput {
    pub site_id: String,
    /// Check duration in seconds; 0 leaves the provider default
    pub check_interval: u32,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Result of a previously started panic-button check
#[derive(Debug, Clone, Default)]
pub struct GetPanicCheckInput {
    pub check_panic_id: String,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// MyAlarm users of a site
#[derive(Debug, Clone, Default)]
pub struct GetMyAlarmUsersInput {
    pub site_id: String,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Change the MyAlarm role of a user
#[derive(Debug, Clone, Default)]
pub struct ChangeUserRoleInput {
    pub cust_id: String,
    /// One of `admin`, `user`, `unlink`
    pub role: String,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Allow or forbid panic-button use for a MyAlarm user
#[derive(Debug, Clone, Default)]
pub struct ChangePanicPermissionInput {
    pub cust_id: String,
    pub is_panic: bool,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Sites linked to a MyAlarm phone number
#[derive(Debug, Clone, Default)]
pub struct GetUserObjectsInput {
    /// `+7` followed by ten digits
    pub phone: String,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Partitions of a site
#[derive(Debug, Clone, Default)]
pub struct GetPartitionsInput {
    pub site_id: String,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

/// Zones of a site
#[derive(Debug, Clone, Default)]
pub struct GetZonesInput {
    pub site_id: String,
    pub user_name: Option<String>,
    pub credentials: Credentials,
}

impl GetSitesInput {
    pub fn new(credentials: Credentials, id: impl Into<String>) -> Self {
        Self { id: id.into(), user_name: None, credentials }
    }
}

impl GetSiteByNumberInput {
    pub fn new(credentials: Credentials, account_number: i64) -> Self {
        Self { account_number, user_name: None, credentials }
    }
}

impl GetCustomersInput {
    pub fn new(credentials: Credentials, site_id: impl Into<String>) -> Self {
        Self { site_id: site_id.into(), user_name: None, credentials }
    }
}

impl GetCustomerInput {
    pub fn new(credentials: Credentials, id: impl Into<String>) -> Self {
        Self { id: id.into(), user_name: None, credentials }
    }
}

impl StartPanicCheckInput {
    pub fn new(credentials: Credentials, site_id: impl Into<String>) -> Self {
        Self { site_id: site_id.into(), check_interval: 0, user_name: None, credentials }
    }

    pub fn with_check_interval(mut self, seconds: u32) -> Self {
        self.check_interval = seconds;
        self
    }
}

impl GetPanicCheckInput {
    pub fn new(credentials: Credentials, check_panic_id: impl Into<String>) -> Self {
        Self { check_panic_id: check_panic_id.into(), user_name: None, credentials }
    }
}

impl GetMyAlarmUsersInput {
    pub fn new(credentials: Credentials, site_id: impl Into<String>) -> Self {
        Self { site_id: site_id.into(), user_name: None, credentials }
    }
}

impl ChangeUserRoleInput {
    pub fn new(credentials: Credentials, cust_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self { cust_id: cust_id.into(), role: role.into(), user_name: None, credentials }
    }
}

impl ChangePanicPermissionInput {
    pub fn new(credentials: Credentials, cust_id: impl Into<String>, is_panic: bool) -> Self {
        Self { cust_id: cust_id.into(), is_panic, user_name: None, credentials }
    }
}

impl GetUserObjectsInput {
    pub fn new(credentials: Credentials, phone: impl Into<String>) -> Self {
        Self { phone: phone.into(), user_name: None, credentials }
    }
}

impl GetPartitionsInput {
    pub fn new(credentials: Credentials, site_id: impl Into<String>) -> Self {
        Self { site_id: site_id.into(), user_name: None, credentials }
    }
}

impl GetZonesInput {
    pub fn new(credentials: Credentials, site_id: impl Into<String>) -> Self {
        Self { site_id: site_id.into(), user_name: None, credentials }
    }
}

macro_rules! caller_input {
    ($($input:ident),+ $(,)?) => {
        $(
            impl CallerInput for $input {
                fn credentials(&self) -> &Credentials {
                    &self.credentials
                }

                fn user_name(&self) -> Option<&str> {
                    self.user_name.as_deref().filter(|name| !name.is_empty())
                }
            }

            impl $input {
                /// Act on behalf of `user_name`
                pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
                    self.user_name = Some(user_name.into());
                    self
                }
            }
        )+
    };
}

caller_input!(
    GetSitesInput,
    GetSiteByNumberInput,
    GetCustomersInput,
    GetCustomerInput,
    StartPanicCheckInput,
    GetPanicCheckInput,
    GetMyAlarmUsersInput,
    ChangeUserRoleInput,
    ChangePanicPermissionInput,
    GetUserObjectsInput,
    GetPartitionsInput,
    GetZonesInput,
);

/// MyAlarm user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MyAlarmRole {
    Admin,
    User,
    /// Detach the user from the site
    Unlink,
}

impl MyAlarmRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MyAlarmRole::Admin => "admin",
            MyAlarmRole::User => "user",
            MyAlarmRole::Unlink => "unlink",
        }
    }
}

impl fmt::Display for MyAlarmRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MyAlarmRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(MyAlarmRole::Admin),
            "user" => Ok(MyAlarmRole::User),
            "unlink" => Ok(MyAlarmRole::Unlink),
            other => Err(format!("unknown role '{}', expected admin, user or unlink", other)),
        }
    }
}

impl From<MyAlarmRole> for String {
    fn from(role: MyAlarmRole) -> Self {
        role.as_str().to_string()
    }
}

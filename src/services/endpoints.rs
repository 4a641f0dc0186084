//! Provider endpoint table
//!
//! Each operation input is bound to one [`Endpoint`] descriptor together
//! with its field rules, query parameters and response type.

use super::validation::{
    require_non_empty, require_positive, validate_check_interval, validate_phone, validate_role,
};
use crate::models::*;
use crate::utils::error::{AndromedaResult, ErrorContext};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub const PATH_SITES: &str = "/Sites";
pub const PATH_CUSTOMERS: &str = "/Customers";
pub const PATH_CHECK_PANIC: &str = "/CheckPanic";
pub const PATH_MY_ALARM: &str = "/MyAlarm";
pub const PATH_MY_ALARM_USER_OBJECTS: &str = "/MyAlarm/UserObjects";
pub const PATH_PARTS: &str = "/Parts";
pub const PATH_ZONES: &str = "/Zones";

/// Static description of one provider endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name used in logs
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
}

/// A provider capability: input rules, request shape and response decoding
pub trait Operation: CallerInput + Send + Sync {
    type Output: DeserializeOwned + Default + Send;

    const ENDPOINT: Endpoint;

    /// Endpoint-specific field checks (credentials are checked separately)
    fn validate(&self) -> AndromedaResult<()>;

    /// Query parameters, excluding the acting username
    fn query(&self) -> Vec<(&'static str, String)>;

    /// JSON request body, if the endpoint takes one
    fn body(&self) -> AndromedaResult<Option<Vec<u8>>> {
        Ok(None)
    }

    fn decode(body: &[u8]) -> AndromedaResult<Self::Output> {
        decode_json(body)
    }
}

/// Provider convention for boolean query values
pub fn bool_param(value: bool) -> String {
    let text = if value { "True" } else { "False" };
    text.to_string()
}

/// Decode a JSON body, treating `null` members as absent.
/// A top-level `null` yields the default value.
pub fn decode_json<T: DeserializeOwned + Default>(body: &[u8]) -> AndromedaResult<T> {
    let mut value: Value = serde_json::from_slice(body)?;
    if value.is_null() {
        return Ok(T::default());
    }
    strip_nulls(&mut value);
    Ok(serde_json::from_value(value)?)
}

/// Like [`decode_json`], but an empty body yields the default value
pub fn decode_json_or_default<T: DeserializeOwned + Default>(body: &[u8]) -> AndromedaResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    decode_json(body)
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

impl Operation for GetSitesInput {
    type Output = Site;

    const ENDPOINT: Endpoint = Endpoint {
        name: "get_sites",
        method: Method::GET,
        path: PATH_SITES,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("id", &self.id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.id.clone())]
    }
}

impl Operation for GetSiteByNumberInput {
    type Output = Site;

    const ENDPOINT: Endpoint = Endpoint {
        name: "get_site_by_number",
        method: Method::GET,
        path: PATH_SITES,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_positive("accountNumber", self.account_number)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.account_number.to_string())]
    }
}

impl Operation for GetCustomersInput {
    type Output = Vec<Customer>;

    const ENDPOINT: Endpoint = Endpoint {
        name: "get_customers",
        method: Method::GET,
        path: PATH_CUSTOMERS,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("siteId", &self.site_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("siteId", self.site_id.clone())]
    }
}

impl Operation for GetCustomerInput {
    type Output = Customer;

    const ENDPOINT: Endpoint = Endpoint {
        name: "get_customer",
        method: Method::GET,
        path: PATH_CUSTOMERS,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("id", &self.id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.id.clone())]
    }
}

impl Operation for StartPanicCheckInput {
    type Output = CheckPanicStarted;

    const ENDPOINT: Endpoint = Endpoint {
        name: "start_panic_check",
        method: Method::POST,
        path: PATH_CHECK_PANIC,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("siteId", &self.site_id)?;
        validate_check_interval(self.check_interval)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("siteId", self.site_id.clone()),
            ("stopOnEvent", bool_param(true)),
        ];
        if self.check_interval != 0 {
            query.push(("checkInterval", self.check_interval.to_string()));
        }
        query
    }
}

impl Operation for GetPanicCheckInput {
    type Output = CheckPanicResult;

    const ENDPOINT: Endpoint = Endpoint {
        name: "get_panic_check",
        method: Method::GET,
        path: PATH_CHECK_PANIC,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("checkPanicId", &self.check_panic_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("checkPanicId", self.check_panic_id.clone())]
    }
}

impl Operation for GetMyAlarmUsersInput {
    type Output = Vec<MyAlarmUser>;

    const ENDPOINT: Endpoint = Endpoint {
        name: "get_my_alarm_users",
        method: Method::GET,
        path: PATH_MY_ALARM,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("siteId", &self.site_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("siteId", self.site_id.clone())]
    }
}

impl Operation for ChangeUserRoleInput {
    type Output = MessageResponse;

    const ENDPOINT: Endpoint = Endpoint {
        name: "change_user_role",
        method: Method::PUT,
        path: PATH_MY_ALARM,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("custId", &self.cust_id)?;
        validate_role(&self.role).map(|_| ())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("custId", self.cust_id.clone()), ("role", self.role.clone())]
    }

    fn decode(body: &[u8]) -> AndromedaResult<Self::Output> {
        decode_json_or_default(body)
    }
}

impl Operation for ChangePanicPermissionInput {
    type Output = MessageResponse;

    const ENDPOINT: Endpoint = Endpoint {
        name: "change_panic_permission",
        method: Method::PUT,
        path: PATH_MY_ALARM,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("custId", &self.cust_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("custId", self.cust_id.clone()),
            ("isPanic", bool_param(self.is_panic)),
        ]
    }

    fn decode(body: &[u8]) -> AndromedaResult<Self::Output> {
        decode_json_or_default(body)
    }
}

#[derive(Serialize)]
struct PhoneBody<'a> {
    #[serde(rename = "Phone")]
    phone: &'a str,
}

impl Operation for GetUserObjectsInput {
    type Output = Vec<UserObject>;

    const ENDPOINT: Endpoint = Endpoint {
        name: "get_user_objects",
        method: Method::GET,
        path: PATH_MY_ALARM_USER_OBJECTS,
    };

    fn validate(&self) -> AndromedaResult<()> {
        validate_phone(&self.phone)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn body(&self) -> AndromedaResult<Option<Vec<u8>>> {
        let body = serde_json::to_vec(&PhoneBody { phone: &self.phone })
            .internal_context("Failed to serialize request body")?;
        Ok(Some(body))
    }
}

impl Operation for GetPartitionsInput {
    type Output = Vec<Partition>;

    const ENDPOINT: Endpoint = Endpoint {
        name: "get_partitions",
        method: Method::GET,
        path: PATH_PARTS,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("siteId", &self.site_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("siteId", self.site_id.clone())]
    }
}

impl Operation for GetZonesInput {
    type Output = Vec<Zone>;

    const ENDPOINT: Endpoint = Endpoint {
        name: "get_zones",
        method: Method::GET,
        path: PATH_ZONES,
    };

    fn validate(&self) -> AndromedaResult<()> {
        require_non_empty("siteId", &self.site_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("siteId", self.site_id.clone())]
    }
}

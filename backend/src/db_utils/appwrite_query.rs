//! Builders for the backend's JSON query strings.

use common::file_query::{SortDirection, SortOrder};
use serde_json::{Value, json};

pub fn equal<V: Into<Value>>(attribute: &str, values: impl IntoIterator<Item = V>) -> Value {
    json!({
        "method": "equal",
        "attribute": attribute,
        "values": values.into_iter().map(Into::into).collect::<Vec<Value>>(),
    })
}

pub fn contains<V: Into<Value>>(attribute: &str, values: impl IntoIterator<Item = V>) -> Value {
    json!({
        "method": "contains",
        "attribute": attribute,
        "values": values.into_iter().map(Into::into).collect::<Vec<Value>>(),
    })
}

pub fn or(queries: Vec<Value>) -> Value {
    json!({ "method": "or", "values": queries })
}

pub fn limit(limit: u32) -> Value {
    json!({ "method": "limit", "values": [limit] })
}

pub fn order(sort: SortOrder) -> Value {
    let method = match sort.direction {
        SortDirection::Asc => "orderAsc",
        SortDirection::Desc => "orderDesc",
    };
    json!({ "method": method, "attribute": sort.field.attribute() })
}

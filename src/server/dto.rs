use serde::{Deserialize, Serialize};

use crate::types::Cafe;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub loc: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePriceParams {
    #[serde(default)]
    pub new_price: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteCafeParams {
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Form body for `POST /add`. Every field is optional at the wire level;
/// the handler decides which ones it requires. Note the form names `loc`
/// and `calls` differ from the stored column names.
#[derive(Debug, Default, Deserialize)]
pub struct NewCafeForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub map_url: Option<String>,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub loc: Option<String>,
    #[serde(default)]
    pub seats: Option<String>,
    #[serde(default)]
    pub has_toilet: Option<String>,
    #[serde(default)]
    pub has_wifi: Option<String>,
    #[serde(default)]
    pub has_sockets: Option<String>,
    #[serde(default)]
    pub calls: Option<String>,
    #[serde(default)]
    pub coffee_price: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CafeResponse {
    pub cafe: Cafe,
}

#[derive(Debug, Serialize)]
pub struct CafesResponse {
    pub cafes: Vec<Cafe>,
}

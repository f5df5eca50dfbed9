use serde::{Deserialize, Serialize};

/// A Connect platform application acting on an account.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Application {
    pub id: String,
    pub object: String,
    pub name: Option<String>,
    pub deleted: bool,
}

impl_object!(Application, "application");

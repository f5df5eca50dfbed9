//! Decimal amounts Stripe sends as JSON strings, e.g. `"unit_amount_decimal": "12.345"`.

/// `#[serde(with = "decimal::option")]` for `Option<f64>` fields.
pub mod option {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&value.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }

    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal string, a number or null")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value
                .parse::<f64>()
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
    #[serde(default)]
    struct Amount {
        #[serde(with = "super::option")]
        value: Option<f64>,
    }

    #[test]
    fn accepts_strings_numbers_and_null() {
        let parse = |json: &str| serde_json::from_str::<Amount>(json).unwrap().value;
        assert_eq!(parse(r#"{"value":"12.345"}"#), Some(12.345));
        assert_eq!(parse(r#"{"value":7}"#), Some(7.0));
        assert_eq!(parse(r#"{"value":null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
        assert!(serde_json::from_str::<Amount>(r#"{"value":"abc"}"#).is_err());
    }

    #[test]
    fn writes_strings() {
        let json = serde_json::to_string(&Amount { value: Some(0.5) }).unwrap();
        assert_eq!(json, r#"{"value":"0.5"}"#);
    }
}

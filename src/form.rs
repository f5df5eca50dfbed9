//! Stripe's flavour of `application/x-www-form-urlencoded`.
//!
//! Nested values use bracket keys (`line_items[0][price]`), `None` is left
//! out entirely, `Some("")` is sent as an empty value so a field can be
//! cleared, and an empty sequence is sent as `key=` to clear an array.
//! Map entries are written in key order so output is deterministic.

use std::fmt::Display;

use serde::ser::{self, Impossible, Serialize};
use url::form_urlencoded::byte_serialize;

pub type Pairs = Vec<(String, String)>;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Custom(String),

    #[error("form parameters must be a struct or map, found {0}")]
    TopLevel(&'static str),

    #[error("form keys must be strings or integers, found {0}")]
    Key(&'static str),

    #[error("{0} cannot be form encoded")]
    Unsupported(&'static str),

    #[error("cannot form encode non-finite number {0}")]
    NonFinite(f64),
}

impl ser::Error for FormError {
    fn custom<T: Display>(msg: T) -> Self {
        FormError::Custom(msg.to_string())
    }
}

/// Flattens `value` into ordered key/value pairs.
pub fn to_pairs<T: Serialize + ?Sized>(value: &T) -> Result<Pairs, FormError> {
    let mut pairs = Vec::new();
    value.serialize(Serializer {
        out: &mut pairs,
        key: None,
    })?;
    Ok(pairs)
}

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, FormError> {
    Ok(encode_pairs(&to_pairs(value)?))
}

/// Brackets in keys stay literal; everything else is query-escaped.
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    let mut encoded = String::new();
    for (key, value) in pairs {
        if !encoded.is_empty() {
            encoded.push('&');
        }
        encoded.push_str(&escape_key(key));
        encoded.push('=');
        encoded.extend(byte_serialize(value.as_bytes()));
    }
    encoded
}

fn escape_key(key: &str) -> String {
    byte_serialize(key.as_bytes())
        .collect::<String>()
        .replace("%5B", "[")
        .replace("%5D", "]")
}

fn nested_key(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}[{}]", prefix, name),
        None => name.to_owned(),
    }
}

struct Serializer<'a> {
    out: &'a mut Pairs,
    // None while still at the top level
    key: Option<String>,
}

impl<'a> Serializer<'a> {
    fn scalar(self, kind: &'static str, value: String) -> Result<(), FormError> {
        match self.key {
            Some(key) => {
                self.out.push((key, value));
                Ok(())
            }
            None => Err(FormError::TopLevel(kind)),
        }
    }
}

impl<'a> ser::Serializer for Serializer<'a> {
    type Ok = ();
    type Error = FormError;
    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = Impossible<(), FormError>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = Impossible<(), FormError>;

    fn serialize_bool(self, v: bool) -> Result<(), FormError> {
        self.scalar("bool", v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<(), FormError> {
        self.scalar("integer", v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<(), FormError> {
        self.scalar("integer", v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<(), FormError> {
        self.scalar("integer", v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<(), FormError> {
        self.scalar("integer", v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<(), FormError> {
        self.scalar("integer", v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<(), FormError> {
        self.scalar("integer", v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<(), FormError> {
        self.scalar("integer", v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<(), FormError> {
        self.scalar("integer", v.to_string())
    }

    // Display never switches to exponent notation and prints the shortest
    // string that parses back to the same value.
    fn serialize_f32(self, v: f32) -> Result<(), FormError> {
        if !v.is_finite() {
            return Err(FormError::NonFinite(f64::from(v)));
        }
        self.scalar("float", v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<(), FormError> {
        if !v.is_finite() {
            return Err(FormError::NonFinite(v));
        }
        self.scalar("float", v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<(), FormError> {
        self.scalar("char", v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<(), FormError> {
        self.scalar("string", v.to_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), FormError> {
        Err(FormError::Unsupported("byte array"))
    }

    fn serialize_none(self) -> Result<(), FormError> {
        Ok(())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<(), FormError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), FormError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), FormError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<(), FormError> {
        self.scalar("enum", variant.to_owned())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), FormError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<(), FormError> {
        Err(FormError::Unsupported("enum variant with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SeqSerializer<'a>, FormError> {
        match self.key {
            Some(key) => Ok(SeqSerializer {
                out: self.out,
                key,
                index: 0,
            }),
            None => Err(FormError::TopLevel("sequence")),
        }
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqSerializer<'a>, FormError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqSerializer<'a>, FormError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, FormError> {
        Err(FormError::Unsupported("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapSerializer<'a>, FormError> {
        Ok(MapSerializer {
            out: self.out,
            prefix: self.key,
            pending_key: None,
            entries: Vec::new(),
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<StructSerializer<'a>, FormError> {
        Ok(StructSerializer {
            out: self.out,
            prefix: self.key,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, FormError> {
        Err(FormError::Unsupported("struct variant"))
    }
}

#[doc(hidden)]
pub struct SeqSerializer<'a> {
    out: &'a mut Pairs,
    key: String,
    index: usize,
}

impl SeqSerializer<'_> {
    fn element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FormError> {
        let key = format!("{}[{}]", self.key, self.index);
        self.index += 1;
        value.serialize(Serializer {
            out: &mut *self.out,
            key: Some(key),
        })
    }

    fn finish(self) -> Result<(), FormError> {
        if self.index == 0 {
            self.out.push((self.key, String::new()));
        }
        Ok(())
    }
}

impl ser::SerializeSeq for SeqSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FormError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FormError> {
        self.finish()
    }
}

impl ser::SerializeTuple for SeqSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FormError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FormError> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SeqSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FormError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FormError> {
        self.finish()
    }
}

#[doc(hidden)]
pub struct MapSerializer<'a> {
    out: &'a mut Pairs,
    prefix: Option<String>,
    pending_key: Option<String>,
    entries: Vec<(String, Pairs)>,
}

impl ser::SerializeMap for MapSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), FormError> {
        self.pending_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), FormError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| FormError::Custom("map value serialized before its key".to_owned()))?;
        let mut pairs = Vec::new();
        value.serialize(Serializer {
            out: &mut pairs,
            key: Some(nested_key(self.prefix.as_deref(), &key)),
        })?;
        self.entries.push((key, pairs));
        Ok(())
    }

    fn end(mut self) -> Result<(), FormError> {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (_, pairs) in self.entries {
            self.out.extend(pairs);
        }
        Ok(())
    }
}

#[doc(hidden)]
pub struct StructSerializer<'a> {
    out: &'a mut Pairs,
    prefix: Option<String>,
}

impl ser::SerializeStruct for StructSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        name: &'static str,
        value: &T,
    ) -> Result<(), FormError> {
        value.serialize(Serializer {
            out: &mut *self.out,
            key: Some(nested_key(self.prefix.as_deref(), name)),
        })
    }

    fn end(self) -> Result<(), FormError> {
        Ok(())
    }
}

struct MapKeySerializer;

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = FormError;
    type SerializeSeq = Impossible<String, FormError>;
    type SerializeTuple = Impossible<String, FormError>;
    type SerializeTupleStruct = Impossible<String, FormError>;
    type SerializeTupleVariant = Impossible<String, FormError>;
    type SerializeMap = Impossible<String, FormError>;
    type SerializeStruct = Impossible<String, FormError>;
    type SerializeStructVariant = Impossible<String, FormError>;

    fn serialize_bool(self, _v: bool) -> Result<String, FormError> {
        Err(FormError::Key("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String, FormError> {
        Err(FormError::Key("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String, FormError> {
        Err(FormError::Key("float"))
    }

    fn serialize_char(self, v: char) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, FormError> {
        Ok(v.to_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, FormError> {
        Err(FormError::Key("byte array"))
    }

    fn serialize_none(self) -> Result<String, FormError> {
        Err(FormError::Key("none"))
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<String, FormError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String, FormError> {
        Err(FormError::Key("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, FormError> {
        Err(FormError::Key("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, FormError> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, FormError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, FormError> {
        Err(FormError::Key("enum variant with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, FormError> {
        Err(FormError::Key("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, FormError> {
        Err(FormError::Key("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, FormError> {
        Err(FormError::Key("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, FormError> {
        Err(FormError::Key("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, FormError> {
        Err(FormError::Key("map"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, FormError> {
        Err(FormError::Key("struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, FormError> {
        Err(FormError::Key("struct variant"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Item {
        price: Option<String>,
        quantity: Option<u64>,
    }

    #[derive(Serialize)]
    struct Params {
        mode: Option<&'static str>,
        line_items: Option<Vec<Item>>,
        expand: Vec<&'static str>,
        metadata: HashMap<String, String>,
        amount: Option<f64>,
    }

    fn pairs(list: &[(&str, &str)]) -> Pairs {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn nests_structs_sequences_and_maps() {
        let mut metadata = HashMap::new();
        metadata.insert("order".to_owned(), "42".to_owned());
        metadata.insert("customer".to_owned(), "abc".to_owned());
        let params = Params {
            mode: Some("payment"),
            line_items: Some(vec![
                Item {
                    price: Some("price_1".into()),
                    quantity: Some(2),
                },
                Item {
                    price: Some("price_2".into()),
                    quantity: None,
                },
            ]),
            expand: vec!["customer"],
            metadata,
            amount: None,
        };

        assert_eq!(
            to_pairs(&params).unwrap(),
            pairs(&[
                ("mode", "payment"),
                ("line_items[0][price]", "price_1"),
                ("line_items[0][quantity]", "2"),
                ("line_items[1][price]", "price_2"),
                ("expand[0]", "customer"),
                ("metadata[customer]", "abc"),
                ("metadata[order]", "42"),
            ])
        );
    }

    #[test]
    fn empty_sequence_clears_and_empty_string_is_sent() {
        let params = Params {
            mode: Some(""),
            line_items: Some(Vec::new()),
            expand: Vec::new(),
            metadata: HashMap::new(),
            amount: None,
        };
        assert_eq!(
            to_pairs(&params).unwrap(),
            pairs(&[("mode", ""), ("line_items", ""), ("expand", "")])
        );
    }

    #[test]
    fn floats_use_plain_decimal_notation() {
        let params = Params {
            mode: None,
            line_items: None,
            expand: vec!["a"],
            metadata: HashMap::new(),
            amount: Some(0.0000001),
        };
        let encoded = to_pairs(&params).unwrap();
        assert_eq!(encoded.last().unwrap().1, "0.0000001");

        let params = Params {
            amount: Some(f64::NAN),
            ..params
        };
        assert!(matches!(to_pairs(&params), Err(FormError::NonFinite(_))));
    }

    #[test]
    fn encodes_with_literal_brackets() {
        let encoded = encode_pairs(&pairs(&[
            ("line_items[0][price]", "price_1"),
            ("success_url", "https://example.com/ok?x=1 2"),
        ]));
        assert_eq!(
            encoded,
            "line_items[0][price]=price_1&success_url=https%3A%2F%2Fexample.com%2Fok%3Fx%3D1+2"
        );
    }

    #[test]
    fn rejects_scalars_at_top_level() {
        assert!(matches!(to_pairs(&5), Err(FormError::TopLevel(_))));
        assert!(matches!(to_pairs(&vec![1, 2]), Err(FormError::TopLevel(_))));
        assert_eq!(to_pairs(&Option::<Item>::None).unwrap(), Pairs::new());
    }
}

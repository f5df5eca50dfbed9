use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A Stripe object that can stand in for an ID reference.
pub trait Object: Default {
    /// The `object` discriminator Stripe sends for this type.
    const OBJECT: &'static str;

    fn id(&self) -> &str;

    /// A value carrying only `id`, everything else defaulted.
    fn from_id(id: String) -> Self;

    /// Decodes a response body that may be the object or just its ID.
    fn from_json(json: &str) -> serde_json::Result<Self>
    where
        Self: DeserializeOwned + Sized,
    {
        Expandable::<Self>::decode_resource(json)
    }
}

/// A reference Stripe returns as a bare ID unless the request asked for it
/// to be expanded, in which case the full object is inlined.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(object) => object.id(),
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }

    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(object),
        }
    }

    pub fn into_object(self) -> Option<T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(*object),
        }
    }

    /// The expanded object, or an ID-only stub when the field was not expanded.
    pub fn into_resolved(self) -> T {
        match self {
            Expandable::Id(id) => T::from_id(id),
            Expandable::Object(object) => *object,
        }
    }
}

impl<T: Object + DeserializeOwned> Expandable<T> {
    /// Decodes a top-level resource body that may be either the object or
    /// just its ID string.
    pub fn decode_resource(json: &str) -> serde_json::Result<T> {
        serde_json::from_str::<Expandable<T>>(json).map(Expandable::into_resolved)
    }
}

impl<T> From<String> for Expandable<T> {
    fn from(id: String) -> Self {
        Expandable::Id(id)
    }
}

impl<T> From<&str> for Expandable<T> {
    fn from(id: &str) -> Self {
        Expandable::Id(id.to_owned())
    }
}

impl<T: Object> From<T> for Expandable<T> {
    fn from(object: T) -> Self {
        Expandable::Object(Box::new(object))
    }
}

impl<T: Default> Default for Expandable<T> {
    fn default() -> Self {
        Expandable::Id(String::new())
    }
}

struct ExpandableVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ExpandableVisitor<T> {
    type Value = Expandable<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ID string or an expanded object")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Expandable::Id(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Expandable::Id(value))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let object = T::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(Expandable::Object(Box::new(object)))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Expandable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
    #[serde(default)]
    struct Widget {
        id: String,
        name: Option<String>,
    }

    impl_object!(Widget, "widget");

    #[derive(Debug, Deserialize)]
    struct Holder {
        widget: Option<Expandable<Widget>>,
    }

    #[test]
    fn string_decodes_to_id() {
        let holder: Holder = serde_json::from_str(r#"{"widget":"wd_123"}"#).unwrap();
        let widget = holder.widget.unwrap();
        assert!(!widget.is_object());
        assert_eq!(widget.id(), "wd_123");
        assert_eq!(widget.into_resolved(), Widget::from_id("wd_123".into()));
    }

    #[test]
    fn object_decodes_to_object() {
        let holder: Holder =
            serde_json::from_str(r#"{"widget":{"id":"wd_1","name":"Gear"}}"#).unwrap();
        let widget = holder.widget.unwrap();
        assert_eq!(widget.id(), "wd_1");
        assert_eq!(widget.as_object().and_then(|w| w.name.as_deref()), Some("Gear"));
    }

    #[test]
    fn null_and_other_shapes() {
        let holder: Holder = serde_json::from_str(r#"{"widget":null}"#).unwrap();
        assert!(holder.widget.is_none());
        assert!(serde_json::from_str::<Holder>(r#"{"widget":42}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"widget":["wd_1"]}"#).is_err());
    }

    #[test]
    fn serializes_back_to_the_same_shape() {
        let id: Expandable<Widget> = "wd_9".into();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""wd_9""#);

        let object: Expandable<Widget> = Widget {
            id: "wd_9".into(),
            name: None,
        }
        .into();
        assert_eq!(
            serde_json::to_string(&object).unwrap(),
            r#"{"id":"wd_9","name":null}"#
        );
    }
}

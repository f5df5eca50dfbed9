/// Declares a Stripe string enum.
///
/// Every enum gets an `Unknown(String)` variant so values Stripe adds later
/// still decode, and re-encode exactly as received.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unknown(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

/// Implements [`crate::types::Object`] for a resource with a `String` id.
macro_rules! impl_object {
    ($ty:ty, $object:literal) => {
        impl $crate::types::Object for $ty {
            const OBJECT: &'static str = $object;

            fn id(&self) -> &str {
                &self.id
            }

            fn from_id(id: String) -> Self {
                Self {
                    id,
                    ..Default::default()
                }
            }
        }
    };
}

/// `add_expand` for params structs carrying `expand: Vec<String>`.
macro_rules! impl_expand {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                pub fn add_expand(&mut self, field: &str) -> &mut Self {
                    self.expand.push(field.to_owned());
                    self
                }
            }
        )+
    };
}

/// `add_metadata` for params structs carrying `metadata: Option<Metadata>`.
macro_rules! impl_metadata {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                pub fn add_metadata(&mut self, key: &str, value: &str) -> &mut Self {
                    self.metadata
                        .get_or_insert_with(Default::default)
                        .insert(key.to_owned(), value.to_owned());
                    self
                }
            }
        )+
    };
}

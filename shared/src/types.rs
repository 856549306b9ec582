//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Named date-range filter for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    #[default]
    CurrentMonth,
    LastMonth,
    Quarter,
    Year,
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::CurrentMonth => "current-month",
            Period::LastMonth => "last-month",
            Period::Quarter => "quarter",
            Period::Year => "year",
            Period::All => "all",
        }
    }
}

/// Reference to another record.
///
/// The upstream API is inconsistent about nesting: depending on the
/// endpoint a foreign key arrives either as a bare integer id or as an
/// embedded `{ id, name }` object. Both forms normalize through `id()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordRef {
    Id(i64),
    Embedded(EmbeddedRef),
}

/// Embedded form of a record reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedRef {
    pub id: i64,
    #[serde(default, alias = "shop_name")]
    pub name: Option<String>,
}

impl RecordRef {
    pub fn id(&self) -> i64 {
        match self {
            RecordRef::Id(id) => *id,
            RecordRef::Embedded(e) => e.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            RecordRef::Id(_) => None,
            RecordRef::Embedded(e) => e.name.as_deref(),
        }
    }
}

impl From<i64> for RecordRef {
    fn from(id: i64) -> Self {
        RecordRef::Id(id)
    }
}

/// Lenient decimal (de)serialization.
///
/// The upstream sends money fields as JSON strings on some endpoints and
/// numbers on others; unparseable or missing values decode as zero rather
/// than failing the whole collection.
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(Decimal::ZERO),
            Some(Value::Number(n)) => n.to_string().parse().unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        })
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}

/// Lenient integer quantity (de)serialization: accepts numbers and numeric
/// strings, decoding anything else as zero.
pub mod lenient_quantity {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        })
    }

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(*value)
    }
}

/// Lenient date (de)serialization.
///
/// Accepts `YYYY-MM-DD` or a full ISO datetime (the date part is taken);
/// missing or unparseable values decode as `None` so the period filter can
/// drop and log them instead of rejecting the response.
pub mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.and_then(|s| parse_date(&s)))
    }

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        let prefix = s.get(..10).unwrap_or(s);
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}

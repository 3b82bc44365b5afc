//! Input records in JSON format
//!
//! A record lists the number of points to use under `keys.k` and the
//! points themselves under the labels `"1"`, `"2"`, ..., each with a
//! numeral `value` and its `base`:
//!
//! ```json
//! {
//!     "keys": { "n": 3, "k": 2 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "16", "value": "ff" }
//! }
//! ```
//!
//! Only the labels up to `k` are read. The declared total `n` is
//! optional and purely informational.
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    numeral::{self, NumeralError},
    system::Point,
};

/// Errors for records that lack required fields or are not valid JSON
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to parse record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Record is not a JSON object")]
    NotAnObject,
    #[error("Invalid 'keys' entry: {0}")]
    Keys(#[source] serde_json::Error),
    #[error("Number of points 'k' has to be at least 1")]
    NoPoints,
    #[error("Missing point {0}")]
    MissingPoint(usize),
    #[error("Point {label}: missing or invalid field '{field}'")]
    MissingField { label: usize, field: &'static str },
    #[error("Point {label}: invalid base '{base}'")]
    InvalidBase { label: usize, base: String },
    #[error("Point {label}: {source}")]
    Numeral {
        label: usize,
        #[source]
        source: NumeralError,
    },
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
pub struct Keys {
    /// Declared number of available points
    ///
    /// Never used, so values that are not a count are dropped
    #[serde(default, deserialize_with = "lenient_count")]
    pub n: Option<u64>,
    /// Number of points used for interpolation
    pub k: u64,
}

fn lenient_count<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(n) => n.trim().parse().ok(),
        _ => None,
    };
    if count.is_none() && !value.is_null() {
        debug!("Ignoring declared number of points {value}");
    }
    Ok(count)
}

/// A labelled numeral as found in the record
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RawPoint {
    pub label: usize,
    pub base: u32,
    pub value: String,
}

impl RawPoint {
    /// Decode the numeral, using the label as abscissa
    pub fn to_point(&self) -> Result<Point, RecordError> {
        let y = numeral::parse(&self.value, self.base).map_err(|source| {
            RecordError::Numeral {
                label: self.label,
                source,
            }
        })?;
        Ok(Point::new(self.label, y))
    }
}

/// A parsed input record
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Record {
    keys: Keys,
    pts: Vec<RawPoint>,
}

impl Record {
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        let obj = value.as_object().ok_or(RecordError::NotAnObject)?;
        let keys = obj.get("keys").cloned().unwrap_or(Value::Null);
        let keys: Keys =
            serde_json::from_value(keys).map_err(RecordError::Keys)?;
        debug!("Record declares {:?} points, using k = {}", keys.n, keys.k);
        if keys.k == 0 {
            return Err(RecordError::NoPoints);
        }
        let k = usize::try_from(keys.k).unwrap_or(usize::MAX);
        let pts = (1..=k)
            .map(|label| raw_point(obj, label))
            .collect::<Result<_, _>>()?;
        Ok(Self { keys, pts })
    }

    pub fn keys(&self) -> Keys {
        self.keys
    }

    /// Number of points used for interpolation
    pub fn k(&self) -> usize {
        self.pts.len()
    }

    pub fn raw_points(&self) -> &[RawPoint] {
        &self.pts
    }

    /// Decode all numerals
    pub fn points(&self) -> Result<Vec<Point>, RecordError> {
        self.pts.iter().map(RawPoint::to_point).collect()
    }
}

impl FromStr for Record {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }
}

fn raw_point(obj: &Map<String, Value>, label: usize) -> Result<RawPoint, RecordError> {
    let entry = obj
        .get(&label.to_string())
        .ok_or(RecordError::MissingPoint(label))?;
    trace!("Point {label}: {entry}");
    let base = match entry.get("base") {
        Some(Value::String(base)) => base.trim().parse::<u32>().map_err(|_| {
            RecordError::InvalidBase {
                label,
                base: base.to_owned(),
            }
        })?,
        Some(Value::Number(base)) => base
            .as_u64()
            .and_then(|b| u32::try_from(b).ok())
            .ok_or_else(|| RecordError::InvalidBase {
                label,
                base: base.to_string(),
            })?,
        _ => {
            return Err(RecordError::MissingField {
                label,
                field: "base",
            })
        }
    };
    let value = entry
        .get("value")
        .and_then(Value::as_str)
        .ok_or(RecordError::MissingField {
            label,
            field: "value",
        })?;
    Ok(RawPoint {
        label,
        base,
        value: value.to_owned(),
    })
}

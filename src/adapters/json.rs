//! JSON adapter: instance and solution document parsing, including the
//! number-literal rules (§4.1) a reference Python implementation this
//! behaviour is modelled on applies when decoding `serde_json::Value`
//! numbers: integers and integer-valued floats pass straight through,
//! decimal-literal and ratio-literal strings are parsed exactly, and
//! structured `{num, den?}` objects are read field-by-field.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AdapterError, NumberError};
use crate::number::ExactNumber;
use crate::point::Point;
use crate::polygon::{Polygon, PolygonWithHoles};

/// A parsed instance document: the outer boundary, holes, and metadata
/// carried through to diagnostics.
#[derive(Debug, Clone)]
pub struct InstanceDocument {
  pub name: String,
  pub outer_boundary: Polygon,
  pub holes: Vec<Polygon>,
}

impl InstanceDocument {
  pub fn into_region(self) -> Result<PolygonWithHoles, AdapterError> {
    PolygonWithHoles::new(self.outer_boundary, self.holes)
      .map_err(|err| AdapterError::Malformed(err.to_string()))
  }
}

/// A parsed solution document: the convex polygons proposed to cover some
/// named instance.
#[derive(Debug, Clone)]
pub struct SolutionDocument {
  pub instance_name: String,
  pub polygons: Vec<Polygon>,
}

/// Parse an `ExactNumber` out of any of the four JSON shapes §4.1 allows.
pub fn number_from_value(value: &Value) -> Result<ExactNumber, AdapterError> {
  match value {
    Value::Number(n) => {
      if let Some(i) = n.as_i64() {
        Ok(ExactNumber::from_i64(i))
      } else if let Some(f) = n.as_f64() {
        Ok(ExactNumber::from_f64(f)?)
      } else {
        Err(NumberError::Parse(n.to_string()).into())
      }
    }
    Value::String(s) => Ok(ExactNumber::from_str_literal(s)?),
    Value::Object(map) => {
      let num = map
        .get("num")
        .ok_or_else(|| AdapterError::Malformed("number object missing 'num'".to_string()))?;
      let num = number_from_value(num)?;
      match map.get("den") {
        None => Ok(num),
        Some(den) => {
          let den = number_from_value(den)?;
          Ok(num.checked_div(&den)?)
        }
      }
    }
    other => Err(AdapterError::Malformed(format!("expected a number, found {other}"))),
  }
}

fn point_from_value(value: &Value) -> Result<Point, AdapterError> {
  let x = value
    .get("x")
    .ok_or_else(|| AdapterError::Malformed("point missing 'x'".to_string()))?;
  let y = value
    .get("y")
    .ok_or_else(|| AdapterError::Malformed("point missing 'y'".to_string()))?;
  Ok(Point::new(number_from_value(x)?, number_from_value(y)?))
}

fn ring_from_value(value: &Value) -> Result<Polygon, AdapterError> {
  let points = value
    .as_array()
    .ok_or_else(|| AdapterError::Malformed("ring must be an array of points".to_string()))?;
  let vertices = points.iter().map(point_from_value).collect::<Result<Vec<_>, _>>()?;
  Ok(Polygon::new(vertices))
}

/// Parse a full instance document. Accepts either an `"id"` or a `"name"`
/// field for the instance's identifying name, and strips a trailing
/// `.instance` suffix the same way the on-disk database normalises names.
pub fn parse_instance(raw: &str) -> Result<InstanceDocument, AdapterError> {
  let value: Value = serde_json::from_str(raw)?;
  if let Some(type_field) = value.get("type").and_then(Value::as_str) {
    if !type_field.eq_ignore_ascii_case("CGSHOP2023_Instance") {
      return Err(AdapterError::WrongType { expected: "CGSHOP2023_Instance", found: type_field.to_string() });
    }
  }
  let name = value
    .get("id")
    .or_else(|| value.get("name"))
    .and_then(Value::as_str)
    .ok_or_else(|| AdapterError::Malformed("instance missing 'id'/'name'".to_string()))?
    .to_string();
  let outer_value = value
    .get("outer_boundary")
    .ok_or_else(|| AdapterError::Malformed("instance missing 'outer_boundary'".to_string()))?;
  let outer_boundary = ring_from_value(outer_value)?;
  let holes = match value.get("holes") {
    None => Vec::new(),
    Some(Value::Array(rings)) => rings.iter().map(ring_from_value).collect::<Result<Vec<_>, _>>()?,
    Some(other) => return Err(AdapterError::Malformed(format!("'holes' must be an array, found {other}"))),
  };
  Ok(InstanceDocument { name: normalize_instance_name(&name), outer_boundary, holes })
}

/// Parse a full solution document.
pub fn parse_solution(raw: &str) -> Result<SolutionDocument, AdapterError> {
  let value: Value = serde_json::from_str(raw)?;
  if let Some(type_field) = value.get("type").and_then(Value::as_str) {
    if !type_field.eq_ignore_ascii_case("CGSHOP2023_Solution") {
      return Err(AdapterError::WrongType { expected: "CGSHOP2023_Solution", found: type_field.to_string() });
    }
  }
  let instance_name = value
    .get("instance")
    .or_else(|| value.get("instance_name"))
    .or_else(|| value.get("id"))
    .and_then(Value::as_str)
    .ok_or_else(|| AdapterError::Malformed("solution missing 'instance'".to_string()))?
    .to_string();
  let polygons_value = value
    .get("polygons")
    .ok_or_else(|| AdapterError::Malformed("solution missing 'polygons'".to_string()))?;
  let polygons_value = polygons_value
    .as_array()
    .ok_or_else(|| AdapterError::Malformed("'polygons' must be an array".to_string()))?;
  let polygons = polygons_value
    .iter()
    .map(ring_from_value)
    .filter(|p| !matches!(p, Ok(ref poly) if poly.is_empty()))
    .collect::<Result<Vec<_>, _>>()?;
  if polygons.is_empty() {
    return Err(AdapterError::NoPolygons);
  }
  Ok(SolutionDocument { instance_name: normalize_instance_name(&instance_name), polygons })
}

/// Strip a directory prefix and a trailing `.instance`/`.instance.json`
/// suffix, matching the on-disk naming convention used by the instance
/// database.
pub fn normalize_instance_name(raw: &str) -> String {
  let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
  let base = base.strip_suffix(".json").unwrap_or(base);
  base.strip_suffix(".instance").unwrap_or(base).to_string()
}

/// A thin `serde`-derived mirror of the raw JSON shape, used only to give a
/// friendlier parse error than `serde_json::Value` would when the top-level
/// document isn't even an object.
#[derive(Debug, Deserialize)]
pub struct RawEnvelope {
  #[serde(rename = "type")]
  pub kind: Option<String>,
}

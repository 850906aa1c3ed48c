//! Lenient numeric coercion for pixel fields.
//!
//! Pixel values reach the model from several untrusted places: JSON imports,
//! inline CSS recovered by the parser, and raw form input. All of them funnel
//! through the helpers here so that a bad value degrades to `0` (or to "unset"
//! for optional fields) instead of failing the whole document.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Parses a pixel value such as `"12"`, `"12px"`, `" 7.9 "`.
///
/// Fractions are floored. Negative, non-numeric and empty input yields `0`.
pub fn parse_px(input: &str) -> u32 {
    parse_px_opt(input).unwrap_or(0)
}

/// Like [`parse_px`] but distinguishes "nothing parseable" (`None`) from zero.
pub fn parse_px_opt(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    let number = trimmed
        .strip_suffix("px")
        .or_else(|| trimmed.strip_suffix("PX"))
        .unwrap_or(trimmed)
        .trim();
    if number.is_empty() {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    Some(float_to_px(value))
}

fn float_to_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.min(u32::MAX as f64).floor() as u32
    } else {
        0
    }
}

struct PxVisitor;

impl<'de> Visitor<'de> for PxVisitor {
    type Value = u32;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a pixel value")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
        Ok(v.min(u32::MAX as u64) as u32)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
        Ok(v.clamp(0, u32::MAX as i64) as u32)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u32, E> {
        Ok(float_to_px(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
        Ok(parse_px(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<u32, E> {
        Ok(0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<u32, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u32, E> {
        Ok(0)
    }
}

struct OptPxVisitor;

impl<'de> Visitor<'de> for OptPxVisitor {
    type Value = Option<u32>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an optional pixel value")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        PxVisitor.visit_u64(v).map(Some)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        PxVisitor.visit_i64(v).map(Some)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        PxVisitor.visit_f64(v).map(Some)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(parse_px(v)))
        }
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(OptPxVisitor)
    }
}

/// `deserialize_with` target for required pixel fields.
pub fn px<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    d.deserialize_any(PxVisitor)
}

/// `deserialize_with` target for optional pixel fields.
pub fn opt_px<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    d.deserialize_any(OptPxVisitor)
}

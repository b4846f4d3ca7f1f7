//! Deserialization of BigComplex.

use core::cmp::Ordering;
use core::fmt::Formatter;

use astro_float_num::BigFloat;
use astro_float_num::RoundingMode;
use serde::de::Error;
use serde::de::MapAccess;
use serde::de::SeqAccess;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

use crate::num::BigComplex;
use crate::ops::round::round_to_bits;
use crate::parser::parse_part;

#[cfg(not(feature = "std"))]
use {alloc::format, alloc::string::String};

const FIELDS: &[&str] = &["re", "im", "p_re", "p_im"];

/// A part of a complex number as it is written: a string, or a number.
enum Part {
    Str(String),
    Num(BigFloat),
}

impl Part {
    fn to_big_float(&self, p: usize) -> Result<BigFloat, crate::Error> {
        let (x, _): (BigFloat, Ordering) = match self {
            Part::Str(s) => parse_part(s, p, RoundingMode::ToEven)?,
            Part::Num(x) => round_to_bits(x, p, RoundingMode::ToEven)?,
        };
        Ok(x)
    }
}

struct PartVisitor {}

impl<'de> Deserialize<'de> for Part {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PartVisitor {})
    }
}

impl<'de> Visitor<'de> for PartVisitor {
    type Value = Part;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "except `String`, `Number`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Part::Num(BigFloat::from_word(v as astro_float_num::Word, 64)))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        let mut x = BigFloat::from_word(v.unsigned_abs() as astro_float_num::Word, 64);
        if v < 0 {
            x.inv_sign();
        }
        Ok(Part::Num(x))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Part::Num(BigFloat::from_f64(v, 64)))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Part::Str(String::from(v)))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Part::Str(v))
    }
}

struct BigComplexVisitor {}

impl<'de> Deserialize<'de> for BigComplex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct("BigComplex", FIELDS, BigComplexVisitor {})
    }
}

impl BigComplexVisitor {
    fn build<E: Error>(re: Part, im: Part, p_re: usize, p_im: usize) -> Result<BigComplex, E> {
        let re = re.to_big_float(p_re).map_err(|e| Error::custom(format!("{e:?}")))?;
        let im = im.to_big_float(p_im).map_err(|e| Error::custom(format!("{e:?}")))?;
        Ok(BigComplex::from_raw_parts(re, im, p_re, p_im))
    }
}

impl<'de> Visitor<'de> for BigComplexVisitor {
    type Value = BigComplex;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "struct BigComplex")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let re: Part = seq
            .next_element()?
            .ok_or_else(|| Error::invalid_length(0, &self))?;
        let im: Part = seq
            .next_element()?
            .ok_or_else(|| Error::invalid_length(1, &self))?;
        let p_re: usize = seq
            .next_element()?
            .ok_or_else(|| Error::invalid_length(2, &self))?;
        let p_im: usize = seq
            .next_element()?
            .ok_or_else(|| Error::invalid_length(3, &self))?;

        Self::build(re, im, p_re, p_im)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut re: Option<Part> = None;
        let mut im: Option<Part> = None;
        let mut p_re: Option<usize> = None;
        let mut p_im: Option<usize> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "re" if re.is_none() => re = Some(map.next_value()?),
                "im" if im.is_none() => im = Some(map.next_value()?),
                "p_re" if p_re.is_none() => p_re = Some(map.next_value()?),
                "p_im" if p_im.is_none() => p_im = Some(map.next_value()?),
                "re" | "im" | "p_re" | "p_im" => {
                    return Err(Error::custom(format!("duplicate field `{key}`")))
                }
                _ => return Err(Error::unknown_field(&key, FIELDS)),
            }
        }

        let re = re.ok_or_else(|| Error::missing_field("re"))?;
        let im = im.ok_or_else(|| Error::missing_field("im"))?;
        let p_re = p_re.ok_or_else(|| Error::missing_field("p_re"))?;
        let p_im = p_im.ok_or_else(|| Error::missing_field("p_im"))?;

        Self::build(re, im, p_re, p_im)
    }
}

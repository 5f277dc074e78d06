//! Reading scalar text as primitive values.
//!
//! Scalars keep their source text verbatim; these conversions interpret it on
//! demand and report failures against the scalar's path.

use std::num::ParseIntError;

use super::error::{Result, YamlError};
use super::node::YamlScalar;

impl YamlScalar {
    /// Parses a signed 64-bit integer. Accepts decimal, `0x` hexadecimal and
    /// `0o` octal, each optionally negated (`-0x1F`).
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnode::document::node::YamlScalar;
    /// use yamlnode::yamlpath::YamlPath;
    ///
    /// assert_eq!(YamlScalar::new("-0x1F", YamlPath::root()).to_i64().unwrap(), -31);
    /// assert!(YamlScalar::new("twelve", YamlPath::root()).to_i64().is_err());
    /// ```
    pub fn to_i64(&self) -> Result<i64> {
        self.parse_integer("i64", i64::from_str_radix)
    }

    pub fn to_i32(&self) -> Result<i32> {
        self.parse_integer("i32", i32::from_str_radix)
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.parse_integer("u64", u64::from_str_radix)
    }

    /// Parses a float, including YAML's `.inf`, `-.inf` and `.nan` spellings.
    pub fn to_f64(&self) -> Result<f64> {
        match self.content.as_str() {
            ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => Ok(f64::INFINITY),
            "-.inf" | "-.Inf" | "-.INF" => Ok(f64::NEG_INFINITY),
            ".nan" | ".NaN" | ".NAN" => Ok(f64::NAN),
            content => {
                // Rust also accepts "inf", "NaN" and "infinity".
                let has_letters = content
                    .chars()
                    .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E');
                match content.parse::<f64>() {
                    Ok(value) if !has_letters => Ok(value),
                    _ => Err(self.invalid("f64")),
                }
            }
        }
    }

    pub fn to_bool(&self) -> Result<bool> {
        match self.content.as_str() {
            "true" | "True" | "TRUE" => Ok(true),
            "false" | "False" | "FALSE" => Ok(false),
            content => Err(self.format_error(format!(
                "Value '{}' is not a valid boolean, permitted choices are: true or false",
                content
            ))),
        }
    }

    pub fn to_char(&self) -> Result<char> {
        let mut chars = self.content.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(self.invalid("character")),
        }
    }

    fn parse_integer<T>(
        &self,
        description: &str,
        from_str_radix: fn(&str, u32) -> std::result::Result<T, ParseIntError>,
    ) -> Result<T> {
        let content = self.content.as_str();
        let (negative, unsigned) = match content.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, content),
        };
        let (digits, radix) = if let Some(hex) = unsigned.strip_prefix("0x") {
            (hex, 16)
        } else if let Some(octal) = unsigned.strip_prefix("0o") {
            (octal, 8)
        } else {
            return from_str_radix(content, 10).map_err(|_| self.invalid(description));
        };

        // from_str_radix would accept a second sign after the prefix
        if digits.starts_with(['+', '-']) {
            return Err(self.invalid(description));
        }
        let signed = if negative {
            format!("-{}", digits)
        } else {
            digits.to_string()
        };
        from_str_radix(&signed, radix).map_err(|_| self.invalid(description))
    }

    fn invalid(&self, description: &str) -> YamlError {
        self.format_error(format!(
            "Value '{}' is not a valid {} value.",
            self.content, description
        ))
    }

    fn format_error(&self, message: String) -> YamlError {
        YamlError::ScalarFormat {
            message,
            value: self.content.clone(),
            path: self.path.clone(),
        }
    }
}

use serde::Deserialize;
use serde::Serialize;

/// The exponent portion of a [`NumericLiteral`].
///
/// The marker character and explicit sign are stored so that rendering
/// reproduces the source exactly: `1E+6` and `1e6` stay distinct.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Exponent {
    /// `e` or `E`, as written.
    marker: char,

    /// `+` or `-` when the source carried an explicit sign.
    sign: Option<char>,

    /// The exponent digits. Never empty.
    digits: String,
}

impl Exponent {
    pub fn new(marker: char, sign: Option<char>, digits: impl Into<String>) -> Self {
        let digits = digits.into();
        debug_assert!(!digits.is_empty());
        Self {
            marker,
            sign,
            digits,
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn sign(&self) -> Option<char> {
        self.sign
    }
}

impl std::fmt::Display for Exponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker)?;
        if let Some(sign) = self.sign {
            write!(f, "{sign}")?;
        }
        write!(f, "{}", self.digits)
    }
}

/// A numeric literal decomposed into its written parts.
///
/// The decomposition is kept instead of a converted `i64`/`f64` so that
/// rendering is lossless: `1e6`, `-0.000001`, and `1.01` all survive a
/// parse/print cycle byte-for-byte.
///
/// Values are immutable once constructed. `integer_part` is always present
/// and non-empty.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NumericLiteral {
    negated: bool,
    integer_part: String,
    fractional_part: Option<String>,
    exponent_part: Option<Exponent>,
}

impl NumericLiteral {
    pub fn new(
        negated: bool,
        integer_part: impl Into<String>,
        fractional_part: Option<String>,
        exponent_part: Option<Exponent>,
    ) -> Self {
        let integer_part = integer_part.into();
        debug_assert!(!integer_part.is_empty());
        Self {
            negated,
            integer_part,
            fractional_part,
            exponent_part,
        }
    }

    /// Returns `true` if the literal was written with a leading `-`.
    pub fn negated(&self) -> bool {
        self.negated
    }

    pub fn integer_part(&self) -> &str {
        &self.integer_part
    }

    pub fn fractional_part(&self) -> Option<&str> {
        self.fractional_part.as_deref()
    }

    pub fn exponent_part(&self) -> Option<&Exponent> {
        self.exponent_part.as_ref()
    }

    /// Returns `true` if the literal carries a fractional or exponent part.
    pub fn is_float(&self) -> bool {
        self.fractional_part.is_some() || self.exponent_part.is_some()
    }

    /// The literal's value as an `i64`, truncating toward zero for floats.
    pub fn as_i64(&self) -> i64 {
        if self.is_float() {
            self.as_f64() as i64
        } else {
            let magnitude: i64 = self.integer_part.parse().unwrap_or(i64::MAX);
            if self.negated { -magnitude } else { magnitude }
        }
    }

    /// The literal's value as an `f64`.
    pub fn as_f64(&self) -> f64 {
        // The decomposed parts always re-render as a valid float literal.
        self.to_string()
            .parse()
            .expect("numeric literal renders as a valid float")
    }
}

impl From<i64> for NumericLiteral {
    fn from(value: i64) -> Self {
        Self::new(value < 0, value.unsigned_abs().to_string(), None, None)
    }
}

impl From<f64> for NumericLiteral {
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            return Self::new(false, "0", None, None);
        }
        let rendered = format!("{value}");
        let (rendered, negated) = match rendered.strip_prefix('-') {
            Some(rest) => (rest.to_string(), true),
            None => (rendered, false),
        };
        let (mantissa, exponent) = match rendered.split_once(['e', 'E']) {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix(['+', '-']) {
                    Some(digits) => (exp.chars().next(), digits.to_string()),
                    None => (None, exp.to_string()),
                };
                (mantissa.to_string(), Some(Exponent::new('e', sign, digits)))
            }
            None => (rendered, None),
        };
        let (integer, fraction) = match mantissa.split_once('.') {
            Some((int, frac)) => (int.to_string(), Some(frac.to_string())),
            None => (mantissa, None),
        };
        Self::new(negated, integer, fraction, exponent)
    }
}

impl std::fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "-")?;
        }
        write!(f, "{}", self.integer_part)?;
        if let Some(fraction) = &self.fractional_part {
            write!(f, ".{fraction}")?;
        }
        if let Some(exponent) = &self.exponent_part {
            write!(f, "{exponent}")?;
        }
        Ok(())
    }
}

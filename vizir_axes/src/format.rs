// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.
//!
//! Numbers are formatted with [`NumberFormat`] (fixed/grouped decimals,
//! scientific notation, or a caller-supplied closure). Dates are formatted
//! with [`DateFormat`], a chrono strftime pattern pinned to a time zone and a
//! locale.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt::{self, Write as _};

use chrono::{Locale, TimeZone};
use chrono_tz::Tz;

/// Settings for plain decimal output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecimalFormat {
    /// Fraction digits always written, padded with zeros.
    pub min_fraction_digits: usize,
    /// Fraction digits at most written; extra precision is rounded away.
    pub max_fraction_digits: usize,
    /// Whether to group integer digits in threes.
    pub grouping: bool,
    /// Separator written between digit groups.
    pub grouping_separator: char,
    /// Separator written before the fraction digits.
    pub decimal_separator: char,
}

impl DecimalFormat {
    /// Creates a decimal format with `,` grouping and `.` as the decimal point.
    pub fn new(min_fraction_digits: usize, max_fraction_digits: usize, grouping: bool) -> Self {
        Self {
            min_fraction_digits,
            max_fraction_digits: max_fraction_digits.max(min_fraction_digits),
            grouping,
            grouping_separator: ',',
            decimal_separator: '.',
        }
    }

    fn write(&self, out: &mut String, value: f64) {
        let digits = alloc::format!("{:.*}", self.max_fraction_digits, value.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let mut frac = frac_part.trim_end_matches('0');
        if frac.len() < self.min_fraction_digits {
            frac = &frac_part[..self.min_fraction_digits.min(frac_part.len())];
        }
        let is_zero = int_part.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        if self.grouping {
            let len = int_part.len();
            for (i, c) in int_part.chars().enumerate() {
                if i > 0 && (len - i) % 3 == 0 {
                    out.push(self.grouping_separator);
                }
                out.push(c);
            }
        } else {
            out.push_str(int_part);
        }
        if !frac.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
    }
}

impl Default for DecimalFormat {
    /// Grouped, with up to three fraction digits.
    fn default() -> Self {
        Self::new(0, 3, true)
    }
}

/// A formatter turning tick values into label text.
#[derive(Clone)]
pub enum NumberFormat {
    /// Positional decimal notation.
    Decimal(DecimalFormat),
    /// Scientific notation such as `1.5E-7`.
    Scientific {
        /// Mantissa fraction digits at most written.
        max_fraction_digits: usize,
    },
    /// A caller-supplied formatter.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl NumberFormat {
    /// Whole numbers without grouping: `12345`.
    pub fn integer() -> Self {
        Self::Decimal(DecimalFormat::new(0, 0, false))
    }

    /// Whole numbers with grouping: `12,345`.
    pub fn grouped_integer() -> Self {
        Self::Decimal(DecimalFormat::new(0, 0, true))
    }

    /// Exactly `digits` fraction digits: `fixed(2)` writes `0.50`.
    pub fn fixed(digits: usize) -> Self {
        Self::Decimal(DecimalFormat::new(digits, digits, false))
    }

    /// Between `min` and `max` fraction digits, with grouping.
    pub fn decimal(min: usize, max: usize) -> Self {
        Self::Decimal(DecimalFormat::new(min, max, true))
    }

    /// Scientific notation with up to `max_fraction_digits` mantissa digits.
    pub fn scientific(max_fraction_digits: usize) -> Self {
        Self::Scientific {
            max_fraction_digits,
        }
    }

    /// Wraps a closure.
    pub fn custom(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Formats `value`.
    ///
    /// NaN is written as `NaN` and infinities as `∞`/`-∞` in every mode except
    /// [`NumberFormat::Custom`], which sees the raw value.
    pub fn format(&self, value: f64) -> String {
        if let Self::Custom(f) = self {
            return f(value);
        }
        let mut out = String::new();
        if value.is_nan() {
            out.push_str("NaN");
            return out;
        }
        if value.is_infinite() {
            if value < 0.0 {
                out.push('-');
            }
            out.push('\u{221e}');
            return out;
        }
        match self {
            Self::Decimal(d) => d.write(&mut out, value),
            Self::Scientific {
                max_fraction_digits,
            } => write_scientific(&mut out, value, *max_fraction_digits),
            Self::Custom(_) => {}
        }
        out
    }
}

fn write_scientific(out: &mut String, value: f64, max_fraction_digits: usize) {
    let raw = alloc::format!("{:.*e}", max_fraction_digits, value);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    out.push_str(mantissa);
    out.push('E');
    out.push_str(exponent);
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::Decimal(DecimalFormat::default())
    }
}

impl fmt::Debug for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(d) => f.debug_tuple("Decimal").field(d).finish(),
            Self::Scientific {
                max_fraction_digits,
            } => f
                .debug_struct("Scientific")
                .field("max_fraction_digits", max_fraction_digits)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for NumberFormat {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (
                Self::Scientific {
                    max_fraction_digits: a,
                },
                Self::Scientific {
                    max_fraction_digits: b,
                },
            ) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// A strftime pattern bound to a time zone and a locale.
#[derive(Clone, Debug, PartialEq)]
pub struct DateFormat {
    pattern: Arc<str>,
    time_zone: Tz,
    locale: Locale,
}

impl DateFormat {
    /// Creates a format for `pattern` in UTC with the `en_US` locale.
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.into(),
            time_zone: Tz::UTC,
            locale: Locale::en_US,
        }
    }

    /// Returns a copy using `time_zone`.
    #[must_use]
    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Returns a copy using `locale` for month and weekday names.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The strftime pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The zone instants are converted to before formatting.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The locale used for names.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats milliseconds since the Unix epoch.
    ///
    /// Out-of-range instants and invalid patterns produce an empty string.
    pub fn format(&self, millis: i64) -> String {
        let mut out = String::new();
        let Some(dt) = self.time_zone.timestamp_millis_opt(millis).single() else {
            log::warn!("cannot format timestamp {millis} ms");
            return out;
        };
        if write!(out, "{}", dt.format_localized(&self.pattern, self.locale)).is_err() {
            log::warn!("invalid date pattern {:?}", self.pattern);
            out.clear();
        }
        out
    }
}

impl Default for DateFormat {
    /// Short US date and time, e.g. `7/4/25 3:05 PM`.
    fn default() -> Self {
        Self::new("%-m/%-d/%y %-I:%M %p")
    }
}

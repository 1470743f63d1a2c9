// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classic `b`/`e`/`f`/`g` float notations.
//!
//! Rust's `{:e}` prints `8e-9` and has no `%g` equivalent, so the digits are
//! taken from the standard formatter (shortest round-trip or rounded to a
//! precision) and laid out here: exponents always carry a sign and at least
//! two digits, and general notation switches between fixed and exponent form.

use std::fmt::Write;

/// Longest exact decimal fraction of an `f64` (the smallest subnormal).
/// Larger precisions are capped here.
pub const MAX_PRECISION: usize = 1074;

/// Layout used by [`format_float`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatStyle {
    /// `<mantissa>p<exponent>`, both decimal, straight from the IEEE-754 bits.
    Binary,
    /// `d.ddde±dd`
    Exponent { upper: bool },
    /// `ddd.ddd`
    Fixed,
    /// Exponent form for large or tiny exponents, fixed otherwise.
    General { upper: bool },
}

/// Format `value` in `style`.
///
/// `precision` of `None` means the fewest digits that still round-trip.
/// For [`FloatStyle::General`] the precision counts significant digits, for
/// the other decimal styles it counts digits after the point. Binary ignores
/// it.
pub fn format_float(value: f64, style: FloatStyle, precision: Option<usize>) -> String {
    let precision = precision.map(|p| p.min(MAX_PRECISION));
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-Inf" } else { "+Inf" }.to_string();
    }

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    let abs = value.abs();

    match style {
        FloatStyle::Binary => write_binary(&mut out, abs),
        FloatStyle::Exponent { upper } => {
            let digits = match precision {
                None => Digits::shortest(abs),
                Some(p) => Digits::exponent(abs, p),
            };
            let prec = precision.unwrap_or_else(|| digits.len().saturating_sub(1));
            write_exponent(&mut out, &digits, prec, upper);
        }
        FloatStyle::Fixed => {
            let digits = match precision {
                None => Digits::shortest(abs),
                Some(p) => Digits::fixed(abs, p),
            };
            let prec = precision.unwrap_or_else(|| digits.fraction_len());
            write_fixed(&mut out, &digits, prec);
        }
        FloatStyle::General { upper } => write_general(&mut out, abs, precision, upper),
    }
    out
}

/// Decimal digits of a non-negative value: `0.d1d2d3… × 10^point`.
///
/// Trailing zeros are trimmed, so zero has no digits at all.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits {
    digits: Vec<u8>,
    point: i32,
}

impl Digits {
    /// Shortest digits that round-trip.
    fn shortest(abs: f64) -> Self {
        Self::from_exponent_str(&format!("{:e}", abs))
    }

    /// Rounded to `frac + 1` significant digits.
    fn exponent(abs: f64, frac: usize) -> Self {
        Self::from_exponent_str(&format!("{:.*e}", frac, abs))
    }

    /// Rounded to `frac` digits after the decimal point.
    fn fixed(abs: f64, frac: usize) -> Self {
        let text = format!("{:.*}", frac, abs);
        let (int, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let mut point = int.len() as i32;
        let mut digits: Vec<u8> = int.bytes().chain(fraction.bytes()).collect();

        let leading = digits.iter().take_while(|&&d| d == b'0').count();
        digits.drain(..leading);
        point -= leading as i32;

        Self::trimmed(digits, point)
    }

    /// Parse Rust's `{:e}` output, e.g. `6.048e5` or `8e-9`.
    fn from_exponent_str(text: &str) -> Self {
        let (mantissa, exp) = text.split_once('e').unwrap_or((text, "0"));
        let exp: i32 = exp.parse().unwrap_or_default();
        let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
        Self::trimmed(digits, exp + 1)
    }

    fn trimmed(mut digits: Vec<u8>, point: i32) -> Self {
        while digits.last() == Some(&b'0') {
            digits.pop();
        }
        let point = if digits.is_empty() { 0 } else { point };
        Self { digits, point }
    }

    fn len(&self) -> usize {
        self.digits.len()
    }

    fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    fn len_i32(&self) -> i32 {
        self.digits.len() as i32
    }

    /// Digits needed after the point to show every significant digit.
    fn fraction_len(&self) -> usize {
        (self.len_i32() - self.point).max(0) as usize
    }

    /// Digit at position `index` counted from the first significant digit,
    /// `'0'` outside the stored range.
    fn at(&self, index: i32) -> char {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.digits.get(i))
            .map_or('0', |&d| d as char)
    }
}

fn write_exponent(out: &mut String, digits: &Digits, prec: usize, upper: bool) {
    out.push(digits.at(0));
    if prec > 0 {
        out.push('.');
        for i in 1..=prec {
            out.push(digits.at(i as i32));
        }
    }
    out.push(if upper { 'E' } else { 'e' });

    let exp = if digits.is_empty() { 0 } else { digits.point - 1 };
    out.push(if exp < 0 { '-' } else { '+' });
    let _ = write!(out, "{:02}", exp.unsigned_abs());
}

fn write_fixed(out: &mut String, digits: &Digits, prec: usize) {
    if digits.point > 0 {
        for i in 0..digits.point {
            out.push(digits.at(i));
        }
    } else {
        out.push('0');
    }
    if prec > 0 {
        out.push('.');
        for i in 1..=prec as i32 {
            out.push(digits.at(digits.point + i - 1));
        }
    }
}

fn write_general(out: &mut String, abs: f64, precision: Option<usize>, upper: bool) {
    let (digits, mut prec, eprec) = match precision {
        None => {
            let digits = Digits::shortest(abs);
            let prec = digits.len_i32();
            (digits, prec, 6)
        }
        Some(p) => {
            let p = p.max(1);
            let digits = Digits::exponent(abs, p - 1);
            let prec = p as i32;
            let mut eprec = prec;
            if eprec > digits.len_i32() && digits.len_i32() >= digits.point {
                eprec = digits.len_i32();
            }
            (digits, prec, eprec)
        }
    };

    let exp = digits.point - 1;
    if exp < -4 || exp >= eprec {
        prec = prec.min(digits.len_i32());
        write_exponent(out, &digits, (prec - 1).max(0) as usize, upper);
        return;
    }
    if prec > digits.point {
        prec = digits.len_i32();
    }
    write_fixed(out, &digits, (prec - digits.point).max(0) as usize);
}

fn write_binary(out: &mut String, abs: f64) {
    const MANT_BITS: u32 = 52;
    const EXP_BITS: u32 = 11;
    const BIAS: i32 = -1023;

    let bits = abs.to_bits();
    let mut exp = ((bits >> MANT_BITS) & ((1 << EXP_BITS) - 1)) as i32;
    let mut mant = bits & ((1u64 << MANT_BITS) - 1);
    if exp == 0 {
        // subnormal
        exp += 1;
    } else {
        mant |= 1u64 << MANT_BITS;
    }
    exp += BIAS - MANT_BITS as i32;

    let _ = write!(out, "{}p", mant);
    if exp >= 0 {
        out.push('+');
    }
    let _ = write!(out, "{}", exp);
}

#[cfg(test)]
#[path = "float_fmt_tests.rs"]
mod tests;

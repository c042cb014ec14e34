//! Format codes: validation, compilation and the generated default vocabulary.
//!
//! A token is one to three symbols. Lower-case symbols are the short form of a
//! field and upper-case symbols the long form:
//!
//! | symbol | field | short | long |
//! |---|---|---|---|
//! | `d` `D` | day of month | `1` | `01` |
//! | `m` `M` | month number | `2` | `02` |
//! | `y` `Y` | year | `03` | `2003` |
//! | `a` `A` | weekday name | `Sat` | `Saturday` |
//! | `b` `B` | month name | `Feb` | `February` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, MAX_TOKEN_LEN, NameProvider, prelude::*};

/// Date component a symbol renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    Day,
    Month,
    Year,
    Weekday,
    MonthName,
}

/// How a field is spelled. `Short` drops the zero padding of numbers, keeps
/// two year digits and abbreviates names; `Long` is the padded, four-digit,
/// full-name form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Style {
    Short,
    Long,
}

/// One compiled symbol of a format token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub field: Field,
    pub style: Style,
}

impl FieldSpec {
    /// Compiles a single symbol, `None` if it is outside the alphabet.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        let field = match symbol.to_ascii_lowercase() {
            'd' => Field::Day,
            'm' => Field::Month,
            'y' => Field::Year,
            'a' => Field::Weekday,
            'b' => Field::MonthName,
            _ => return None,
        };
        let style = if symbol.is_ascii_uppercase() {
            Style::Long
        } else {
            Style::Short
        };
        Some(Self { field, style })
    }

    /// The symbol this field was compiled from.
    pub const fn symbol(self) -> char {
        let lower = match self.field {
            Field::Day => 'd',
            Field::Month => 'm',
            Field::Year => 'y',
            Field::Weekday => 'a',
            Field::MonthName => 'b',
        };
        match self.style {
            Style::Short => lower,
            Style::Long => lower.to_ascii_uppercase(),
        }
    }

    fn write_to<W: fmt::Write>(
        self,
        out: &mut W,
        date: &CalendarDate,
        names: &(impl NameProvider + ?Sized),
    ) -> fmt::Result {
        match (self.field, self.style) {
            (Field::Day, Style::Short) => write!(out, "{}", date.day().get()),
            (Field::Day, Style::Long) => write!(out, "{:02}", date.day().get()),
            (Field::Month, Style::Short) => write!(out, "{}", date.month().get()),
            (Field::Month, Style::Long) => write!(out, "{:02}", date.month().get()),
            (Field::Year, Style::Short) => write!(out, "{:02}", date.year().two_digit()),
            (Field::Year, Style::Long) => write!(out, "{:04}", date.year().get()),
            (Field::Weekday, style) => out.write_str(names.weekday_name(date.weekday(), style)),
            (Field::MonthName, style) => out.write_str(names.month_name(date.month(), style)),
        }
    }
}

/// A validated format token compiled into its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{token}")]
pub struct FormatSpec {
    token:  String,
    fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("format '{token}' is invalid: it has {len} characters, more than 3")]
    TooLong { token: String, len: usize },

    #[error(
        "format '{token}' is not valid: unsupported symbol '{symbol}' (valid symbols: d, m, y, D, M, Y, a, A, b, B)"
    )]
    InvalidSymbol { token: String, symbol: char },

    #[error("format token is empty")]
    Empty,
}

impl FormatSpec {
    /// Compiles a token.
    ///
    /// # Errors
    /// Returns `FormatError` if the token is empty, longer than
    /// `MAX_TOKEN_LEN` symbols or contains a symbol outside `FORMAT_ALPHABET`.
    pub fn compile(token: &str) -> Result<Self, FormatError> {
        let len = token.chars().count();
        if len == 0 {
            return Err(FormatError::Empty);
        }
        if len > MAX_TOKEN_LEN {
            return Err(FormatError::TooLong {
                token: token.to_owned(),
                len,
            });
        }

        let fields = token
            .chars()
            .map(|symbol| {
                FieldSpec::from_symbol(symbol).ok_or_else(|| FormatError::InvalidSymbol {
                    token: token.to_owned(),
                    symbol,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            token: token.to_owned(),
            fields,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Appends `date` rendered under this spec to `out`, with `divider`
    /// between consecutive fields.
    pub fn render_into(
        &self,
        out: &mut String,
        date: &CalendarDate,
        divider: &str,
        names: &(impl NameProvider + ?Sized),
    ) {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push_str(divider);
            }
            // Writing into a String cannot fail.
            let _ = field.write_to(out, date, names);
        }
    }

    pub fn render(&self, date: &CalendarDate, divider: &str, names: &(impl NameProvider + ?Sized)) -> String {
        let mut out = String::new();
        self.render_into(&mut out, date, divider, names);
        out
    }
}

impl FromStr for FormatSpec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl Serialize for FormatSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.token)
    }
}

impl<'de> Deserialize<'de> for FormatSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Compiles every requested token, or the whole [`vocabulary`] when none are
/// requested. The first invalid token aborts the whole list.
///
/// # Errors
/// Returns the `FormatError` of the first invalid token.
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<FormatSpec>, FormatError> {
    if tokens.is_empty() {
        return Ok(vocabulary());
    }
    tokens.iter().map(|t| FormatSpec::compile(t.as_ref())).collect()
}

/// Slots a vocabulary token draws its symbols from; each slot is used at most
/// once per token.
const SLOTS: [&[char]; 3] = [&['d', 'a'], &['m', 'b'], &['y']];

/// Every canonical token: one to three symbols, each from a distinct slot, in
/// any slot order and any combination of cases.
///
/// Ordered by length, then slot order, then symbol choice, then case (bit `i`
/// of a counter upper-cases symbol `i`).
pub fn vocabulary() -> Vec<FormatSpec> {
    let mut tokens = Vec::new();
    for len in 1..=MAX_TOKEN_LEN {
        for order in slot_orders(len) {
            for symbols in symbol_choices(&order) {
                for mask in 0..(1_u32 << len) {
                    let token: String = symbols
                        .iter()
                        .enumerate()
                        .map(|(i, c)| if mask & (1 << i) == 0 { *c } else { c.to_ascii_uppercase() })
                        .collect();
                    tokens.push(token);
                }
            }
        }
    }

    tokens
        .iter()
        .filter_map(|t| FormatSpec::compile(t).ok())
        .collect()
}

/// Ordered selections of `len` distinct slots.
fn slot_orders(len: usize) -> Vec<Vec<usize>> {
    if len == 0 {
        return vec![Vec::new()];
    }
    let mut orders = Vec::new();
    for shorter in slot_orders(len - 1) {
        for slot in 0..SLOTS.len() {
            if !shorter.contains(&slot) {
                let mut order = shorter.clone();
                order.push(slot);
                orders.push(order);
            }
        }
    }
    orders
}

/// Every way of picking one lower-case symbol per slot in `order`.
fn symbol_choices(order: &[usize]) -> Vec<Vec<char>> {
    order.iter().fold(vec![Vec::new()], |acc, &slot| {
        acc.iter()
            .flat_map(|prefix| {
                SLOTS[slot].iter().map(move |&c| {
                    let mut next = prefix.clone();
                    next.push(c);
                    next
                })
            })
            .collect()
    })
}

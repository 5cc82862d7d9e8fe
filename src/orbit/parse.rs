//! Parsing of command-line and prompt input into orbit bindings.

use std::f64::consts::PI;

use thiserror::Error;

use super::{OrbitVariable, GEOSTATIONARY, GEOSYNC_KERBIN, GM_EARTH, GM_KERBIN, GM_MUN};

/// Errors in parsing orbit bindings.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Not the name of an orbit variable
    #[error("Unknown variable {0:?}")]
    UnknownVariable(String),

    /// A binding must be of the form `name=value` or `name:value`
    #[error("Expected name=value or name:value, got {0:?}")]
    MissingSeparator(String),

    /// Neither a number nor a named constant
    #[error("Invalid number {0:?}")]
    InvalidNumber(String),

    /// An operator without an operand on one side
    #[error("Missing operand in expression {0:?}")]
    EmptyOperand(String),

    /// The insertion orbit takes a height, a period portion and optionally a GM
    #[error("Expected `height portion [GM]`, got {0} arguments")]
    InsertionArguments(usize),
}

/// The name of the default gravitational parameter.
pub const DEFAULT_GM: &str = "GM-kerbin";

fn parse_number(arg: &str) -> Result<f64, ParseError> {
    arg.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(arg.to_string()))
}

/// Parse a gravitational parameter: `GM-kerbin`, `GM-earth`, `GM-Mun` or a
/// number.
pub fn parse_gm(arg: &str) -> Result<f64, ParseError> {
    match arg {
        "GM-kerbin" => Ok(GM_KERBIN),
        "GM-earth" => Ok(GM_EARTH),
        "GM-Mun" => Ok(GM_MUN),
        _ => parse_number(arg),
    }
}

/// Parse an orbit height: `geosync-kerbin`, `geostationary` or a number.
pub fn parse_height(arg: &str) -> Result<f64, ParseError> {
    match arg {
        "geosync-kerbin" => Ok(GEOSYNC_KERBIN),
        "geostationary" => Ok(GEOSTATIONARY),
        _ => parse_number(arg),
    }
}

/// Parse a value: any of the named gravitational parameters or heights, or a
/// number.
pub fn parse_value(arg: &str) -> Result<f64, ParseError> {
    parse_gm(arg).or_else(|_| parse_height(arg))
}

/// Parse a binding of the form `name=value` or `name:value`.
pub fn parse_binding(arg: &str) -> Result<(OrbitVariable, f64), ParseError> {
    let (name, value) = arg
        .split_once(|c: char| c == '=' || c == ':')
        .ok_or_else(|| ParseError::MissingSeparator(arg.to_string()))?;
    Ok((name.trim().parse()?, parse_value(value.trim())?))
}

/// Evaluate a ratio expression such as `1/2` or `2/3+1`.
///
/// The expression is split on `+` first, then `-`, `/` and `*`; each split is
/// evaluated recursively and folded left to right. Parentheses and unary
/// minus are not supported.
pub fn eval_ratio(expr: &str) -> Result<f64, ParseError> {
    let operators: [(char, fn(f64, f64) -> f64); 4] = [
        ('+', |a, b| a + b),
        ('-', |a, b| a - b),
        ('/', |a, b| a / b),
        ('*', |a, b| a * b),
    ];
    for (op, apply) in operators {
        if expr.contains(op) {
            let operands = expr.split(op).map(eval_ratio).collect::<Result<Vec<_>, _>>()?;
            return Ok(operands.into_iter().reduce(apply).unwrap_or_default());
        }
    }
    if expr.trim().is_empty() {
        return Err(ParseError::EmptyOperand(expr.to_string()));
    }
    parse_number(expr)
}

/// The bindings of an insertion orbit.
///
/// The insertion orbit has its periapsis at `radius` and a period equal to
/// `portion` times the period of the circular orbit at `radius`.
pub fn insertion_bindings(radius: f64, portion: f64, gm: f64) -> [(OrbitVariable, f64); 3] {
    let base_period = (4. * PI * PI * radius.powi(3) / gm).sqrt();
    [
        (OrbitVariable::PeriRadius, radius),
        (OrbitVariable::Gm, gm),
        (OrbitVariable::Period, base_period * portion),
    ]
}

/// Parse the arguments `height portion [GM]` of an insertion orbit.
///
/// The height is parsed with [`parse_height`], the portion with
/// [`eval_ratio`] and the GM with [`parse_gm`], defaulting to
/// [`DEFAULT_GM`].
pub fn parse_insertion_args<S: AsRef<str>>(
    args: &[S],
) -> Result<[(OrbitVariable, f64); 3], ParseError> {
    let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
    let (height, portion, gm) = match args.as_slice() {
        [height, portion] => (*height, *portion, DEFAULT_GM),
        [height, portion, gm] => (*height, *portion, *gm),
        _ => return Err(ParseError::InsertionArguments(args.len())),
    };
    Ok(insertion_bindings(
        parse_height(height)?,
        eval_ratio(portion)?,
        parse_gm(gm)?,
    ))
}

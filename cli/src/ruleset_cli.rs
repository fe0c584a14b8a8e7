//! Hand-parsed positional ruleset grammar.
//!
//! `<preset>|new|help [W H ra rr b1 b2 d1 d2 am an dt discrete]`. A
//! literal `=` at a given position means "keep the preset's value
//! there"; `clap` has no idiomatic way to express that, so this grammar
//! is parsed by hand instead of derived.

use smoothlife::Ruleset;

const DEFAULT_WIDTH: usize = 256;
const DEFAULT_HEIGHT: usize = 256;
const MAX_PARAMS: usize = 13;
const NEW_REQUIRED_PARAMS: usize = 13;

/// Usage text printed for `help` or when too many positional tokens are given.
pub const USAGE: &str = "\
smoothlife
smoothlife help
smoothlife <ruleset> [W H ra rr b1 b2 d1 d2 alpha_m alpha_n dt discrete]  (ruleset: L, rafler_paper; '=' keeps that field's preset value)
smoothlife new W H ra rr b1 b2 d1 d2 alpha_m alpha_n dt discrete";

/// Outcome of parsing the positional ruleset grammar.
pub enum Outcome {
    /// `help`, or too many tokens: usage was printed, caller should exit 0.
    Help,
    /// A ruleset was built successfully.
    Built(Ruleset),
}

/// Error parsing the positional grammar: a numeric token failed to parse,
/// or `new` was given without all 12 values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Parse `tokens` (the positional arguments after the program name and any
/// `clap`-owned flags) into a [`Ruleset`], following the positional
/// grammar documented at the top of this module.
///
/// # Errors
/// Returns [`ParseError`] if a numeric token is malformed, if `new` is
/// given without all 12 trailing values, or if a `Ruleset::new` validation
/// fails (non-positive dimension or rule parameter).
pub fn parse(tokens: &[String]) -> Result<Outcome, ParseError> {
    if tokens.is_empty() {
        return Ok(Outcome::Built(Ruleset::smooth_life_l(
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
        )));
    }

    let params = tokens.len() - 1;

    if tokens[0] == "help" || params > MAX_PARAMS {
        if params > MAX_PARAMS {
            eprintln!("Too many parameters!");
        }
        return Ok(Outcome::Help);
    }

    let new_ruleset = tokens[0] == "new";
    if new_ruleset && params < NEW_REQUIRED_PARAMS {
        return Err(ParseError(
            "you must set all values for a new ruleset".to_string(),
        ));
    }

    let width = token_usize(tokens, 1, DEFAULT_WIDTH)?;
    let height = token_usize(tokens, 2, DEFAULT_HEIGHT)?;

    let mut base = if new_ruleset {
        Ruleset::smooth_life_l(width, height)
    } else {
        match tokens[0].as_str() {
            "rafler_paper" => Ruleset::rafler_paper(width, height),
            _ => Ruleset::smooth_life_l(width, height),
        }
    };

    let ra = float_field(tokens, 3, base.ra(), new_ruleset)?;
    let rr = float_field(tokens, 4, base.rr(), new_ruleset)?;
    let b1 = float_field(tokens, 5, base.b1(), new_ruleset)?;
    let b2 = float_field(tokens, 6, base.b2(), new_ruleset)?;
    let d1 = float_field(tokens, 7, base.d1(), new_ruleset)?;
    let d2 = float_field(tokens, 8, base.d2(), new_ruleset)?;
    let alpha_m = float_field(tokens, 9, base.alpha_m(), new_ruleset)?;
    let alpha_n = float_field(tokens, 10, base.alpha_n(), new_ruleset)?;
    let dt = float_field(tokens, 11, base.dt(), new_ruleset)?;
    let discrete = bool_field(tokens, 12, base.discrete(), new_ruleset)?;

    base = Ruleset::new(
        width, height, ra, rr, b1, b2, d1, d2, alpha_m, alpha_n, dt, discrete,
    )
    .map_err(|e| ParseError(e.to_string()))?;

    Ok(Outcome::Built(base))
}

fn token_usize(tokens: &[String], index: usize, default: usize) -> Result<usize, ParseError> {
    match tokens.get(index) {
        None => Ok(default),
        Some(v) if v == "=" => Ok(default),
        Some(v) => v
            .parse::<usize>()
            .map_err(|_| ParseError(format!("invalid integer token at position {index}: {v}"))),
    }
}

fn float_field(
    tokens: &[String],
    index: usize,
    preset_value: f64,
    new_ruleset: bool,
) -> Result<f64, ParseError> {
    match tokens.get(index) {
        None => Ok(preset_value),
        Some(v) if v == "=" => {
            if new_ruleset {
                Err(ParseError(format!(
                    "you must set a value for new rulesets (position {index})"
                )))
            } else {
                Ok(preset_value)
            }
        }
        Some(v) => v
            .parse::<f64>()
            .map_err(|_| ParseError(format!("invalid numeric token at position {index}: {v}"))),
    }
}

fn bool_field(
    tokens: &[String],
    index: usize,
    preset_value: bool,
    new_ruleset: bool,
) -> Result<bool, ParseError> {
    match tokens.get(index) {
        None => Ok(preset_value),
        Some(v) if v == "=" => {
            if new_ruleset {
                Err(ParseError(format!(
                    "you must set a value for new rulesets (position {index})"
                )))
            } else {
                Ok(preset_value)
            }
        }
        Some(v) => v
            .parse::<i32>()
            .map(|n| n == 1)
            .map_err(|_| ParseError(format!("invalid boolean token at position {index}: {v}"))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tok(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn no_arguments_yields_default_preset() {
        match parse(&[]).unwrap() {
            Outcome::Built(r) => {
                assert_eq!(r.width(), DEFAULT_WIDTH);
                assert!((r.ra() - 20.0).abs() < 1e-9);
            }
            Outcome::Help => panic!("expected Built"),
        }
    }

    #[test]
    fn help_token_yields_help() {
        assert!(matches!(parse(&tok("help")).unwrap(), Outcome::Help));
    }

    #[test]
    fn too_many_tokens_yields_help() {
        let tokens = tok("L 64 64 20 3 0.257 0.336 0.365 0.549 0.147 0.028 0.1 0 extra");
        assert!(matches!(parse(&tokens).unwrap(), Outcome::Help));
    }

    #[test]
    fn equals_keeps_preset_value() {
        let tokens = tok("L = = = = = = = = = = = =");
        match parse(&tokens).unwrap() {
            Outcome::Built(r) => {
                assert_eq!(r.width(), DEFAULT_WIDTH);
                assert!((r.ra() - 20.0).abs() < 1e-9);
                assert!(!r.discrete());
            }
            Outcome::Help => panic!("expected Built"),
        }
    }

    #[test]
    fn new_requires_all_values() {
        let tokens = tok("new 32 32 20 3 0.257 0.336 0.365 0.549 0.147 0.028 0.1");
        assert!(parse(&tokens).is_err());
    }

    #[test]
    fn new_with_all_values_builds_custom_ruleset() {
        let tokens = tok("new 32 32 20 3 0.257 0.336 0.365 0.549 0.147 0.028 0.1 1");
        match parse(&tokens).unwrap() {
            Outcome::Built(r) => {
                assert_eq!(r.width(), 32);
                assert!(r.discrete());
            }
            Outcome::Help => panic!("expected Built"),
        }
    }

    #[test]
    fn rafler_paper_preset_selected_by_name() {
        let tokens = tok("rafler_paper");
        match parse(&tokens).unwrap() {
            Outcome::Built(r) => assert!((r.ra() - 21.0).abs() < 1e-9),
            Outcome::Help => panic!("expected Built"),
        }
    }

    #[test]
    fn invalid_numeric_token_is_an_error() {
        let tokens = tok("new 32 32 not_a_number 3 0.257 0.336 0.365 0.549 0.147 0.028 0.1 1");
        assert!(parse(&tokens).is_err());
    }
}

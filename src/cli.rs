// Line-oriented front end: every input line is one form submission
use crate::form::{handle_submit, FormSubmission, TextArea};
use crate::temperature::{ConvertError, Converter, Unit};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{self, BufRead, Write};

lazy_static! {
    /// A value optionally followed by a unit name
    /// Examples: "100", "-40 c", "98.6 fahrenheit", "20 °C"
    static ref LINE_PATTERN: Regex =
        Regex::new(r"^\s*(?P<value>\S+)(?:\s+(?P<unit>[a-zA-Z°]+))?\s*$").unwrap();
}

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq)]
pub struct InputLine {
    pub value: String,
    /// Unit given on the line, if any
    pub unit: Option<Unit>,
}

/// Split a line into a raw value and an optional unit.
///
/// A line that doesn't fit the pattern is passed through whole as the value,
/// so it ends up as invalid numeric input rather than a unit error.
pub fn parse_line(line: &str) -> Result<InputLine, ConvertError> {
    let Some(caps) = LINE_PATTERN.captures(line) else {
        return Ok(InputLine {
            value: line.to_string(),
            unit: None,
        });
    };

    let unit = caps
        .name("unit")
        .map(|m| m.as_str().parse::<Unit>())
        .transpose()?;

    Ok(InputLine {
        value: caps["value"].to_string(),
        unit,
    })
}

/// Convert every line of `input`, writing one display text per line.
/// Lines naming an unknown unit are reported on `errors` and skipped.
pub fn run_interactive<R: BufRead, W: Write, E: Write>(
    converter: &Converter,
    default_unit: Unit,
    input: R,
    output: &mut W,
    errors: &mut E,
) -> io::Result<usize> {
    let mut area = TextArea::new();
    let mut handled = 0;

    for line in input.lines() {
        let line = line?;
        let parsed = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                writeln!(errors, "Error: {}", e)?;
                continue;
            }
        };

        let unit = parsed.unit.unwrap_or(default_unit);
        let submission = FormSubmission::new(parsed.value, unit.selector_value());
        handle_submit(converter, &submission, &mut area);
        writeln!(output, "{}", area.text())?;
        handled += 1;
    }

    log::debug!("Handled {} submissions", handled);
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("100").unwrap(),
            InputLine {
                value: "100".to_string(),
                unit: None
            }
        );
        assert_eq!(
            parse_line("  -40 F ").unwrap(),
            InputLine {
                value: "-40".to_string(),
                unit: Some(Unit::Fahrenheit)
            }
        );
        assert_eq!(parse_line("20 celsius").unwrap().unit, Some(Unit::Celsius));
        assert_eq!(parse_line("").unwrap().value, "");
        assert_eq!(parse_line("1 2 3").unwrap().value, "1 2 3");

        assert_eq!(
            parse_line("300 kelvin"),
            Err(ConvertError::UnknownUnit("kelvin".to_string()))
        );
    }

    #[test]
    fn test_run_interactive() {
        let input = "100\n32 f\nabc\n\n5 kelvin\n0 fahrenheit\n";
        let mut output = Vec::new();
        let mut errors = Vec::new();

        let handled = run_interactive(
            &Converter::default(),
            Unit::Celsius,
            input.as_bytes(),
            &mut output,
            &mut errors,
        )
        .unwrap();

        assert_eq!(handled, 5);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Converted Temperature: 212.00 Fahrenheit\n\
             Converted Temperature: 0.00 Celsius\n\
             Please enter a valid temperature.\n\
             Please enter a valid temperature.\n\
             Converted Temperature: -17.78 Celsius\n"
        );
        assert_eq!(
            String::from_utf8(errors).unwrap(),
            "Error: Unknown unit: 'kelvin' (expected celsius or fahrenheit)\n"
        );
    }
}

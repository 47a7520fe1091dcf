use crate::convert::ConversionError;
use log::debug;
use pest::error::Error;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "command.pest"]
pub struct CommandParser;

const CONVERSION_USAGE: &str = "Use: CONVERT [value] [unit_1] TO [unit_2]";

/// One line of shell input, classified by its first word.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Empty,
    Exit,
    Help,
    Clear,
    Convert {
        value: f64,
        unit_from: String,
        unit_to: String,
    },
    Evaluate(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, ConversionError> {
        let line = line.trim();
        let Some(first_word) = line.split_whitespace().next() else {
            return Ok(Command::Empty);
        };

        let command = match first_word.to_lowercase().as_str() {
            "exit" => Command::Exit,
            "help" => Command::Help,
            "clear" => Command::Clear,
            "convert" | "conv" => Self::parse_conversion(line)?,
            _ => Command::Evaluate(line.to_string()),
        };
        debug!("Parsed command: {:?}", command);
        Ok(command)
    }

    fn parse_conversion(line: &str) -> Result<Command, ConversionError> {
        let conversion = CommandParser::parse(Rule::conversion, line)
            .map_err(syntax_error)?
            .next()
            .ok_or_else(|| ConversionError::Syntax(CONVERSION_USAGE.to_string()))?;

        let form = conversion
            .into_inner()
            .find(|pair| matches!(pair.as_rule(), Rule::long_form | Rule::short_form))
            .ok_or_else(|| ConversionError::Syntax(CONVERSION_USAGE.to_string()))?;

        let mut value = None;
        let mut units = Vec::with_capacity(2);
        for pair in form.into_inner() {
            match pair.as_rule() {
                Rule::quantity => value = Some(parse_quantity(&pair)?),
                Rule::unit => units.push(pair.as_str().to_string()),
                _ => {}
            }
        }

        match (value, units.as_slice()) {
            (Some(value), [unit_from, unit_to]) => Ok(Command::Convert {
                value,
                unit_from: unit_from.clone(),
                unit_to: unit_to.clone(),
            }),
            _ => Err(ConversionError::Syntax(CONVERSION_USAGE.to_string())),
        }
    }
}

fn parse_quantity(pair: &Pair<Rule>) -> Result<f64, ConversionError> {
    pair.as_str().parse::<f64>().map_err(|_| {
        ConversionError::Syntax(format!(
            "Invalid number for conversion ({}).",
            pair.as_str()
        ))
    })
}

fn syntax_error(error: Error<Rule>) -> ConversionError {
    let error = error.renamed_rules(|rule| match rule {
        Rule::quantity => "a number".to_string(),
        Rule::unit => "a unit".to_string(),
        Rule::to_keyword => "'TO'".to_string(),
        Rule::connector => "'TO' or 'IN'".to_string(),
        Rule::convert_keyword | Rule::conv_keyword => "'CONVERT'".to_string(),
        Rule::EOI => "end of line".to_string(),
        other => format!("{:?}", other),
    });
    let column = match error.line_col {
        pest::error::LineColLocation::Pos((_, column)) => column,
        pest::error::LineColLocation::Span((_, column), _) => column,
    };
    ConversionError::Syntax(format!(
        "Syntax error at column {}: {}. {}",
        column,
        error.variant.message(),
        CONVERSION_USAGE
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_command(value: f64, unit_from: &str, unit_to: &str) -> Command {
        Command::Convert {
            value,
            unit_from: unit_from.to_string(),
            unit_to: unit_to.to_string(),
        }
    }

    #[test]
    fn test_shell_keywords() {
        assert_eq!(Command::parse("exit"), Ok(Command::Exit));
        assert_eq!(Command::parse("  EXIT now"), Ok(Command::Exit));
        assert_eq!(Command::parse("Help"), Ok(Command::Help));
        assert_eq!(Command::parse("clear\n"), Ok(Command::Clear));
        assert_eq!(Command::parse(""), Ok(Command::Empty));
        assert_eq!(Command::parse("   \n"), Ok(Command::Empty));
    }

    #[test]
    fn test_expression_passthrough() {
        assert_eq!(
            Command::parse(" 5 * 2 + abs(-10)\n"),
            Ok(Command::Evaluate("5 * 2 + abs(-10)".to_string()))
        );
    }

    #[test]
    fn test_long_form_conversion() {
        assert_eq!(
            Command::parse("CONVERT 100 kg TO lb"),
            Ok(convert_command(100.0, "kg", "lb"))
        );
        assert_eq!(
            Command::parse("convert -40 F to C"),
            Ok(convert_command(-40.0, "F", "C"))
        );
        assert_eq!(
            Command::parse("convert 1.5e2 km/h to m/s"),
            Ok(convert_command(150.0, "km/h", "m/s"))
        );
    }

    #[test]
    fn test_short_form_conversion() {
        assert_eq!(
            Command::parse("conv 100 kg to lb"),
            Ok(convert_command(100.0, "kg", "lb"))
        );
        assert_eq!(
            Command::parse("conv 36 km/h in m/s"),
            Ok(convert_command(36.0, "km/h", "m/s"))
        );
        assert_eq!(
            Command::parse("conv 0 C в K"),
            Ok(convert_command(0.0, "C", "K"))
        );
    }

    #[test]
    fn test_long_form_requires_to() {
        assert!(matches!(
            Command::parse("convert 36 km/h in m/s"),
            Err(ConversionError::Syntax(message)) if message.contains("'TO'")
        ));
    }

    #[test]
    fn test_conversion_syntax_errors() {
        assert!(matches!(
            Command::parse("convert 100 kg"),
            Err(ConversionError::Syntax(_))
        ));
        assert!(matches!(
            Command::parse("conv abc kg to lb"),
            Err(ConversionError::Syntax(message)) if message.contains("a number")
        ));
        assert!(matches!(
            Command::parse("convert"),
            Err(ConversionError::Syntax(_))
        ));
    }
}

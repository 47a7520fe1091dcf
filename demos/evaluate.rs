use log::debug;
use smai_rs::{convert, evaluate_expression, format_number, parse};

fn main() {
    pretty_env_logger::init();

    let expressions = [
        "2 + 3 * 4",
        "(2 + 3) * 4",
        "2 ^ 3 ^ 2",
        "-2 ^ 2",
        "abs(-5) + 3",
        "5 / 0",
    ];
    for expression in expressions {
        if let Ok(postfix) = parse(expression) {
            debug!("postfix: {postfix:?}");
        }
        match evaluate_expression(expression) {
            Ok(result) => println!("{expression} = {}", format_number(result)),
            Err(err) => println!("{expression}: {err}"),
        }
    }

    let conversions = [
        (100.0, "kg", "lb"),
        (36.0, "km/h", "m/s"),
        (100.0, "C", "F"),
        (1.0, "kg", "C"),
    ];
    for (value, unit_from, unit_to) in conversions {
        match convert(value, unit_from, unit_to) {
            Ok(result) => println!("{value} {unit_from} = {} {unit_to}", format_number(result)),
            Err(err) => println!("{value} {unit_from} -> {unit_to}: {err}"),
        }
    }
}

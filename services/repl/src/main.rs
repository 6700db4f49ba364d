//! Terminal front-end for the Tally calculator
//!
//! Thin glue only: translates typed characters and command words into
//! engine actions and prints the rendered snapshot after each line. All
//! calculator semantics live in `tally-state` / `tally-engine`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::debug;

use tally_state::{
    Action, Calculator, CalculatorMode, MathConstant, Operator, ScientificFn, UnitConversion,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Basic,
    Scientific,
    Notes,
}

impl From<ModeArg> for CalculatorMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Basic => CalculatorMode::Basic,
            ModeArg::Scientific => CalculatorMode::Scientific,
            ModeArg::Notes => CalculatorMode::Notes,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tally", about = "Decimal-exact chained calculator")]
struct Args {
    /// Keypad mode to start in
    #[arg(long, value_enum, default_value_t = ModeArg::Basic)]
    mode: ModeArg,
}

/// Word commands accepted on their own line
fn command_action(word: &str) -> Option<Action> {
    let action = match word {
        "sin" => Action::Scientific(ScientificFn::Sin),
        "cos" => Action::Scientific(ScientificFn::Cos),
        "tan" => Action::Scientific(ScientificFn::Tan),
        "log" => Action::Scientific(ScientificFn::Log),
        "ln" => Action::Scientific(ScientificFn::Ln),
        "sqrt" => Action::Scientific(ScientificFn::Sqrt),
        "sq" => Action::Scientific(ScientificFn::Square),
        "pi" => Action::Constant(MathConstant::Pi),
        "e" => Action::Constant(MathConstant::E),
        "cf" => Action::Convert(UnitConversion::CelsiusToFahrenheit),
        "km" => Action::Convert(UnitConversion::KmToMiles),
        "kg" => Action::Convert(UnitConversion::KgToPounds),
        "ft" => Action::Convert(UnitConversion::MetersToFeet),
        "basic" => Action::ChangeMode(CalculatorMode::Basic),
        "sci" => Action::ChangeMode(CalculatorMode::Scientific),
        "notes" => Action::ChangeMode(CalculatorMode::Notes),
        "last" => Action::LoadLastCalculation,
        "clearhist" => Action::ClearHistory,
        _ => return None,
    };
    Some(action)
}

/// Keystroke characters, mirroring the keyboard wiring of the UI
fn key_action(key: char) -> Option<Action> {
    match key {
        '0'..='9' => Some(Action::Digit(key as u8 - b'0')),
        '.' => Some(Action::Decimal),
        '+' | '-' | '*' | '/' => key.to_string().parse::<Operator>().ok().map(Action::Operator),
        '=' => Some(Action::Equals),
        'c' => Some(Action::Clear),
        'x' => Some(Action::Backspace),
        's' => Some(Action::ToggleSign),
        '%' => Some(Action::Percentage),
        _ => None,
    }
}

fn print_snapshot(calc: &Calculator) {
    let snapshot = calc.snapshot();
    if let Some(message) = &snapshot.message {
        println!("  {message}");
    }
    println!("  {}", snapshot.display);
}

fn print_history(calc: &Calculator) {
    let history = calc.snapshot().history;
    if history.is_empty() {
        println!("  (no history)");
        return;
    }
    for line in &history {
        println!("  {line}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut calc = Calculator::with_mode(args.mode.into());

    println!("tally: digits, . + - * / = %  |  c clear, x backspace, s sign");
    println!("words: sin cos tan log ln sqrt sq pi e cf km kg ft hist last clearhist q");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();

        if trimmed == "q" || trimmed == "quit" {
            break;
        }
        if trimmed == "hist" {
            print_history(&calc);
            continue;
        }
        if let Some(action) = command_action(trimmed) {
            debug!(?action, "command");
            calc.dispatch(action);
            print_snapshot(&calc);
            continue;
        }

        for key in trimmed.chars() {
            if let Some(action) = key_action(key) {
                calc.dispatch(action);
            } else if !key.is_whitespace() {
                println!("  (ignored {key:?})");
            }
        }
        print_snapshot(&calc);
    }

    Ok(())
}

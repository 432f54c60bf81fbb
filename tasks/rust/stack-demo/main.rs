//! Console demo of the queue-backed stack.
//!
//! Drives the stack through its public surface only: builds stacks with an
//! explicit capacity, pushes values of a chosen type, prints the contents
//! front-to-back (most recent first), and reports refused pushes without
//! terminating. `$` at the main menu ends the process.

use std::fmt::Display;
use std::io::{self, BufRead};
use std::str::FromStr;

use queue_backed_stack::Stack;
use rand::rngs::ThreadRng;
use rand::Rng;

const QUIT: &str = "$";

enum Mode {
    AutoGen,
    Manual,
}

#[derive(Clone, Copy)]
enum ValueType {
    Int,
    Float,
    Double,
    Char,
    Text,
}

impl ValueType {
    fn label(self) -> &'static str {
        match self {
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Double => "double",
            ValueType::Char => "char",
            ValueType::Text => "string",
        }
    }
}

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut rng = rand::thread_rng();

    loop {
        println!("This is a demo of the stack ADT with a queue ADT as the base. What would you like to do?");
        println!("1) Auto generate 10 stacks of random capacity (0-9), random amount of data (0-9) and data.");
        println!("2) Manually input test cases.");
        println!("Enter $ if you wish to stop the process.");

        let mode = match prompt_mode(&mut input) {
            Some(mode) => mode,
            None => break,
        };
        let value_type = match prompt_value_type(&mut input) {
            Some(value_type) => value_type,
            None => break,
        };

        let session = match mode {
            Mode::AutoGen => {
                auto_generate(&mut rng, value_type);
                Some(())
            }
            Mode::Manual => manual_session(&mut input, value_type),
        };
        // EOF mid-session ends the process like `$` at the menu would.
        if session.is_none() {
            break;
        }
    }
}

/// Reads one trimmed line, or `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn prompt_mode(input: &mut impl BufRead) -> Option<Mode> {
    loop {
        let line = read_line(input)?;
        if line == QUIT {
            return None;
        }
        match line.chars().next() {
            Some('1') => return Some(Mode::AutoGen),
            Some('2') => return Some(Mode::Manual),
            _ => println!("Please enter a valid option."),
        }
    }
}

fn prompt_value_type(input: &mut impl BufRead) -> Option<ValueType> {
    println!("What data type would you like to use?");
    println!("1) int");
    println!("2) float");
    println!("3) double");
    println!("4) char");
    println!("5) string");

    loop {
        let line = read_line(input)?;
        match line.chars().next() {
            Some('1') => return Some(ValueType::Int),
            Some('2') => return Some(ValueType::Float),
            Some('3') => return Some(ValueType::Double),
            Some('4') => return Some(ValueType::Char),
            Some('5') => return Some(ValueType::Text),
            _ => println!("Invalid input. Please enter a valid option."),
        }
    }
}

/// Builds 10 stacks of random capacity and fill, printing each one.
fn auto_generate(rng: &mut ThreadRng, value_type: ValueType) {
    match value_type {
        ValueType::Int => generate_stacks(rng, value_type, |rng| rng.gen_range(0i64..1000)),
        ValueType::Float => generate_stacks(rng, value_type, |rng| rng.gen::<f32>()),
        ValueType::Double => generate_stacks(rng, value_type, |rng| rng.gen::<f64>()),
        ValueType::Char => generate_stacks(rng, value_type, random_letter),
        ValueType::Text => generate_stacks(rng, value_type, random_word),
    }
}

fn generate_stacks<T: Display>(
    rng: &mut ThreadRng,
    value_type: ValueType,
    mut generate: impl FnMut(&mut ThreadRng) -> T,
) {
    for i in 0..10 {
        let capacity = rng.gen_range(0..10);
        let count = rng.gen_range(0..10);
        let mut stack = Stack::new(capacity);
        println!(
            "{} stack {}, max stack size: {}, number of data: {}",
            value_type.label(),
            i,
            capacity,
            count
        );
        for _ in 0..count {
            if let Err(err) = stack.push(generate(rng)) {
                println!("{err}");
            }
        }
        print_stack(&stack);
        println!();
    }
}

fn random_letter(rng: &mut ThreadRng) -> char {
    let base = if rng.gen_bool(0.5) { b'A' } else { b'a' };
    (base + rng.gen_range(0..26u8)) as char
}

fn random_word(rng: &mut ThreadRng) -> String {
    let length = rng.gen_range(0..10);
    (0..length).map(|_| random_letter(rng)).collect()
}

/// Interactive session on a single stack. Returns `None` on end of input.
fn manual_session(input: &mut impl BufRead, value_type: ValueType) -> Option<()> {
    match value_type {
        ValueType::Int => run_manual::<i64>(input, value_type),
        ValueType::Float => run_manual::<f32>(input, value_type),
        ValueType::Double => run_manual::<f64>(input, value_type),
        ValueType::Char => run_manual::<char>(input, value_type),
        ValueType::Text => run_manual::<String>(input, value_type),
    }
}

fn run_manual<T: Display + FromStr>(
    input: &mut impl BufRead,
    value_type: ValueType,
) -> Option<()> {
    println!("Please enter the size you wish the stack to be.");
    let capacity = loop {
        let line = read_line(input)?;
        match line.parse::<usize>() {
            Ok(capacity) => break capacity,
            Err(_) => println!("Invalid input. Please enter an integer."),
        }
    };

    let mut stack: Stack<T> = Stack::new(capacity);
    loop {
        println!(
            "{} stack testing, max stack size: {}, number of data: {}",
            value_type.label(),
            stack.capacity(),
            stack.len()
        );
        println!("Enter $ if you wish to stop the process.");

        let line = read_line(input)?;
        if line.is_empty() {
            continue;
        }
        if line == QUIT {
            return Some(());
        }
        // Malformed input never reaches the stack; re-prompt instead.
        match line.parse::<T>() {
            Ok(value) => {
                if let Err(err) = stack.push(value) {
                    println!("{err}");
                }
                print_stack(&stack);
            }
            Err(_) => println!("Please enter a valid {}.", value_type.label()),
        }
    }
}

fn print_stack<T: Display>(stack: &Stack<T>) {
    if stack.is_empty() {
        return;
    }
    let rendered: Vec<String> = stack.iter().map(ToString::to_string).collect();
    println!("Data stored : {}", rendered.join(", "));
}

//! Writes a random, well-formed expression to standard output.
//!
//! Used to produce large fixtures for exercising the streaming evaluator.
//! Only `+ - *` are emitted so the result can never divide by zero.

use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const OPERATORS: [char; 3] = ['+', '-', '*'];

/// Chance that a term is a parenthesized sub-expression.
const PAREN_PROBABILITY: f64 = 0.2;

/// Generate a random arithmetic expression of at least a given size.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum number of integer digits per number.
    #[arg(long, default_value_t = 3)]
    max_digits: usize,

    /// Maximum number of decimal places per number.
    #[arg(long, default_value_t = 2)]
    max_decimals: usize,

    /// Minimum output size in bytes.
    #[arg(long, default_value_t = 2 * 1024)]
    min_size: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

struct Generator<W> {
    rng: StdRng,
    out: W,
    max_digits: usize,
    max_decimals: usize,
    written: usize,
}

impl<W: Write> Generator<W> {
    fn new(rng: StdRng, out: W, max_digits: usize, max_decimals: usize) -> Self {
        Self {
            rng,
            out,
            max_digits,
            max_decimals,
            written: 0,
        }
    }

    /// Write one expression of at least `min_size` bytes, newline terminated.
    fn generate(&mut self, min_size: usize) -> io::Result<()> {
        self.number()?;
        while self.written < min_size {
            self.term()?;
        }
        self.emit("\n")
    }

    fn emit(&mut self, s: &str) -> io::Result<()> {
        self.written += s.len();
        self.out.write_all(s.as_bytes())
    }

    fn number(&mut self) -> io::Result<()> {
        let mut lit = String::new();
        let digits = self.rng.gen_range(1..=self.max_digits);
        for i in 0..digits {
            let low = if i == 0 { 1 } else { 0 };
            lit.push(char::from(b'0' + self.rng.gen_range(low..=9u8)));
        }

        if self.max_decimals > 0 && self.rng.gen_bool(0.5) {
            lit.push('.');
            let decimals = self.rng.gen_range(1..=self.max_decimals);
            for _ in 0..decimals {
                lit.push(char::from(b'0' + self.rng.gen_range(0..=9u8)));
            }
        }

        self.emit(&lit)
    }

    fn term(&mut self) -> io::Result<()> {
        let op = OPERATORS[self.rng.gen_range(0..OPERATORS.len())];
        self.emit(&format!(" {op} "))?;

        if self.rng.gen_bool(PAREN_PROBABILITY) {
            self.emit("(")?;
            self.number()?;
            self.term()?;
            return self.emit(")");
        }

        self.number()
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.max_digits == 0 {
        bail!("--max-digits must be at least 1");
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut generator = Generator::new(
        rng,
        BufWriter::new(stdout.lock()),
        args.max_digits,
        args.max_decimals,
    );

    generator
        .generate(args.min_size)
        .context("failed to write expression")?;
    generator.out.flush().context("failed to flush output")?;

    Ok(())
}

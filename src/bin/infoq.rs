//! infoq: Information Quantity Calculator
//!
//! Command-line front end to the calculators. Each subcommand reads its
//! inputs, runs one calculation and prints the derivation.
//!
//! ```text
//! infoq info 0.125
//! infoq joint 0.5 0.25 --unit nat
//! infoq entropy "0.5, 0.25, 0.25"
//! infoq entropy --random 4
//! infoq validate "0.5 0.4"
//! infoq units 0.1
//! infoq curve --kind binary
//! infoq password 'Tr0ub4dor&3'
//! infoq quiz --seed 7
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use info_quantity::{
    analyze_password, binary_entropy_curve, compute_information_with, compute_joint_in, format,
    information_curve, select_base, CalcConfig, ContinuityProbe, EntropyResult, LogBase,
    Error, ProbabilityDistribution, Quantity, QuizQuestion, QuizScore, Result, PLACEHOLDER,
};
use info_quantity::information::validate_with_tolerance;

#[derive(Parser)]
#[command(name = "infoq")]
#[command(about = "Information quantity, additivity and Shannon entropy calculator")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Unit: bit, nat or dit (unknown values fall back to bit)
    #[arg(short, long, global = true)]
    unit: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Information quantity I = -log(P) of one event
    Info {
        /// Probability of the event
        #[arg(allow_hyphen_values = true)]
        p: f64,

        /// Also compare against I(p ± epsilon)
        #[arg(long)]
        epsilon: Option<f64>,
    },

    /// Joint information of two independent events
    Joint {
        #[arg(allow_hyphen_values = true)]
        pa: f64,
        #[arg(allow_hyphen_values = true)]
        pb: f64,
    },

    /// Shannon entropy of a distribution
    Entropy {
        /// Probabilities, comma or space separated
        #[arg(required_unless_present = "random")]
        distribution: Option<String>,

        /// Use a random distribution over this many outcomes instead
        #[arg(long, conflicts_with = "distribution")]
        random: Option<usize>,

        /// Dirichlet concentration for --random
        #[arg(long, default_value = "1.0")]
        alpha: f64,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check that a distribution sums to 1
    Validate {
        distribution: String,
    },

    /// I(P) in every unit
    Units {
        #[arg(allow_hyphen_values = true)]
        p: f64,
    },

    /// Print a graph series as "x y" lines
    Curve {
        #[arg(long, value_enum, default_value = "information")]
        kind: CurveKind,

        /// Number of samples (defaults to the configured value)
        #[arg(long)]
        samples: Option<usize>,
    },

    /// Entropy estimate of a password
    Password {
        password: String,
    },

    /// Interactive quiz on standard input
    Quiz {
        #[arg(long, default_value = "5")]
        questions: usize,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CurveKind {
    Information,
    Binary,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CalcConfig::load(path)?,
        None => CalcConfig::default(),
    };
    let unit = cli.unit.as_deref().map(select_base).unwrap_or(config.unit);

    match cli.command {
        Commands::Info { p, epsilon } => info(&config, unit, p, epsilon),
        Commands::Joint { pa, pb } => joint(&config, unit, pa, pb),
        Commands::Entropy { distribution, random, alpha, seed } => {
            let dist = match (distribution, random) {
                (_, Some(k)) => {
                    let mut rng = rng_from(seed);
                    ProbabilityDistribution::random(k, alpha, &mut rng)?
                }
                (Some(text), None) => ProbabilityDistribution::parse(&text)?,
                (None, None) => return Err(Error::EmptyDistribution),
            };
            entropy(&config, unit, &dist)
        }
        Commands::Validate { distribution } => {
            let dist = ProbabilityDistribution::parse(&distribution)?;
            validate_distribution(&config, &dist);
            Ok(())
        }
        Commands::Units { p } => units(&config, p),
        Commands::Curve { kind, samples } => {
            curve(kind, unit, samples.unwrap_or(config.curve_samples));
            Ok(())
        }
        Commands::Password { password } => {
            password_entropy(&config, &password);
            Ok(())
        }
        Commands::Quiz { questions, seed } => quiz(questions, seed),
    }
}

fn banner(title: &str) {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════════════════════════════\n");
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn info(config: &CalcConfig, unit: LogBase, p: f64, epsilon: Option<f64>) -> Result<()> {
    banner("Information Quantity");

    let result = compute_information_with(p, unit, config.precision());
    for line in &result.trace {
        println!("  {}", line);
    }
    println!("\n  Result: {}", result.display(config.display_precision));
    if let Quantity::Undefined(cause) = result.value {
        println!("  Cause:  {}", cause.description());
    }

    if let Some(eps) = epsilon {
        let probe = ContinuityProbe::new(p, eps, unit);
        let d = config.display_precision;
        println!("\nContinuity (ε = {}):", probe.epsilon);
        println!("  I(p - ε) = {}", probe.left.display(d));
        println!("  I(p)     = {}", probe.center.display(d));
        println!("  I(p + ε) = {}", probe.right.display(d));
        println!("  Match left:  {}%", percent(probe.left_match()));
        println!("  Match right: {}%", percent(probe.right_match()));
    }
    Ok(())
}

fn joint(config: &CalcConfig, unit: LogBase, pa: f64, pb: f64) -> Result<()> {
    banner("Additivity of Information: Independent Events");

    let j = compute_joint_in(pa, pb, unit);
    for line in j.trace(config.precision()) {
        println!("  {}", line);
    }
    println!("\n  Additivity match: {}%", percent(j.match_percentage()));
    Ok(())
}

fn entropy(config: &CalcConfig, unit: LogBase, dist: &ProbabilityDistribution) -> Result<()> {
    banner("Shannon Entropy");

    validate_distribution(config, dist);
    let result = EntropyResult::from_distribution(dist, unit, config.precision());

    println!();
    for line in result.display().lines() {
        println!("  {}", line);
    }
    println!(
        "\n  Efficiency H/H_max = {}",
        format(result.efficiency(), config.display_precision)
    );
    Ok(())
}

fn validate_distribution(config: &CalcConfig, dist: &ProbabilityDistribution) {
    let report = validate_with_tolerance(dist, config.tolerance);
    println!("  Σp = {}", format(report.sum, config.trace_precision));
    if report.within_tolerance {
        println!("  Distribution is normalized");
    } else {
        println!(
            "  Warning: |Σp - 1| = {} exceeds tolerance {:e}",
            format(report.deviation, config.trace_precision),
            config.tolerance
        );
    }
}

fn units(config: &CalcConfig, p: f64) -> Result<()> {
    banner("Information Units");

    println!("  {:<6} {:<8} {:>14}", "Unit", "Log", "I(P)");
    println!("  ─────────────────────────────");
    for base in LogBase::ALL {
        let result = compute_information_with(p, base, config.precision());
        println!(
            "  {:<6} {:<8} {:>14}",
            base.label(),
            base.log_symbol(),
            result.value.display(config.display_precision)
        );
    }
    Ok(())
}

fn curve(kind: CurveKind, unit: LogBase, samples: usize) {
    let series = match kind {
        CurveKind::Information => information_curve(samples, unit),
        CurveKind::Binary => binary_entropy_curve(samples),
    };
    for (x, y) in series {
        println!("{:.6} {:.6}", x, y);
    }
}

fn password_entropy(config: &CalcConfig, password: &str) {
    banner("Password Entropy");

    let e = analyze_password(password);
    println!("  Length:     {}", e.length);
    println!("  Pool size:  {}", e.pool_size);
    println!("  H = L · log2(N) = {} bit", format(e.bits, config.display_precision));
    println!("  Strength:   {}", e.strength.label());
}

fn quiz(questions: usize, seed: Option<u64>) -> Result<()> {
    banner("Information Quiz");

    let mut rng = rng_from(seed);
    let mut score = QuizScore::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for i in 0..questions {
        let q = QuizQuestion::generate(&mut rng);
        print!("Q{}: {}\n> ", i + 1, q.prompt());
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let answer = line?.trim().parse::<f64>().unwrap_or(f64::NAN);
        if score.submit(&q, answer) {
            println!("  Correct!\n");
        } else {
            println!("  Not quite: the answer is {}\n", format(q.answer, 4));
        }
    }

    println!(
        "Score: {}/{} ({:.0}%)",
        score.correct,
        score.attempted,
        score.percentage()
    );
    Ok(())
}

fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format(v, 1),
        None => PLACEHOLDER.to_string(),
    }
}

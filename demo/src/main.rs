//! Medicino Demo CLI
//!
//! Exercises the core library end-to-end: seeds the reference data, runs
//! symptom diagnoses, and browses the medicines catalog and history log.
//!
//! Usage:
//!   cargo run -p demo -- diagnose "fever, sore throat, headache"
//!   cargo run -p demo -- medicines
//!   cargo run -p demo -- medicine paracetamol
//!   cargo run -p demo -- history
//!   cargo run -p demo -- run-samples

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medicino_core::Medicino;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Medicino symptom checker and medicines reference demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Medicino symptom-checker demo",
    long_about = "Runs the Medicino core library against its built-in reference data:\n\
                  symptom diagnosis, medicines catalog lookups, and the diagnosis history log."
)]
struct Cli {
    /// Database file path. Defaults to an in-memory database.
    #[arg(long)]
    db: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Diagnose a free-text symptom description.
    Diagnose {
        /// Symptom text, e.g. "fever, sore throat, headache"
        symptoms: String,
        /// Print the result as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// List the medicines catalog.
    Medicines,
    /// Look up one medicine by (partial) name.
    Medicine {
        /// Full or partial medicine name
        name: String,
    },
    /// Show recent diagnosis history.
    History {
        /// Maximum entries to show
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Run a batch of sample diagnoses against the reference data.
    RunSamples,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let medicino = match &cli.db {
        Some(path) => Medicino::open(path).context("opening database")?,
        None => Medicino::open_in_memory().context("opening in-memory database")?,
    };
    medicino.seed().context("seeding reference data")?;
    tracing::debug!(db = ?cli.db, "database seeded");

    match cli.command {
        Command::Diagnose { symptoms, json } => diagnose(&medicino, &symptoms, json)?,
        Command::Medicines => list_medicines(&medicino)?,
        Command::Medicine { name } => medicine_info(&medicino, &name)?,
        Command::History { limit } => history(&medicino, limit)?,
        Command::RunSamples => run_samples(&medicino)?,
    }

    Ok(())
}

fn diagnose(medicino: &Medicino, symptoms: &str, json: bool) -> anyhow::Result<()> {
    let result = medicino.diagnose(symptoms, None)?;

    if json {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    println!("Input:       {}", symptoms);
    println!("Condition:   {}", result.condition);
    println!("Confidence:  {:.2}%", result.confidence);
    println!("Severity:    {}", result.severity.as_str());
    println!("Description: {}", result.description);
    println!("Ayurvedic:   {}", result.ayurvedic_remedy);
    println!("Medicine:    {}", result.medicine_suggestion);
    println!("Precautions: {}", result.precautions);
    Ok(())
}

fn list_medicines(medicino: &Medicino) -> anyhow::Result<()> {
    let medicines = medicino.list_medicines()?;
    println!("{} medicines in catalog:\n", medicines.len());
    for medicine in medicines {
        println!(
            "  {:<20} {:<18} ${:>6.2}  {}",
            medicine.name, medicine.category, medicine.price, medicine.description
        );
    }
    Ok(())
}

fn medicine_info(medicino: &Medicino, name: &str) -> anyhow::Result<()> {
    match medicino.medicine_info(name)? {
        Some(medicine) => {
            println!("Name:              {}", medicine.name);
            println!("Category:          {}", medicine.category);
            println!("Description:       {}", medicine.description);
            println!("Dosage:            {}", medicine.dosage);
            println!("Side effects:      {}", medicine.side_effects);
            println!("Contraindications: {}", medicine.contraindications);
            println!("Price:             ${:.2}", medicine.price);
        }
        None => {
            println!("Medicine not found: {}", name);
            if let Some(suggestion) = medicino.suggest_medicine(name)? {
                println!("Did you mean: {}?", suggestion);
            }
        }
    }
    Ok(())
}

fn history(medicino: &Medicino, limit: usize) -> anyhow::Result<()> {
    let entries = medicino.diagnosis_history(Some(limit))?;
    if entries.is_empty() {
        println!("No diagnosis history yet.");
        return Ok(());
    }
    for entry in entries {
        println!(
            "[{}] {:>6.2}%  {:<28} <- {}",
            entry.created_at, entry.confidence, entry.diagnosed_condition, entry.symptoms
        );
    }
    Ok(())
}

fn run_samples(medicino: &Medicino) -> anyhow::Result<()> {
    let samples = [
        "persistent fever",
        "fever and cough",
        "headache, fever, cough",
        "stomach pain, nausea, vomiting",
        "chest pain, shortness of breath",
        "joint pain, stiffness, swelling",
        "fatigue, weight loss, increased thirst",
        "itchy skin, red patches",
        "ear pain, hearing loss",
        "blurred vision, headache",
    ];

    for symptoms in samples {
        let result = medicino.diagnose(symptoms, None)?;
        println!(
            "{:<42} -> {:<28} {:>6.2}% ({})",
            symptoms,
            result.condition,
            result.confidence,
            result.severity.as_str()
        );
    }

    println!("\n{} entries now in history.", medicino.diagnosis_history(None)?.len());
    Ok(())
}

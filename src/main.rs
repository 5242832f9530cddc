use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use conlang::linguistics::naming::NameGenerator;
use conlang::linguistics::{
    data, Gender, GrammaticalCase, GrammaticalNumber, Lexicon, Result, WordJunctionType, WordType,
};

/// Name pool to generate from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Axis {
    Personal,
    Full,
    Ship,
    Settlement,
    Unit,
    Specimen,
}

#[derive(Parser, Debug)]
#[command(name = "conlang")]
#[command(about = "Inspect constructed languages and generate names from their pools")]
struct Args {
    /// Directory of JSON definition files applied on top of the defaults
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the declension table of this word
    #[arg(short, long)]
    word: Option<String>,

    /// Language family to generate names for
    #[arg(short, long)]
    family: Option<String>,

    /// Name pool to draw from
    #[arg(short, long, value_enum, default_value = "personal")]
    axis: Axis,

    /// Gender for personal and specimen names
    #[arg(short, long, default_value = "masculine")]
    gender: Gender,

    /// Unit class for unit names
    #[arg(long, default_value = "infantry")]
    unit_class: String,

    /// Species for specimen names
    #[arg(long, default_value = "horse")]
    species: String,

    /// Number of names to generate
    #[arg(short = 'n', long, default_value = "5")]
    count: usize,

    /// List languages and families
    #[arg(long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let lexicon = match &args.data {
        Some(dir) => data::load_from(dir)?,
        None => data::defaults()?,
    };

    if args.list {
        print_overview(&lexicon);
    }

    if let Some(identifier) = &args.word {
        print_declension(&lexicon, identifier)?;
    }

    if let Some(identifier) = &args.family {
        let seed = args.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let family = lexicon.family_by_identifier(identifier)?;

        println!("{} names for {} (seed {}):", axis_label(args.axis), lexicon.family(family).name, seed);
        for _ in 0..args.count {
            let name = match args.axis {
                Axis::Personal => NameGenerator::personal_name(&lexicon, family, args.gender, &mut rng),
                Axis::Full => NameGenerator::full_name(&lexicon, family, args.gender, &mut rng),
                Axis::Ship => NameGenerator::ship_name(&lexicon, family, &mut rng),
                Axis::Settlement => NameGenerator::settlement_name(&lexicon, family, &mut rng),
                Axis::Unit => NameGenerator::unit_name(&lexicon, family, &args.unit_class, &mut rng),
                Axis::Specimen => {
                    NameGenerator::specimen_name(&lexicon, family, &args.species, args.gender, &mut rng)
                }
            };
            match name {
                Some(name) => println!("  {}", name),
                None => {
                    println!("  (no words in this pool)");
                    break;
                }
            }
        }
    }

    Ok(())
}

fn axis_label(axis: Axis) -> &'static str {
    match axis {
        Axis::Personal => "Personal",
        Axis::Full => "Full",
        Axis::Ship => "Ship",
        Axis::Settlement => "Settlement",
        Axis::Unit => "Unit",
        Axis::Specimen => "Specimen",
    }
}

fn print_overview(lexicon: &Lexicon) {
    println!("Families:");
    for family in lexicon.families() {
        let parent = family
            .family()
            .map(|id| lexicon.family(id).name.as_str())
            .unwrap_or("-");
        println!("  {} [{}] under {}", family.name, family.identifier, parent);
    }

    println!("Languages:");
    for language in lexicon.languages() {
        let dialect_of = language
            .dialect_of()
            .map(|id| format!(", dialect of {}", lexicon.language(id).name))
            .unwrap_or_default();
        println!(
            "  {} [{}]: {} words{}",
            language.name,
            language.identifier,
            language.words().len(),
            dialect_of
        );
    }
}

fn print_declension(lexicon: &Lexicon, identifier: &str) -> Result<()> {
    let id = lexicon.word_by_identifier(identifier)?;
    let word = lexicon.word(id);

    println!("{} ({}, {})", word.name, word.word_type, word.gender);
    if !word.meanings.is_empty() {
        println!("  meaning: {}", word.meanings.join(", "));
    }
    if let Some(etymon) = word.etymon() {
        println!("  from: {}", lexicon.word(etymon).name);
    }
    if !word.compound_elements().is_empty() {
        println!("  compound: {}", lexicon.compound_form(id));
    }

    if word.word_type != WordType::Noun {
        return Ok(());
    }

    let cases = &GrammaticalCase::all()[1..];
    for &number in &GrammaticalNumber::all()[1..] {
        let forms: Vec<String> = cases
            .iter()
            .map(|&case| {
                let form = lexicon.noun_inflection(id, number, case, WordJunctionType::None);
                format!("{}: {}", case, form)
            })
            .collect();
        println!("  {:<9} {}", number.to_string(), forms.join(", "));
    }
    Ok(())
}

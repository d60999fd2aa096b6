// sheets_cli.rs
// Command line front end: generate sheet pairs and print their row layouts

use clap::Parser;
use tombola_sheets::defs::{EMPTYSLOT, ROWSPERSHEET};
use tombola_sheets::error::SheetError;
use tombola_sheets::logging;
use tombola_sheets::sheet::{SheetGenerator, SheetPair, row_render_data};

#[derive(Parser)]
#[command(name = "tombola-sheets", version, about = "Generate paired 90-ball tombola sheets")]
struct Args {
    /// Number of sheet pairs to generate
    #[arg(short, long, default_value_t = 1)]
    pairs: usize,

    /// Seed the random generator for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit the pairs as JSON instead of text grids
    #[arg(long)]
    json: bool,
}

fn print_pair(index: usize, pair: &SheetPair) -> Result<(), SheetError> {
    for (label, sheet) in [("one", &pair.sheet_one), ("two", &pair.sheet_two)] {
        println!("Pair {} - sheet {}:", index + 1, label);
        for row_number in 1..=ROWSPERSHEET {
            let slots = row_render_data(row_number, sheet)?;
            let cells: Vec<String> = slots
                .iter()
                .map(|&slot| {
                    if slot == EMPTYSLOT {
                        "  .".to_string()
                    } else {
                        format!("{slot:3}")
                    }
                })
                .collect();
            println!("  {}", cells.join(" "));
        }
        println!();
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), SheetError> {
    let mut generator = match args.seed {
        Some(seed) => SheetGenerator::from_seed(seed),
        None => SheetGenerator::new(),
    };

    let mut sheet_pairs: Vec<SheetPair> = Vec::with_capacity(args.pairs);
    for _ in 0..args.pairs {
        sheet_pairs.push(generator.generate_sibling_sheets()?);
    }

    if args.json {
        match serde_json::to_string_pretty(&sheet_pairs) {
            Ok(document) => println!("{document}"),
            Err(e) => logging::error(&format!("failed to serialize sheet pairs: {e}")),
        }
    } else {
        for (index, pair) in sheet_pairs.iter().enumerate() {
            print_pair(index, pair)?;
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if !args.json {
        logging::info(&format!("generating {} sheet pair(s)", args.pairs));
    }

    if let Err(e) = run(&args) {
        logging::error(&format!("sheet generation failed: {e}"));
        std::process::exit(1);
    }
}

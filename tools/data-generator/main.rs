use clap::Parser;
use flavourfind::recipe::Recipe;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fs;

/// A CLI tool to generate a synthetic recipe dataset for FlavourFind
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_recipes.json")]
    output: String,

    /// How many recipes to generate
    #[arg(short, long, default_value_t = 2000)]
    count: usize,

    /// The minimum number of ingredients per recipe
    #[arg(long, default_value_t = 3)]
    min: usize,

    /// The maximum number of ingredients per recipe
    #[arg(long, default_value_t = 12)]
    max: usize,

    /// Percentage of recipes generated without a cuisine
    #[arg(long, default_value_t = 5)]
    missing_cuisine_pct: u32,
}

const CUISINES: &[&str] = &[
    "Indian",
    "South Indian Recipes",
    "North Indian Recipes",
    "Gujarati Recipes",
    "Bengali Recipes",
    "Italian Recipes",
    "Mexican",
    "Continental",
    "Chinese",
];

const INGREDIENTS: &[&str] = &[
    "toor dal",
    "moong dal",
    "basmati rice",
    "onion",
    "tomato",
    "garlic",
    "ginger",
    "green chillies",
    "turmeric powder",
    "cumin seeds",
    "mustard seeds",
    "curry leaves",
    "ghee",
    "sunflower oil",
    "paneer (homemade cottage cheese)",
    "potato (aloo)",
    "cauliflower (gobi)",
    "boneless chicken breast",
    "curd (dahi / yogurt)",
    "garam masala",
    "coriander leaves",
    "lemon juice",
    "gram flour (besan)",
    "penne pasta",
    "basil leaves",
    "extra virgin olive oil",
    "rajma (red kidney beans)",
    "sweet corn",
    "capsicum",
    "salt",
];

const DISH_STYLES: &[&str] = &[
    "Curry", "Sabzi", "Pulao", "Salad", "Soup", "Masala", "Stir Fry", "Bake", "Upma", "Tikki",
];

const STEPS: &[&str] = &[
    "Wash and chop all the vegetables.",
    "Heat oil in a pan and add the whole spices.",
    "Saute the onions until golden brown.",
    "Add the spice powders and cook for a minute.",
    "Add the main ingredient and cook covered until tender.",
    "Adjust the salt and garnish before serving.",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    // min <= max <= ingredient pool size
    if cli.min > cli.max || cli.max > INGREDIENTS.len() {
        eprintln!(
            "Error: need --min ({}) <= --max ({}) <= {}",
            cli.min,
            cli.max,
            INGREDIENTS.len()
        );
        std::process::exit(1);
    }

    println!(
        "Generating {} recipes ({} to {} ingredients each)...",
        cli.count, cli.min, cli.max
    );

    let recipes: Vec<Recipe> = (0..cli.count)
        .map(|i| generate_recipe(&mut rng, i, &cli))
        .collect();

    let json_output = serde_json::to_string_pretty(&recipes)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} recipes to '{}'",
        recipes.len(),
        cli.output
    );

    Ok(())
}

fn generate_recipe(rng: &mut ThreadRng, index: usize, cli: &Cli) -> Recipe {
    let mut pool: Vec<&str> = INGREDIENTS.to_vec();
    pool.shuffle(rng);
    let ingredient_count = rng.random_range(cli.min..=cli.max);
    let ingredients = &pool[..ingredient_count];

    let main = ingredients.first().copied().unwrap_or("mixed vegetable");
    let style = DISH_STYLES.choose(rng).copied().unwrap_or("Curry");
    let name = format!("{} {} #{}", title_case(main), style, index + 1);

    let cuisine = if rng.random_range(0..100) < cli.missing_cuisine_pct {
        String::new()
    } else {
        CUISINES.choose(rng).copied().unwrap_or("Indian").to_string()
    };

    let step_count = rng.random_range(2..=STEPS.len());
    let instructions = STEPS[..step_count].join("\n");

    let mut recipe = Recipe::new(name, ingredients.join(","))
        .with_cuisine(cuisine)
        .with_instructions(instructions)
        .with_total_time(rng.random_range(5..=180));
    if rng.random_bool(0.3) {
        recipe = recipe.with_preparation_time(format!("{} mins", rng.random_range(5..=30)));
    }
    recipe
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

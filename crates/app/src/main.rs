//! Product Service CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use product_service_app::{
    context::AppContext,
    products::{data::NewProduct, records::ProductRecord},
};
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(name = "product-service-app", about = "Product Service CLI", long_about = None)]
struct Cli {
    /// `MongoDB` connection string
    #[arg(long, env = "MONGODB_URI", global = true)]
    mongodb_uri: Option<String>,

    /// `MongoDB` database name
    #[arg(long, env = "MONGODB_DATABASE", default_value = "product-service", global = true)]
    mongodb_database: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(ProductCommand),
}

#[derive(Debug, Args)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Store a new product
    Create(CreateProductArgs),

    /// List every stored product
    List,
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Product description
    #[arg(long, default_value = "")]
    description: String,

    /// Exact decimal price, e.g. `1299.99`
    #[arg(long)]
    price: Decimal,
}

impl From<CreateProductArgs> for NewProduct {
    fn from(args: CreateProductArgs) -> Self {
        NewProduct {
            name: args.name,
            description: args.description,
            price: args.price,
        }
    }
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let uri = cli
        .mongodb_uri
        .ok_or_else(|| "MONGODB_URI is required".to_string())?;

    let app = AppContext::from_database_uri(&uri, &cli.mongodb_database)
        .await
        .map_err(|error| format!("{error}"))?;

    match cli.command {
        Commands::Product(ProductCommand {
            command: ProductSubcommand::Create(args),
        }) => create_product(&app, args).await,
        Commands::Product(ProductCommand {
            command: ProductSubcommand::List,
        }) => list_products(&app).await,
    }
}

async fn create_product(app: &AppContext, args: CreateProductArgs) -> Result<(), String> {
    let product = app
        .products
        .create_product(args.into())
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    print_product(&product);

    Ok(())
}

async fn list_products(app: &AppContext) -> Result<(), String> {
    let products = app
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    for product in &products {
        print_product(product);
    }

    Ok(())
}

fn print_product(product: &ProductRecord) {
    println!(
        "{}\t{}\t{}\t{}",
        product.id, product.name, product.price, product.description
    );
}

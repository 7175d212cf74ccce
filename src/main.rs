use clap::Parser;
use rocket_cart::config::cli::CartCommand;
use rocket_cart::core::{ConfigProvider, Notifier};
use rocket_cart::utils::logger;
use rocket_cart::{
    ApiClient, Cart, CartError, CartStore, Cli, ConsoleNotifier, JsonFileStorage, Outcome,
    StoreSettings, TracingNotifier, UpdateProductAmount,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.options.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.options.verbose);
    }

    tracing::debug!("CLI args: {:?}", cli);

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e, 1),
    };

    // JSON log consumers get notices in the log stream instead of on stderr.
    let result = if cli.options.json_logs {
        run(config.as_ref(), &cli.command, TracingNotifier).await
    } else {
        run(config.as_ref(), &cli.command, ConsoleNotifier::new()).await
    };

    match result {
        Ok(Outcome::Rejected(kind)) => {
            tracing::debug!("Command rejected: {:?}", kind);
            std::process::exit(2);
        }
        Ok(_) => {}
        Err(e) => exit_with(&e, 1),
    }
}

async fn run<N: Notifier>(
    config: &dyn ConfigProvider,
    command: &CartCommand,
    notifier: N,
) -> Result<Outcome, CartError> {
    let api = ApiClient::from_config(config)?;
    let storage = JsonFileStorage::new(config.storage_path());
    let store = CartStore::load(
        api.clone(),
        api,
        storage,
        notifier,
        StoreSettings::from_config(config),
    )
    .await?;

    let outcome = match *command {
        CartCommand::Add { product_id } => store.add_product(product_id).await,
        CartCommand::Remove { product_id } => store.remove_product(product_id).await,
        CartCommand::Update { product_id, amount } => {
            store
                .update_product_amount(UpdateProductAmount { product_id, amount })
                .await
        }
        CartCommand::Show => Outcome::Skipped,
    };

    print_cart(&store.cart());
    Ok(outcome)
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!("🛒 Cart ({} items)", cart.total_amount());
    for product in cart {
        let title = product.title().unwrap_or("(untitled)");
        match product.price() {
            Some(price) => println!(
                "  #{:<4} {:<40} x{:<3} {:>10.2}",
                product.id,
                title,
                product.amount,
                price * product.amount as f64
            ),
            None => println!("  #{:<4} {:<40} x{:<3}", product.id, title, product.amount),
        }
    }
    println!("  Subtotal: {:.2}", cart.subtotal());
}

fn exit_with(e: &CartError, code: i32) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e);
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(code);
}

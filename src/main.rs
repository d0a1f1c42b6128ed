use clap::Parser;
use zametki::cli::{
    handle_add, handle_delete, handle_get, handle_list, handle_serve, handle_update, Cli, Commands,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("zametki=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            title,
            tag,
            date,
            content,
            stdin,
            json,
        } => handle_add(cli.file, title, tag, date, content, stdin, json),
        Commands::List { tag, search, json } => handle_list(cli.file, tag, search, json),
        Commands::Get { id, json } => handle_get(cli.file, id, json),
        Commands::Update {
            id,
            title,
            tag,
            date,
            content,
            stdin,
            json,
        } => handle_update(cli.file, id, title, tag, date, content, stdin, json),
        Commands::Delete { id, force } => handle_delete(cli.file, id, force),
        Commands::Serve { port } => handle_serve(cli.file, port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Ranking example: build a registry, rank its members, then try a remote source
//!
//! ```sh
//! RUST_LOG=debug cargo run --example ranking -- registry.yaml
//! ```

use tracing_subscriber::EnvFilter;
use user_rank::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RegistryConfig::from_yaml_file(&path)?,
        None => RegistryConfig::default_config(),
    };
    config.remote.validate()?;

    let mut users = Vec::new();
    add_user(create_user("John", "Doe", "21"), &mut users);
    add_user(create_user("Pierre", "Martin", "10"), &mut users);
    add_user(create_user("Paul", "Martin", "45"), &mut users);
    add_user(create_user("Jack", "Martin", "4"), &mut users);

    let members = users.clone();
    for member in &members {
        let rank = rank_user(member, &mut users);
        println!("{} {} ({}) ranks {}", member.name, member.surname, member.age, rank);
    }

    println!("Sorted:");
    for user in sort_users(&mut users) {
        println!("  {} {} ({})", user.name, user.surname, user.age);
    }

    let source = HttpUserSource::new(reqwest::Client::new(), config.remote);
    match source.fetch_all_users().await {
        Ok(response) => println!(
            "Fetched {} users from {}",
            response.data.len(),
            source.config().users_url()
        ),
        Err(e) => tracing::warn!(code = e.error_code(), "Remote fetch failed: {}", e),
    }

    Ok(())
}

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bot;

use bot::BotConfig;

#[derive(Debug, Parser)]
#[command(name = "network-bot", version, about = "Бот-генератор активности для network-server")]
struct Cli {
    /// Адрес HTTP-сервера.
    #[arg(long, env = "NETWORK_HTTP_URL", default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Количество регистрируемых пользователей.
    #[arg(long, env = "BOT_USERS", default_value_t = 5)]
    users: u32,

    /// Максимум постов на пользователя (у отдельного пользователя может быть ноль).
    #[arg(long, env = "BOT_MAX_POSTS_PER_USER", default_value_t = 5)]
    max_posts_per_user: u32,

    /// Максимум лайков на пользователя (может быть ноль).
    #[arg(long, env = "BOT_MAX_LIKES_PER_USER", default_value_t = 10)]
    max_likes_per_user: u32,

    /// Seed генератора случайных чисел для воспроизводимых прогонов.
    #[arg(long, env = "BOT_SEED")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = BotConfig {
        server: cli.server,
        users: cli.users,
        max_posts_per_user: cli.max_posts_per_user,
        max_likes_per_user: cli.max_likes_per_user,
        seed: cli.seed,
    };

    let report = bot::run(&config).await?;

    println!(
        "Готово: пользователей {}, постов {}, лайков {} (неудачных {})",
        report.users_created, report.posts_created, report.likes_created, report.likes_failed
    );
    Ok(())
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local, TimeZone};
use clap::{Parser, Subcommand};
use wicstagram_client::{Post, WicstagramClient, WicstagramError, encode_image};

const USERNAME_FILE: &str = ".wicstagram_user";
const DEFAULT_ENDPOINT: &str =
    "https://9wr63b62h3.execute-api.us-east-1.amazonaws.com/default/wicstagram";

#[derive(Debug, Parser)]
#[command(name = "wicstagram-cli", version, about = "CLI клиент для фотоленты Wicstagram")]
struct Cli {
    /// URL endpoint'а сервиса (по умолчанию WICSTAGRAM_ENDPOINT или встроенный).
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Показать ленту постов.
    Feed,
    /// Опубликовать фотографию из файла.
    ///
    /// Если `--username` не указан, берётся имя из `.wicstagram_user`,
    /// сохранённое после прошлой публикации.
    Post {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        caption: String,
        #[arg(long)]
        image: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ошибку повторной инициализации можно игнорировать: логирование не
    // критично для работы CLI.
    let _ = fmt().with_env_filter(filter).with_target(true).compact().try_init();
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let endpoint = resolve_endpoint(cli.endpoint, std::env::var("WICSTAGRAM_ENDPOINT").ok());
    let client = WicstagramClient::new(endpoint);

    match cli.command {
        Command::Feed => {
            let posts = client.list_posts().await.map_err(map_client_error)?;
            print_feed(&posts);
        }
        Command::Post {
            username,
            caption,
            image,
        } => {
            let username = match username {
                Some(username) => username,
                None => load_username()
                    .context("не удалось прочитать .wicstagram_user")?
                    .ok_or_else(|| {
                        anyhow!("укажите --username: сохранённого имени ещё нет")
                    })?,
            };

            let bytes = fs::read(&image)
                .with_context(|| format!("не удалось прочитать файл {}", image.display()))?;
            let payload = encode_image(&bytes);

            let response = client
                .create_post(&username, &caption, &payload)
                .await
                .map_err(map_client_error)?;

            persist_username(&username).context("не удалось сохранить имя пользователя")?;

            println!("Пост опубликован, ответ сервиса:");
            println!(
                "{}",
                serde_json::to_string_pretty(&response).unwrap_or_else(|_| response.to_string())
            );
        }
    }

    Ok(())
}

fn resolve_endpoint(flag: Option<String>, env: Option<String>) -> String {
    let raw = flag
        .or(env)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    normalize_endpoint(raw)
}

fn normalize_endpoint(endpoint: String) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint;
    }

    format!("https://{endpoint}")
}

fn parse_username_content(raw: &str) -> Option<String> {
    let username = raw.trim().to_string();
    if username.is_empty() {
        return None;
    }
    Some(username)
}

fn load_username() -> io::Result<Option<String>> {
    if !Path::new(USERNAME_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(USERNAME_FILE)?;
    Ok(parse_username_content(&raw))
}

fn persist_username(username: &str) -> io::Result<()> {
    fs::write(USERNAME_FILE, username)
}

fn map_client_error(err: WicstagramError) -> anyhow::Error {
    let message = match err {
        WicstagramError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        WicstagramError::Service { status, message } => {
            format!("сервис ответил ошибкой (http {status}): {message}")
        }
        WicstagramError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow!(message)
}

fn day_time_string<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%A, %-I:%M %p").to_string()
}

fn print_feed(posts: &[Post]) {
    println!("Постов в ленте: {}", posts.len());

    for post in posts {
        let date_line = post
            .posted_at()
            .map(|at| day_time_string(at.with_timezone(&Local)))
            .unwrap_or_else(|| "время неизвестно".to_string());

        println!("- {} — {}", post.username, post.caption);
        println!("  {date_line}");
        println!("  {}", post.image_url);
    }
}

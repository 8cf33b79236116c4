use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use env_logger::Env;
use prettytable::{Cell, Row, Table};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, Duration};
use travel_site::forms::checkout::{CheckoutForm, CheckoutOutcome};
use travel_site::forms::login::{self, LoginOutcome};
use travel_site::forms::register::{self, RegistrationInput, RegistrationOutcome};
use travel_site::forms::tips::{TipForm, TipOutcome};
use travel_site::models::Tip;
use travel_site::pages::Page;
use travel_site::store::{FileStore, SessionTracker, TipBoard, UserDirectory};
use travel_site::widgets::carousel::Carousel;
use travel_site::widgets::dashboard::{self, DashboardGate};
use travel_site::widgets::modal::LogoutModal;
use travel_site::widgets::packs;

#[derive(Parser)]
#[command(name = "site")]
#[command(about = "The travel demo site, driven from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Create an account and sign in")]
    Register {
        #[arg(long, help = "Given name")]
        name: String,

        #[arg(long, help = "Surnames, at least two")]
        surnames: String,

        #[arg(long, help = "Email address")]
        email: String,

        #[arg(long, help = "Repeat the email address")]
        email2: String,

        #[arg(long, help = "Birth date (YYYY-MM-DD)")]
        birth_date: String,

        #[arg(short, long, help = "Login")]
        login: String,

        #[arg(short, long, help = "Password")]
        password: String,

        #[arg(long, help = "Path to a webp/png/jpeg profile picture")]
        avatar: Option<PathBuf>,

        #[arg(long, help = "Accept the privacy policy")]
        accept_privacy: bool,
    },

    #[command(about = "Log in to your account")]
    Login {
        #[arg(short, long, help = "Login")]
        user: String,

        #[arg(short, long, help = "Password")]
        password: String,
    },

    #[command(about = "Log out of your account (asks first)")]
    Logout,

    #[command(about = "Show the dashboard for the current session")]
    Dashboard,

    #[command(about = "Check payment details for a booking")]
    Checkout {
        #[arg(long, help = "Card number, digits only")]
        card: String,

        #[arg(long, help = "3-digit CVV")]
        cvv: String,

        #[arg(long, help = "Card expiry (YYYY-MM)")]
        expiry: String,

        #[arg(long, help = "Name on the card")]
        full_name: String,
    },

    #[command(about = "Post a travel tip")]
    Tip {
        #[arg(long, help = "Title, at least 15 characters")]
        title: String,

        #[arg(long, help = "Description, at least 30 characters")]
        description: String,

        #[arg(long, help = "Optional link", default_value = "")]
        url: String,
    },

    #[command(about = "Show the three most recent tips")]
    Tips,

    #[command(about = "Render a pack detail page")]
    Pack {
        #[arg(help = "Detail-page query, e.g. 'pack=andes'", default_value = "")]
        query: String,
    },

    #[command(about = "Run the home-page carousel in the terminal")]
    Carousel {
        #[arg(long, help = "Number of slides", default_value_t = 5)]
        items: usize,

        #[arg(long, help = "Seconds between automatic advances", default_value_t = 3)]
        seconds: u64,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run_command(cli.command).await {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

fn data_dir() -> PathBuf {
    env::var("SITE_DATA_DIR")
        .unwrap_or_else(|_| "site-data".to_string())
        .into()
}

async fn run_command(command: Commands) -> Result<()> {
    let store = FileStore::new(data_dir());
    let users = UserDirectory::new(store.clone());
    let sessions = SessionTracker::new(store.clone());
    let board = TipBoard::new(store);

    match command {
        Commands::Register {
            name,
            surnames,
            email,
            email2,
            birth_date,
            login,
            password,
            avatar,
            accept_privacy,
        } => {
            let input = RegistrationInput {
                name,
                surnames,
                email,
                email_confirmation: email2,
                birth_date,
                login,
                password,
                avatar,
                privacy_accepted: accept_privacy,
            };
            do_register(&users, &sessions, input).await?;
        }
        Commands::Login { user, password } => {
            do_login(&users, &sessions, user, password).await?;
        }
        Commands::Logout => {
            do_logout(&sessions).await?;
        }
        Commands::Dashboard => {
            show_dashboard(&users, &sessions, &board).await?;
        }
        Commands::Checkout {
            card,
            cvv,
            expiry,
            full_name,
        } => {
            do_checkout(card, cvv, expiry, full_name)?;
        }
        Commands::Tip {
            title,
            description,
            url,
        } => {
            post_tip(&board, title, description, url).await?;
        }
        Commands::Tips => {
            show_tips(&board).await?;
        }
        Commands::Pack { query } => {
            show_pack(&query);
        }
        Commands::Carousel { items, seconds } => {
            run_carousel(items, seconds).await?;
        }
    }

    Ok(())
}

async fn do_register(
    users: &UserDirectory<FileStore>,
    sessions: &SessionTracker<FileStore>,
    input: RegistrationInput,
) -> Result<()> {
    match register::submit(users, sessions, &input).await? {
        RegistrationOutcome::Invalid(error) => {
            bail!("{}: {}", error.field.label(), error.message);
        }
        RegistrationOutcome::Success { login, redirect } => {
            println!("✅ Account created successfully!");
            println!("👤 Welcome, {}!", login);
            println!("➡️  Continuing to {}", redirect.file_name());
        }
    }

    Ok(())
}

async fn do_login(
    users: &UserDirectory<FileStore>,
    sessions: &SessionTracker<FileStore>,
    user: String,
    password: String,
) -> Result<()> {
    match login::submit(users, sessions, &user, &password).await? {
        LoginOutcome::MissingFields => {
            bail!("Please enter both login and password");
        }
        LoginOutcome::InvalidCredentials => {
            bail!("Invalid login or password");
        }
        LoginOutcome::Success { login, redirect } => {
            println!("✅ Login successful!");
            println!("👤 Welcome back, {}!", login);
            println!("➡️  Continuing to {}", redirect.file_name());
        }
    }

    Ok(())
}

async fn do_logout(sessions: &SessionTracker<FileStore>) -> Result<()> {
    if sessions.current().await.is_none() {
        println!("❌ Not logged in");
        println!("💡 Use 'site login -u <login> -p <password>' to log in");
        return Ok(());
    }

    let mut modal = LogoutModal::new();
    modal.open();

    println!("❓ Log out now? (yes/no): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let confirmed = input.trim().to_lowercase();
    if confirmed != "yes" && confirmed != "y" {
        modal.cancel();
        println!("↩️  Still logged in");
        return Ok(());
    }

    let target = modal.confirm(sessions).await?;
    println!("✅ Logged out successfully!");
    println!("➡️  Back to {}", target.file_name());

    Ok(())
}

async fn show_dashboard(
    users: &UserDirectory<FileStore>,
    sessions: &SessionTracker<FileStore>,
    board: &TipBoard<FileStore>,
) -> Result<()> {
    let profile = match dashboard::load(users, sessions).await? {
        DashboardGate::Redirect(page) => {
            println!("🔒 You are not logged in");
            println!("➡️  Back to {}", page.file_name());
            return Ok(());
        }
        DashboardGate::View(profile) => profile,
    };

    println!("👤 {} {} ({})", profile.name, profile.surnames, profile.login);
    println!("📧 Email: {}", profile.email);
    println!("🎂 Born: {}", profile.birth_date);
    match &profile.avatar {
        Some(data_url) => println!("🖼️  Avatar: {}", preview(data_url, 40)),
        None => println!("🖼️  Avatar: none"),
    }

    let tips = board.top3().await;
    if tips.is_empty() {
        println!("\n📭 No tips on the board yet");
        println!("💡 Use 'site tip' to post the first one");
        return Ok(());
    }

    println!("\n📌 Latest travel tips:");
    print_tip_table(&tips);

    Ok(())
}

fn do_checkout(card: String, cvv: String, expiry: String, full_name: String) -> Result<()> {
    let mut form = CheckoutForm::new();
    form.card_number = card;
    form.cvv = cvv;
    form.expiry = expiry;
    form.full_name = full_name;

    match form.submit() {
        CheckoutOutcome::Invalid(errors) => {
            for error in &errors {
                println!("❌ {}: {}", error.field.label(), error.message);
            }
            bail!("Checkout blocked, {} field(s) need attention", errors.len());
        }
        CheckoutOutcome::Confirmed { message } => {
            println!("✅ {}", message);
        }
    }

    Ok(())
}

async fn post_tip(
    board: &TipBoard<FileStore>,
    title: String,
    description: String,
    url: String,
) -> Result<()> {
    let mut form = TipForm {
        title,
        description,
        url,
    };

    match form.submit(board).await? {
        TipOutcome::Invalid(errors) => {
            for error in &errors {
                println!("❌ {}: {}", error.field.label(), error.message);
            }
            bail!("The tip was not posted");
        }
        TipOutcome::Posted { latest } => {
            println!("✅ Tip posted!");
            println!("\n📌 Latest travel tips:");
            print_tip_table(&latest);
        }
    }

    Ok(())
}

async fn show_tips(board: &TipBoard<FileStore>) -> Result<()> {
    let tips = board.top3().await;

    if tips.is_empty() {
        println!("📭 No tips on the board yet");
        println!("💡 Use 'site tip' to post the first one");
        return Ok(());
    }

    println!("📌 Latest travel tips:");
    print_tip_table(&tips);

    Ok(())
}

fn print_tip_table(tips: &[Tip]) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Posted"),
        Cell::new("Title"),
        Cell::new("Description"),
        Cell::new("Link"),
    ]));

    for tip in tips {
        table.add_row(Row::new(vec![
            Cell::new(&tip.created_at.format("%Y-%m-%d %H:%M").to_string()),
            Cell::new(&tip.title),
            Cell::new(&preview(&tip.description, 48)),
            Cell::new(&tip.url),
        ]));
    }

    table.printstd();
}

fn show_pack(query: &str) {
    let pack = packs::from_query(query);

    println!("🧳 {}", pack.title);
    println!("📍 Destination: {}", pack.destination);
    println!("🌙 Nights: {}", pack.nights);
    println!("💶 Price: {} EUR", pack.price_eur);
    println!("📖 {}", pack.description);
    println!(
        "🔗 {}?{}={}",
        Page::PackDetail.file_name(),
        packs::PACK_PARAM,
        pack.code
    );
}

async fn run_carousel(items: usize, seconds: u64) -> Result<()> {
    let Some(mut carousel) = Carousel::new(items) else {
        bail!("The carousel needs at least 3 slides");
    };

    println!("🎠 Carousel running: [n]ext, [p]revious, [h]over on/off, [q]uit");
    print_slide(&carousel);

    let mut ticker = interval(Duration::from_secs(seconds.max(1)));
    ticker.tick().await; // the first tick completes immediately

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if carousel.auto_advance() {
                    print_slide(&carousel);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match line.trim() {
                    "n" => {
                        carousel.next();
                        ticker.reset();
                        print_slide(&carousel);
                    }
                    "p" => {
                        carousel.prev();
                        ticker.reset();
                        print_slide(&carousel);
                    }
                    "h" => {
                        if carousel.is_paused() {
                            carousel.resume();
                            println!("▶️  Rotation resumed");
                        } else {
                            carousel.pause();
                            println!("⏸️  Rotation paused");
                        }
                    }
                    "q" => break,
                    _ => println!("❓ Use n, p, h or q"),
                }
            }
        }
    }

    println!("👋 Carousel stopped");
    Ok(())
}

fn print_slide(carousel: &Carousel) {
    println!("🖼️  Slide {} of {}", carousel.index() + 1, carousel.item_count());
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

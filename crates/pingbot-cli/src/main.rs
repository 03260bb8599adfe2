use std::io::{self, Write};
use std::path::PathBuf;

use auth_client::{AuthClient, LoginForm, RegisterForm};
use chat_app::{
    ChannelTransport, ChatPage, HomePage, IncomingMessage, LoginPage, Navigator, RegisterPage,
    RemoteEnd, Route, SendOutcome, SubmitOutcome,
};
use chat_core::{Config, Message, Role};
use chat_state::{selectors, Store};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pingbot")]
#[command(about = "Terminal front end for the PingBot chat client")]
#[command(version)]
struct Cli {
    /// Auth API origin, overrides config and environment
    #[arg(long)]
    base_url: Option<String>,

    /// Settings file (.json or .toml) to load instead of the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing page
    Home,
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Start interactive chat
    Chat,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_line_number(debug),
        )
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path).map_err(anyhow::Error::msg)?;
            config.apply_env(|key| std::env::var(key).ok());
            config
        }
        None => Config::new(),
    };
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = load_config(&cli)?;
    tracing::debug!(base_url = %config.base_url, "loaded config");

    match cli.command {
        Commands::Home => {
            show_home();
            Ok(())
        }
        Commands::Login { email, password } => {
            let client = AuthClient::new(config)?;
            let mut page = LoginPage::new(LoginForm::new(email, password));
            let mut nav = Navigator::new(Route::Login);
            let outcome = page.submit(&client, &mut nav).await;
            report(outcome, nav.current());
            Ok(())
        }
        Commands::Register {
            first_name,
            last_name,
            email,
            password,
        } => {
            let client = AuthClient::new(config)?;
            let mut page = RegisterPage::new(RegisterForm {
                first_name,
                last_name,
                email,
                password,
            });
            let mut nav = Navigator::new(Route::Register);
            let outcome = page.submit(&client, &mut nav).await;
            report(outcome, nav.current());
            Ok(())
        }
        Commands::Chat => run_interactive_chat().await,
    }
}

fn show_home() {
    let home = HomePage;
    println!("{}", HomePage::BRAND.cyan().bold());
    println!("{}", HomePage::HEADLINE.bold());
    println!("{}", HomePage::TAGLINE.dimmed());
    println!();
    for (title, blurb) in home.features() {
        println!("  {} {}", format!("{title}:").green(), blurb);
    }
    println!();
    for (label, route) in home.nav_links() {
        println!("  {} -> {}", label, route.to_string().cyan());
    }
}

fn report(outcome: SubmitOutcome, route: Route) {
    match outcome {
        SubmitOutcome::Rejected(errors) => {
            for (field, message) in errors.iter() {
                println!("{}", format!("❌ {}: {}", field.as_str(), message).red());
            }
        }
        SubmitOutcome::Succeeded(response) => {
            println!("{}", format!("✅ {} ({})", response.status, response.body).green());
        }
        SubmitOutcome::Failed(e) => {
            println!("{}", format!("❌ Error: {}", e).red());
        }
    }
    println!("{}", format!("Now at {}", route).dimmed());
}

/// Answer every prompt with an echo. Stands in for a backend until a real
/// transport exists.
fn spawn_echo(mut remote: RemoteEnd) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if remote.connect().await.is_err() {
            return;
        }
        while let Some(prompt) = remote.recv_prompt().await {
            let reply = IncomingMessage::text(format!("echo: {}", prompt.prompt));
            if remote.reply(reply).await.is_err() {
                break;
            }
        }
    })
}

fn print_message(message: &Message) {
    match message.role {
        Role::User => println!("{} {}", "You:".cyan().bold(), message.content),
        Role::Model => println!("{} {}", "PingBot:".green().bold(), message.content),
    }
}

fn print_chats(store: &Store) {
    for chat in selectors::chats(store) {
        let marker = if chat.active { "*" } else { " " };
        println!("{} {} {}", marker, chat.id.dimmed(), chat.title);
    }
}

async fn run_interactive_chat() -> anyhow::Result<()> {
    let (transport, remote) = ChannelTransport::pair();
    let echo = spawn_echo(remote);
    let mut page = ChatPage::new(transport);
    let mut store = Store::new();

    page.pump(&mut store).await;

    println!("{}", "🤖 PingBot".cyan().bold());
    println!(
        "{}",
        "Commands: /new <title>, /chats, /select <id>, /sidebar, /connect, /disconnect, /quit"
            .dimmed()
    );

    loop {
        println!();
        println!(
            "{} {}",
            selectors::active_chat_title(&store).bold(),
            format!("[{}]", selectors::connection_status(&store).label()).dimmed()
        );
        print!("{} ", ">".cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        let (command, arg) = match input.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        match command {
            "/quit" | "/exit" => {
                println!("{}", "👋 Goodbye!".cyan());
                break;
            }
            "/new" => {
                page.open_new_chat_modal(&mut store);
                page.set_new_chat_name(&mut store, arg);
                if page.create_new_chat(&mut store).is_none() {
                    page.cancel_new_chat(&mut store);
                    println!("{}", "Chat name cannot be empty".red());
                }
            }
            "/chats" => print_chats(&store),
            "/select" => {
                page.select_chat(&mut store, arg).await;
                for message in selectors::messages(&store) {
                    print_message(message);
                }
            }
            "/sidebar" => {
                page.toggle_sidebar(&mut store);
                if selectors::is_sidebar_open(&store) {
                    print_chats(&store);
                }
            }
            "/connect" => page.mark_connected(&mut store),
            "/disconnect" => page.mark_disconnected(&mut store),
            _ => match page.send_message(&mut store, input).await {
                Ok(SendOutcome::Sent(_)) => {
                    if page.pump(&mut store).await {
                        if let Some(reply) = selectors::messages(&store).last() {
                            print_message(reply);
                        }
                    }
                }
                Ok(SendOutcome::Ignored) => {}
                Err(e) => println!("{}", format!("❌ Error: {}", e).red()),
            },
        }
    }

    drop(page);
    echo.await?;
    Ok(())
}

mod backend;
mod config;
mod payloads;
mod session;

use anyhow::Result;
use answer_highlighter::render::{to_ansi, to_markdown};
use answer_highlighter::{highlight_answer, AnswerRecord};
use backend::BackendClient;
use clap::{Parser, Subcommand};
use config::ClientConfig;
use session::{ChatSession, RenderStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "policy-qa", about = "Ask questions about a policy PDF and highlight the answers")]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "BACKEND_URL")]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Highlight an answer locally without contacting the backend
    Highlight {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
        /// Emit markdown bold markers instead of terminal styling
        #[arg(long)]
        markdown: bool,
    },
    /// Upload a PDF and ask one or more questions about it
    Ask {
        pdf: PathBuf,
        #[arg(required = true)]
        questions: Vec<String>,
        /// Emit markdown bold markers instead of terminal styling
        #[arg(long)]
        markdown: bool,
    },
    /// Answer a batch of questions about a PDF hosted at a URL
    Run {
        documents_url: String,
        #[arg(required = true)]
        questions: Vec<String>,
        /// Bearer token sent in the Authorization header
        #[arg(long, env = "HACKRX_TOKEN", hide_env_values = true)]
        token: Option<String>,
        /// Emit markdown bold markers instead of terminal styling
        #[arg(long)]
        markdown: bool,
    },
    /// Generate an explainer video for a prompt
    Video { prompt: String },
    /// Check that the backend is reachable
    Health,
}

fn render_style(markdown: bool) -> RenderStyle {
    if markdown {
        RenderStyle::Markdown
    } else {
        RenderStyle::Ansi
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before logging so RUST_LOG can come from .env
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let backend_url = cli.backend_url.as_deref();

    match cli.command {
        Command::Highlight { question, answer, markdown } => {
            let segments = highlight_answer(&AnswerRecord {
                text: &answer,
                question: &question,
            });
            let rendered = match render_style(markdown) {
                RenderStyle::Ansi => to_ansi(&segments),
                RenderStyle::Markdown => to_markdown(&segments),
            };
            println!("{}", rendered);
        }
        Command::Ask { pdf, questions, markdown } => {
            let backend = connect(backend_url)?;
            let upload = backend.upload_file(&pdf).await?;
            println!("{}", upload.message);

            let mut session = ChatSession::new(upload.session_id);
            for question in &questions {
                let response = backend.ask(&session.session_id, question).await?;
                session.record_exchange(response);
            }
            print!("{}", session.render_transcript(render_style(markdown)));
        }
        Command::Run { documents_url, questions, token, markdown } => {
            let run = connect(backend_url)?
                .run(&documents_url, &questions, token.as_deref())
                .await?;

            let mut session = ChatSession::new(documents_url);
            session.record_run(&questions, run);
            print!("{}", session.render_transcript(render_style(markdown)));
        }
        Command::Video { prompt } => {
            let video = connect(backend_url)?.generate_video(&prompt).await?;
            println!("{}", video.video_url);
            if let Some(job_id) = video.job_id {
                println!("job: {}", job_id);
            }
        }
        Command::Health => {
            let health = connect(backend_url)?.health().await?;
            match health.service {
                Some(service) => println!("{}: {}", service, health.status),
                None => println!("{}", health.status),
            }
        }
    }

    Ok(())
}

fn connect(backend_url: Option<&str>) -> Result<BackendClient> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = backend_url {
        config = config.with_backend_url(url);
    }
    log::info!("Using backend at {}", config.backend_url);
    BackendClient::new(&config)
}

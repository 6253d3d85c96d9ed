//! aviaryctl - Control CLI for the Aviary agent platform
//!
//! Administrative commands for the platform: manage agents, tools, and
//! knowledge bases, inspect conversations, and chat with an agent straight
//! from the terminal.

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::LevelFilter;
use tracing::debug;

use aviary::catalog;
use aviary::config::{load_or_init_config, write_default_config, AppPaths, ConsoleConfig};
use aviary::credentials::{self, StoredCredentials};
use aviary::protocol::{
    Agent, AgentListQuery, AgentStatus, AgentType, Conversation, ConversationListQuery,
    CreateAgentRequest, CreateConversationRequest, CreateKnowledgeBaseRequest, CreateToolRequest,
    KnowledgeBase, KnowledgeBaseListQuery, KnowledgeBaseType, LoginRequest, Message, MessageRole,
    MetaMap, MetaValue, Tool, ToolListQuery, ToolType, UpdateAgentRequest, UploadDocumentRequest,
};
use aviary::session::ConversationApi;
use aviary::{ConversationSession, PlatformClient};

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        let _ = writeln!(io::stderr(), "Error: {err:?}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[tokio::main]
async fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = RuntimeContext::new(cli.common.clone())?;
    ctx.init_logging();
    debug!("resolved paths: {}", ctx.paths);

    match cli.command {
        Command::Login(cmd) => handle_login(&ctx, cmd).await,
        Command::Logout => handle_logout(&ctx),
        Command::Status => handle_status(&ctx).await,
        Command::Ping => handle_ping(&ctx).await,
        Command::Agent { command } => handle_agent(&ctx, command).await,
        Command::Conversation { command } => handle_conversation(&ctx, command).await,
        Command::Tool { command } => handle_tool(&ctx, command).await,
        Command::Kb { command } => handle_kb(&ctx, command).await,
        Command::Chat(cmd) => handle_chat(&ctx, cmd).await,
        Command::Models => handle_models(&ctx),
        Command::Config { command } => handle_config(&ctx, command),
        Command::Completions { shell } => handle_completions(shell),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "aviaryctl",
    author,
    version,
    about = "Control CLI for the Aviary agent platform - manage agents, conversations, tools, and knowledge bases.",
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    common: CommonOpts,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Args)]
struct CommonOpts {
    /// Platform server URL (falls back to the config file)
    #[arg(long, short = 's', env = "AVIARY_SERVER_URL", global = true)]
    server: Option<String>,
    /// Override the config file path
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Reduce output to only errors
    #[arg(short, long, action = clap::ArgAction::SetTrue, global = true)]
    quiet: bool,
    /// Increase logging verbosity (stackable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Enable debug logging (equivalent to -vv)
    #[arg(long, global = true)]
    debug: bool,
    /// Enable trace logging (overrides other levels)
    #[arg(long, global = true)]
    trace: bool,
    /// Output machine readable JSON
    #[arg(long, global = true)]
    json: bool,
    /// Disable ANSI colors in output
    #[arg(long = "no-color", global = true, conflicts_with = "color")]
    no_color: bool,
    /// Control color output (auto, always, never)
    #[arg(long, value_enum, default_value_t = ColorOption::Auto, global = true)]
    color: ColorOption,
    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", global = true)]
    timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorOption {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in and store the access token
    Login(LoginCommand),
    /// Forget the stored access token
    Logout,
    /// Check server health and login state
    Status,
    /// Round-trip the versioned API
    Ping,
    /// Manage agents
    Agent {
        #[command(subcommand)]
        command: AgentCommand,
    },
    /// Inspect and create conversations
    Conversation {
        #[command(subcommand)]
        command: ConversationCommand,
    },
    /// Manage tools
    Tool {
        #[command(subcommand)]
        command: ToolCommand,
    },
    /// Manage knowledge bases
    Kb {
        #[command(subcommand)]
        command: KbCommand,
    },
    /// Chat with an agent through a conversation
    Chat(ChatCommand),
    /// List the known models and their providers
    Models,
    /// Inspect and manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Args)]
struct LoginCommand {
    /// Account email (prompted when omitted)
    #[arg(long)]
    email: Option<String>,
    /// Account password (prompted when omitted)
    #[arg(long, env = "AVIARY_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Debug, Clone, Args)]
struct ChatCommand {
    /// Conversation ID to open
    conversation: String,
}

#[derive(Debug, Subcommand)]
enum AgentCommand {
    /// List agents
    List {
        /// Filter by status (draft, published, archived)
        #[arg(long)]
        status: Option<AgentStatus>,
        /// Filter by type (single, multi)
        #[arg(long = "type")]
        agent_type: Option<AgentType>,
        /// Page to fetch (server default 1)
        #[arg(long)]
        page: Option<i64>,
        /// Items per page (server default 10)
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Get agent details
    Get {
        /// Agent ID
        id: String,
    },
    /// Create an agent
    Create {
        /// Display name
        name: String,
        /// Agent type (single, multi)
        #[arg(long = "type", default_value = "single")]
        agent_type: AgentType,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Model identifier to bind
        #[arg(long)]
        model: Option<String>,
        /// System prompt template
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Update an agent (only the given fields change)
    Update {
        /// Agent ID
        id: String,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New status (draft, published, archived)
        #[arg(long)]
        status: Option<AgentStatus>,
        /// Model identifier to bind (other model settings are kept)
        #[arg(long)]
        model: Option<String>,
        /// New system prompt template
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Delete an agent
    Delete {
        /// Agent ID
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum ConversationCommand {
    /// List conversations
    List {
        /// Only conversations bound to this agent
        #[arg(long)]
        agent_id: Option<String>,
        /// Page to fetch (server default 1)
        #[arg(long)]
        page: Option<i64>,
        /// Items per page (server default 10)
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Get a conversation with its message log
    Get {
        /// Conversation ID
        id: String,
    },
    /// Start a conversation with an agent
    Create {
        /// Agent ID to converse with
        agent_id: String,
        /// Conversation title (server default "New Conversation")
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum ToolCommand {
    /// List tools
    List {
        /// Filter by type (function, api, plugin)
        #[arg(long = "type")]
        tool_type: Option<ToolType>,
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Page to fetch (server default 1)
        #[arg(long)]
        page: Option<i64>,
        /// Items per page (server default 10)
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Get tool details
    Get {
        /// Tool ID
        id: String,
    },
    /// Register a tool
    Create {
        /// Display name
        name: String,
        /// Tool type (function, api, plugin)
        #[arg(long = "type")]
        tool_type: ToolType,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Category label
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a tool
    Delete {
        /// Tool ID
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum KbCommand {
    /// List knowledge bases
    List {
        /// Filter by type (document, database, api)
        #[arg(long = "type")]
        kb_type: Option<KnowledgeBaseType>,
        /// Page to fetch (server default 1)
        #[arg(long)]
        page: Option<i64>,
        /// Items per page (server default 10)
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Get knowledge base details
    Get {
        /// Knowledge base ID
        id: String,
    },
    /// Create a knowledge base
    Create {
        /// Display name
        name: String,
        /// Knowledge base type (document, database, api)
        #[arg(long = "type", default_value = "document")]
        kb_type: KnowledgeBaseType,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Embedding model (server default otherwise)
        #[arg(long)]
        embedding_model: Option<String>,
    },
    /// Upload a document into a knowledge base
    Upload {
        /// Knowledge base ID
        kb_id: String,
        /// Document title
        #[arg(long)]
        title: String,
        /// Inline document content
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,
        /// Read document content from a file
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Delete a knowledge base and its documents
    Delete {
        /// Knowledge base ID
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Output the effective configuration
    Show,
    /// Print the resolved config file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone)]
struct RuntimeContext {
    common: CommonOpts,
    paths: AppPaths,
    config: ConsoleConfig,
}

impl RuntimeContext {
    fn new(common: CommonOpts) -> Result<Self> {
        let paths = AppPaths::discover(common.config.clone())?;
        let config = load_or_init_config(&paths)?;
        let paths = paths.apply_overrides(&config)?;
        let ctx = Self {
            common,
            paths,
            config,
        };
        ctx.ensure_directories()?;
        Ok(ctx)
    }

    fn init_logging(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        if self.common.quiet {
            log::set_max_level(LevelFilter::Off);
            return;
        }

        let level = match self.effective_log_level() {
            LevelFilter::Off => "off",
            LevelFilter::Error => "error",
            LevelFilter::Warn => "warn",
            LevelFilter::Info => "info",
            LevelFilter::Debug => "debug",
            LevelFilter::Trace => "trace",
        };

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("aviary={level},reqwest={level}")));

        // Use JSON output if --json flag is set, otherwise pretty format
        if self.common.json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .ok();
        } else {
            let force_color = matches!(self.common.color, ColorOption::Always)
                || env::var_os("FORCE_COLOR").is_some();
            let disable_color = self.common.no_color
                || matches!(self.common.color, ColorOption::Never)
                || env::var_os("NO_COLOR").is_some()
                || (!force_color && !io::stderr().is_terminal());

            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(!disable_color)
                        .with_target(false),
                )
                .try_init()
                .ok();
        }

        // Also init env_logger for compatibility with log crate users
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
        builder.filter_level(self.effective_log_level());
        builder.try_init().ok();
    }

    fn effective_log_level(&self) -> LevelFilter {
        if self.common.trace {
            LevelFilter::Trace
        } else if self.common.debug {
            LevelFilter::Debug
        } else {
            match self.common.verbose {
                0 => self
                    .config
                    .logging
                    .level
                    .parse()
                    .unwrap_or(LevelFilter::Info),
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        }
    }

    fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.paths.state_dir).with_context(|| {
            format!(
                "creating state directory {}",
                self.paths.state_dir.display()
            )
        })
    }

    fn server_url(&self) -> String {
        self.common
            .server
            .clone()
            .unwrap_or_else(|| self.config.server.base_url.clone())
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.common
                .timeout
                .unwrap_or(self.config.server.timeout_secs),
        )
    }

    /// Build a client, attaching the stored token when logged in.
    fn client(&self) -> Result<PlatformClient> {
        let mut client = PlatformClient::with_timeout(self.server_url(), self.timeout());
        if let Some(stored) = credentials::load(&self.paths.credentials_file())? {
            client = client.with_token(stored.token);
        }
        Ok(client)
    }
}

async fn handle_login(ctx: &RuntimeContext, cmd: LoginCommand) -> Result<()> {
    let email = match cmd.email {
        Some(email) => email,
        None => prompt("Email")?,
    };
    let password = match cmd.password {
        Some(password) => password,
        None => prompt("Password")?,
    };

    let client = ctx.client()?;
    let response = client
        .login(&LoginRequest {
            email: email.clone(),
            password,
        })
        .await?;

    credentials::store(
        &ctx.paths.credentials_file(),
        &StoredCredentials {
            token: response.token,
            user: response.user.clone(),
        },
    )?;

    if ctx.common.json {
        println!("{}", serde_json::to_string_pretty(&response.user)?);
    } else {
        println!("Logged in as {email}");
    }
    Ok(())
}

fn handle_logout(ctx: &RuntimeContext) -> Result<()> {
    credentials::clear(&ctx.paths.credentials_file())?;
    if ctx.common.json {
        println!(r#"{{"status": "logged_out"}}"#);
    } else {
        println!("Logged out");
    }
    Ok(())
}

async fn handle_status(ctx: &RuntimeContext) -> Result<()> {
    let client = ctx.client()?;
    let healthy = client.health().await.unwrap_or(false);
    let stored = credentials::load(&ctx.paths.credentials_file())?;

    if ctx.common.json {
        let status = serde_json::json!({
            "server": client.base_url(),
            "healthy": healthy,
            "logged_in": stored.is_some(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        if healthy {
            println!("Server is healthy at {}", client.base_url());
        } else {
            println!("Server is unreachable at {}", client.base_url());
        }
        match stored {
            Some(stored) => println!("Logged in as {}", stored.user.email),
            None => println!("Not logged in"),
        }
    }
    Ok(())
}

async fn handle_ping(ctx: &RuntimeContext) -> Result<()> {
    let client = ctx.client()?;
    let payload = client.ping().await?;

    if ctx.common.json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", payload["message"].as_str().unwrap_or("pong"));
    }
    Ok(())
}

async fn handle_agent(ctx: &RuntimeContext, command: AgentCommand) -> Result<()> {
    let client = ctx.client()?;

    match command {
        AgentCommand::List {
            status,
            agent_type,
            page,
            page_size,
        } => {
            let query = AgentListQuery {
                page,
                page_size,
                status,
                agent_type,
            };
            let result = client.list_agents(&query).await?;

            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{:<38} {:<20} {:<8} {:<10} {}",
                    "ID", "NAME", "TYPE", "STATUS", "MODEL"
                );
                println!("{}", "-".repeat(100));
                for agent in &result.items {
                    println!(
                        "{:<38} {:<20} {:<8} {:<10} {}",
                        agent.id,
                        agent.name,
                        agent.agent_type,
                        agent.status,
                        agent.configured_model().unwrap_or("-"),
                    );
                }
                print_page_footer(result.page, result.page_count(), result.total);
            }
        }
        AgentCommand::Get { id } => {
            let agent = client.get_agent(&id).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&agent)?);
            } else {
                print_agent(&agent);
            }
        }
        AgentCommand::Create {
            name,
            agent_type,
            description,
            model,
            prompt,
        } => {
            let mut request = CreateAgentRequest::new(name, agent_type);
            if let Some(description) = description {
                request = request.description(description);
            }
            if let Some(prompt) = prompt {
                request = request.prompt_template(prompt);
            }
            if let Some(model) = model {
                let mut config = MetaMap::new();
                config.insert("model".to_string(), MetaValue::from(model));
                request = request.model_config(config);
            }

            let agent = client.create_agent(&request).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&agent)?);
            } else {
                println!("Agent {} created ({})", agent.id, agent.status);
            }
        }
        AgentCommand::Update {
            id,
            name,
            description,
            status,
            model,
            prompt,
        } => {
            if name.is_none()
                && description.is_none()
                && status.is_none()
                && model.is_none()
                && prompt.is_none()
            {
                bail!(
                    "nothing to update: pass at least one of --name, --description, --status, --model, --prompt"
                );
            }

            let mut request = UpdateAgentRequest {
                name,
                description,
                status,
                prompt_template: prompt,
                ..UpdateAgentRequest::default()
            };
            if let Some(model) = model {
                // Merge into the current config so the other model settings
                // survive the partial update.
                let current = client.get_agent(&id).await?;
                let mut config = current.model_config;
                config.insert("model".to_string(), MetaValue::from(model));
                request.model_config = Some(config);
            }

            let agent = client.update_agent(&id, &request).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&agent)?);
            } else {
                println!("Agent {} updated", agent.id);
            }
        }
        AgentCommand::Delete { id } => {
            let deleted = client.delete_agent(&id).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&deleted)?);
            } else {
                println!("Agent {} deleted", deleted.id);
            }
        }
    }
    Ok(())
}

async fn handle_conversation(ctx: &RuntimeContext, command: ConversationCommand) -> Result<()> {
    let client = ctx.client()?;

    match command {
        ConversationCommand::List {
            agent_id,
            page,
            page_size,
        } => {
            let query = ConversationListQuery {
                page,
                page_size,
                agent_id,
            };
            let result = client.list_conversations(&query).await?;

            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{:<38} {:<38} {:<8} {:>5}  {}",
                    "ID", "AGENT", "STATUS", "MSGS", "TITLE"
                );
                println!("{}", "-".repeat(110));
                for conversation in &result.items {
                    println!(
                        "{:<38} {:<38} {:<8} {:>5}  {}",
                        conversation.id,
                        conversation.agent_id,
                        conversation.status,
                        conversation.messages.len(),
                        conversation.title.as_deref().unwrap_or("-"),
                    );
                }
                print_page_footer(result.page, result.page_count(), result.total);
            }
        }
        ConversationCommand::Get { id } => {
            let conversation = client.get_conversation(&id).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&conversation)?);
            } else {
                print_conversation(&conversation);
            }
        }
        ConversationCommand::Create { agent_id, title } => {
            let mut request = CreateConversationRequest::new(agent_id);
            if let Some(title) = title {
                request = request.title(title);
            }

            let conversation = client.create_conversation(&request).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&conversation)?);
            } else {
                println!("Conversation {} created", conversation.id);
            }
        }
    }
    Ok(())
}

async fn handle_tool(ctx: &RuntimeContext, command: ToolCommand) -> Result<()> {
    let client = ctx.client()?;

    match command {
        ToolCommand::List {
            tool_type,
            category,
            page,
            page_size,
        } => {
            let query = ToolListQuery {
                page,
                page_size,
                tool_type,
                category,
            };
            let result = client.list_tools(&query).await?;

            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{:<38} {:<20} {:<10} {:<14} {}",
                    "ID", "NAME", "TYPE", "CATEGORY", "VERSION"
                );
                println!("{}", "-".repeat(95));
                for tool in &result.items {
                    println!(
                        "{:<38} {:<20} {:<10} {:<14} {}",
                        tool.id,
                        tool.name,
                        tool.tool_type,
                        dash_if_empty(&tool.category),
                        dash_if_empty(&tool.version),
                    );
                }
                print_page_footer(result.page, result.page_count(), result.total);
            }
        }
        ToolCommand::Get { id } => {
            let tool = client.get_tool(&id).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&tool)?);
            } else {
                print_tool(&tool);
            }
        }
        ToolCommand::Create {
            name,
            tool_type,
            description,
            category,
        } => {
            let mut request = CreateToolRequest::new(name, tool_type);
            if let Some(description) = description {
                request = request.description(description);
            }
            if let Some(category) = category {
                request = request.category(category);
            }

            let tool = client.create_tool(&request).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&tool)?);
            } else {
                println!("Tool {} created", tool.id);
            }
        }
        ToolCommand::Delete { id } => {
            let deleted = client.delete_tool(&id).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&deleted)?);
            } else {
                println!("Tool {} deleted", deleted.id);
            }
        }
    }
    Ok(())
}

async fn handle_kb(ctx: &RuntimeContext, command: KbCommand) -> Result<()> {
    let client = ctx.client()?;

    match command {
        KbCommand::List {
            kb_type,
            page,
            page_size,
        } => {
            let query = KnowledgeBaseListQuery {
                page,
                page_size,
                kb_type,
            };
            let result = client.list_knowledge_bases(&query).await?;

            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{:<38} {:<20} {:<10} {:>5}  {}",
                    "ID", "NAME", "TYPE", "DOCS", "EMBEDDING"
                );
                println!("{}", "-".repeat(100));
                for kb in &result.items {
                    println!(
                        "{:<38} {:<20} {:<10} {:>5}  {}",
                        kb.id,
                        kb.name,
                        kb.kb_type,
                        kb.document_count,
                        kb.embedding_model,
                    );
                }
                print_page_footer(result.page, result.page_count(), result.total);
            }
        }
        KbCommand::Get { id } => {
            let kb = client.get_knowledge_base(&id).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&kb)?);
            } else {
                print_kb(&kb);
            }
        }
        KbCommand::Create {
            name,
            kb_type,
            description,
            embedding_model,
        } => {
            let mut request = CreateKnowledgeBaseRequest::new(name, kb_type);
            if let Some(description) = description {
                request = request.description(description);
            }
            if let Some(embedding_model) = embedding_model {
                request = request.embedding_model(embedding_model);
            }

            let kb = client.create_knowledge_base(&request).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&kb)?);
            } else {
                println!("Knowledge base {} created", kb.id);
            }
        }
        KbCommand::Upload {
            kb_id,
            title,
            content,
            file,
        } => {
            let content = match (content, file) {
                (Some(content), None) => content,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("reading document from {}", path.display()))?,
                _ => bail!("document content required: pass --content or --file"),
            };

            let request = UploadDocumentRequest::new(title, content);
            let document = client.upload_document(&kb_id, &request).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                println!(
                    "Document {} uploaded ({})",
                    document.id,
                    dash_if_empty(&document.status)
                );
            }
        }
        KbCommand::Delete { id } => {
            let deleted = client.delete_knowledge_base(&id).await?;
            if ctx.common.json {
                println!("{}", serde_json::to_string_pretty(&deleted)?);
            } else {
                println!("Knowledge base {} deleted", deleted.id);
            }
        }
    }
    Ok(())
}

async fn handle_chat(ctx: &RuntimeContext, cmd: ChatCommand) -> Result<()> {
    let api: Arc<dyn ConversationApi> = Arc::new(ctx.client()?);
    let mut session = ConversationSession::open(api, &cmd.conversation).await?;

    println!(
        "Conversation {} ({})",
        session.conversation_id(),
        session.title().unwrap_or("untitled"),
    );
    println!(
        "Agent {} using {}",
        session.agent_id(),
        catalog::display_label(session.selected_model()),
    );
    for message in session.messages() {
        print_message(message);
    }
    println!("Type a message, '/model <id>' to switch models, '/quit' to leave.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('/') {
            let mut parts = rest.splitn(2, char::is_whitespace);
            let command = parts.next().unwrap_or("");
            let argument = parts.next().map(str::trim).unwrap_or("");

            match command {
                "quit" | "exit" => break,
                "model" => {
                    if argument.is_empty() {
                        println!(
                            "Current model: {} ({})",
                            session.selected_model(),
                            catalog::provider_for(session.selected_model()),
                        );
                        for entry in catalog::MODEL_CATALOG {
                            println!("  {:<28} {}", entry.id, entry.label);
                        }
                    } else {
                        match session.change_model(argument).await {
                            Ok(()) => println!(
                                "Model set to {}",
                                catalog::display_label(session.selected_model())
                            ),
                            Err(err) => eprintln!("Error: {err}"),
                        }
                    }
                }
                _ => println!("Unknown command /{command}. Commands: /model [id], /quit"),
            }
            continue;
        }

        match session.send_message(line).await {
            Ok(appended) => {
                for message in appended {
                    if message.role != MessageRole::User {
                        print_message(message);
                    }
                }
            }
            Err(err) => eprintln!("Error: {err}"),
        }
    }
    Ok(())
}

fn handle_models(ctx: &RuntimeContext) -> Result<()> {
    if ctx.common.json {
        let models: Vec<_> = catalog::MODEL_CATALOG
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "id": entry.id,
                    "label": entry.label,
                    "provider": catalog::provider_for(entry.id).label(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        println!("{:<28} {:<20} {}", "ID", "NAME", "PROVIDER");
        println!("{}", "-".repeat(60));
        for entry in catalog::MODEL_CATALOG {
            println!(
                "{:<28} {:<20} {}",
                entry.id,
                entry.label,
                catalog::provider_for(entry.id),
            );
        }
    }
    Ok(())
}

fn handle_config(ctx: &RuntimeContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            if ctx.common.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ctx.config)
                        .context("serializing config to JSON")?
                );
            } else {
                println!("{:#?}", ctx.config);
            }
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", ctx.paths.config_file.display());
            Ok(())
        }
        ConfigCommand::Init { force } => {
            if ctx.paths.config_file.exists() && !force {
                return Err(anyhow!(
                    "config already exists at {} (use --force to overwrite)",
                    ctx.paths.config_file.display()
                ));
            }
            write_default_config(&ctx.paths.config_file)
        }
    }
}

fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "aviaryctl", &mut io::stdout());
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn print_agent(agent: &Agent) {
    println!("Agent: {}", agent.id);
    println!("  Name: {}", agent.name);
    if !agent.description.is_empty() {
        println!("  Description: {}", agent.description);
    }
    println!("  Type: {}", agent.agent_type);
    println!("  Status: {}", agent.status);
    match agent.configured_model() {
        Some(model) => println!(
            "  Model: {} ({})",
            catalog::display_label(model),
            catalog::provider_for(model),
        ),
        None => println!("  Model: not set"),
    }
    if !agent.tools.is_empty() {
        println!("  Tools: {}", agent.tools.join(", "));
    }
    if !agent.knowledge_bases.is_empty() {
        println!("  Knowledge bases: {}", agent.knowledge_bases.join(", "));
    }
    println!("  Version: {}", agent.version);
    println!("  Updated: {}", agent.updated_at);
}

fn print_conversation(conversation: &Conversation) {
    println!("Conversation: {}", conversation.id);
    if let Some(title) = &conversation.title {
        println!("  Title: {title}");
    }
    println!("  Agent: {}", conversation.agent_id);
    println!("  Status: {}", conversation.status);
    println!("  Messages: {}", conversation.messages.len());
    for message in &conversation.messages {
        println!(
            "  {} [{}] {}",
            message.timestamp.format("%Y-%m-%d %H:%M:%S"),
            message.role,
            message.content,
        );
    }
}

fn print_tool(tool: &Tool) {
    println!("Tool: {}", tool.id);
    println!("  Name: {}", tool.name);
    if !tool.description.is_empty() {
        println!("  Description: {}", tool.description);
    }
    println!("  Type: {}", tool.tool_type);
    if !tool.category.is_empty() {
        println!("  Category: {}", tool.category);
    }
    if !tool.implementation.is_empty() {
        println!("  Implementation: {}", tool.implementation);
    }
    println!("  Version: {}", dash_if_empty(&tool.version));
    println!("  Updated: {}", tool.updated_at);
}

fn print_kb(kb: &KnowledgeBase) {
    println!("Knowledge base: {}", kb.id);
    println!("  Name: {}", kb.name);
    if !kb.description.is_empty() {
        println!("  Description: {}", kb.description);
    }
    println!("  Type: {}", kb.kb_type);
    println!("  Embedding model: {}", kb.embedding_model);
    println!("  Documents: {} ({} vectors)", kb.document_count, kb.vector_count);
    println!("  Updated: {}", kb.updated_at);
}

fn print_message(message: &Message) {
    println!("[{}] {}", message.role, message.content);
}

fn print_page_footer(page: i64, page_count: i64, total: i64) {
    println!("page {page}/{page_count} ({total} total)");
}

fn dash_if_empty(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

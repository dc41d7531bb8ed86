use anyhow::Context;
use chat_shell::{
    chat::{ChatListRenderer, ChatListSnapshot},
    cli::{output::Output, Cli, Commands},
    utils::{telemetry, toml_config::DEFAULT_CONFIG_FILE},
    AuthEvent, ConfigError, LoadState, Navigation, PageProps, SessionStore, ShellConfig,
    StaticPages, UserIdentity,
};
use std::io::Read;
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Err(e) = run(cli, &output).await {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> anyhow::Result<()> {
    let config = load_config(&cli.config, output)?;
    telemetry::init(&config.logging.level, cli.verbose);

    match cli.command {
        Commands::Routes => {
            let navigator = config.navigator()?;
            output.header("Routes");
            output.table_header(&["pattern", "view", "access"]);
            for route in navigator.table().routes() {
                let access = route
                    .guards
                    .iter()
                    .map(|g| format!("{:?}", g))
                    .collect::<Vec<_>>()
                    .join(" > ");
                let access = if access.is_empty() { "Open".to_string() } else { access };
                output.table_row(&[route.pattern.as_str(), route.view.name(), &access]);
            }
            output.table_row(&["*", navigator.table().catch_all().name(), "Open"]);
        }

        Commands::Route {
            path,
            user,
            render,
            chats,
        } => {
            let navigator = config.navigator()?;
            let session = SessionStore::default();
            if let Some(name) = user {
                session.apply(AuthEvent::LoggedIn(UserIdentity::new(name.clone(), name)));
            }
            let snapshot = session.snapshot();

            let navigation = navigator.navigate(&path, &snapshot);
            output.navigation(&path, &navigation);

            if render {
                let chats = match chats {
                    Some(file) => read_snapshot(&file)?,
                    None => ChatListSnapshot::default(),
                };
                let params = match &navigation {
                    Navigation::Render(m) => m.params.clone(),
                    _ => Default::default(),
                };
                let pages = StaticPages::new(config.layout.clone());
                match chat_shell::routing::navigator::resolve(&navigation, &pages).await {
                    LoadState::Ready { output: page, .. } => {
                        let props = PageProps {
                            session: snapshot,
                            params,
                            chats,
                        };
                        println!("{}", page.render(&props).to_html());
                    }
                    LoadState::Redirect(to) => {
                        output.warning(&format!("nothing rendered, redirected to {}", to))
                    }
                    LoadState::Failed { view, error } => {
                        anyhow::bail!("view {} failed to load: {}", view, error)
                    }
                    LoadState::Pending(view) => anyhow::bail!("view {} never settled", view),
                }
            }
        }

        Commands::RenderList { snapshot } => {
            let snapshot = read_snapshot(&snapshot)?;
            let states = snapshot.view_states();
            let mut renderer = ChatListRenderer::new();
            let list = renderer.render_list(&states);
            println!("{}", list.to_html());
        }

        Commands::Config { validate } => {
            output.header("Configuration");
            output.kv("file", &cli.config.display().to_string());
            output.kv("login path", &config.routing.login_path);
            output.kv("home path", &config.routing.home_path);
            output.kv("title", &config.layout.title);
            output.kv("footer", &config.layout.footer);
            output.kv("log level", &config.logging.level);

            if validate {
                for warning in config.validate_with_warnings()? {
                    output.warning(&warning.to_string());
                }
                config.navigator()?;
                output.success("configuration and route table are valid");
            }
        }
    }

    Ok(())
}

fn load_config(path: &Path, output: &Output) -> anyhow::Result<ShellConfig> {
    match ShellConfig::load(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) if path == Path::new(DEFAULT_CONFIG_FILE) => {
            output.warning(&format!("{} not found, using defaults", DEFAULT_CONFIG_FILE));
            Ok(ShellConfig::default())
        }
        Err(e) => Err(e).with_context(|| format!("loading {}", path.display())),
    }
}

fn read_snapshot(path: &Path) -> anyhow::Result<ChatListSnapshot> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

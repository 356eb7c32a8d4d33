use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use pagestore::auth::{with_auth, AuthAction, GateOutcome, View};
use pagestore::clicker::ClickerAction;
use pagestore::config::Config;
use pagestore::model::{Post, User};
use pagestore::resource::{HttpFetcher, PostsController, ResourceKind, Users, UsersController};
use pagestore::routes::{Route, RouteTable};
use pagestore::store::Store;
use pagestore::views::{ClickerView, PostPageProps, PostView, ResourceListView};

/// Render one page of the demo app against a fresh store.
#[derive(Debug, Parser)]
#[command(name = "pagestore", version)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log in as this user before rendering
    #[arg(long)]
    login: Option<String>,

    /// Shift the counter by this delta (repeatable)
    #[arg(long, allow_hyphen_values = true)]
    shift: Vec<i64>,

    /// Dispatch a JSON action such as '{"type":"CLICKER_SHIFT","payload":{"delta":2}}' (repeatable)
    #[arg(long = "action")]
    actions: Vec<String>,

    /// Page to render
    #[arg(default_value = "/users")]
    path: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    pagestore::logging::init(&config.logging).map_err(|e| anyhow::anyhow!(e))?;

    let store = Store::new();
    let users_sub = store.subscribe_slice(Users::select, |users| {
        tracing::info!(status = ?users.status, items = users.items.len(), "Users slice changed");
    });

    if let Some(username) = cli.login {
        store.dispatch(AuthAction::LoggedIn { username });
    }
    for delta in cli.shift {
        store.dispatch(ClickerAction::Shift { delta });
    }
    for json in &cli.actions {
        store.dispatch_json(json)?;
    }

    let routes = RouteTable::new(&config.routes);
    let route = match routes.resolve(&cli.path) {
        Route::Redirect { to } => {
            println!("-> {}", to);
            routes.resolve(&to)
        }
        route => route,
    };

    render(&store, &config, route).await?;

    users_sub.unsubscribe();
    Ok(())
}

async fn render(store: &Store, config: &Config, route: Route) -> anyhow::Result<()> {
    match route {
        Route::Clicker => {
            // Three counters bound to one slice.
            let view = ClickerView;
            for _ in 0..3 {
                println!("{}", view.render(&store.get_state().clicker));
            }
        }
        Route::Login => println!("Login"),
        Route::Registration => println!("Registration"),
        Route::Posts => {
            let fetcher = HttpFetcher::<Post>::new(&config.api, &config.api.posts_path)?;
            let controller = PostsController::new(store.clone(), fetcher);
            let view = ResourceListView::<Post>::new("posts");

            let pending = controller.request_posts();
            println!("{}", view.render(&store.get_state().posts));
            pending.await?;
            println!("{}", view.render(&store.get_state().posts).trim_end());
        }
        Route::Post { id } => {
            let fetcher = HttpFetcher::<Post>::new(&config.api, &config.api.posts_path)?;
            let controller = PostsController::new(store.clone(), fetcher);

            controller.request_posts().await?;
            let props = PostPageProps {
                posts: Arc::clone(&store.get_state().posts),
                id,
            };
            println!("{}", PostView.render(&props));
        }
        Route::Users => {
            let page = with_auth(
                ResourceListView::<User>::new("users"),
                config.routes.login_path.clone(),
            );

            // The page only mounts, and so only fetches, behind the gate.
            if let GateOutcome::Redirect { to } = page.render(store, &store.get_state().users) {
                println!("-> {}", to);
                return Ok(());
            }

            let fetcher = HttpFetcher::<User>::new(&config.api, &config.api.users_path)?;
            let controller = UsersController::new(store.clone(), fetcher);

            let pending = controller.request_users();
            print_outcome(page.render(store, &store.get_state().users));
            pending.await?;
            print_outcome(page.render(store, &store.get_state().users));
        }
        Route::Redirect { to } => println!("-> {}", to),
    }
    Ok(())
}

fn print_outcome(outcome: GateOutcome<String>) {
    match outcome {
        GateOutcome::Render(output) => println!("{}", output.trim_end()),
        GateOutcome::Redirect { to } => println!("-> {}", to),
    }
}

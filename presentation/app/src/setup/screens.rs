use serde_json::json;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use business::domain::cat::model::Cat;

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;
use crate::view_models::state::ViewState;

/// Headless shell: drives the list screen, then the detail screen of the
/// newest cat, printing every state a real UI would render.
pub struct Screens;

impl Screens {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        container.logger.set_global_context(json!({
            "base_url": config.network.base_url,
        }));

        let list = container.cats_list_view_model(config.page_limit);
        let renderer = spawn_renderer(list.subscribe(), render_list);
        list.mount().await;
        let list_state = list.state();
        drop(list);
        renderer.await?;

        let Some(newest) = list_state.data.first() else {
            if let Some(error) = list_state.error {
                anyhow::bail!("could not load cats: {}", error);
            }
            println!("No cats available");
            return Ok(());
        };

        let details = container.cat_details_view_model(newest.id.clone());
        let renderer = spawn_renderer(details.subscribe(), render_details);
        details.mount().await;
        drop(details);
        renderer.await?;

        Ok(())
    }
}

/// Renders each published state until the view model is dropped.
fn spawn_renderer<T>(
    mut states: watch::Receiver<ViewState<T>>,
    render: fn(&ViewState<T>) -> String,
) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
{
    tokio::spawn(async move {
        println!("{}", render(&states.borrow_and_update()));
        while states.changed().await.is_ok() {
            println!("{}", render(&states.borrow_and_update()));
        }
    })
}

fn render_list(state: &ViewState<Vec<Cat>>) -> String {
    if state.loading {
        return "Loading cats...".to_string();
    }
    if let Some(error) = &state.error {
        return format!("Error: {} (pull to retry)", error.message);
    }
    state
        .data
        .iter()
        .map(|cat| {
            format!(
                "- {} | {} | {} | {}",
                cat.id,
                cat.formatted_creation_date(),
                cat.tag_list(),
                cat.thumbnail_url()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_details(state: &ViewState<Option<Cat>>) -> String {
    if state.loading {
        return "Loading cat...".to_string();
    }
    if let Some(error) = &state.error {
        return format!("Error: {} (tap to retry)", error.message);
    }
    match &state.data {
        Some(cat) => format!(
            "Cat {}\n  created: {}\n  tags: {}\n  image: {}",
            cat.id,
            cat.formatted_creation_date(),
            cat.tag_list(),
            cat.image_url()
        ),
        None => "No cat selected".to_string(),
    }
}

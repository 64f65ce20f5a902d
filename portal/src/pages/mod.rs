pub mod create_admin;
pub mod verify_email;

pub use self::create_admin::CreateAdminPage;
pub use self::verify_email::VerifyEmailPage;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::navigation::{Destination, Navigator};

/// Decoded query parameters of the page URL.
///
/// Accepts the raw query with or without its leading `?` so callers can
/// hand over whatever their routing layer exposes.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    params: HashMap<String, String>,
}

impl PageQuery {
    pub fn parse(query: &str) -> Self {
        let raw = query.strip_prefix('?').unwrap_or(query);
        let params = form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect::<HashMap<String, String>>();
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Navigate to `destination` after `delay` on a background task.
///
/// The handle is held by the page and aborted on drop, so a page that goes
/// away before the delay elapses never triggers the navigation.
fn schedule_redirect<N: Navigator + 'static>(
    navigator: &Arc<N>,
    destination: Destination,
    delay: Duration,
) -> JoinHandle<()> {
    let navigator = Arc::clone(navigator);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        navigator.navigate(destination);
    })
}

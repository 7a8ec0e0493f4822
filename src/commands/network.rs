//! Server reachability probe.

use crate::api::v1;
use crate::models::settings::AppSettings;

/// HEAD the configured server and print the result. Returns whether it was
/// reachable; being offline is a normal state, not an error.
pub async fn ping(settings: &AppSettings) -> bool {
    let reachable = v1::check_connectivity(&settings.server_url).await;
    if reachable {
        println!("Servidor accesible: {}", settings.server_url);
    } else {
        println!("Servidor no accesible: {}", settings.server_url);
    }
    reachable
}

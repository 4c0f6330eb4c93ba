use std::sync::Arc;

use crate::{error, info, server, warning};

pub async fn serve(addr: Option<String>, open: bool) {
    let mut config = super::config_from_env();
    if let Some(addr) = addr {
        config.server_addr = addr;
    }

    let addr = config.server_addr.clone();
    let client = super::build_client(config);
    let listener = match server::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Cannot listen on {}: {}", addr, e),
    };

    let login_url = format!("http://{}/login", addr);
    info!("Demo server listening on http://{}", addr);
    info!("Start by visiting {}", login_url);

    if open && webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        )
    }

    if let Err(e) = server::start_api_server(listener, Arc::new(client)).await {
        error!("Server stopped: {}", e);
    }
}

use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod config;
mod domain;
mod errors;
mod gis;
mod responses;
mod router;
mod search;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Resolve configuration once, env overrides included
    let config = AppConfig::from_env();

    // 2️⃣ Start the server
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse().unwrap();
    println!("Starting server at http://{addr}");
    println!("📡 Parcel layer: {}", config.parcels_url);

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the config into the closure
    let result = server.serve(move |req, _info| match handle(req, &config) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}

use crate::domain::listing::Mode;
use crate::router::handle;
use crate::store::ListingStore;
use astra::Server;
use std::net::SocketAddr;

mod domain;
mod errors;
mod responses;
mod router;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load the listing store from the bundled seed files
    let store = match ListingStore::load("data") {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Listing store failed to load: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "✅ Loaded {} stays and {} properties",
        store.get(Mode::Stay).len(),
        store.get(Mode::Property).len()
    );

    // 2️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the store handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}

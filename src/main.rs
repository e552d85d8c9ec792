#[cfg(feature = "ssr")]
use actix_web::HttpResponse;

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::get_configuration;
    use leptos::logging::log;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use review_queue::app::App as ReviewApp;
    use review_queue::server::handlers;
    use review_queue::server::store::PendingStore;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    // Seed the pending queue
    let fixtures = std::env::var_os("REVIEW_QUEUE_FIXTURES").map(PathBuf::from);
    let store = PendingStore::load(fixtures.as_deref()).map_err(std::io::Error::other)?;
    let store = Arc::new(Mutex::new(store)); // Shared across workers

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(std::io::Error::other)?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in the Leptos App
    let routes = generate_route_list(ReviewApp);
    log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(web::Data::new(store.clone()))
            // Review API routes, mounted where the client expects them
            .service(web::scope("/answer/api/v1").configure(handlers::configure))
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root.to_string()))
            .service(favicon)
            .route("/healthz", web::get().to(health))
            // Register Leptos routes
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), ReviewApp)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use review_queue::app::*;

    review_queue::utils::panic_hook::init();

    leptos::mount_to_body(App);
}

use dotenvy::dotenv;
use facultydir::logging::init_tracing;
use facultydir::router::init_router;
use facultydir::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    init_tracing();

    let state = init_app_state().await;
    let addr = state.server_config.bind_addr();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    println!("🚀 Server running on http://{addr}");
    axum::serve(listener, app).await.unwrap();
}

#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else, clippy::missing_errors_doc, clippy::module_name_repetitions)]

use crate::{config::RuntimeConfiguration, prompt::LinePrompt, routes::router, state::WardenState};
use std::{env, net::SocketAddr};
use tokio::{net::TcpListener, signal};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod api;
mod chat;
mod coerce;
mod config;
mod controller;
mod data;
mod document;
mod error;
mod format;
mod maud_conveniences;
mod notify;
mod prompt;
mod refresh;
mod routes;
mod section;
mod session_store;
mod state;
#[cfg(test)]
mod test_support;
mod views;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

async fn serve(state: WardenState, server_ip: SocketAddr) {
    let app = router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("unable to serve app");
}

///Prints whatever the session flow had to say, since there's no page to show it on.
async fn print_notifications(state: &WardenState) {
    for toast in state.document().await.toasts() {
        println!("{}", toast.message);
    }
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");
    if let Err(e) = dotenv {
        warn!(?e, "No .env loaded, using the process environment");
    }

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let backend_config = config.backend_config();
    info!(
        base_url = backend_config.base_url(),
        "Talking to hostel backend"
    );
    let state = WardenState::new(&config).expect("unable to create state");

    match env::args().nth(1).as_deref() {
        None | Some("serve") => serve(state, config.server_ip()).await,
        Some("login") => {
            state
                .login(&mut LinePrompt::stdio())
                .await
                .expect("unable to log in");
            print_notifications(&state).await;
        }
        Some("register") => {
            state
                .register(&mut LinePrompt::stdio())
                .await
                .expect("unable to register");
            print_notifications(&state).await;
        }
        Some("logout") => {
            state.logout().await.expect("unable to log out");
            print_notifications(&state).await;
        }
        Some(other) => {
            error!(?other, "Unknown command, expected one of serve, login, register or logout");
            std::process::exit(2);
        }
    }
}

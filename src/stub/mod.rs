//! In-process stand-in for the WCG registration and reservation endpoints, so
//! the suite can run without the remote service.

use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};
use anyhow::Context;
use axum::Router;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use crate::helpers::handler_404::page_not_found_handler;
use crate::models::reservation::ReservationPayload;
use crate::stub::state::StubState;

pub mod health_check;
pub mod registration_controller;
pub mod reservation_controller;
pub mod state;

/// Non-empty form value for `key`. The service treats blank and absent alike.
pub(crate) fn form_field<'a>(
    form: &'a HashMap<String, String>,
    key: &str,
) -> Option<&'a str> {
    form.get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

pub fn router_endpoints(state: StubState) -> Router {
    health_check::router(state.clone())
        .merge(registration_controller::router(state.clone()))
        .merge(reservation_controller::router(state))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .fallback(page_not_found_handler)
}

pub async fn serve(
    listener: TcpListener,
    application: Router,
    shutdown: oneshot::Receiver<()>,
) -> anyhow::Result<()> {
    let port = listener.local_addr().context("Error reading stub listener address")?;
    info!("Stub WCG API listening on: {}", port);

    axum::Server::from_tcp(listener)
        .context("Error adopting the stub listener")?
        .serve(application.into_make_service())
        .with_graceful_shutdown(async {
            shutdown.await.ok();
        })
        .await
        .context("Error spinning up the stub API server")
}

/// Running stand-in server. Dropping the handle shuts it down.
pub struct StubHandle {
    addr: SocketAddr,
    state: StubState,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubHandle {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn reservation_for(&self, citizen_id: &str) -> Option<ReservationPayload> {
        self.state.lock().reservations.get(citizen_id).cloned()
    }

    pub fn is_registered(&self, citizen_id: &str) -> bool {
        self.state.lock().citizens.contains_key(citizen_id)
    }
}

impl Drop for StubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!("Stub server thread panicked");
            }
        }
    }
}

/// Binds an ephemeral local port and serves the stand-in from a dedicated
/// thread with its own runtime, so blocking clients can call it directly.
pub fn spawn_stub() -> anyhow::Result<StubHandle> {
    let state = StubState::default();
    spawn_router(router_endpoints(state.clone()), state)
}

/// Serves `application` the way `spawn_stub` does. `state` is only what the
/// handle reports on, it is not wired into the router.
pub fn spawn_router(
    application: Router,
    state: StubState,
) -> anyhow::Result<StubHandle> {
    let listener = TcpListener::bind("127.0.0.1:0").context("Error binding stub listener")?;
    let addr = listener.local_addr().context("Error reading stub listener address")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Error building the stub runtime")?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let thread = thread::Builder::new()
        .name("wcg-stub".to_string())
        .spawn(move || {
            if let Err(e) = runtime.block_on(serve(listener, application, shutdown_rx)) {
                error!("Stub server stopped due to: {:#}", e);
            }
        })
        .context("Error spawning the stub server thread")?;

    Ok(StubHandle {
        addr,
        state,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}

use wcg_reservation_check::client::ReservationClient;
use wcg_reservation_check::stub::state::StubState;
use wcg_reservation_check::stub::{spawn_router, spawn_stub, StubHandle};

pub fn stub_and_client() -> (StubHandle, ReservationClient) {
    let stub = spawn_stub().expect("Failed to start stub server");
    let client = ReservationClient::new(&stub.base_url(), None)
        .expect("Failed to build client");
    (stub, client)
}

pub fn serve_and_client(application: axum::Router) -> (StubHandle, ReservationClient) {
    let server = spawn_router(application, StubState::default())
        .expect("Failed to start test server");
    let client = ReservationClient::new(&server.base_url(), None)
        .expect("Failed to build client");
    (server, client)
}

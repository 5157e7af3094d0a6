//! Background fetch worker thread

use crate::client::DirectoryClient;
use crate::directory::{FetchRequest, FetchResponse};
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Spawn the fetch worker. It exits when either channel is closed.
pub fn spawn_fetch_worker(
    client: DirectoryClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            let start = Instant::now();
            let result = client
                .fetch(&request.term)
                .map(|body| body.data)
                .map_err(|e| {
                    log::warn!("Fetch #{} for {:?} failed: {e:#}", request.seq, request.term);
                    format!("{e:#}")
                });
            log::debug!("Fetch #{} finished in {:?}", request.seq, start.elapsed());

            let response = FetchResponse {
                seq: request.seq,
                result,
            };
            if response_tx.send(response).is_err() {
                break;
            }
        }
    })
}

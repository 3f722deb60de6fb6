//! Digest workers: pull paths from the shared channel, hash file content,
//! publish results into the shared result stream.

use crossbeam_channel::{Receiver, Sender, select};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crate::cancel::CancelToken;
use crate::engine::hashing::digest_file;
use crate::types::DigestResult;

/// Single worker: digest each path until the path channel closes or the run
/// is cancelled. A read failure becomes the record's error and rides the
/// stream; it does not stop this worker. The result hand-off races against
/// the token so a worker never blocks publishing to an aggregator that has
/// stopped reading.
fn digest_worker_loop(
    path_rx: Receiver<PathBuf>,
    result_tx: Sender<DigestResult>,
    token: CancelToken,
) {
    while let Ok(path) = path_rx.recv() {
        if token.is_cancelled() {
            break;
        }
        let digest = digest_file(&path);
        let result = DigestResult { path, digest };
        let delivered = select! {
            send(result_tx, result) -> res => res.is_ok(),
            recv(token.observed()) -> _ => false,
        };
        if !delivered {
            break;
        }
    }
    drop(result_tx);
}

/// Spawn `workers` digest workers sharing one path receiver and one result
/// sender. Caller must drop its own `result_tx` clone after this so the
/// result channel closes exactly when the last worker exits.
pub fn spawn_digest_workers(
    path_rx: Receiver<PathBuf>,
    result_tx: &Sender<DigestResult>,
    token: &CancelToken,
    workers: usize,
) -> Vec<JoinHandle<()>> {
    (0..workers)
        .map(|_| {
            let path_rx = path_rx.clone();
            let result_tx = result_tx.clone();
            let token = token.clone();
            thread::spawn(move || digest_worker_loop(path_rx, result_tx, token))
        })
        .collect()
}
